//! Housekeeping API HTTP client.

use hk_core::{Endpoint, HousekeepingContext};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, Url};

use crate::error::SdkError;
use crate::models::{Envelope, NewRealm, Realm};

/// HTTP client bound to one endpoint and bearer token.
pub struct HousekeepingClient {
    client: Client,
    endpoint: Endpoint,
    bearer: String,
}

impl HousekeepingClient {
    /// Create a client from an authenticated context.
    pub fn new(ctx: &HousekeepingContext) -> Self {
        Self::with_client(ctx, Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(ctx: &HousekeepingContext, client: Client) -> Self {
        Self {
            client,
            endpoint: ctx.endpoint().clone(),
            bearer: ctx.token().bearer(),
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// List realm names.
    pub async fn list_realms(&self) -> Result<Vec<String>, SdkError> {
        let response = self.send(self.client.get(self.endpoint.join("v1/realms"))).await?;
        let body: Envelope<Vec<String>> = response.json().await?;
        Ok(body.data)
    }

    /// Fetch one realm.
    pub async fn get_realm(&self, realm_name: &str) -> Result<Realm, SdkError> {
        let url = self.realm_url(realm_name)?;
        let response = self.send(self.client.get(url)).await?;
        let body: Envelope<Realm> = response.json().await?;
        Ok(body.data)
    }

    /// Create a realm.
    pub async fn create_realm(&self, realm: &NewRealm) -> Result<(), SdkError> {
        let request = self
            .client
            .post(self.endpoint.join("v1/realms"))
            .json(&Envelope { data: realm });
        self.send(request).await?;
        tracing::info!("Created realm {}", realm.realm_name);
        Ok(())
    }

    /// `{base}/v1/realms/{name}` with the name encoded as one path segment.
    fn realm_url(&self, realm_name: &str) -> Result<Url, SdkError> {
        if realm_name.is_empty() || realm_name == "." || realm_name == ".." {
            return Err(SdkError::InvalidRealmName(realm_name.to_string()));
        }

        let base = self.endpoint.join("v1/realms");
        let mut url =
            Url::parse(&base).map_err(|e| SdkError::InvalidUrl(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| SdkError::InvalidUrl(format!("{base}: URL cannot carry a path")))?
            .push(realm_name);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, SdkError> {
        let response = request
            .header(AUTHORIZATION, self.bearer.as_str())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Housekeeping API responded {} for {}", status, response.url());
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<unreadable body: {e}>"),
            };
            return Err(SdkError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
