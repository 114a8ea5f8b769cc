//! Housekeeping SDK - realm management over the Housekeeping API.
//!
//! Every request carries the bearer token from a [`hk_core::HousekeepingContext`].

pub mod client;
pub mod error;
pub mod models;

pub use client::HousekeepingClient;
pub use error::SdkError;
pub use models::{NewRealm, Realm};
