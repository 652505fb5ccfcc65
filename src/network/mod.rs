//! Network layer - executes counter API calls in the Tokio runtime

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::ApiClient;
