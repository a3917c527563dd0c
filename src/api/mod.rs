//! REST API access for stars and universes

mod client;
mod service;

pub use client::ApiClient;
pub use service::StarsApi;
