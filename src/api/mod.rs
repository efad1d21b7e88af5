// League API access: the HTTP client wrapper and the player search query
// builder.

pub mod client;
pub mod query;

pub use client::{ApiBackend, ApiClient, ApiError};
pub use query::PlayerQuery;
