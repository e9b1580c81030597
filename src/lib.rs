//! `country-sampler` fetches the REST Countries list and draws random
//! country cards from it.
//!
//! - [`CountriesClient::fetch_countries`] loads the pool once, with a
//!   per-attempt timeout and a bounded retry on transient failures.
//! - [`parse_count`] turns raw input into a [`Count`] in `1..=10`.
//! - [`sample`] draws `k` distinct countries without replacement.
//! - [`AppState`] ties them together and [`render::view`] turns the state
//!   into cards for a UI.

mod client;
mod count;
mod error;
mod options;
pub mod render;
pub mod retry;
mod sampler;
mod state;
mod types;
mod wire;

pub use client::{countries_url, CountriesClient, DEFAULT_BASE_URL, FIELDS};
pub use count::{parse_count, Count};
pub use error::FetchError;
pub use options::{Backoff, ClientOptions};
pub use render::{CountryCard, View};
pub use sampler::sample;
pub use state::AppState;
pub use types::{DisplayCountry, Pool, NOT_AVAILABLE};
pub use wire::{CountryName, RawCountry};

pub type Result<T> = std::result::Result<T, FetchError>;
