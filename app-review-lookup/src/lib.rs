//! App directory lookup for store identifiers.
//!
//! Resolves the numeric store ID (`trackId`) of an application from its
//! bundle identifier with one request to the public directory endpoint:
//!
//! ```text
//! GET {base_url}/{country}/lookup?bundleId={bundle_id}
//! { "results": [ { "trackId": 123456789, ... } ] }
//! ```
//!
//! "No match" and "request failed" stay distinguishable: the former is an
//! empty [`LookupResult`], the latter an error.

mod client;
mod config;
mod parse;
mod request;

pub use client::LookupClient;
pub use config::{LookupConfig, DEFAULT_LOOKUP_BASE_URL};
pub use parse::parse_lookup_body;
pub use request::{LookupRequest, LookupResult};
