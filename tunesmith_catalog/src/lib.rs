// Tunesmith catalogue.
//
// Deterministically generates pages of fictitious songs from a seed, a page
// number, a localization, and a target likes average. The same inputs always
// yield byte-identical JSON, because listing, gallery, and export views each
// request the same page independently.
//
// Architecture:
// - seed.rs: Base/item seed derivation and per-purpose stream keys
// - likes.rs: Per-item like counts around a target average
// - cover.rs: Cover-art service URLs
// - config.rs: JSON-loadable `CatalogConfig` with defaults
// - request.rs: `PageRequest` DTO and boundary validation
// - catalog.rs: Page assembly (sequential text pass, parallel item pass)
// - main.rs: The `tunesmith` command-line front end
//
// Musical content comes from `tunesmith_music`; localized text from
// `tunesmith_lang`. Nothing here keeps state between calls.

pub mod catalog;
pub mod config;
pub mod cover;
pub mod likes;
pub mod request;
pub mod seed;

pub use catalog::{Catalog, Song, get_page};
pub use config::{CatalogConfig, ConfigError};
pub use request::{PageRequest, RequestError};
pub use seed::PAGE_SIZE;
pub use tunesmith_lang::Localization;
