//! LightBnB data access and listing rendering.
//!
//! [`Store`] wraps the Postgres pool and the in-memory property drafts; the
//! query operations live in `users`, `reservations` and `properties`.
//! [`create_listing`] renders a single listing card.

pub mod components;
pub mod drafts;
pub mod errors;
pub mod filters;
pub mod models;
pub mod properties;
pub mod reservations;
pub mod schema;
pub mod settings;
pub mod store;
pub mod users;

pub use components::{create_listing, ListingCard};
pub use errors::{SeedError, SettingsError, StoreError};
pub use filters::PropertySearch;
pub use settings::Settings;
pub use store::Store;
