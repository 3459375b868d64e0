pub mod listing;

pub use listing::{create_listing, ListingCard};
