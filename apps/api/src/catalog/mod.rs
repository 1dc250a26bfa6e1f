// Career catalog: the read-only recommendation dataset and the queries over it.
// Loaded once at startup and shared by every request; nothing here mutates it.

pub mod dataset;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod query;

pub use dataset::Dataset;
pub use query::{CareerCatalog, CatalogError};
