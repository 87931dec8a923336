//! Master Unit List catalog adapter
//!
//! Implements [`CatalogGateway`](roster_application::CatalogGateway) over the
//! catalog's HTTP quick-search endpoint.

mod gateway;

pub use gateway::{MulCatalogGateway, QUICK_LIST_PATH, search_url};
