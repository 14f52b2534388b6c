//! Ports module for the Marketplace Catalog

pub mod inbound;
pub mod outbound;

pub use inbound::MarketplaceCatalogApi;
pub use outbound::CatalogRepository;
