//! # Fabrica Master Data Store
//!
//! The authoritative in-memory collections of products and bills of
//! materials, together with the referential-integrity rules between them:
//!
//! - a BOM's output always resolves to an existing `Finished` product
//! - every component line resolves to an existing `Raw` product
//! - a stored BOM always has at least one component
//! - deleting a product removes every BOM that references it, in the same
//!   operation
//!
//! The store is an explicitly constructed value, one per process or per
//! test, handed to consumers by reference or behind a lock. There are no
//! statics and no hidden singletons. Consumers (forms, lists, dashboards)
//! own no invariants of their own; they call the operation surface here
//! and present whatever success or error comes back.

pub mod seed;
pub mod store;

pub use fabrica_utils::error::{ErrorResponse, MasterDataError, MasterDataResult};
pub use store::{BomDetail, BomLine, DashboardStats, MasterDataStore, ProductRemoval};
