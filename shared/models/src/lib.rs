//! # Fabrica Core Domain Models
//!
//! Core domain models for the Fabrica manufacturing master data system.
//! All models implement serialization/deserialization with serde and
//! field-level validation with the validator crate.
//!
//! ## Key Models
//!
//! - **Product**: a named item, either a raw material or a finished good,
//!   with a unit of measure and an active flag
//! - **Bom**: the single-level recipe for one finished product
//! - **BomComponent**: one line of a BOM, pairing a raw product with the
//!   quantity consumed
//!
//! Identifiers are v4 UUIDs assigned by the constructors; consumers never
//! invent ids themselves. Referential rules between products and BOMs are
//! not enforced here (that is the store's job), but the cascade predicate
//! (`Bom::references_product`) lives on the model so it can be tested in
//! isolation.

pub mod bom;
pub mod product;

pub use bom::{Bom, BomComponent};
pub use product::{Product, ProductType};
