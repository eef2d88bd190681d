//! Bill of materials records.
//!
//! A bill of materials is the single-level recipe for one finished product:
//! a list of raw-material component lines with quantities. It never nests;
//! a component always points at a raw product, not at another BOM.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One component line: a raw product and the quantity of it consumed per
/// unit of the finished product, denominated in the product's own uom.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BomComponent {
    pub id: Uuid,
    pub product_id: Uuid,
    #[validate(range(min = 0.0, message = "Quantity must be positive"))]
    pub quantity: f64,
}

impl BomComponent {
    pub fn new(product_id: Uuid, quantity: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
        }
    }
}

/// A bill of materials for one finished product.
///
/// `product_id` is fixed at creation. The component list keeps insertion
/// order, which doubles as display order. A BOM may transiently hold zero
/// components while being assembled, but the store refuses to persist one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Bom {
    pub id: Uuid,
    pub product_id: Uuid,
    pub active: bool,
    #[validate(length(min = 1, max = 50, message = "Version must be between 1 and 50 characters"))]
    pub version: String,
    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
    #[validate]
    pub components: Vec<BomComponent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bom {
    /// Creates a new active BOM for the given finished product, with a fresh
    /// identifier and no components yet.
    pub fn new(product_id: Uuid, version: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            product_id,
            active: true,
            version: version.into(),
            notes: None,
            components: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Appends a component line, keeping insertion order.
    pub fn add_component(&mut self, component: BomComponent) {
        self.components.push(component);
        self.updated_at = Utc::now();
    }

    /// Removes the component line with the given id, if present.
    pub fn remove_component(&mut self, id: Uuid) {
        if let Some(pos) = self.components.iter().position(|c| c.id == id) {
            self.components.remove(pos);
            self.updated_at = Utc::now();
        }
    }

    pub fn component(&self, id: Uuid) -> Option<&BomComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }

    /// True when this BOM depends on the product in either role: as its
    /// finished output or through any component line. This is the predicate
    /// the store's cascading delete is built on.
    pub fn references_product(&self, product_id: Uuid) -> bool {
        self.product_id == product_id || self.components.iter().any(|c| c.product_id == product_id)
    }
}
