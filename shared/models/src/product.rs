//! Product master records.
//!
//! A product is either a raw material consumed by bills of materials or a
//! finished good produced by one. The type decides which side of a BOM the
//! product may appear on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Which role a product can play in a bill of materials.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// An input material; may appear on component lines.
    Raw,
    /// A produced good; may be the output of a bill of materials.
    Finished,
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw => write!(f, "Raw"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// A named item in the product master with its unit of measure and status.
///
/// `id` is assigned at construction and never changes. Inactive products
/// stay in the master and keep satisfying references; they are only dropped
/// from the "active" aggregates.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Product {
    pub id: Uuid,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    pub product_type: ProductType,
    #[validate(length(min = 1, max = 20, message = "Unit of measure must be between 1 and 20 characters"))]
    pub uom: String,
    pub active: bool,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new active product with a fresh identifier.
    pub fn new(name: impl Into<String>, product_type: ProductType, uom: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            product_type,
            uom: uom.into(),
            active: true,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_raw(&self) -> bool {
        self.product_type == ProductType::Raw
    }

    pub fn is_finished(&self) -> bool {
        self.product_type == ProductType::Finished
    }

    /// Marks the product inactive without removing it from the master.
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.updated_at = Utc::now();
        }
    }

    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.updated_at = Utc::now();
        }
    }
}
