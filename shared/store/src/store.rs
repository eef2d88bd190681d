//! The in-memory master data store.
//!
//! Operations are synchronous and run to completion under one borrow, so a
//! multi-step change such as a cascading delete is never observable halfway
//! through. Listings and lookups are clone-on-read: nothing a caller does
//! to a returned value affects stored state.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use fabrica_models::{Bom, BomComponent, Product};
use fabrica_utils::error::{MasterDataError, MasterDataResult};
use fabrica_utils::validation::validate_model;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Totals shown on the dashboard, recomputed on demand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub active_products: usize,
    pub total_boms: usize,
    pub active_boms: usize,
}

/// Outcome of a product deletion, including the BOMs removed by cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRemoval {
    pub product: Product,
    pub cascaded_boms: Vec<Bom>,
}

/// A BOM joined with the products it references, one line per component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomDetail {
    pub bom: Bom,
    pub product: Product,
    pub lines: Vec<BomLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomLine {
    pub component: BomComponent,
    pub product: Product,
}

/// The two authoritative collections and every operation over them.
#[derive(Debug, Default)]
pub struct MasterDataStore {
    products: HashMap<Uuid, Product>,
    boms: HashMap<Uuid, Bom>,
}

impl MasterDataStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Products =====

    /// Inserts a new product. The id must not already be present.
    pub fn create_product(&mut self, product: Product) -> MasterDataResult<Product> {
        validate_model(&product)?;
        if self.products.contains_key(&product.id) {
            return Err(MasterDataError::duplicate_id("product", product.id));
        }
        debug!(product_id = %product.id, name = %product.name, "creating product");
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    pub fn find_product(&self, id: Uuid) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    /// Replaces the stored product with the same id. `created_at` is kept
    /// from the stored row. Changing the product type while any BOM
    /// references the product (in either role) is refused, since the rest
    /// of the store guarantees such references always resolve to the right
    /// type.
    pub fn update_product(&mut self, product: Product) -> MasterDataResult<Product> {
        validate_model(&product)?;
        let current = self
            .products
            .get(&product.id)
            .ok_or_else(|| MasterDataError::not_found("product", product.id))?;
        if current.product_type != product.product_type && self.is_product_referenced(product.id) {
            return Err(MasterDataError::product_in_use(
                product.id,
                "cannot change the type of a product referenced by a bill of materials",
            ));
        }
        let mut updated = product;
        updated.created_at = current.created_at;
        updated.updated_at = Utc::now();
        debug!(product_id = %updated.id, "updating product");
        self.products.insert(updated.id, updated.clone());
        Ok(updated)
    }

    /// Removes a product and cascades to every BOM that references it,
    /// either as the finished good or through a component line. The whole
    /// dependent BOM is removed, never just the offending line. Both
    /// collections change together or not at all.
    pub fn delete_product(&mut self, id: Uuid) -> MasterDataResult<ProductRemoval> {
        let product = self
            .products
            .remove(&id)
            .ok_or_else(|| MasterDataError::not_found("product", id))?;
        let cascaded_ids: Vec<Uuid> = self
            .boms
            .values()
            .filter(|b| b.references_product(id))
            .map(|b| b.id)
            .collect();
        let mut cascaded_boms = Vec::with_capacity(cascaded_ids.len());
        for bom_id in cascaded_ids {
            if let Some(bom) = self.boms.remove(&bom_id) {
                cascaded_boms.push(bom);
            }
        }
        info!(
            product_id = %id,
            cascaded = cascaded_boms.len(),
            "deleted product"
        );
        Ok(ProductRemoval {
            product,
            cascaded_boms,
        })
    }

    /// All products, ordered by name. Clone-on-read.
    pub fn list_products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        products
    }

    /// Case-insensitive match against name, type and unit of measure. An
    /// empty query returns everything.
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.list_products();
        }
        self.list_products()
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.product_type.to_string().to_lowercase().contains(&needle)
                    || p.uom.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // ===== Bills of materials =====

    /// Inserts a new BOM after checking every precondition: the output
    /// product exists and is `Finished`, every component resolves to a
    /// `Raw` product with a positive quantity, no duplicate lines, and at
    /// least one component.
    pub fn create_bom(&mut self, bom: Bom) -> MasterDataResult<Bom> {
        if self.boms.contains_key(&bom.id) {
            return Err(MasterDataError::duplicate_id("bill of materials", bom.id));
        }
        self.check_bom(&bom)?;
        debug!(bom_id = %bom.id, product_id = %bom.product_id, "creating bill of materials");
        self.boms.insert(bom.id, bom.clone());
        Ok(bom)
    }

    pub fn find_bom(&self, id: Uuid) -> Option<Bom> {
        self.boms.get(&id).cloned()
    }

    /// Replaces a stored BOM. The stored `product_id` is kept whatever the
    /// payload carries: a BOM stays attached to its finished product for
    /// life. Component preconditions are the same as for create.
    pub fn update_bom(&mut self, bom: Bom) -> MasterDataResult<Bom> {
        let current = self
            .boms
            .get(&bom.id)
            .ok_or_else(|| MasterDataError::not_found("bill of materials", bom.id))?;
        let mut updated = bom;
        updated.product_id = current.product_id;
        updated.created_at = current.created_at;
        self.check_bom(&updated)?;
        updated.updated_at = Utc::now();
        debug!(bom_id = %updated.id, "updating bill of materials");
        self.boms.insert(updated.id, updated.clone());
        Ok(updated)
    }

    /// Removes a BOM. Nothing depends on a BOM, so there is no cascade.
    pub fn delete_bom(&mut self, id: Uuid) -> MasterDataResult<Bom> {
        let bom = self
            .boms
            .remove(&id)
            .ok_or_else(|| MasterDataError::not_found("bill of materials", id))?;
        info!(bom_id = %id, "deleted bill of materials");
        Ok(bom)
    }

    /// All BOMs, ordered by creation time. Clone-on-read.
    pub fn list_boms(&self) -> Vec<Bom> {
        let mut boms: Vec<Bom> = self.boms.values().cloned().collect();
        boms.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        boms
    }

    /// Every BOM whose output is the given product. Multiple BOMs per
    /// product are permitted as version variants.
    pub fn find_boms_by_product(&self, product_id: Uuid) -> Vec<Bom> {
        self.list_boms()
            .into_iter()
            .filter(|b| b.product_id == product_id)
            .collect()
    }

    /// The BOM joined with its finished product and, per component line,
    /// the referenced raw product: what a tree view renders.
    pub fn bom_detail(&self, id: Uuid) -> MasterDataResult<BomDetail> {
        let bom = self
            .boms
            .get(&id)
            .ok_or_else(|| MasterDataError::not_found("bill of materials", id))?;
        let product = self
            .products
            .get(&bom.product_id)
            .ok_or_else(|| {
                MasterDataError::invalid_reference(
                    bom.product_id,
                    "bill of materials references a missing product",
                )
            })?;
        let mut lines = Vec::with_capacity(bom.components.len());
        for component in &bom.components {
            let component_product = self.products.get(&component.product_id).ok_or_else(|| {
                MasterDataError::invalid_reference(
                    component.product_id,
                    "component references a missing product",
                )
            })?;
            lines.push(BomLine {
                component: component.clone(),
                product: component_product.clone(),
            });
        }
        Ok(BomDetail {
            bom: bom.clone(),
            product: product.clone(),
            lines,
        })
    }

    // ===== Aggregates =====

    /// Dashboard totals. Recomputed on every call; nothing is cached.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_products: self.products.len(),
            active_products: self.products.values().filter(|p| p.active).count(),
            total_boms: self.boms.len(),
            active_boms: self.boms.values().filter(|b| b.active).count(),
        }
    }

    // ===== Validation =====

    fn is_product_referenced(&self, product_id: Uuid) -> bool {
        self.boms.values().any(|b| b.references_product(product_id))
    }

    /// Every precondition shared by BOM create and update. Runs before
    /// either collection is touched, so a failed check leaves the store
    /// exactly as it was.
    fn check_bom(&self, bom: &Bom) -> MasterDataResult<()> {
        if bom.components.is_empty() {
            return Err(MasterDataError::EmptyComponents);
        }
        match self.products.get(&bom.product_id) {
            None => {
                return Err(MasterDataError::invalid_reference(
                    bom.product_id,
                    "bill of materials references a product that does not exist",
                ))
            }
            Some(p) if !p.is_finished() => {
                return Err(MasterDataError::invalid_reference(
                    bom.product_id,
                    "a bill of materials can only be defined for a finished product",
                ))
            }
            Some(_) => {}
        }

        let mut seen_component_ids = HashSet::with_capacity(bom.components.len());
        let mut seen_product_ids = HashSet::with_capacity(bom.components.len());
        for component in &bom.components {
            if !seen_component_ids.insert(component.id) {
                return Err(MasterDataError::duplicate_id("component", component.id));
            }
            if !seen_product_ids.insert(component.product_id) {
                return Err(MasterDataError::DuplicateComponent {
                    product_id: component.product_id,
                });
            }
            match self.products.get(&component.product_id) {
                None => {
                    return Err(MasterDataError::invalid_reference(
                        component.product_id,
                        "component references a product that does not exist",
                    ))
                }
                Some(p) if !p.is_raw() => {
                    return Err(MasterDataError::invalid_reference(
                        component.product_id,
                        "components must reference raw materials",
                    ))
                }
                Some(_) => {}
            }
            if !(component.quantity > 0.0) {
                return Err(MasterDataError::validation(
                    "quantity",
                    "component quantity must be greater than zero",
                ));
            }
        }

        validate_model(bom)
    }
}
