//! The fixed demo dataset.
//!
//! The store has no durable persistence; a fresh process starts from this
//! seed (or empty, per config). References are wired by handle from the
//! created products, never by literal id.

use fabrica_models::{Bom, BomComponent, Product, ProductType};
use fabrica_utils::error::MasterDataResult;

use crate::store::MasterDataStore;

impl MasterDataStore {
    /// A store pre-loaded with the furniture demo dataset: six products
    /// and bills of materials for the table top and the office chair.
    pub fn with_seed_data() -> MasterDataResult<Self> {
        let mut store = Self::new();

        let table_top = store.create_product(
            Product::new("Table Top", ProductType::Finished, "Units")
                .with_description("Wooden table top, ready to assemble"),
        )?;
        let table_leg = store.create_product(
            Product::new("Table Leg", ProductType::Raw, "Units")
                .with_description("Wooden table leg component"),
        )?;
        let screw = store.create_product(
            Product::new("Screw 8mm", ProductType::Raw, "Units")
                .with_description("8mm metal screws for assembly"),
        )?;
        let glue = store.create_product(
            Product::new("Wood Glue", ProductType::Raw, "Liter")
                .with_description("Industrial wood glue for assembly"),
        )?;
        let chair = store.create_product(
            Product::new("Office Chair", ProductType::Finished, "Units")
                .with_description("Ergonomic office chair"),
        )?;
        let mut frame = Product::new("Aluminum Frame", ProductType::Raw, "Units")
            .with_description("Aluminum frame for chair structure");
        frame.deactivate();
        let frame = store.create_product(frame)?;

        let mut table_bom =
            Bom::new(table_top.id, "1.0").with_notes("Standard table top assembly");
        table_bom.add_component(BomComponent::new(table_leg.id, 4.0));
        table_bom.add_component(BomComponent::new(screw.id, 16.0));
        table_bom.add_component(BomComponent::new(glue.id, 0.25));
        store.create_bom(table_bom)?;

        let mut chair_bom =
            Bom::new(chair.id, "2.1").with_notes("Updated office chair assembly");
        chair_bom.add_component(BomComponent::new(frame.id, 1.0));
        chair_bom.add_component(BomComponent::new(screw.id, 12.0));
        store.create_bom(chair_bom)?;

        Ok(store)
    }
}
