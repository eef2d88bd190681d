pub mod boms;
pub mod dashboard;
pub mod health;
pub mod products;
