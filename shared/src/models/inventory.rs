//! Aggregated inventory views

use serde::{Deserialize, Serialize};

use super::{Location, Product};

/// Every product and every location, for the summary and stock views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryOverview {
    pub products: Vec<Product>,
    pub locations: Vec<Location>,
}

/// Products stored at one location, plus all locations for UI population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInventory {
    pub location: Location,
    pub products: Vec<Product>,
    pub locations: Vec<Location>,
}
