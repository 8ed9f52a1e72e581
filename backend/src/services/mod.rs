//! Business logic services for the Stockroom server

pub mod inventory;

pub use inventory::InventoryService;
