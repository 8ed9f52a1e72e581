//! Domain models for the Stockroom inventory tracker

mod inventory;
mod location;
mod product;

pub use inventory::*;
pub use location::*;
pub use product::*;
