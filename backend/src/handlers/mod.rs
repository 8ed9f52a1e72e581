//! HTTP handlers for the Stockroom server

mod health;
mod location;
mod product;
mod records;
mod stock;

pub use health::*;
pub use location::*;
pub use product::*;
pub use records::*;
pub use stock::*;

/// Pages a successful form post redirects back to
pub mod views {
    pub const SUMMARY: &str = "/";
    pub const STOCK: &str = "/product";
    pub const LOCATIONS: &str = "/location";
}
