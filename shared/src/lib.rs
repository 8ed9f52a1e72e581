//! Shared types and models for the Stockroom inventory tracker
//!
//! Plain records and input validation used by the backend and any client
//! that renders inventory data.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
