//! SeaORM entity definitions
//!
//! Table-level models. Domain code converts these into `domain::entities`.

pub mod accounts;
pub mod addresses;
pub mod clients;
