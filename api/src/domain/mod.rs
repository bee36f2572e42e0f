//! Domain layer
//!
//! Business types and the persistence contracts they are stored through.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
