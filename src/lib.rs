//! Formats structured Russian postal-address components into several
//! human-readable display strings (full address, street only, and so on).

pub mod core;
pub mod error;

pub use crate::core::formatter::{all_formats, AddressFormats};
pub use crate::core::types::{AddressComponents, BuildingType};
pub use crate::error::AddressFormatError;
