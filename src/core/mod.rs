//! The UBL-TR entity model, reference data, errors and helpers.
//!
//! Entities are plain data. Nothing here renders XML; see
//! [`crate::invoice`] for assembly and serialization.

mod arithmetic;
mod builder;
pub mod codes;
mod config;
mod document;
mod error;
mod finance;
mod line;
mod logistics;
mod numbering;
mod party;
mod types;

pub use arithmetic::*;
pub use builder::*;
pub use config::*;
pub use document::*;
pub use error::*;
pub use finance::*;
pub use line::*;
pub use logistics::*;
pub use numbering::*;
pub use party::*;
pub use types::*;
