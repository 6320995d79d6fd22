//! Core payment group types, validation, and numbering.
//!
//! This module provides the values a host accounting application hands over
//! for a collection run, the fail-fast checks that guard file generation,
//! and the [`PaymentGroup`] seam through which the host is driven.

mod builder;
mod error;
mod host;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use host::*;
pub use numbering::*;
pub use types::*;
pub use validation::*;
