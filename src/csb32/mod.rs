//! CSB-32 (Cuaderno 32) collection file generation.
//!
//! Builds the fixed-width records of a CSB-32 file from [`PaymentValues`]
//! and concatenates them in the order the banks expect:
//! file header, order header, three individual records per receipt,
//! order footer and file footer.
//!
//! # Example
//!
//! ```ignore
//! use csb32::csb32::*;
//!
//! let config = Csb32ConfigBuilder::new()
//!     .document_type(DocumentType::Receipt)
//!     .line_ending(LineEnding::CrLf)
//!     .build();
//!
//! let file = to_csb32(&values, &config)?;
//! group.attach_file(file.text);
//! ```
//!
//! [`PaymentValues`]: crate::core::PaymentValues

mod assemble;
mod config;
mod encode;
mod layout;
mod records;

pub use assemble::{Csb32File, process_csb32, to_csb32};
pub use config::{
    Acceptance, Csb32Config, Csb32ConfigBuilder, DocumentType, ExpensesClause, LineEnding,
};
pub use encode::{FieldValues, Record, encode, fold_ascii, format_amount};
pub use layout::{
    DATA_CODE, FILE_FOOTER, FILE_HEADER, Field, Fill, INDIVIDUAL_1, INDIVIDUAL_2, INDIVIDUAL_3,
    LAYOUTS, Layout, ORDER_FOOTER, ORDER_HEADER, RECORD_LENGTH,
};
