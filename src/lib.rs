//! # csb32
//!
//! Generation of Spanish CSB-32 ("Cuaderno 32") direct-debit collection files
//! from accounting payment groups.
//!
//! A CSB-32 file is a sequence of fixed-width, 150-character records: a file
//! header, an order header, three individual records per receipt, an order
//! footer and a file footer. All monetary values use
//! [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use csb32::core::*;
//! use csb32::csb32::{Csb32Config, to_csb32};
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let receipt = ReceiptBuilder::new("Cliente SL", dec!(100.00), date)
//!     .vat_number("B12345678")
//!     .address(Address::new("Calle Mayor 1", "28001", "Madrid"))
//!     .province("28")
//!     .bank_account(BankAccount::new("21000418450200051331"))
//!     .build();
//!
//! let values = PaymentValuesBuilder::new("Empresa SA", "REM001", date)
//!     .journal(PaymentJournal::new("CSB 32").grantor("A12345678000"))
//!     .province("08")
//!     .city("Barcelona")
//!     .bank_account(BankAccount::new("12345678"))
//!     .add_receipt(receipt)
//!     .build();
//!
//! let file = to_csb32(&values, &Csb32Config::default()).unwrap();
//! assert_eq!(file.text.lines().count(), 7);
//! assert_eq!(file.counters.record_count, 7);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Payment group types, validation, numbering, host trait |
//! | `csb32` (default) | Layout tables, record encoder, file assembly |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "csb32")]
pub mod csb32;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
