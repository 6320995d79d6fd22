use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while generating a CSB-32 file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Csb32Error {
    /// The payment group is missing data required by the file format.
    #[error("configuration error: {description} ({name})")]
    Configuration {
        /// What is missing or invalid.
        description: ConfigurationIssue,
        /// Name of the offending company, journal or party.
        name: String,
    },
}

impl Csb32Error {
    pub fn configuration(description: ConfigurationIssue, name: impl Into<String>) -> Self {
        Self::Configuration {
            description,
            name: name.into(),
        }
    }

    /// Description key as understood by the host's user-error mechanism.
    pub fn description_key(&self) -> &'static str {
        match self {
            Self::Configuration { description, .. } => description.key(),
        }
    }

    /// Name of the entity the error refers to.
    pub fn entity_name(&self) -> &str {
        match self {
            Self::Configuration { name, .. } => name,
        }
    }
}

/// The specific configuration problem behind a [`Csb32Error::Configuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigurationIssue {
    /// Company province or city is blank, or the province is not a
    /// numeric province code.
    CompanyWithoutCompleteAddress,
    /// Company INE code is not numeric or longer than 7 digits.
    CompanyWithInvalidIneCode,
    /// Payment journal is not set up for CSB-32 processing.
    JournalNotCsb32,
    /// Payment journal has no CSB-32 grantor identifier.
    JournalWithoutGrantor,
    /// Company bank account has no account number.
    CompanyWithoutBankAccount,
    /// Receipt party has no VAT number.
    PartyWithoutVatNumber,
    /// Receipt party has no address.
    PartyWithoutAddress,
    /// Receipt party has no province, or it is not a numeric province code.
    PartyWithoutProvince,
    /// Receipt bank account has no account number.
    PartyWithoutBankAccount,
    /// Receipt amount is negative or too large for the amount field.
    ReceiptAmountOutOfRange,
    /// Sum of the receipt amounts is too large for the order total field.
    OrderAmountOutOfRange,
}

impl ConfigurationIssue {
    /// Description key (e.g. `"party_without_vat_number"`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::CompanyWithoutCompleteAddress => "company_without_complete_address",
            Self::CompanyWithInvalidIneCode => "company_with_invalid_ine_code",
            Self::JournalNotCsb32 => "journal_not_csb32",
            Self::JournalWithoutGrantor => "journal_without_grantor",
            Self::CompanyWithoutBankAccount => "company_without_bank_account",
            Self::PartyWithoutVatNumber => "party_without_vat_number",
            Self::PartyWithoutAddress => "party_without_address",
            Self::PartyWithoutProvince => "party_without_province",
            Self::PartyWithoutBankAccount => "party_without_bank_account",
            Self::ReceiptAmountOutOfRange => "receipt_amount_out_of_range",
            Self::OrderAmountOutOfRange => "order_amount_out_of_range",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::CompanyWithoutCompleteAddress => "company address lacks a city or a valid province code",
            Self::CompanyWithInvalidIneCode => "company INE code must be up to 7 digits",
            Self::JournalNotCsb32 => "payment journal does not use the CSB 32 process method",
            Self::JournalWithoutGrantor => "payment journal has no CSB-32 grantor identifier",
            Self::CompanyWithoutBankAccount => "company bank account has no account number",
            Self::PartyWithoutVatNumber => "party has no VAT number",
            Self::PartyWithoutAddress => "party has no address",
            Self::PartyWithoutProvince => "party has no valid province code",
            Self::PartyWithoutBankAccount => "party bank account has no account number",
            Self::ReceiptAmountOutOfRange => {
                "receipt amount is negative or exceeds 99999999.99"
            }
            Self::OrderAmountOutOfRange => "sum of receipt amounts exceeds 99999999.99",
        }
    }
}

impl fmt::Display for ConfigurationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
