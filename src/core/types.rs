use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated values of a payment group, as produced by the host's
/// `set_default_payment_values()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentValues {
    /// Journal the group is processed through.
    pub payment_journal: PaymentJournal,
    /// Company name, used in error messages.
    pub name: String,
    /// Company party, used as sender of each receipt.
    pub party: Party,
    /// Company province code (2 digits).
    pub province: Option<String>,
    /// Company city (plaza de libramiento).
    pub city: Option<String>,
    /// Company municipality INE code. Zeros when unknown.
    pub ine_code: Option<String>,
    /// Company bank account the collections are credited to.
    pub bank_account: BankAccount,
    /// Receipts to collect, in emission order.
    pub receipts: Vec<Receipt>,
    /// Creation date of the group.
    pub creation_date: NaiveDate,
    /// Group number (file identification).
    pub number: String,
}

impl PaymentValues {
    /// Sum of all receipt amounts, each rounded to cents first so the
    /// total matches the amounts written per receipt.
    pub fn total_amount(&self) -> Decimal {
        self.receipts.iter().map(|r| r.amount.round_dp(2)).sum()
    }
}

/// Payment journal the group is processed through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentJournal {
    pub name: String,
    /// How payments of this journal are processed.
    pub process_method: ProcessMethod,
    /// Grantor identifier issued by the bank (código de cedente).
    /// Required when the process method is [`ProcessMethod::Csb32`].
    pub csb_32_grantor: Option<String>,
}

impl PaymentJournal {
    /// Journal using the CSB 32 process method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            process_method: ProcessMethod::Csb32,
            csb_32_grantor: None,
        }
    }

    pub fn process_method(mut self, method: ProcessMethod) -> Self {
        self.process_method = method;
        self
    }

    pub fn grantor(mut self, grantor: impl Into<String>) -> Self {
        self.csb_32_grantor = Some(grantor.into());
        self
    }
}

/// Process method of a payment journal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessMethod {
    /// Payments are handled by hand; no file is generated.
    #[default]
    Manual,
    /// CSB 32 collection file.
    Csb32,
}

impl ProcessMethod {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Csb32 => "csb32",
        }
    }
}

/// A company or debtor party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
}

impl Party {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Postal address of a debtor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub zip: String,
    pub city: String,
}

impl Address {
    /// True when street, zip and city are all blank.
    pub fn is_blank(&self) -> bool {
        [&self.street, &self.zip, &self.city]
            .iter()
            .all(|part| part.trim().is_empty())
    }

    pub fn new(street: impl Into<String>, zip: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            zip: zip.into(),
            city: city.into(),
        }
    }
}

/// A bank account with one or more account numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub numbers: Vec<BankAccountNumber>,
}

/// One number of a bank account (CCC or IBAN).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccountNumber {
    pub number: String,
}

impl BankAccount {
    /// Bank account with a single number.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            numbers: vec![BankAccountNumber {
                number: number.into(),
            }],
        }
    }

    /// Bank account without any number.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The first account number in CSB form: whitespace removed, and a
    /// Spanish IBAN reduced to its 20-digit CCC.
    ///
    /// ```
    /// use csb32::core::BankAccount;
    ///
    /// let account = BankAccount::new("ES91 2100 0418 4502 0005 1332");
    /// assert_eq!(account.ccc().as_deref(), Some("21000418450200051332"));
    /// ```
    pub fn ccc(&self) -> Option<String> {
        let first = self.numbers.first()?;
        let compact: String = first
            .number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if compact.is_empty() {
            return None;
        }
        if compact.len() == 24 && compact.is_ascii() && compact[..2].eq_ignore_ascii_case("ES") {
            return Some(compact[4..].to_string());
        }
        Some(compact)
    }
}

/// One collection instruction within a payment group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Debtor party.
    pub party: Party,
    /// Debtor VAT number (NIF), with or without the `ES` prefix.
    pub vat_number: Option<String>,
    /// Debtor postal address.
    pub address: Option<Address>,
    /// Debtor province code (2 digits).
    pub province: Option<String>,
    /// Amount to collect.
    pub amount: Decimal,
    /// Maturity (due) date.
    pub maturity_date: NaiveDate,
    /// Debtor bank account to charge.
    pub bank_account: BankAccount,
}

/// Running counters of one file-generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounters {
    /// Physical records emitted, with the trailer pair counted as 2.
    pub record_count: u32,
    /// Receipts emitted.
    pub payment_count: u32,
    /// Document number of the last receipt emitted.
    pub document_number: u64,
}
