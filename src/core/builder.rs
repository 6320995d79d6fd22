use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::*;

/// Builder for [`PaymentValues`].
///
/// ```
/// use csb32::core::*;
/// use chrono::NaiveDate;
///
/// let values = PaymentValuesBuilder::new("Empresa SA", "REM001", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .journal(PaymentJournal::new("CSB 32").grantor("A12345678000"))
///     .province("08")
///     .city("Barcelona")
///     .bank_account(BankAccount::new("21000418450200051332"))
///     .build();
///
/// assert!(validate_payment_values(&values).is_ok());
/// ```
pub struct PaymentValuesBuilder {
    name: String,
    number: String,
    creation_date: NaiveDate,
    payment_journal: PaymentJournal,
    party: Option<Party>,
    province: Option<String>,
    city: Option<String>,
    ine_code: Option<String>,
    bank_account: BankAccount,
    receipts: Vec<Receipt>,
}

impl PaymentValuesBuilder {
    /// Start from the company name, group number and creation date.
    pub fn new(name: impl Into<String>, number: impl Into<String>, creation_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            creation_date,
            payment_journal: PaymentJournal::new("CSB 32"),
            party: None,
            province: None,
            city: None,
            ine_code: None,
            bank_account: BankAccount::empty(),
            receipts: Vec::new(),
        }
    }

    pub fn journal(mut self, journal: PaymentJournal) -> Self {
        self.payment_journal = journal;
        self
    }

    /// Company party; defaults to a party named after the company.
    pub fn party(mut self, party: Party) -> Self {
        self.party = Some(party);
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn ine_code(mut self, code: impl Into<String>) -> Self {
        self.ine_code = Some(code.into());
        self
    }

    pub fn bank_account(mut self, account: BankAccount) -> Self {
        self.bank_account = account;
        self
    }

    pub fn add_receipt(mut self, receipt: Receipt) -> Self {
        self.receipts.push(receipt);
        self
    }

    /// Build the values. No validation is run here; generation validates.
    pub fn build(self) -> PaymentValues {
        let party = self.party.unwrap_or_else(|| Party::new(self.name.clone()));
        PaymentValues {
            payment_journal: self.payment_journal,
            name: self.name,
            party,
            province: self.province,
            city: self.city,
            ine_code: self.ine_code,
            bank_account: self.bank_account,
            receipts: self.receipts,
            creation_date: self.creation_date,
            number: self.number,
        }
    }
}

/// Builder for [`Receipt`].
pub struct ReceiptBuilder {
    party: Party,
    amount: Decimal,
    maturity_date: NaiveDate,
    vat_number: Option<String>,
    address: Option<Address>,
    province: Option<String>,
    bank_account: BankAccount,
}

impl ReceiptBuilder {
    pub fn new(party_name: impl Into<String>, amount: Decimal, maturity_date: NaiveDate) -> Self {
        Self {
            party: Party::new(party_name),
            amount,
            maturity_date,
            vat_number: None,
            address: None,
            province: None,
            bank_account: BankAccount::empty(),
        }
    }

    pub fn vat_number(mut self, vat: impl Into<String>) -> Self {
        self.vat_number = Some(vat.into());
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn bank_account(mut self, account: BankAccount) -> Self {
        self.bank_account = account;
        self
    }

    pub fn build(self) -> Receipt {
        Receipt {
            party: self.party,
            vat_number: self.vat_number,
            address: self.address,
            province: self.province,
            amount: self.amount,
            maturity_date: self.maturity_date,
            bank_account: self.bank_account,
        }
    }
}
