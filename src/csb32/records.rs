//! One builder per record layout.

use rust_decimal::Decimal;

use super::config::Csb32Config;
use super::encode::{Record, format_amount};
use super::layout::*;
use crate::core::{
    ConfigurationIssue, Csb32Error, PaymentValues, Receipt, RunCounters, format_document_number,
};

/// Only one order is emitted per file.
const ORDER_NUMBER: &str = "0001";
const ORDER_COUNT: &str = "00001";
const RECEIVER_INE: &str = "0000000";

/// File-wide values shared by every record builder.
pub(super) struct FileContext<'a> {
    pub values: &'a PaymentValues,
    pub config: &'a Csb32Config,
    account: String,
    grantor: &'a str,
    file_date: String,
    total_amount: Decimal,
}

impl<'a> FileContext<'a> {
    pub fn new(values: &'a PaymentValues, config: &'a Csb32Config) -> Result<Self, Csb32Error> {
        let grantor = values
            .payment_journal
            .csb_32_grantor
            .as_deref()
            .ok_or_else(|| {
                Csb32Error::configuration(
                    ConfigurationIssue::JournalWithoutGrantor,
                    &values.payment_journal.name,
                )
            })?;
        let account = values.bank_account.ccc().ok_or_else(|| {
            Csb32Error::configuration(ConfigurationIssue::CompanyWithoutBankAccount, &values.name)
        })?;
        Ok(Self {
            values,
            config,
            account,
            grantor: grantor.trim(),
            file_date: values.creation_date.format("%d%m%y").to_string(),
            total_amount: values.total_amount(),
        })
    }
}

pub(super) fn file_header(ctx: &FileContext) -> Record {
    let mut record = Record::new(&FILE_HEADER);
    record
        .set("file_date", &ctx.file_date)
        .set("number", &ctx.values.number)
        .set("bank_code", ctx.account.chars().take(4).collect::<String>())
        .set(
            "bank_office",
            ctx.account.chars().skip(4).take(4).collect::<String>(),
        );
    record
}

pub(super) fn order_header(ctx: &FileContext) -> Record {
    let mut record = Record::new(&ORDER_HEADER);
    record
        .set("file_date", &ctx.file_date)
        .set("order_number", ORDER_NUMBER)
        .set("grantor_identifier", ctx.grantor)
        .set("truncated", "1")
        .set("account_payment_1", &ctx.account)
        .set("account_payment_2", &ctx.account)
        .set("account_payment_3", &ctx.account);
    record
}

pub(super) fn individual_1(ctx: &FileContext, receipt: &Receipt, document_number: u64) -> Record {
    let values = ctx.values;
    let mut record = Record::new(&INDIVIDUAL_1);
    record
        .set("document_number", format_document_number(document_number))
        .set("file_date", &ctx.file_date)
        .set("order_number", ORDER_NUMBER)
        .set("province_code", values.province.as_deref().unwrap_or_default())
        .set("ine", values.ine_code.as_deref().unwrap_or_default())
        .set("city", values.city.as_deref().unwrap_or_default())
        .set("amount", format_amount(receipt.amount))
        .set("date_due", receipt.maturity_date.format("%d%m%y").to_string());
    record
}

pub(super) fn individual_2(ctx: &FileContext, receipt: &Receipt, document_number: u64) -> Record {
    let mut record = Record::new(&INDIVIDUAL_2);
    record
        .set("document_number", format_document_number(document_number))
        .set("document_type", ctx.config.document_type.code())
        .set("send_date", &ctx.file_date)
        .set("accept_code", ctx.config.acceptance.code())
        .set("expenses_clause", ctx.config.expenses_clause.code())
        .set("account", receipt.bank_account.ccc().unwrap_or_default())
        .set("sender_name", &ctx.values.party.name)
        .set("receiver_name", &receipt.party.name)
        .set("additional_information", "");
    record
}

pub(super) fn individual_3(receipt: &Receipt, document_number: u64) -> Record {
    let mut record = Record::new(&INDIVIDUAL_3);
    record.set("document_number", format_document_number(document_number));
    if let Some(address) = &receipt.address {
        record
            .set("receiver_address", &address.street)
            .set("receiver_zip", &address.zip)
            .set("receiver_city", &address.city);
    }
    record
        .set(
            "receiver_province_code",
            receipt.province.as_deref().unwrap_or_default(),
        )
        .set("receiver_ine", RECEIVER_INE)
        .set("receiver_nif", nif(receipt.vat_number.as_deref().unwrap_or_default()));
    record
}

pub(super) fn order_footer(ctx: &FileContext, counters: &RunCounters) -> Record {
    let mut record = Record::new(&ORDER_FOOTER);
    record
        .set("file_date", &ctx.file_date)
        .set("order_number", ORDER_NUMBER)
        .set("amount", format_amount(ctx.total_amount))
        .set("record_count", counters.record_count.to_string())
        .set("payment_count", counters.payment_count.to_string());
    record
}

pub(super) fn file_footer(ctx: &FileContext, counters: &RunCounters) -> Record {
    let mut record = Record::new(&FILE_FOOTER);
    record
        .set("order_count", ORDER_COUNT)
        .set("amount", format_amount(ctx.total_amount))
        .set("record_count", counters.record_count.to_string())
        .set("payment_count", counters.payment_count.to_string());
    record
}

/// Spanish NIF from a VAT number: whitespace removed and the `ES` country
/// prefix dropped.
fn nif(vat_number: &str) -> String {
    let compact: String = vat_number.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.get(..2) {
        Some(prefix) if compact.len() > 9 && prefix.eq_ignore_ascii_case("ES") => {
            compact[2..].to_string()
        }
        _ => compact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nif_strips_country_prefix() {
        assert_eq!(nif("ES B12345678"), "B12345678");
        assert_eq!(nif("es12345678Z"), "12345678Z");
    }

    #[test]
    fn nif_keeps_plain_numbers() {
        assert_eq!(nif("12345678Z"), "12345678Z");
        assert_eq!(nif(""), "");
    }
}
