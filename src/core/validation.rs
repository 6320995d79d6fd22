use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::{ConfigurationIssue, Csb32Error};
use super::types::*;

/// Largest amount representable in a 10-digit cents field.
pub const MAX_AMOUNT: Decimal = dec!(99999999.99);

/// Check that a payment group carries everything a CSB-32 file needs.
///
/// Fails fast: the first problem found is returned, so the host can report
/// it and no partial file is ever produced.
pub fn validate_payment_values(values: &PaymentValues) -> Result<(), Csb32Error> {
    check(values).inspect_err(|e| warn!("CSB-32 generation for group {} aborted: {e}", values.number))
}

fn check(values: &PaymentValues) -> Result<(), Csb32Error> {
    if !is_province_code(values.province.as_deref()) || is_blank(values.city.as_deref()) {
        return Err(Csb32Error::configuration(
            ConfigurationIssue::CompanyWithoutCompleteAddress,
            &values.name,
        ));
    }

    if let Some(ine) = values.ine_code.as_deref().map(str::trim) {
        if ine.len() > 7 || !ine.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Csb32Error::configuration(
                ConfigurationIssue::CompanyWithInvalidIneCode,
                &values.name,
            ));
        }
    }

    let journal = &values.payment_journal;
    if journal.process_method != ProcessMethod::Csb32 {
        return Err(Csb32Error::configuration(
            ConfigurationIssue::JournalNotCsb32,
            &journal.name,
        ));
    }
    if is_blank(journal.csb_32_grantor.as_deref()) {
        return Err(Csb32Error::configuration(
            ConfigurationIssue::JournalWithoutGrantor,
            &journal.name,
        ));
    }

    if values.bank_account.ccc().is_none() {
        return Err(Csb32Error::configuration(
            ConfigurationIssue::CompanyWithoutBankAccount,
            &values.name,
        ));
    }

    values.receipts.iter().try_for_each(validate_receipt)?;

    if values.total_amount() > MAX_AMOUNT {
        return Err(Csb32Error::configuration(
            ConfigurationIssue::OrderAmountOutOfRange,
            &values.name,
        ));
    }
    Ok(())
}

/// Check a single receipt: VAT number, address, province, bank account and
/// amount, in that order.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), Csb32Error> {
    let fail = |issue| Err(Csb32Error::configuration(issue, &receipt.party.name));

    if is_blank(receipt.vat_number.as_deref()) {
        return fail(ConfigurationIssue::PartyWithoutVatNumber);
    }
    if receipt.address.as_ref().is_none_or(Address::is_blank) {
        return fail(ConfigurationIssue::PartyWithoutAddress);
    }
    if !is_province_code(receipt.province.as_deref()) {
        return fail(ConfigurationIssue::PartyWithoutProvince);
    }
    if receipt.bank_account.ccc().is_none() {
        return fail(ConfigurationIssue::PartyWithoutBankAccount);
    }
    if receipt.amount.is_sign_negative() || receipt.amount.round_dp(2) > MAX_AMOUNT {
        return fail(ConfigurationIssue::ReceiptAmountOutOfRange);
    }
    Ok(())
}

/// Spanish province codes are 1 or 2 digits ("8" or "08").
fn is_province_code(value: Option<&str>) -> bool {
    value
        .map(str::trim)
        .is_some_and(|v| (1..=2).contains(&v.len()) && v.bytes().all(|b| b.is_ascii_digit()))
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
