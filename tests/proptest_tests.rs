//! Property-based tests for record encoding and file assembly.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "csb32")]

use chrono::NaiveDate;
use csb32::core::*;
use csb32::csb32::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn values_with(receipts: Vec<Receipt>) -> PaymentValues {
    let mut builder = PaymentValuesBuilder::new("Empresa SA", "REM", date(2024, 6, 15))
        .journal(PaymentJournal::new("CSB 32").grantor("A08000000000"))
        .province("08")
        .city("Barcelona")
        .bank_account(BankAccount::new("21000418450200051332"));
    for r in receipts {
        builder = builder.add_receipt(r);
    }
    builder.build()
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Amount in cents, 0.00 to 4999999.99, so twenty receipts stay in range.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..500_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Amount anywhere in the receipt range, 0.00 to 99999999.99, with a
/// sub-cent remainder.
fn arb_large_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64, 0i64..10)
        .prop_map(|(cents, mills)| Decimal::new(cents, 2) + Decimal::new(mills, 3))
        .prop_map(|d| d.min(MAX_AMOUNT))
}

fn arb_receipt() -> impl Strategy<Value = Receipt> {
    receipt_with(arb_amount())
}

fn receipt_with(amount: impl Strategy<Value = Decimal>) -> impl Strategy<Value = Receipt> {
    (".{1,60}", ".{1,60}", "[0-9]{5}", "[0-9]{2}", amount).prop_map(
        |(name, street, zip, province, amount)| {
            ReceiptBuilder::new(name, amount, date(2024, 7, 1))
                .vat_number("B12345678")
                .address(Address::new(street, zip, "Madrid"))
                .province(province)
                .bank_account(BankAccount::new("00491500051234567892"))
                .build()
        },
    )
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_layout_encodes_to_fixed_length(value in ".{0,200}") {
        for layout in LAYOUTS {
            let mut values = FieldValues::new();
            for field in layout.fields {
                values.insert(field.name, value.clone());
            }
            let line = encode(layout, &values);
            prop_assert_eq!(line.chars().count(), RECORD_LENGTH);
            prop_assert_eq!(line.len(), RECORD_LENGTH);
            prop_assert!(line.starts_with(layout.record_code));
        }
    }

    #[test]
    fn record_count_is_four_plus_three_per_receipt(receipts in prop::collection::vec(arb_receipt(), 0..20)) {
        let n = receipts.len() as u32;
        let file = to_csb32(&values_with(receipts), &Csb32Config::default()).unwrap();
        prop_assert_eq!(file.counters.record_count, 2 + 3 * n + 2);
        prop_assert_eq!(file.counters.payment_count, n);
        prop_assert_eq!(file.text.lines().count() as u32, 2 + 3 * n + 2);
    }

    #[test]
    fn document_numbers_are_one_to_n(receipts in prop::collection::vec(arb_receipt(), 1..20)) {
        let n = receipts.len();
        let file = to_csb32(&values_with(receipts), &Csb32Config::default()).unwrap();
        let numbers: Vec<String> = file
            .text
            .lines()
            .filter(|l| l.starts_with("25"))
            .map(|l| l[4..19].to_string())
            .collect();
        let expected: Vec<String> = (1..=n as u64).map(|i| format!("{i:015}")).collect();
        prop_assert_eq!(numbers, expected);
    }

    #[test]
    fn every_line_is_ascii_and_fixed_width(receipts in prop::collection::vec(arb_receipt(), 0..10)) {
        let file = to_csb32(&values_with(receipts), &Csb32Config::default()).unwrap();
        for line in file.text.lines() {
            prop_assert!(line.is_ascii());
            prop_assert_eq!(line.len(), RECORD_LENGTH);
        }
    }

    #[test]
    fn footer_amount_matches_total_or_is_rejected(
        receipts in prop::collection::vec(receipt_with(arb_large_amount()), 0..5)
    ) {
        let total: Decimal = receipts.iter().map(|r| r.amount.round_dp(2)).sum();
        let result = to_csb32(&values_with(receipts), &Csb32Config::default());
        if total > MAX_AMOUNT {
            let err = result.unwrap_err();
            prop_assert_eq!(err.description_key(), "order_amount_out_of_range");
            prop_assert_eq!(err.entity_name(), "Empresa SA");
        } else {
            let file = result.unwrap();
            let footer = file.text.lines().last().unwrap();
            prop_assert_eq!(&footer[42..52], format!("{:0>10}", format_amount(total)));
        }
    }
}
