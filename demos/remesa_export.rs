use chrono::NaiveDate;
use csb32::core::*;
use csb32::csb32::*;
use rust_decimal_macros::dec;

/// Minimal host keeping the attached file in memory.
struct DemoGroup {
    values: PaymentValues,
    attachment: Option<String>,
}

impl PaymentGroup for DemoGroup {
    fn set_default_payment_values(&self) -> PaymentValues {
        self.values.clone()
    }

    fn attach_file(&mut self, text: String) {
        self.attachment = Some(text);
    }
}

fn main() {
    let creation = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let due = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();

    let values = PaymentValuesBuilder::new("Distribuciones Ibéricas SA", "REM-2024-03", creation)
        .journal(PaymentJournal::new("Remesas CSB 32").grantor("A08123456000"))
        .province("08")
        .city("Barcelona")
        .bank_account(BankAccount::new("ES91 2100 0418 4502 0005 1332"))
        .add_receipt(
            ReceiptBuilder::new("Comercial Peña SL", dec!(1250.00), due)
                .vat_number("ESB12345678")
                .address(Address::new("Calle Mayor 12", "28013", "Madrid"))
                .province("28")
                .bank_account(BankAccount::new("00491500051234567892"))
                .build(),
        )
        .add_receipt(
            ReceiptBuilder::new("Talleres Núñez SA", dec!(89.90), due)
                .vat_number("A87654321")
                .address(Address::new("Avda. del Puerto 3", "46021", "Valencia"))
                .province("46")
                .bank_account(BankAccount::new("20800123450000123456"))
                .build(),
        )
        .build();

    let mut group = DemoGroup {
        values,
        attachment: None,
    };

    let config = Csb32ConfigBuilder::new()
        .document_type(DocumentType::Receipt)
        .build();

    let counters = process_csb32(&mut group, &config).expect("CSB-32 generation failed");
    println!("=== CSB-32 remesa ===");
    for line in group.attachment.as_deref().unwrap_or_default().lines() {
        println!("{}", line.trim_end());
    }
    println!(
        "\n{} payments, {} records",
        counters.payment_count, counters.record_count
    );

    // A missing province aborts generation before anything is attached.
    let mut incomplete = group.values.clone();
    incomplete.receipts[0].province = None;
    match to_csb32(&incomplete, &config) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\nRejected: {e} [{}]", e.description_key()),
    }
}
