//! CSB-32 file assembly.

use log::{debug, info};

use super::config::{Csb32Config, LineEnding};
use super::encode::Record;
use super::records::{self, FileContext};
use crate::core::{
    Csb32Error, DocumentNumberSequence, PaymentGroup, PaymentValues, RunCounters,
    validate_payment_values,
};

/// A generated collection file.
#[derive(Debug, Clone)]
pub struct Csb32File {
    /// All records, each followed by the configured line ending.
    pub text: String,
    /// Counters as they stood after the file footer.
    pub counters: RunCounters,
}

/// Generate a CSB-32 collection file from payment group values.
///
/// Values are validated first; on error nothing is generated.
pub fn to_csb32(values: &PaymentValues, config: &Csb32Config) -> Result<Csb32File, Csb32Error> {
    validate_payment_values(values)?;
    let ctx = FileContext::new(values, config)?;

    let mut out = Output::new(config.line_ending);
    let mut counters = RunCounters::default();
    let mut documents = DocumentNumberSequence::new();

    out.emit(records::file_header(&ctx), &counters);
    counters.record_count += 1;
    out.emit(records::order_header(&ctx), &counters);
    counters.record_count += 1;

    for receipt in &values.receipts {
        let number = documents.advance();
        counters.document_number = number;

        out.emit(records::individual_1(&ctx, receipt, number), &counters);
        counters.record_count += 1;
        out.emit(records::individual_2(&ctx, receipt, number), &counters);
        counters.record_count += 1;
        out.emit(records::individual_3(receipt, number), &counters);
        counters.record_count += 1;
        counters.payment_count += 1;
    }

    out.emit(records::order_footer(&ctx, &counters), &counters);
    // Footer pair counted together, after the order footer is written.
    counters.record_count += 2;
    out.emit(records::file_footer(&ctx, &counters), &counters);

    info!(
        "CSB-32 file for group {} assembled: {} payments, {} records",
        values.number, counters.payment_count, counters.record_count
    );

    Ok(Csb32File {
        text: out.text,
        counters,
    })
}

/// Generate the file for a host payment group and attach it.
///
/// Nothing is attached when generation fails.
pub fn process_csb32<G: PaymentGroup + ?Sized>(
    group: &mut G,
    config: &Csb32Config,
) -> Result<RunCounters, Csb32Error> {
    let values = group.set_default_payment_values();
    let file = to_csb32(&values, config)?;
    group.attach_file(file.text);
    Ok(file.counters)
}

struct Output {
    text: String,
    line_ending: &'static str,
}

impl Output {
    fn new(line_ending: LineEnding) -> Self {
        Self {
            text: String::new(),
            line_ending: line_ending.as_str(),
        }
    }

    fn emit(&mut self, record: Record, counters: &RunCounters) {
        debug!(
            "emitting {} record (record count {})",
            record.layout().name,
            counters.record_count
        );
        self.text.push_str(&record.encode());
        self.text.push_str(self.line_ending);
    }
}
