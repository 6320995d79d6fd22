use super::types::PaymentValues;

/// The host application's payment group, as seen by the CSB-32 exporter.
///
/// The host owns persistence: whatever `attach_file` does with the text
/// (storing it, locking, retrying) is outside this crate.
pub trait PaymentGroup {
    /// Aggregate the values needed to build a collection file.
    fn set_default_payment_values(&self) -> PaymentValues;

    /// Receive the finished file contents.
    fn attach_file(&mut self, text: String);
}
