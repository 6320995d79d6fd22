/// Width of a rendered CSB-32 document number.
pub const DOCUMENT_NUMBER_WIDTH: usize = 15;

/// Gapless document number sequence for the receipts of one file.
///
/// Numbers start at 1 and are rendered zero-padded to 15 digits,
/// e.g. "000000000000001", "000000000000002", etc.
#[derive(Debug, Clone, Default)]
pub struct DocumentNumberSequence {
    last: u64,
}

impl DocumentNumberSequence {
    /// Create a new sequence; the first number issued is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance and return the next number.
    pub fn advance(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// Render a document number zero-padded to 15 digits.
pub fn format_document_number(number: u64) -> String {
    format!("{:0>width$}", number, width = DOCUMENT_NUMBER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one() {
        let mut seq = DocumentNumberSequence::new();
        assert_eq!(seq.advance(), 1);
        assert_eq!(seq.advance(), 2);
        assert_eq!(format_document_number(seq.advance()), "000000000000003");
    }

    #[test]
    fn format_pads_to_fifteen() {
        assert_eq!(format_document_number(42), "000000000000042");
        assert_eq!(format_document_number(123_456_789_012_345).len(), 15);
    }
}
