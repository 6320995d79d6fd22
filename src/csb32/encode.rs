//! Fixed-width rendering of records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::layout::{DATA_CODE, Field, Fill, Layout};

/// Field values of one record, keyed by field name.
pub type FieldValues = BTreeMap<&'static str, String>;

/// A record being populated: a layout plus the values of its fields.
/// Fields left unset render as zeros (numeric) or spaces.
#[derive(Debug, Clone)]
pub struct Record {
    layout: &'static Layout,
    values: FieldValues,
}

impl Record {
    pub fn new(layout: &'static Layout) -> Self {
        Self {
            layout,
            values: FieldValues::new(),
        }
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Set a field. Names not in the layout are a programming error and
    /// are dropped in release builds.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        match self.layout.field(name) {
            Some(field) => {
                self.values.insert(field.name, value.into());
            }
            None => debug_assert!(false, "{} has no field {name}", self.layout.name),
        }
        self
    }

    /// Render to a single line (without line ending).
    pub fn encode(&self) -> String {
        encode(self.layout, &self.values)
    }
}

/// Render field values into one fixed-width line.
///
/// The line starts with the record code and data code, followed by every
/// field of the layout in order; its length is always `layout.width()`.
pub fn encode(layout: &Layout, values: &FieldValues) -> String {
    let mut out = String::with_capacity(layout.width());
    out.push_str(layout.record_code);
    out.push_str(DATA_CODE);
    for field in layout.fields {
        let value = values.get(field.name).map(String::as_str).unwrap_or("");
        write_field(&mut out, field, value);
    }
    out
}

fn write_field(out: &mut String, field: &Field, value: &str) {
    match field.fill {
        Fill::Blank => pad(out, ' ', field.width),
        Fill::Alphanumeric => {
            let text: Vec<char> = value.chars().map(fold_ascii).take(field.width).collect();
            out.extend(&text);
            pad(out, ' ', field.width - text.len());
        }
        Fill::Numeric => {
            let digits: Vec<char> = value.trim().chars().map(fold_ascii).collect();
            let start = digits.len().saturating_sub(field.width);
            pad(out, '0', field.width - (digits.len() - start));
            out.extend(&digits[start..]);
        }
    }
}

fn pad(out: &mut String, c: char, n: usize) {
    out.extend(std::iter::repeat_n(c, n));
}

/// Map a character to a single printable ASCII character.
///
/// Spanish and common Latin accented letters lose their diacritics, control
/// characters become spaces and anything else becomes `?`.
pub fn fold_ascii(c: char) -> char {
    match c {
        ' '..='~' => c,
        c if c.is_control() => ' ',
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'ª' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'º' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        '\u{a0}' => ' ',
        _ => '?',
    }
}

/// Format an amount as cents without decimal separator, e.g. 100.00 → "10000".
pub fn format_amount(d: Decimal) -> String {
    let mut scaled = d.round_dp(2);
    scaled.rescale(2);
    scaled.mantissa().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csb32::layout::{FILE_FOOTER, INDIVIDUAL_2, RECORD_LENGTH};
    use rust_decimal_macros::dec;

    #[test]
    fn unset_record_is_codes_and_padding() {
        let line = Record::new(&FILE_FOOTER).encode();
        assert_eq!(line.len(), RECORD_LENGTH);
        assert!(line.starts_with("9865"));
        assert_eq!(&line[23..28], "00000");
    }

    #[test]
    fn numeric_left_pads_with_zeros() {
        let mut r = Record::new(&FILE_FOOTER);
        r.set("order_count", "1");
        assert_eq!(&r.encode()[23..28], "00001");
    }

    #[test]
    fn numeric_overflow_keeps_rightmost() {
        let mut r = Record::new(&FILE_FOOTER);
        r.set("order_count", "1234567");
        assert_eq!(&r.encode()[23..28], "34567");
    }

    #[test]
    fn alphanumeric_truncates_and_pads() {
        let mut r = Record::new(&INDIVIDUAL_2);
        r.set("sender_name", "A".repeat(50));
        r.set("receiver_name", "Bob");
        let line = r.encode();
        assert_eq!(line.len(), RECORD_LENGTH);
        assert_eq!(&line[48..82], "A".repeat(34));
        assert_eq!(&line[82..116], format!("{:<34}", "Bob"));
    }

    #[test]
    fn non_ascii_is_folded() {
        let mut r = Record::new(&INDIVIDUAL_2);
        r.set("receiver_name", "Muñoz Peña, José\t€");
        let line = r.encode();
        assert!(line.is_ascii());
        assert_eq!(line.len(), RECORD_LENGTH);
        assert!(line[82..116].starts_with("Munoz Pena, Jose ?"));
    }

    #[test]
    fn set_fills_the_named_slot() {
        let mut r = Record::new(&FILE_FOOTER);
        r.set("amount", "10000");
        let line = r.encode();
        assert_eq!(&line[42..52], "0000010000");
        assert_eq!(&line[52..62], "0000000000");
        assert_eq!(r.layout().record_code, "98");
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn unknown_field_is_ignored() {
        let mut r = Record::new(&FILE_FOOTER);
        r.set("no_such_field", "X");
        assert_eq!(r.encode(), Record::new(&FILE_FOOTER).encode());
    }

    #[test]
    fn format_amount_in_cents() {
        assert_eq!(format_amount(dec!(100.00)), "10000");
        assert_eq!(format_amount(dec!(100)), "10000");
        assert_eq!(format_amount(dec!(0.5)), "50");
        assert_eq!(format_amount(dec!(24.95)), "2495");
    }

    #[test]
    fn format_amount_rounds() {
        assert_eq!(format_amount(dec!(123.456)), "12346");
    }
}
