//! Field layout tables of the seven CSB-32 record types.
//!
//! Every record is 150 characters: 2 for the record code, 2 for the data
//! code, then the fields below in order.

/// Length of every CSB-32 record, without line ending.
pub const RECORD_LENGTH: usize = 150;

/// Data code shared by all records of a collection file.
pub const DATA_CODE: &str = "65";

/// How a value is fitted into its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Right-aligned, padded with `0` on the left. Overflow keeps the
    /// rightmost characters.
    Numeric,
    /// Left-aligned, padded with spaces on the right. Overflow keeps the
    /// leftmost characters.
    Alphanumeric,
    /// Filler, always spaces.
    Blank,
}

/// One fixed-width slot of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub width: usize,
    pub fill: Fill,
}

/// Field table of one record type.
#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    /// Human-readable name, used in logs.
    pub name: &'static str,
    /// Two-digit record code (`02`, `11`, ...).
    pub record_code: &'static str,
    /// Fields after the record and data codes, in position order.
    pub fields: &'static [Field],
}

impl Layout {
    /// Total width including the 4 code characters.
    pub fn width(&self) -> usize {
        4 + self.fields.iter().map(|f| f.width).sum::<usize>()
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const fn num(name: &'static str, width: usize) -> Field {
    Field {
        name,
        width,
        fill: Fill::Numeric,
    }
}

const fn alpha(name: &'static str, width: usize) -> Field {
    Field {
        name,
        width,
        fill: Fill::Alphanumeric,
    }
}

const fn free(name: &'static str, width: usize) -> Field {
    Field {
        name,
        width,
        fill: Fill::Blank,
    }
}

/// Dates are DDMMYY.
const fn date(name: &'static str) -> Field {
    num(name, 6)
}

/// Amounts are cents without separator.
const fn amount(name: &'static str) -> Field {
    num(name, 10)
}

/// CCC account slot.
const fn account(name: &'static str) -> Field {
    alpha(name, 20)
}

pub static FILE_HEADER: Layout = Layout {
    name: "file header",
    record_code: "02",
    fields: &[
        free("free_1", 3),
        free("free_2", 10),
        date("file_date"),
        alpha("number", 9),
        alpha("bank_code", 4),
        alpha("bank_office", 4),
        free("free_3", 110),
    ],
};

pub static ORDER_HEADER: Layout = Layout {
    name: "order header",
    record_code: "11",
    fields: &[
        free("free_1", 3),
        free("free_2", 10),
        date("file_date"),
        num("order_number", 4),
        alpha("grantor_identifier", 15),
        alpha("truncated", 1),
        account("account_payment_1"),
        account("account_payment_2"),
        account("account_payment_3"),
        free("free_3", 47),
    ],
};

pub static INDIVIDUAL_1: Layout = Layout {
    name: "individual 1",
    record_code: "25",
    fields: &[
        num("document_number", 15),
        date("file_date"),
        num("order_number", 4),
        num("province_code", 2),
        num("ine", 7),
        alpha("city", 20),
        amount("amount"),
        date("date_due"),
        free("free_1", 76),
    ],
};

pub static INDIVIDUAL_2: Layout = Layout {
    name: "individual 2",
    record_code: "26",
    fields: &[
        num("document_number", 15),
        num("document_type", 1),
        date("send_date"),
        num("accept_code", 1),
        num("expenses_clause", 1),
        account("account"),
        alpha("sender_name", 34),
        alpha("receiver_name", 34),
        alpha("additional_information", 30),
        free("free_1", 4),
    ],
};

pub static INDIVIDUAL_3: Layout = Layout {
    name: "individual 3",
    record_code: "27",
    fields: &[
        num("document_number", 15),
        alpha("receiver_address", 34),
        alpha("receiver_zip", 5),
        alpha("receiver_city", 20),
        num("receiver_province_code", 2),
        num("receiver_ine", 7),
        alpha("receiver_nif", 9),
        free("free_1", 54),
    ],
};

pub static ORDER_FOOTER: Layout = Layout {
    name: "order footer",
    record_code: "71",
    fields: &[
        free("free_1", 3),
        free("free_2", 10),
        date("file_date"),
        num("order_number", 4),
        free("free_3", 15),
        amount("amount"),
        num("record_count", 10),
        num("payment_count", 10),
        free("free_4", 78),
    ],
};

pub static FILE_FOOTER: Layout = Layout {
    name: "file footer",
    record_code: "98",
    fields: &[
        free("free_1", 19),
        num("order_count", 5),
        free("free_2", 14),
        amount("amount"),
        num("record_count", 10),
        num("payment_count", 10),
        free("free_3", 78),
    ],
};

/// All layouts in emission order.
pub static LAYOUTS: [&Layout; 7] = [
    &FILE_HEADER,
    &ORDER_HEADER,
    &INDIVIDUAL_1,
    &INDIVIDUAL_2,
    &INDIVIDUAL_3,
    &ORDER_FOOTER,
    &FILE_FOOTER,
];
