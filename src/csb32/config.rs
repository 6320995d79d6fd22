use serde::{Deserialize, Serialize};

/// Configuration for CSB-32 export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Csb32Config {
    /// Kind of document each receipt is issued as.
    pub document_type: DocumentType,
    /// Acceptance code of the documents.
    pub acceptance: Acceptance,
    /// Expenses clause (cláusula de gastos).
    pub expenses_clause: ExpensesClause,
    /// Line terminator written after each record.
    pub line_ending: LineEnding,
}

/// Builder for [`Csb32Config`].
///
/// # Example
///
/// ```
/// use csb32::csb32::{Csb32ConfigBuilder, DocumentType, LineEnding};
///
/// let config = Csb32ConfigBuilder::new()
///     .document_type(DocumentType::BillOfExchange)
///     .line_ending(LineEnding::Lf)
///     .build();
/// assert_eq!(config.document_type.code(), "1");
/// ```
#[derive(Debug, Default)]
pub struct Csb32ConfigBuilder {
    config: Csb32Config,
}

impl Csb32ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_type(mut self, document_type: DocumentType) -> Self {
        self.config.document_type = document_type;
        self
    }

    pub fn acceptance(mut self, acceptance: Acceptance) -> Self {
        self.config.acceptance = acceptance;
        self
    }

    pub fn expenses_clause(mut self, clause: ExpensesClause) -> Self {
        self.config.expenses_clause = clause;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    pub fn build(self) -> Csb32Config {
        self.config
    }
}

/// Document type of an individual record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// 1 — Letra de cambio.
    BillOfExchange,
    /// 2 — Recibo.
    #[default]
    Receipt,
    /// 3 — Pagaré.
    PromissoryNote,
}

impl DocumentType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::BillOfExchange => "1",
            Self::Receipt => "2",
            Self::PromissoryNote => "3",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acceptance {
    /// 1 — Aceptado.
    Accepted,
    /// 2 — No aceptado.
    #[default]
    NotAccepted,
}

impl Acceptance {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Accepted => "1",
            Self::NotAccepted => "2",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpensesClause {
    /// 0 — Sin gastos.
    #[default]
    NoExpenses,
    /// 1 — Con gastos.
    Expenses,
    /// 9 — Orden expresa de protesto notarial.
    NotarialProtest,
}

impl ExpensesClause {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoExpenses => "0",
            Self::Expenses => "1",
            Self::NotarialProtest => "9",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}
