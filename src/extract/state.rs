//! Ambient flags and scratch buffers of the extractor.

use crate::model::{Function, Parameter};

/// Which top-level grouping we are in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectionGate {
    pub in_allowed_group: bool,
    pub in_function_collection: bool,
}

impl SectionGate {
    /// Both flags set: the only place records are assembled.
    pub fn is_open(&self) -> bool {
        self.in_allowed_group && self.in_function_collection
    }
}

/// Progress through the formal signature blocks of one record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Synopsis {
    #[default]
    NotSeen,
    /// Inside a synopsis whose parameters and types are being captured.
    Open,
    /// A formal synopsis has completed; its data is authoritative for the
    /// rest of the record.
    Closed,
}

impl Synopsis {
    pub fn enter(self) -> Self {
        match self {
            Self::Closed => Self::Closed,
            Self::NotSeen | Self::Open => Self::Open,
        }
    }

    pub fn leave(self) -> Self {
        Self::Closed
    }

    pub fn captures_types(self) -> bool {
        self == Self::Open
    }

    pub fn accepts_params(self) -> bool {
        self != Self::Closed
    }
}

/// State for the `<refentry>` being assembled.
#[derive(Debug, Default)]
pub struct RecordScratch {
    pub function: Function,
    /// Aliases in document order; one becomes `function.name`.
    pub candidates: Vec<String>,
}

impl RecordScratch {
    /// Forget the parameters and return value gathered so far.
    pub fn clear_signature(&mut self) {
        self.function.params = Default::default();
        self.function.returns = Default::default();
    }
}

/// State for the `<methodparam>` currently being read.
///
/// `None` in the extractor means "not inside a parameter".
pub type ParamScratch = Option<Parameter>;
