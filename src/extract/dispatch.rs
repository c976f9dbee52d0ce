//! Tag → handler tables.

/// Handler for an element's open and close events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementHandler {
    /// `<book>`: allow-list gate
    Group,
    /// `<set>`: function collection gate
    Collection,
    /// `<refentry>`: one record
    Record,
    /// `<refpurpose>`: one-line description
    Purpose,
    /// `<refsect1>`: subsection role
    Subsection,
    Synopsis,
    Parameter,
    /// Notes, change logs, see-also lists and members: recognised, ignored.
    Suppressed,
}

impl ElementHandler {
    pub fn for_tag(tag: &str) -> Option<Self> {
        let handler = match tag {
            "book" => Self::Group,
            "set" => Self::Collection,
            "refentry" => Self::Record,
            "refpurpose" => Self::Purpose,
            "refsect1" => Self::Subsection,
            "methodsynopsis" => Self::Synopsis,
            "methodparam" => Self::Parameter,
            "caution" | "note" | "tip" | "warning" | "entry" | "row" | "tbody" | "member"
            | "listitem" | "function" | "methodname" | "refnamediv" => Self::Suppressed,
            _ => return None,
        };
        Some(handler)
    }
}

/// Handler for an element's direct text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHandler {
    Type,
    ParameterName,
    /// `<constant>` and `<initializer>` both feed the parameter default.
    Default,
    RefName,
    Suppressed,
}

impl TextHandler {
    pub fn for_tag(tag: &str) -> Option<Self> {
        let handler = match tag {
            "type" => Self::Type,
            "parameter" => Self::ParameterName,
            "constant" | "initializer" => Self::Default,
            "refname" => Self::RefName,
            "function" | "methodname" | "title" => Self::Suppressed,
            _ => return None,
        };
        Some(handler)
    }
}
