//! Event source: the markup stream the extractor consumes.

pub mod xml;

use crate::error::Result;

/// Namespace of an attribute key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    /// `xml:` prefix (`xml:id`)
    Xml,
    /// Unprefixed attributes; the manual binds its default namespace to DocBook.
    DocBook,
    Other(String),
}

/// Attributes of an open event, keyed by (namespace, local name).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Attributes(Vec<(Namespace, String, String)>);

impl Attributes {
    pub fn insert(&mut self, ns: Namespace, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((ns, name.into(), value.into()));
    }

    pub fn get(&self, ns: &Namespace, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, k, _)| n == ns && k == name)
            .map(|(_, _, v)| v.as_str())
    }

    /// `xml:id`
    pub fn id(&self) -> Option<&str> {
        self.get(&Namespace::Xml, "id")
    }

    /// Unprefixed DocBook attribute.
    pub fn docbook(&self, name: &str) -> Option<&str> {
        self.get(&Namespace::DocBook, name)
    }
}

/// One markup event, delivered in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Open {
        name: String,
        attrs: Attributes,
        /// Number of open ancestors
        depth: usize,
    },
    Close {
        name: String,
        depth: usize,
    },
    /// Direct text content of the element `tag`.
    Text { tag: String, value: String },
}

pub trait EventSource {
    /// Next event, or `None` once the stream is exhausted.
    fn next_event(&mut self) -> Result<Option<Event>>;

    /// All remaining text of the element opened by the last delivered event.
    ///
    /// Events inside that element are still delivered afterwards.
    fn read_string(&mut self) -> Result<String>;
}
