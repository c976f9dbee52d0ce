//! XML event source over quick-xml.
//!
//! Elements are reported by local name, so `<phpdoc:classref>` arrives as
//! `classref`. Whitespace-only text nodes are not delivered as events but
//! still count towards [`EventSource::read_string`].

use super::{Attributes, Event, EventSource, Namespace};
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;
use std::collections::VecDeque;
use std::io::BufRead;

pub struct XmlSource<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Names of the currently open elements, outermost first
    open: Vec<String>,
    /// Events read ahead by `read_string`, not yet delivered
    pending: VecDeque<Event>,
    /// Depth of the element opened by the last delivered event
    current: Option<usize>,
}

impl<R: BufRead> XmlSource<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.trim_text(false);
        Self {
            reader,
            buf: Vec::new(),
            open: Vec::new(),
            pending: VecDeque::new(),
            current: None,
        }
    }

    /// Read the next raw event from the document, whitespace included.
    fn pull(&mut self) -> Result<Option<Event>> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf)? {
                XmlEvent::Start(start) => {
                    let name = utf8(start.local_name().as_ref());
                    let attrs = attributes(&start)?;
                    let depth = self.open.len();
                    self.open.push(name.clone());
                    Event::Open { name, attrs, depth }
                }
                XmlEvent::End(end) => {
                    let name = utf8(end.local_name().as_ref());
                    if self.open.pop().is_none() {
                        return Err(Error::UnmatchedClose(name));
                    }
                    Event::Close {
                        name,
                        depth: self.open.len(),
                    }
                }
                XmlEvent::Text(text) => {
                    let Some(tag) = self.open.last() else {
                        continue;
                    };
                    let value = text.unescape().map_err(quick_xml::Error::from)?;
                    Event::Text {
                        tag: tag.clone(),
                        value: value.into_owned(),
                    }
                }
                XmlEvent::CData(data) => {
                    let Some(tag) = self.open.last() else {
                        continue;
                    };
                    Event::Text {
                        tag: tag.clone(),
                        value: utf8(&data),
                    }
                }
                XmlEvent::Eof => {
                    if let Some(name) = self.open.pop() {
                        return Err(Error::Unclosed(name));
                    }
                    return Ok(None);
                }
                _ => continue,
            };
            return Ok(Some(event));
        }
    }
}

impl<R: BufRead> EventSource for XmlSource<R> {
    fn next_event(&mut self) -> Result<Option<Event>> {
        loop {
            let event = match self.pending.pop_front() {
                Some(event) => Some(event),
                None => self.pull()?,
            };
            match &event {
                Some(Event::Text { value, .. }) if value.trim().is_empty() => continue,
                Some(Event::Open { depth, .. }) => self.current = Some(*depth),
                _ => self.current = None,
            }
            return Ok(event);
        }
    }

    fn read_string(&mut self) -> Result<String> {
        let Some(depth) = self.current else {
            return Ok(String::new());
        };
        let mut out = String::new();
        let mut idx = 0;
        loop {
            if idx == self.pending.len() {
                match self.pull()? {
                    Some(event) => self.pending.push_back(event),
                    None => return Ok(out),
                }
            }
            match &self.pending[idx] {
                Event::Text { value, .. } => out.push_str(value),
                Event::Close { depth: d, .. } if *d == depth => return Ok(out),
                _ => {}
            }
            idx += 1;
        }
    }
}

fn attributes(start: &BytesStart<'_>) -> Result<Attributes> {
    let mut attrs = Attributes::default();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let ns = match attr.key.prefix() {
            None => Namespace::DocBook,
            Some(prefix) if prefix.as_ref() == b"xml" => Namespace::Xml,
            Some(prefix) => Namespace::Other(utf8(prefix.as_ref())),
        };
        let name = utf8(attr.key.local_name().as_ref());
        let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
        attrs.insert(ns, name, value.into_owned());
    }
    Ok(attrs)
}

fn utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
