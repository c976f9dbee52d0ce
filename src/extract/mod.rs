//! Extractor: turns the markup event stream into function records.
//!
//! A single pass over the events with no tree: every element of interest is
//! routed through [`ElementHandler`] / [`TextHandler`], and the handlers
//! consult two ambient flags (allowed book, function reference set) before
//! touching the per-record scratch state.

pub mod dispatch;
pub mod emit;
pub mod state;


use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Function, Parameter};
use crate::source::{Attributes, Event, EventSource};
use dispatch::{ElementHandler, TextHandler};
use state::{ParamScratch, RecordScratch, SectionGate, Synopsis};
use tracing::debug;

/// Receives each finished record, in document order.
pub trait Sink {
    fn emit(&mut self, function: Function) -> Result<()>;
}

impl Sink for Vec<Function> {
    fn emit(&mut self, function: Function) -> Result<()> {
        self.push(function);
        Ok(())
    }
}

/// Role of the `<refsect1>` holding synopses and parameters.
const DESCRIPTION_ROLE: &str = "description";

/// An element that has been opened but not yet closed.
struct Frame {
    name: String,
    attrs: Attributes,
}

pub struct Extractor<'a> {
    config: &'a Config,
    gate: SectionGate,
    role: Option<String>,
    synopsis: Synopsis,
    record: RecordScratch,
    param: ParamScratch,
    stack: Vec<Frame>,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            gate: SectionGate::default(),
            role: None,
            synopsis: Synopsis::default(),
            record: RecordScratch::default(),
            param: None,
            stack: Vec::new(),
        }
    }

    /// Consume the whole stream, handing every valid record to `sink`.
    ///
    /// Returns the number of records emitted.
    pub fn run<S: EventSource, K: Sink>(&mut self, source: &mut S, sink: &mut K) -> Result<usize> {
        let mut emitted = 0;
        while let Some(event) = source.next_event()? {
            match event {
                Event::Open { name, attrs, .. } => {
                    if let Some(handler) = ElementHandler::for_tag(&name) {
                        self.on_open(handler, &attrs, source)?;
                    }
                    self.stack.push(Frame { name, attrs });
                }
                Event::Close { name, .. } => {
                    let frame = self.pop_frame(name)?;
                    let Some(handler) = ElementHandler::for_tag(&frame.name) else {
                        continue;
                    };
                    if let Some(function) = self.on_close(handler, &frame.attrs) {
                        debug!(name = %function.name, params = function.params.len(), "emitting");
                        sink.emit(function)?;
                        emitted += 1;
                    }
                }
                Event::Text { tag, value } => {
                    if let Some(handler) = TextHandler::for_tag(&tag) {
                        self.on_text(handler, value);
                    }
                }
            }
        }
        if let Some(frame) = self.stack.pop() {
            return Err(Error::Unclosed(frame.name));
        }
        Ok(emitted)
    }

    fn pop_frame(&mut self, name: String) -> Result<Frame> {
        match self.stack.pop() {
            None => Err(Error::UnmatchedClose(name)),
            Some(frame) if frame.name != name => Err(Error::MismatchedClose {
                expected: frame.name,
                found: name,
            }),
            Some(frame) => Ok(frame),
        }
    }

    fn in_description(&self) -> bool {
        self.role.as_deref() == Some(DESCRIPTION_ROLE)
    }

    // -- Elements -------------------------------------------------------------

    fn on_open<S: EventSource>(
        &mut self,
        handler: ElementHandler,
        attrs: &Attributes,
        source: &mut S,
    ) -> Result<()> {
        match handler {
            ElementHandler::Group => {
                // Deny by default.
                self.gate.in_allowed_group = attrs.id().is_some_and(|id| self.config.is_allowed(id));
            }
            ElementHandler::Collection => {
                if self.is_function_set(attrs) {
                    self.gate.in_function_collection = true;
                }
            }
            ElementHandler::Record => {
                if self.gate.is_open() {
                    self.reset_record();
                }
            }
            ElementHandler::Purpose => {
                if self.gate.is_open() {
                    let text = source.read_string()?;
                    let description = text.trim().replace('\n', "");
                    self.record.function.description =
                        (!description.is_empty()).then_some(description);
                }
            }
            ElementHandler::Subsection => {
                self.role = attrs
                    .docbook("role")
                    .filter(|role| !role.is_empty())
                    .map(str::to_string);
            }
            ElementHandler::Synopsis => {
                if self.gate.is_open() && self.in_description() {
                    if attrs.docbook("role") == Some("procedural") {
                        // An informal synopsis overrides whatever was gathered before.
                        self.record.clear_signature();
                        self.synopsis = Synopsis::Open;
                    } else {
                        self.synopsis = self.synopsis.enter();
                    }
                }
            }
            ElementHandler::Parameter => {
                if self.gate.is_open() && self.in_description() {
                    self.param = Some(Parameter {
                        optional: attrs.docbook("choice") == Some("opt"),
                        variadic: attrs.docbook("rep") == Some("repeat"),
                        ..Parameter::default()
                    });
                }
            }
            ElementHandler::Suppressed => {}
        }
        Ok(())
    }

    fn on_close(&mut self, handler: ElementHandler, attrs: &Attributes) -> Option<Function> {
        match handler {
            ElementHandler::Group => self.gate.in_allowed_group = false,
            ElementHandler::Collection => {
                if self.is_function_set(attrs) {
                    self.gate.in_function_collection = false;
                }
            }
            ElementHandler::Record => {
                if self.gate.is_open() {
                    return self.finish_record();
                }
            }
            ElementHandler::Subsection => self.role = None,
            ElementHandler::Synopsis => {
                if self.gate.is_open() && self.in_description() {
                    self.synopsis = self.synopsis.leave();
                }
            }
            ElementHandler::Parameter => {
                let param = self.param.take();
                if self.gate.is_open() && self.in_description() {
                    if let Some(param) = param {
                        self.commit_param(param);
                    }
                }
            }
            ElementHandler::Purpose | ElementHandler::Suppressed => {}
        }
        None
    }

    fn is_function_set(&self, attrs: &Attributes) -> bool {
        attrs.id() == Some(self.config.function_set.as_str())
    }

    fn reset_record(&mut self) {
        self.record = RecordScratch::default();
        self.param = None;
        self.synopsis = Synopsis::NotSeen;
    }

    fn commit_param(&mut self, param: Parameter) {
        if !self.synopsis.accepts_params() {
            debug!(param = %param.name, "ignoring parameter after formal synopsis");
            return;
        }
        if param.name.is_empty() {
            debug!("ignoring unnamed parameter");
            return;
        }
        self.record.function.params.insert(param);
    }

    fn finish_record(&mut self) -> Option<Function> {
        let record = std::mem::take(&mut self.record);
        if record.candidates.is_empty() {
            return None;
        }
        let Some(name) = emit::pick_name(&record.candidates, self.gate.in_function_collection) else {
            debug!(candidates = ?record.candidates, "dropping entry without a valid name");
            return None;
        };
        let mut function = record.function;
        function.name = name.to_string();
        Some(function)
    }

    // -- Text -----------------------------------------------------------------

    fn on_text(&mut self, handler: TextHandler, value: String) {
        if handler == TextHandler::RefName {
            // Inverted gate: reference names outside the allowed books are
            // still collected, so non-function entries reach the emitter.
            if self.gate.in_function_collection || !self.gate.in_allowed_group {
                self.record.candidates.push(value);
            }
            return;
        }
        if !self.gate.is_open() {
            return;
        }
        match handler {
            TextHandler::Type => {
                if !self.in_description() || !self.synopsis.captures_types() {
                    return;
                }
                match &mut self.param {
                    Some(param) => param.types.push(value),
                    None => self.record.function.returns.types.push(value),
                }
            }
            TextHandler::ParameterName => {
                if let Some(param) = &mut self.param {
                    param.name = value;
                }
            }
            TextHandler::Default => {
                if let Some(param) = &mut self.param {
                    param.default = Some(value);
                }
            }
            TextHandler::RefName | TextHandler::Suppressed => {}
        }
    }
}
