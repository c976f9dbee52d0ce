//! PHP stub renderer: declarations an IDE can index.
//!
//! Each function becomes a docblock plus an empty-bodied declaration:
//!
//! ```text
//! /**
//!  * Applies the callback to the elements of the given arrays
//!  *
//!  * @param callable $callback
//!  * @return array
//!  */
//! function array_map(callable $callback): array {}
//! ```

use crate::model::{Function, Parameter};
use crate::render::{join_types, Renderer};

pub struct StubRenderer;

impl Renderer for StubRenderer {
    fn render(&self, func: &Function) -> String {
        let mut out = render_docblock(func);
        out.push_str("function ");
        out.push_str(&signature(func));
        out.push_str(" {}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "php"
    }

    fn header(&self) -> &str {
        "<?php\n\n"
    }
}

/// `name(type $a, type ...$b = x): ret`
pub(crate) fn signature(func: &Function) -> String {
    let params: Vec<String> = func.params.iter().map(render_param).collect();
    let mut out = format!("{}({})", func.name, params.join(", "));
    if let Some(ret) = join_types(&func.returns.types) {
        out.push_str(": ");
        out.push_str(&ret);
    }
    out
}

fn render_param(param: &Parameter) -> String {
    let mut out = String::new();
    if let Some(ty) = join_types(&param.types) {
        out.push_str(&ty);
        out.push(' ');
    }
    if param.variadic {
        out.push_str("...");
    }
    out.push('$');
    out.push_str(&param.name);
    if !param.variadic {
        match (&param.default, param.optional) {
            (Some(default), _) => {
                out.push_str(" = ");
                out.push_str(default);
            }
            // The manual omits some defaults; null keeps the stub callable.
            (None, true) => out.push_str(" = null"),
            (None, false) => {}
        }
    }
    out
}

fn render_docblock(func: &Function) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(ref desc) = func.description {
        lines.push(desc.clone());
    }

    let mut tags: Vec<String> = Vec::new();
    for param in &func.params {
        let ty = join_types(&param.types).unwrap_or_else(|| "mixed".to_string());
        let dots = if param.variadic { "..." } else { "" };
        let mut tag = format!("@param {} {}${}", ty, dots, param.name);
        if param.optional {
            tag.push_str(" [optional]");
        }
        tags.push(tag);
    }
    if let Some(ret) = join_types(&func.returns.types) {
        let mut tag = format!("@return {}", ret);
        if let Some(ref desc) = func.returns.description {
            tag.push(' ');
            tag.push_str(desc);
        }
        tags.push(tag);
    }

    if !lines.is_empty() && !tags.is_empty() {
        lines.push(String::new());
    }
    lines.extend(tags);

    if lines.is_empty() {
        return String::new();
    }

    let mut out = String::from("/**\n");
    for line in lines {
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(&format!(" * {}\n", line));
        }
    }
    out.push_str(" */\n");
    out
}
