//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod stub;

use crate::model::Function;
use anyhow::{anyhow, Result};

/// Trait for rendering one extracted function into a specific output format.
pub trait Renderer {
    fn render(&self, func: &Function) -> String;
    fn file_extension(&self) -> &str;

    /// Written once at the top of every output file.
    fn header(&self) -> &str {
        ""
    }

    /// Written between consecutive records on a stream.
    fn separator(&self) -> &str {
        "\n"
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "stub" | "php" => Ok(Box::new(stub::StubRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use stub, markdown, or json",
            format
        )),
    }
}

/// Union type tokens as written in a signature.
pub(crate) fn join_types(types: &[String]) -> Option<String> {
    if types.is_empty() {
        None
    } else {
        Some(types.join("|"))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Function, Parameter, ReturnValue};

    pub fn array_map() -> Function {
        let mut func = Function {
            name: "array_map".to_string(),
            description: Some("Applies the callback to the elements of the given arrays".to_string()),
            returns: ReturnValue {
                types: vec!["array".to_string()],
                description: None,
            },
            ..Function::default()
        };
        func.params.insert(Parameter {
            name: "callback".to_string(),
            types: vec!["callable".to_string(), "null".to_string()],
            ..Parameter::default()
        });
        func.params.insert(Parameter {
            name: "arrays".to_string(),
            types: vec!["array".to_string()],
            variadic: true,
            ..Parameter::default()
        });
        func.params.insert(Parameter {
            name: "flags".to_string(),
            types: vec!["int".to_string()],
            optional: true,
            default: Some("0".to_string()),
            ..Parameter::default()
        });
        func
    }
}
