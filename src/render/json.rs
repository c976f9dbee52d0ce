//! JSON renderer: structured output for tooling integration.
//!
//! One compact object per function, newline-terminated, so stdout output is
//! JSON Lines.

use crate::model::Function;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, func: &Function) -> String {
        let mut out =
            serde_json::to_string(func).expect("Function serializes with string keys only");
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn separator(&self) -> &str {
        ""
    }
}
