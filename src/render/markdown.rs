//! GitHub-flavored markdown renderer.

use crate::model::Function;
use crate::render::stub::signature;
use crate::render::{join_types, Renderer};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, func: &Function) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("### {}\n", func.name));

        if let Some(ref desc) = func.description {
            lines.push(desc.clone());
            lines.push(String::new());
        }

        lines.push("```php".to_string());
        lines.push(signature(func));
        lines.push("```".to_string());
        lines.push(String::new());

        if !func.params.is_empty() {
            lines.push("#### Parameters\n".to_string());
            for param in &func.params {
                let mut item = format!("* **${}**", param.name);
                if let Some(ty) = join_types(&param.types) {
                    item.push_str(&format!(" (`{}`)", ty));
                }
                let mut notes: Vec<String> = Vec::new();
                if param.optional {
                    notes.push("optional".to_string());
                }
                if param.variadic {
                    notes.push("variadic".to_string());
                }
                if let Some(ref default) = param.default {
                    notes.push(format!("default `{}`", default));
                }
                if !notes.is_empty() {
                    item.push_str(" — ");
                    item.push_str(&notes.join(", "));
                }
                lines.push(item);
            }
            lines.push(String::new());
        }

        if let Some(ret) = join_types(&func.returns.types) {
            lines.push("#### Return value\n".to_string());
            match func.returns.description {
                Some(ref desc) => lines.push(format!("`{}` {}", ret, desc)),
                None => lines.push(format!("`{}`", ret)),
            }
            lines.push(String::new());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn renders_sections() {
        let out = MarkdownRenderer.render(&fixtures::array_map());
        assert!(out.starts_with("### array_map\n\nApplies the callback"));
        assert!(out.contains(
            "```php\narray_map(callable|null $callback, array ...$arrays, int $flags = 0): array\n```"
        ));
        assert!(out.contains("* **$callback** (`callable|null`)\n"));
        assert!(out.contains("* **$arrays** (`array`) — variadic\n"));
        assert!(out.contains("* **$flags** (`int`) — optional, default `0`\n"));
        assert!(out.contains("#### Return value\n\n`array`\n"));
    }

    #[test]
    fn omits_empty_sections() {
        let func = Function {
            name: "phpinfo".to_string(),
            ..Function::default()
        };
        let out = MarkdownRenderer.render(&func);
        assert_eq!(out, "### phpinfo\n\n```php\nphpinfo()\n```\n\n");
    }
}
