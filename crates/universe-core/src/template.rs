//! Prompt template engine
//!
//! Renders user-authored prompt strings containing `{{variable}}`
//! placeholders against a flat map of string values. There is no recursive
//! expansion and no escaping: a placeholder with no binding stays in the
//! output verbatim, so rendering is idempotent for placeholder-free input.

use crate::error::{UniverseError, UniverseResult};
use std::collections::HashMap;

/// Render `template`, replacing every `{{name}}` with `vars[name]`
///
/// Placeholders whose name has no binding are left unchanged. An opening
/// `{{` without a matching `}}` is malformed and yields a template error.
pub fn render_template(
    template: &str,
    vars: &HashMap<String, String>,
) -> UniverseResult<String> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let close = after_open.find("}}").ok_or_else(|| {
            UniverseError::template(format!(
                "unterminated placeholder at byte {}",
                template.len() - rest.len() + open
            ))
        })?;

        let raw_name = &after_open[..close];
        match vars.get(raw_name.trim()) {
            Some(value) => output.push_str(value),
            // Unresolved variables are left as-is.
            None => {
                output.push_str("{{");
                output.push_str(raw_name);
                output.push_str("}}");
            }
        }
        rest = &after_open[close + 2..];
    }

    output.push_str(rest);
    Ok(output)
}
