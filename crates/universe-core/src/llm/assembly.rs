//! Message assembly
//!
//! Converts the four prompt text fields into the ordered role-tagged message
//! list a chat-completion API expects: an optional leading system block, then
//! a single user block with any context concatenated before the instruction.
//!
//! The chat API has no native negative-prompt concept, so a negative prompt
//! is appended to the system block as an explicit "do not include" clause.
//! This is best-effort text steering, not a guaranteed content filter.

use super::messages::ChatMessage;

/// Assemble prompt fields into a chat message list
pub fn assemble_messages(
    system_prompt: Option<&str>,
    context: Option<&str>,
    instruction: &str,
    negative_prompt: Option<&str>,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2);

    let system_text = build_system_text(system_prompt, negative_prompt);
    if let Some(text) = system_text {
        messages.push(ChatMessage::system(text));
    }

    let user_text = match context {
        Some(ctx) if !ctx.trim().is_empty() => format!("{ctx}\n\n{instruction}"),
        _ => instruction.to_string(),
    };
    messages.push(ChatMessage::user(user_text));

    messages
}

/// Combine the system prompt with the negative-prompt clause
///
/// A negative prompt without a system prompt still produces a system block,
/// so the constraint is never dropped.
fn build_system_text(
    system_prompt: Option<&str>,
    negative_prompt: Option<&str>,
) -> Option<String> {
    let system = system_prompt.filter(|s| !s.trim().is_empty());
    let negative = negative_prompt.filter(|s| !s.trim().is_empty());

    match (system, negative) {
        (Some(sys), Some(neg)) => Some(format!(
            "{sys}\n\nDo not include the following in your response: {neg}"
        )),
        (Some(sys), None) => Some(sys.to_string()),
        (None, Some(neg)) => Some(format!(
            "Do not include the following in your response: {neg}"
        )),
        (None, None) => None,
    }
}
