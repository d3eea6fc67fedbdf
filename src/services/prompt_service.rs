use crate::models::turn::Turn;

/// Serializes the system prompt, prior turns and the new user message into
/// the single text blob sent with each model call. Pure and deterministic;
/// empty strings are accepted and produce empty lines.
pub fn format_history(msg: &str, history: &[Turn], system_prompt: &str) -> String {
    let mut lines = Vec::with_capacity(2 * history.len() + 2);
    lines.push(system_prompt.to_string());
    for turn in history {
        lines.push(format!("User: {}", turn.user));
        lines.push(format!("Assistant: {}", turn.assistant));
    }
    lines.push(format!("User: {}", msg));
    lines.join("\n")
}
