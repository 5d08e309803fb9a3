//! Human-readable formatting for hook fields

use hookhub_core::catalog::Hook;

/// Star count with thousands separators; empty when absent or zero
pub fn format_stars(stars: Option<u64>) -> String {
    match stars {
        None | Some(0) => String::new(),
        Some(n) => {
            let digits = n.to_string();
            let mut out = String::with_capacity(digits.len() + digits.len() / 3);
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(ch);
            }
            out
        }
    }
}

/// The first `max` hook types, then "+N more" for the rest
pub fn format_hook_types(hook_types: &[String], max: usize) -> String {
    let shown = hook_types
        .iter()
        .take(max)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let hidden = hook_types.len().saturating_sub(max);
    match (shown.is_empty(), hidden) {
        (_, 0) => shown,
        (true, n) => format!("+{n} more"),
        (false, n) => format!("{shown} +{n} more"),
    }
}

/// `YYYY-MM-DD`, or `-` when unknown
pub fn format_last_updated(hook: &Hook) -> String {
    hook.last_updated
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Cut `text` to at most `max` characters, ending in "..." when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
