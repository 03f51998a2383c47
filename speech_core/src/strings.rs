//! Small string helpers shared by the assembler and the grammar steps.

/// Replace the last occurrence of `pattern` with `replacement`, in place.
///
/// No-op when the pattern is absent; earlier occurrences are left alone.
pub(crate) fn replace_last(text: &mut String, pattern: &str, replacement: &str) {
    if let Some(position) = text.rfind(pattern) {
        text.replace_range(position..position + pattern.len(), replacement);
    }
}
