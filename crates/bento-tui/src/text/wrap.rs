//! Word wrapping.

/// Wrap `text` to `width` cells, keeping explicit line breaks.
///
/// A zero width leaves the text unwrapped, one entry per source line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.lines().map(str::to_string).collect();
    }
    text.lines()
        .flat_map(|line| {
            if line.is_empty() {
                return vec![String::new()];
            }
            textwrap::wrap(line, width)
                .into_iter()
                .map(std::borrow::Cow::into_owned)
                .collect()
        })
        .collect()
}
