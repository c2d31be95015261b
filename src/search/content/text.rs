//! Text normalisation applied to every extracted title and body

/// Keep at most the first `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Replace every non-ASCII character with a space, then trim
///
/// `None` and empty input both yield an empty string.
pub fn clean_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    text.chars()
        .map(|c| if c.is_ascii() { c } else { ' ' })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Truncate, then clean
pub fn normalize(text: &str, max_chars: usize) -> String {
    clean_text(Some(truncate_chars(text, max_chars)))
}
