const WORDS_PER_MINUTE: usize = 200;

/// Minutes to read `content` at 200 words per minute, never less than one.
pub fn estimate_read_time(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    i32::try_from(minutes).unwrap_or(i32::MAX)
}

/// Stored estimate when present, computed otherwise.
pub fn effective_read_time(stored: i32, content: &str) -> i32 {
    if stored > 0 {
        stored
    } else {
        estimate_read_time(content)
    }
}
