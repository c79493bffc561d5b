//! Fixed-window character chunking with overlap.
//!
//! Pages are split into spans of at most `CHUNK_CHARS` characters; each
//! window after the first starts `CHUNK_CHARS - OVERLAP_CHARS` characters
//! after the previous one, so consecutive chunks share `OVERLAP_CHARS`
//! characters of context. Offsets are measured in characters, not bytes.

/// Target chunk length, in characters.
pub const CHUNK_CHARS: usize = 800;

/// Characters shared between consecutive chunks.
pub const OVERLAP_CHARS: usize = 150;

/// Split `text` into overlapping windows, returning `(content, start)`
/// pairs where `start` is the character offset within the trimmed input.
///
/// A text no longer than `max_chars` yields exactly one chunk equal to the
/// whole (trimmed) text. Empty input yields no chunks.
pub fn split_with_overlap(text: &str, max_chars: usize, overlap: usize) -> Vec<(String, usize)> {
    debug_assert!(overlap < max_chars, "overlap must be smaller than the window");
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return vec![(text.to_string(), 0)];
    }

    let stride = max_chars - overlap;
    let mut chunks = Vec::new();
    let mut start = 0usize;
    loop {
        let end = (start + max_chars).min(chars.len());
        chunks.push((chars[start..end].iter().collect(), start));
        if end == chars.len() {
            break;
        }
        start += stride;
    }
    chunks
}
