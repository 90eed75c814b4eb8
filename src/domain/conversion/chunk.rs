/// One bounded slice of the text sent to the synthesis backend.
///
/// Concatenating the contents of a split in index order reconstitutes the
/// input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub content: String,
}

/// Split `text` into chunks of at most `chunk_size` characters.
///
/// Boundaries are pure character offsets, so the same (text, chunk_size)
/// always yields the same sequence. The last chunk may be shorter. Empty
/// input yields no chunks. Lengths count Unicode scalar values, not bytes.
///
/// `chunk_size` is validated to be non-zero at config load.
pub fn split(text: &str, chunk_size: usize) -> Vec<TextChunk> {
    if text.is_empty() || chunk_size == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, chunk)| TextChunk {
            index,
            content: chunk.iter().collect(),
        })
        .collect()
}

/// Normalize whitespace (collapse runs of spaces/newlines, trim the ends)
/// before length checks and synthesis. History keeps the raw original.
pub fn normalize(text: &str) -> String {
    let whitespace_pattern = regex::Regex::new(r"\s+").unwrap();
    whitespace_pattern.replace_all(text, " ").trim().to_string()
}
