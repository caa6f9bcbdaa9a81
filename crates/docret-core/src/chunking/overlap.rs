//! Overlap and neighbor-context computation.

/// Characters of a neighboring section quoted into a chunk's context.
pub(crate) const CONTEXT_PREVIEW_CHARS: usize = 100;

/// Extract the trailing overlap words of a chunk about to be closed.
///
/// The overlap budget is converted to a word count by dividing by the
/// assumed average word length and flooring. Texts of three words or
/// fewer are returned verbatim, they are too short to meaningfully trim.
pub(crate) fn trailing_overlap(
    text: &str,
    overlap_chars: usize,
    approx_word_chars: usize,
) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 3 {
        return text.to_string();
    }

    let overlap_words = overlap_chars / approx_word_chars;
    let start = words.len().saturating_sub(overlap_words);
    words[start..].join(" ")
}

/// Context string for a chunk emitted directly from a section: a short
/// preview of the previous and/or next section. Empty when the section
/// has no neighbors.
pub(crate) fn neighbor_context(sections: &[String], index: usize) -> String {
    let mut parts = Vec::new();

    if index > 0 {
        let preview = section_preview(&sections[index - 1]);
        if !preview.is_empty() {
            parts.push(format!("Previous: {}...", preview));
        }
    }

    if index + 1 < sections.len() {
        let preview = section_preview(&sections[index + 1]);
        if !preview.is_empty() {
            parts.push(format!("Next: {}...", preview));
        }
    }

    parts.join(" | ")
}

fn section_preview(section: &str) -> String {
    section
        .chars()
        .take(CONTEXT_PREVIEW_CHARS)
        .collect::<String>()
        .trim()
        .to_string()
}
