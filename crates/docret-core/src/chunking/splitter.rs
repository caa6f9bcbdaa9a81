//! The section → sentence → word splitting cascade.

use super::overlap::{neighbor_context, trailing_overlap};
use crate::models::{Chunk, Document};
use docret_config::ChunkingConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Blank-line boundary: one or more empty (or whitespace-only) lines.
static SECTION_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Sentence-ending punctuation followed by whitespace.
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

/// Chunk accumulator for a single document. The id counter is threaded
/// through explicitly so chunking stays a pure, testable function.
struct DocChunks<'a> {
    document: &'a Document,
    next_id: u64,
    chunks: Vec<Chunk>,
}

impl<'a> DocChunks<'a> {
    fn new(document: &'a Document, start_id: u64) -> Self {
        Self {
            document,
            next_id: start_id,
            chunks: Vec::new(),
        }
    }

    fn push(&mut self, text: String, context: String) {
        let chunk = Chunk {
            id: self.next_id,
            category: self.document.category.clone(),
            title: self.document.title.clone(),
            text,
            chunk_index: self.chunks.len(),
            context,
        };
        self.next_id += 1;
        self.chunks.push(chunk);
    }
}

pub(super) fn chunk_document(
    document: &Document,
    config: &ChunkingConfig,
    start_id: u64,
) -> Vec<Chunk> {
    let sections = split_sections(&document.content);
    let mut out = DocChunks::new(document, start_id);

    for (i, section) in sections.iter().enumerate() {
        if char_len(section) <= config.max_chunk_chars {
            // Section fits in one chunk; context comes from its
            // section-level neighbors.
            out.push(section.clone(), neighbor_context(&sections, i));
        } else {
            split_section(section, config, &mut out);
        }
    }

    out.chunks
}

/// Coarsest split: blank-line boundaries. Whitespace-only sections are
/// dropped, so blank content yields no sections at all.
fn split_sections(content: &str) -> Vec<String> {
    SECTION_BREAK
        .split(content)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// An oversized section is packed sentence by sentence, or word by word
/// when no sentence boundary exists. Sub-chunks carry overlap text as
/// context, never the section-level neighbor preview.
fn split_section(section: &str, config: &ChunkingConfig, out: &mut DocChunks) {
    let sentences = split_sentences(section);

    if sentences.len() == 1 || char_len(section) <= config.max_chunk_chars {
        let words: Vec<&str> = section.split_whitespace().collect();
        pack_units(&words, config, out);
    } else {
        pack_units(&sentences, config, out);
    }
}

/// Split on sentence-ending punctuation followed by whitespace, keeping
/// the punctuation with the preceding sentence. Returns the whole text
/// as a single sentence when no boundary exists.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // The punctuation mark is ASCII, so +1 lands on a char boundary.
        let end = m.start() + 1;
        let piece = &text[start..end];
        if !piece.trim().is_empty() {
            sentences.push(piece);
        }
        start = m.end();
    }

    if start < text.len() {
        let rest = &text[start..];
        if !rest.trim().is_empty() {
            sentences.push(rest);
        }
    }

    if sentences.is_empty() {
        vec![text]
    } else {
        sentences
    }
}

/// Greedily pack units (sentences or words) into chunks at or under the
/// size ceiling, duplicating trailing overlap words into the head of
/// the next chunk.
///
/// A unit that alone exceeds the ceiling still becomes a chunk: the
/// running chunk only closes when it is non-empty, which guarantees
/// forward progress. A single over-long word is never subdivided.
fn pack_units(units: &[&str], config: &ChunkingConfig, out: &mut DocChunks) {
    let mut current = String::new();
    let mut overlap_text = String::new();

    for unit in units {
        let candidate_len = if current.is_empty() {
            char_len(unit)
        } else {
            char_len(&current) + 1 + char_len(unit)
        };

        if candidate_len > config.max_chunk_chars && !current.is_empty() {
            let overlap =
                trailing_overlap(&current, config.overlap_chars, config.approx_word_chars);
            let finished = current.trim().to_string();
            // The closed chunk keeps the overlap inherited from its own
            // predecessor; the fresh overlap becomes the successor's.
            out.push(finished, overlap_text);
            current = format!("{} {}", overlap, unit);
            overlap_text = overlap;
        } else if current.is_empty() {
            current = (*unit).to_string();
        } else {
            current.push(' ');
            current.push_str(unit);
        }
    }

    if !current.trim().is_empty() {
        out.push(current.trim().to_string(), overlap_text);
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
