//! Sliding-window document chunking.
//!
//! [`SlidingWindowChunker`] splits documents into overlapping windows of
//! characters. Window ends prefer semantic boundaries (paragraph break,
//! then sentence end, then word) over hard character cuts, while the
//! window start always advances by a fixed stride so consecutive chunks
//! cover the document without gaps.

use crate::document::{Chunk, Document};
use crate::error::{RagError, Result};

/// Default window size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap between consecutive windows in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Boundary candidates tried inside a window, best first. Each cut keeps
/// the separator with the preceding chunk.
const SENTENCE_SEPARATORS: [[char; 2]; 3] = [['.', ' '], ['!', ' '], ['?', ' ']];

/// Splits documents into fixed-stride character windows with overlap.
///
/// All arithmetic is in characters, never bytes: the corpus is Portuguese
/// and a byte-based cut could land inside a multi-byte code point.
///
/// Each chunk records its `start_offset` (in characters) into the parent
/// document and inherits the document's metadata.
#[derive(Debug, Clone)]
pub struct SlidingWindowChunker {
    chunk_size: usize,
    overlap: usize,
}

impl SlidingWindowChunker {
    /// Create a chunker, validating the window parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `chunk_size` is zero or
    /// `overlap >= chunk_size`. There is no silent clamping.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RagError::Config("chunk_size must be greater than zero".to_string()));
        }
        if overlap >= chunk_size {
            return Err(RagError::Config(format!(
                "chunk_overlap ({overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }
        Ok(Self { chunk_size, overlap })
    }

    /// Split every document into chunks, preserving document order.
    pub fn split(&self, documents: &[Document]) -> Vec<Chunk> {
        documents.iter().flat_map(|document| self.split_document(document)).collect()
    }

    fn split_document(&self, document: &Document) -> Vec<Chunk> {
        let chars: Vec<char> = document.text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        let stride = self.chunk_size - self.overlap;
        let mut chunks = Vec::new();
        let mut cursor = 0;

        while cursor < chars.len() {
            let hard_end = (cursor + self.chunk_size).min(chars.len());
            let end = if hard_end == chars.len() {
                hard_end
            } else {
                // Never cut below the next window start, or coverage would gap.
                snap_to_boundary(&chars, cursor + stride, hard_end)
            };

            chunks.push(Chunk {
                content: chars[cursor..end].iter().collect(),
                start_offset: cursor,
                metadata: document.metadata.clone(),
                document_id: document.id.clone(),
            });

            if end == chars.len() {
                break;
            }
            cursor += stride;
        }

        chunks
    }
}

/// Find the rightmost boundary cut position in `(floor, hard_end]`,
/// trying paragraph breaks, then line breaks, then sentence ends, then
/// word breaks. Falls back to a hard cut at `hard_end`.
fn snap_to_boundary(chars: &[char], floor: usize, hard_end: usize) -> usize {
    if let Some(end) = rfind_separator(chars, floor, hard_end, &['\n', '\n']) {
        return end;
    }
    if let Some(end) = rfind_separator(chars, floor, hard_end, &['\n']) {
        return end;
    }
    for separator in &SENTENCE_SEPARATORS {
        if let Some(end) = rfind_separator(chars, floor, hard_end, separator) {
            return end;
        }
    }
    if let Some(end) = rfind_separator(chars, floor, hard_end, &[' ']) {
        return end;
    }
    hard_end
}

/// Rightmost position `end` in `(floor, hard_end]` such that the
/// separator ends exactly at `end`.
fn rfind_separator(chars: &[char], floor: usize, hard_end: usize, separator: &[char]) -> Option<usize> {
    let len = separator.len();
    (floor + 1..=hard_end).rev().find(|&end| end >= len && chars[end - len..end] == *separator)
}
