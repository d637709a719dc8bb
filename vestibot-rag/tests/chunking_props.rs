//! Property tests for sliding-window chunking.

use std::collections::HashMap;

use proptest::prelude::*;
use vestibot_rag::chunking::SlidingWindowChunker;
use vestibot_rag::document::{Chunk, Document};

fn document(text: String) -> Document {
    Document { id: "doc_1".to_string(), text, metadata: HashMap::new(), source_uri: None }
}

/// Rebuild the original text from chunks by appending, for each chunk,
/// only the part not already covered by its predecessors.
fn reconstruct(chunks: &[Chunk]) -> String {
    let mut out: Vec<char> = Vec::new();
    for chunk in chunks {
        let content: Vec<char> = chunk.content.chars().collect();
        let covered = out.len();
        assert!(
            chunk.start_offset <= covered,
            "gap before chunk at offset {}: only {covered} chars covered",
            chunk.start_offset
        );
        let skip = covered - chunk.start_offset;
        if skip < content.len() {
            out.extend_from_slice(&content[skip..]);
        }
    }
    out.into_iter().collect()
}

/// Text mixing words, sentence ends, and paragraph breaks, so boundary
/// snapping actually exercises each separator level.
fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-zà-ú]{1,8}", 0..120).prop_map(|words| {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| match i % 13 {
                12 => format!("{w}.\n\n"),
                5 => format!("{w}. "),
                _ => format!("{w} "),
            })
            .collect::<String>()
    })
}

fn arb_window() -> impl Strategy<Value = (usize, usize)> {
    (2usize..60).prop_flat_map(|size| (Just(size), 0..size))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Removing the overlap regions and concatenating reconstructs the
    /// original text exactly, for any valid (chunk_size, overlap) pair.
    #[test]
    fn chunking_round_trips((size, overlap) in arb_window(), text in arb_text()) {
        let chunker = SlidingWindowChunker::new(size, overlap).unwrap();
        let chunks = chunker.split(&[document(text.clone())]);

        prop_assert_eq!(reconstruct(&chunks), text);
    }

    /// No chunk exceeds the configured window size.
    #[test]
    fn chunks_respect_the_size_bound((size, overlap) in arb_window(), text in arb_text()) {
        let chunker = SlidingWindowChunker::new(size, overlap).unwrap();
        for chunk in chunker.split(&[document(text)]) {
            prop_assert!(chunk.content.chars().count() <= size);
        }
    }

    /// Offsets advance by exactly the stride, left to right.
    #[test]
    fn offsets_advance_by_the_stride((size, overlap) in arb_window(), text in arb_text()) {
        let chunker = SlidingWindowChunker::new(size, overlap).unwrap();
        let chunks = chunker.split(&[document(text)]);
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.start_offset, i * (size - overlap));
        }
    }

    /// A non-empty document no longer than the window yields one chunk.
    #[test]
    fn small_documents_yield_one_chunk(size in 2usize..60, text in "[a-z ]{1,30}") {
        prop_assume!(text.chars().count() <= size);
        let chunker = SlidingWindowChunker::new(size, 0).unwrap();
        let chunks = chunker.split(&[document(text.clone())]);

        prop_assert_eq!(chunks.len(), 1);
        prop_assert_eq!(chunks[0].start_offset, 0);
        prop_assert_eq!(&chunks[0].content, &text);
    }
}
