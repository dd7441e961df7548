use crate::config::ChunkingConfig;
use crate::store::DocumentChunk;

/// Boundary markers tried when ending a window, highest priority first.
const BREAKPOINTS: [&str; 5] = [". ", "! ", "? ", "\n\n", "\n"];

/// Split one page of extracted text into bounded, overlapping chunks.
///
/// Windows prefer to end just past a sentence or paragraph boundary found
/// inside the window; otherwise they cut at `chunk_size`. Consecutive windows
/// overlap by `overlap` characters. The scan always advances by at least one
/// character per iteration, so any finite input terminates even when
/// `overlap >= chunk_size`.
pub fn chunk_text(
    text: &str,
    source: &str,
    page: u32,
    config: &ChunkingConfig,
) -> Vec<DocumentChunk> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let chunk_size = config.chunk_size.max(1);
    if text.len() <= chunk_size {
        return vec![DocumentChunk::new(trimmed, page, source)];
    }

    let len = text.len();
    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < len {
        let mut end = floor_char_boundary(text, (start + chunk_size).min(len));

        if end < len {
            // Snap back to the last boundary marker that fits fully inside
            // the window and lies strictly after its start.
            for marker in BREAKPOINTS {
                if let Some(pos) = text[start..end].rfind(marker) {
                    if pos > 0 {
                        end = start + pos + marker.len();
                        break;
                    }
                }
            }
        }

        if end <= start {
            end = next_char_boundary(text, start + 1);
        }

        let piece = text[start..end].trim();
        if !piece.is_empty() {
            chunks.push(DocumentChunk::new(piece, page, source));
        }

        if end >= len {
            break;
        }

        let mut next = floor_char_boundary(text, end.saturating_sub(config.overlap));
        if next <= start {
            // Minimum forward progress: a large overlap or an early
            // breakpoint snap must not stall the scan.
            next = next_char_boundary(text, start + 1);
        }
        start = next;
    }

    chunks
}

/// Split a whole document into pages on form feeds (the pdftotext
/// convention) and chunk each page. A document without form feeds is a
/// single page.
pub fn chunk_document(text: &str, source: &str, config: &ChunkingConfig) -> Vec<DocumentChunk> {
    text.split('\u{c}')
        .enumerate()
        .flat_map(|(i, page_text)| chunk_text(page_text, source, (i + 1) as u32, config))
        .collect()
}

/// Largest char boundary less than or equal to `index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest char boundary greater than or equal to `index`.
fn next_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: usize, overlap: usize) -> ChunkingConfig {
        ChunkingConfig::new(chunk_size, overlap)
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text("  hello world  ", "doc.txt", 1, &config(1000, 200));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello world");
        assert_eq!(chunks[0].metadata.page, 1);
        assert_eq!(chunks[0].metadata.source, "doc.txt");
    }

    #[test]
    fn test_empty_text_no_chunks() {
        assert!(chunk_text("", "doc.txt", 1, &config(1000, 200)).is_empty());
        assert!(chunk_text("   \n\n  ", "doc.txt", 1, &config(1000, 200)).is_empty());
    }

    #[test]
    fn test_breaks_at_sentence_boundary() {
        // First window covers bytes 0..40; the last ". " inside it ends the
        // first sentence, so the chunk should stop there.
        let text = "First sentence here. Second sentence is much longer and keeps going.";
        let chunks = chunk_text(text, "doc.txt", 1, &config(40, 5));
        assert_eq!(chunks[0].text, "First sentence here.");
    }

    #[test]
    fn test_sentence_marker_outranks_newline() {
        let text = "A line\nwith a break. And then more text that overflows the window size.";
        let chunks = chunk_text(text, "doc.txt", 1, &config(30, 5));
        // ". " is higher priority than "\n", so the cut follows the period.
        assert_eq!(chunks[0].text, "A line\nwith a break.");
    }

    #[test]
    fn test_hard_cut_without_boundary() {
        let text = "a".repeat(250);
        let chunks = chunk_text(&text, "doc.txt", 1, &config(100, 20));
        assert!(chunks.len() > 1);
        assert_eq!(chunks[0].text.len(), 100);
    }

    #[test]
    fn test_windows_overlap() {
        let text = "x".repeat(250);
        let chunks = chunk_text(&text, "doc.txt", 1, &config(100, 20));
        // Second window starts 20 chars before the first one ended.
        assert_eq!(chunks[1].text.len(), 100);
        let total: usize = chunks.iter().map(|c| c.text.len()).sum();
        assert!(total > text.len());
    }

    #[test]
    fn test_coverage_of_long_text() {
        let text: String = (0..50)
            .map(|i| format!("Sentence number {} is right here. ", i))
            .collect();
        let chunks = chunk_text(&text, "doc.txt", 1, &config(120, 30));
        // Every sentence must appear in at least one chunk.
        for i in 0..50 {
            let needle = format!("Sentence number {} is right here.", i);
            assert!(
                chunks.iter().any(|c| c.text.contains(&needle)),
                "missing sentence {}",
                i
            );
        }
    }

    #[test]
    fn test_terminates_when_overlap_exceeds_chunk_size() {
        let text = "word ".repeat(100);
        let chunks = chunk_text(&text, "doc.txt", 1, &config(50, 50));
        assert!(!chunks.is_empty());
        let chunks = chunk_text(&text, "doc.txt", 1, &config(10, 200));
        assert!(!chunks.is_empty());
    }

    #[test]
    fn test_terminates_on_tiny_chunk_size() {
        let text = "abcdefghij";
        let chunks = chunk_text(text, "doc.txt", 1, &config(1, 0));
        assert!(!chunks.is_empty());
        assert!(chunks.iter().all(|c| !c.text.is_empty()));
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        let text = "héllo wörld. ".repeat(30) + "日本語のテキストです。";
        let chunks = chunk_text(&text, "doc.txt", 1, &config(50, 10));
        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(!chunk.text.is_empty());
        }
    }

    #[test]
    fn test_chunk_document_splits_pages_on_form_feed() {
        let text = "page one text\u{c}page two text\u{c}page three text";
        let chunks = chunk_document(text, "doc.txt", &config(1000, 200));
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].metadata.page, 1);
        assert_eq!(chunks[1].metadata.page, 2);
        assert_eq!(chunks[2].metadata.page, 3);
        assert_eq!(chunks[1].text, "page two text");
    }

    #[test]
    fn test_chunk_document_single_page() {
        let chunks = chunk_document("just one page", "doc.txt", &config(1000, 200));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].metadata.page, 1);
    }
}
