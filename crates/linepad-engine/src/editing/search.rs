use serde::Serialize;

use crate::editing::Document;

/// One occurrence of a search needle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub line: usize,
    /// Byte offset of the match within the line
    pub offset: usize,
    /// Full content of the matching line
    pub content: String,
}

/// Every occurrence of `needle` in `document`, in line then offset order
///
/// Scanning resumes one character after the start of each match, so
/// overlapping occurrences are all reported ("aa" in "aaa" hits at 0 and 1).
/// An empty needle yields no hits.
pub fn find_all(document: &Document, needle: &str) -> Vec<SearchHit> {
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for (line_number, line) in document.lines().enumerate() {
        let content = line.content();
        let mut from = 0;
        while let Some(found) = content[from..].find(needle) {
            let start = from + found;
            hits.push(SearchHit {
                line: line_number,
                offset: start,
                content: content.to_string(),
            });
            // a non-empty match always starts on a character
            let step = content[start..].chars().next().map_or(1, char::len_utf8);
            from = start + step;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn positions(document: &Document, needle: &str) -> Vec<(usize, usize)> {
        find_all(document, needle)
            .into_iter()
            .map(|hit| (hit.line, hit.offset))
            .collect()
    }

    #[test]
    fn test_reports_every_line_in_order() {
        let doc = Document::from_blob("cat\ndog\nconcat");
        assert_eq!(positions(&doc, "cat"), vec![(0, 0), (2, 3)]);
    }

    #[test]
    fn test_reports_overlapping_matches() {
        let doc = Document::from_blob("aaaa");
        assert_eq!(positions(&doc, "aa"), vec![(0, 0), (0, 1), (0, 2)]);
    }

    #[test]
    fn test_hit_carries_line_content() {
        let doc = Document::from_blob("first\nsecond line");
        let hits = find_all(&doc, "line");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content, "second line");
    }

    #[test]
    fn test_multibyte_content_is_stepped_by_character() {
        let doc = Document::from_blob("éé");
        assert_eq!(positions(&doc, "é"), vec![(0, 0), (0, 2)]);
    }

    #[test]
    fn test_no_hits() {
        let doc = Document::from_blob("abc");
        assert!(find_all(&doc, "x").is_empty());
        assert!(find_all(&doc, "").is_empty());
    }
}
