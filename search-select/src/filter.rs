//! Option filtering and match highlighting

use std::ops::Range;

use serde_json::Value;

use crate::options::option_text;

/// Indices of the options whose label contains `search`, case-insensitively
///
/// With no search text (or an empty one) every option is kept. Original order
/// is preserved and nothing is ranked.
pub fn filter_options(options: &[Value], search: Option<&str>, text_field: &str) -> Vec<usize> {
    let needle = match search {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return (0..options.len()).collect(),
    };

    options
        .iter()
        .enumerate()
        .filter(|(_, option)| {
            option_text(option, text_field)
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `search` in `text`
///
/// Matches against the same lowercased text as [`filter_options`], so every
/// listed row gets a highlight. The range is widened to whole characters of
/// the original label.
pub fn highlight_range(text: &str, search: &str) -> Option<Range<usize>> {
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();
    let start = lowered.find(&needle)?;
    let end = start + needle.len();

    // Context-dependent lowercasing (final sigma) keeps each char's byte
    // length, so per-char lengths locate offsets in `lowered`
    let mut lowered_pos = 0;
    let mut from = None;
    for (index, c) in text.char_indices() {
        let next = lowered_pos + c.to_lowercase().map(char::len_utf8).sum::<usize>();
        if from.is_none() && next > start {
            from = Some(index);
        }
        if next >= end {
            return from.map(|from| from..index + c.len_utf8());
        }
        lowered_pos = next;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fruits() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Apple"}),
            json!({"id": 2, "name": "Banana"}),
            json!({"id": 3, "name": "Cherry"}),
            json!({"id": 4, "name": "Mandarin"}),
        ]
    }

    #[test]
    fn test_no_search_keeps_everything() {
        let options = fruits();
        assert_eq!(filter_options(&options, None, "name"), vec![0, 1, 2, 3]);
        assert_eq!(filter_options(&options, Some(""), "name"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_substring_case_insensitive() {
        let options = fruits();
        assert_eq!(filter_options(&options, Some("an"), "name"), vec![1, 3]);
        assert_eq!(filter_options(&options, Some("AN"), "name"), vec![1, 3]);
        assert_eq!(filter_options(&options, Some("apple"), "name"), vec![0]);
        assert!(filter_options(&options, Some("kiwi"), "name").is_empty());
    }

    #[test]
    fn test_missing_text_field_never_matches() {
        let options = vec![json!({"id": 1}), json!({"id": 2, "name": "Banana"})];
        assert_eq!(filter_options(&options, Some("a"), "name"), vec![1]);
        assert!(filter_options(&options, Some("a"), "label").is_empty());
        // No search text: records without a label are still listed
        assert_eq!(filter_options(&options, None, "label"), vec![0, 1]);
    }

    #[test]
    fn test_empty_options() {
        assert!(filter_options(&[], Some("a"), "name").is_empty());
        assert!(filter_options(&[], None, "name").is_empty());
    }

    #[test]
    fn test_highlight_first_occurrence() {
        assert_eq!(highlight_range("Banana", "an"), Some(1..3));
        assert_eq!(highlight_range("Banana", "AN"), Some(1..3));
        assert_eq!(highlight_range("Apple", "apple"), Some(0..5));
        assert_eq!(highlight_range("Apple", "x"), None);
        assert_eq!(highlight_range("Apple", ""), None);
    }

    #[test]
    fn test_highlight_multibyte() {
        let text = "Crème brûlée";
        let range = highlight_range(text, "BRÛ").unwrap();
        assert_eq!(&text[range], "brû");
    }

    #[test]
    fn test_highlight_final_sigma() {
        let options = vec![json!({"name": "ΟΔΟΣ"})];
        assert_eq!(filter_options(&options, Some("ς"), "name"), vec![0]);
        assert_eq!(highlight_range("ΟΔΟΣ", "ς"), Some(6..8));
        assert_eq!(highlight_range("ΟΔΟΣ", "οσ"), None);
    }

    #[test]
    fn test_filter_and_highlight_agree() {
        let mut options = fruits();
        options.push(json!({"id": 5, "name": "ΟΔΟΣ"}));
        for search in ["a", "an", "RR", "pp", "z", "ς", "Σ"] {
            for (index, option) in options.iter().enumerate() {
                let label = option["name"].as_str().unwrap();
                let listed = filter_options(&options, Some(search), "name").contains(&index);
                assert_eq!(listed, highlight_range(label, search).is_some());
            }
        }
    }
}
