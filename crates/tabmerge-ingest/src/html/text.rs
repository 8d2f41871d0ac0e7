//! Cell text extraction.

use scraper::ElementRef;

/// Text content of an element with whitespace runs collapsed and trimmed.
pub(super) fn cell_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    normalize_whitespace(&raw)
}

pub(super) fn normalize_whitespace(value: &str) -> String {
    let mut parts = value.split_whitespace();
    let mut normalized = String::with_capacity(value.len());
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Alice \n  Smith\t"), "Alice Smith");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("Bob"), "Bob");
    }
}
