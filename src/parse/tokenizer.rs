//! Column Tokenizer
//! Splits a pasted line into column fields with a fixed fallback order.
//!
//! 1. Split on tab characters. Tab-separated data is positional, so empty
//!    fields are kept.
//! 2. If that produced a single field the line was not tab-separated; split on
//!    runs of two-or-more spaces instead, dropping empty fragments. Single
//!    spaces stay inside a field ("iPhone 12 Pro" is one column).

use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Split one line into trimmed column fields.
pub fn split_columns(line: &str) -> Vec<String> {
    let tabbed: Vec<String> = line.split('\t').map(|f| f.trim().to_string()).collect();
    if tabbed.len() > 1 {
        return tabbed;
    }

    MULTI_SPACE
        .split(line)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_separated() {
        let fields = split_columns("123\tAcme-X1\tFan\t$45.99");
        assert_eq!(fields, vec!["123", "Acme-X1", "Fan", "$45.99"]);
    }

    #[test]
    fn test_tab_separated_keeps_empty_fields() {
        let fields = split_columns("123\t\tFan\t$45.99");
        assert_eq!(fields, vec!["123", "", "Fan", "$45.99"]);
    }

    #[test]
    fn test_double_space_fallback() {
        let fields = split_columns("123  Acme-X1   Fan    $45.99");
        assert_eq!(fields, vec!["123", "Acme-X1", "Fan", "$45.99"]);
    }

    #[test]
    fn test_single_spaces_stay_inside_fields() {
        let fields = split_columns("RMA-7  Galaxy S21 Ultra  Rear Camera  $120");
        assert_eq!(fields, vec!["RMA-7", "Galaxy S21 Ultra", "Rear Camera", "$120"]);
    }

    #[test]
    fn test_tabs_win_over_spaces() {
        // A line with both delimiters is treated as tab-separated.
        let fields = split_columns("123\tAcme X1  spare\tFan\t$10");
        assert_eq!(fields, vec!["123", "Acme X1  spare", "Fan", "$10"]);
    }

    #[test]
    fn test_unsplittable_line() {
        let fields = split_columns("just one field");
        assert_eq!(fields, vec!["just one field"]);
    }
}
