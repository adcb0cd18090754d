//! Price Normalization
//! Turns pasted price text into whole-dollar amounts.

/// Strip currency formatting and parse the whole-dollar value.
///
/// `'$'` and thousands separators are removed, then anything after the first
/// decimal point is dropped: `"$1,234.56"` -> `1234`. Fractional cents are
/// truncated, not rounded, matching the behavior reports downstream already
/// reconcile against.
///
/// Returns `None` when the field is not numeric after stripping.
pub fn normalize(raw: &str) -> Option<i64> {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    let integral = stripped.split('.').next().unwrap_or("");
    if integral.is_empty() {
        return None;
    }

    integral.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integer() {
        assert_eq!(normalize("500"), Some(500));
    }

    #[test]
    fn test_currency_symbol_and_thousands() {
        assert_eq!(normalize("$1,234.56"), Some(1234));
    }

    #[test]
    fn test_truncates_not_rounds() {
        assert_eq!(normalize("$45.99"), Some(45));
        assert_eq!(normalize("45.01"), Some(45));
    }

    #[test]
    fn test_negative() {
        assert_eq!(normalize("-45.99"), Some(-45));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(normalize("  $12  "), Some(12));
    }

    #[test]
    fn test_non_numeric() {
        assert_eq!(normalize("N/A"), None);
        assert_eq!(normalize("pending"), None);
        assert_eq!(normalize(""), None);
    }
}
