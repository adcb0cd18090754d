//! Pullback Table Parser
//! Extracts the 4-column parts table from loosely formatted pasted text.

use thiserror::Error;

use super::{price, tokenizer};

/// Fixed column headers of a pullback table.
pub const HEADER_COLUMNS: [&str; 4] = ["RMA", "Model/Serial", "Part", "Price"];

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("could not find a header line containing \"RMA\" and \"Model/Serial\"")]
    MissingHeader,
}

/// One row of the pullback table.
///
/// `price` is the display text: the normalized whole-dollar value when the
/// pasted field was numeric, otherwise the field as pasted. `amount` is the
/// numeric value used for totals; rows without one still appear in the table
/// but contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRecord {
    pub rma: String,
    pub model_serial: String,
    pub part: String,
    pub price: String,
    pub amount: Option<i64>,
}

impl PartRecord {
    fn from_fields(mut fields: Vec<String>) -> Self {
        fields.truncate(4);
        let price_raw = fields.pop().unwrap_or_default();
        let part = fields.pop().unwrap_or_default();
        let model_serial = fields.pop().unwrap_or_default();
        let rma = fields.pop().unwrap_or_default();

        let amount = price::normalize(&price_raw);
        let price = match amount {
            Some(v) => v.to_string(),
            None => price_raw,
        };

        Self {
            rma,
            model_serial,
            part,
            price,
            amount,
        }
    }
}

/// Ordered sequence of parsed records, in input order.
pub type PartsTable = Vec<PartRecord>;

/// Parse pasted RMA text into a parts table.
///
/// The first non-blank line containing both `"RMA"` and `"Model/Serial"` marks
/// the header. Every later line is tokenized (tabs first, then runs of two or
/// more spaces) and kept if it yields at least four fields; extras beyond the
/// fourth are dropped. No dedup, no sort.
pub fn parse_pullback_text(raw: &str) -> Result<PartsTable, ParseError> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let header_index = lines
        .iter()
        .position(|l| l.contains("RMA") && l.contains("Model/Serial"))
        .ok_or(ParseError::MissingHeader)?;

    let table = lines[header_index + 1..]
        .iter()
        .map(|line| tokenizer::split_columns(line))
        .filter(|fields| fields.len() >= 4)
        .map(PartRecord::from_fields)
        .collect();

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Pending pullbacks for store 1189

RMA\tModel/Serial\tPart\tPrice
123\tAcme-X1\tFan\t$45.99
124\tAcme-X2\tHeat Sink\t$12.50
125\tAcme-X3\tPSU\t500
";

    #[test]
    fn test_tab_rows_in_order() {
        let table = parse_pullback_text(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table[0],
            PartRecord {
                rma: "123".into(),
                model_serial: "Acme-X1".into(),
                part: "Fan".into(),
                price: "45".into(),
                amount: Some(45),
            }
        );
        assert_eq!(table[1].rma, "124");
        assert_eq!(table[2].rma, "125");
        assert_eq!(table[2].amount, Some(500));
    }

    #[test]
    fn test_missing_header_fails() {
        let err = parse_pullback_text("no table here\njust text\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(parse_pullback_text("").is_err());
    }

    #[test]
    fn test_double_space_rows() {
        let text = "\
RMA    Model/Serial    Part    Price
201  Galaxy S21 Ultra  Rear Camera  $120.00
202  Pixel 8  Battery  $89
";
        let table = parse_pullback_text(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].model_serial, "Galaxy S21 Ultra");
        assert_eq!(table[0].price, "120");
        assert_eq!(table[1].amount, Some(89));
    }

    #[test]
    fn test_short_lines_dropped() {
        let text = "RMA\tModel/Serial\tPart\tPrice\n123\tAcme-X1\tFan\t$45\nnot a row\n";
        let table = parse_pullback_text(text).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_extra_fields_truncated() {
        let text = "RMA\tModel/Serial\tPart\tPrice\n123\tAcme-X1\tFan\t$45\tnotes\tmore\n";
        let table = parse_pullback_text(text).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].price, "45");
    }

    #[test]
    fn test_unparseable_price_kept_in_table() {
        let text = "RMA\tModel/Serial\tPart\tPrice\n123\tAcme-X1\tFan\tpending\n";
        let table = parse_pullback_text(text).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].price, "pending");
        assert_eq!(table[0].amount, None);
    }

    #[test]
    fn test_duplicates_allowed() {
        let text = "RMA\tModel/Serial\tPart\tPrice\n1\ta\tb\t5\n1\ta\tb\t5\n";
        let table = parse_pullback_text(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0], table[1]);
    }

    #[test]
    fn test_blank_lines_between_rows_skipped() {
        let text = "RMA\tModel/Serial\tPart\tPrice\n\n123\tAcme-X1\tFan\t$45\n   \n124\tAcme-X2\tPSU\t9\n";
        let table = parse_pullback_text(text).unwrap();
        assert_eq!(table.len(), 2);
    }
}
