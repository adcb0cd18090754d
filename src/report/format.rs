//! Currency Formatting
//! Whole-dollar amounts rendered with thousands separators and fixed cents.

/// Format a whole-dollar amount as `1,234,567.00`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}.00", sign, grouped)
}
