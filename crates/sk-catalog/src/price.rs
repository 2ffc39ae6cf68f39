const GROUP_SEPARATOR: char = '.';
const CURRENCY_SUFFIX: &str = "\u{a0}₫";

/// Formats a đồng amount the way vi-VN renders currency, e.g. `45.000 ₫`.
pub fn format_vnd(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + CURRENCY_SUFFIX.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    out.push_str(CURRENCY_SUFFIX);
    out
}
