//! Formatting helpers for presenting prices.

/// Formats a koruna amount with Czech thousands grouping, e.g. `4 999 Kč`.
pub fn format_price_czk(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out.push_str(" Kč");
    out
}

#[cfg(test)]
mod tests {
    use super::format_price_czk;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(format_price_czk(4999), "4 999 Kč");
        assert_eq!(format_price_czk(12500), "12 500 Kč");
        assert_eq!(format_price_czk(1_250_000), "1 250 000 Kč");
    }

    #[test]
    fn small_amounts_stay_ungrouped() {
        assert_eq!(format_price_czk(0), "0 Kč");
        assert_eq!(format_price_czk(999), "999 Kč");
    }
}
