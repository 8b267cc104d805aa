use rust_decimal::{Decimal, RoundingStrategy};

const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Suffix the demonstration driver appends to formatted amounts.
pub const CURRENCY_SUFFIX: &str = "THB";

/// Formats an amount for humans: two decimal places (half away from zero) and
/// comma thousands separators, e.g. `1234567.891` becomes `1,234,567.89`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);

    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    format!("{sign}{grouped}.{fraction}")
}
