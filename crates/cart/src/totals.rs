//! Derived cart values, computed on read.

use num_format::{Buffer, Locale};
use rust_decimal::Decimal;

use crate::cart::CartLine;

/// Total number of items across all lines (sum of quantities).
pub fn item_count(lines: &[CartLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity)).sum()
}

/// Exact sum of unit price × quantity over all lines.
pub fn subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// Render an amount with thousands grouping, e.g. `1,234,567.89`.
///
/// Rounds to two decimal places and drops trailing zeros, so `25.50`
/// renders as `25.5` and whole amounts carry no fraction at all.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let scale = rounded.scale();
    let pow = 10i128.pow(scale);
    let units = rounded.mantissa() / pow;
    let fraction = (rounded.mantissa() % pow).unsigned_abs();

    let mut buf = Buffer::default();
    buf.write_formatted(&units, &Locale::en);

    if scale == 0 {
        buf.as_str().to_string()
    } else {
        format!("{}.{:0width$}", buf.as_str(), fraction, width = scale as usize)
    }
}
