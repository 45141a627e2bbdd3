//! Display helpers for calculator results.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole US dollars with thousands separators.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(20800)), "$20,800");
/// assert_eq!(format_currency(dec!(45.5)), "$46");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < Decimal::ZERO {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a percentage to at most one decimal place, without trailing zeros.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::format_percent;
///
/// assert_eq!(format_percent(dec!(72.00)), "72%");
/// assert_eq!(format_percent(dec!(76.5)), "76.5%");
/// ```
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", rounded.normalize())
}

/// Formats a duration given in hours.
///
/// Anything under an hour is shown in whole minutes, everything else in
/// hours with one decimal place.
pub fn format_hours(hours: Decimal) -> String {
    if hours < Decimal::ONE {
        let minutes =
            (hours * Decimal::from(60)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        return format!("{} minutes", minutes.normalize());
    }

    let mut tenths = hours.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    tenths.rescale(1);
    format!("{tenths} hours")
}
