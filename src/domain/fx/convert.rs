//! On-demand conversion over a resolved snapshot.

use super::FxSnapshot;
use crate::domain::foundation::CurrencyCode;

/// Converts `amount` from one currency to another through the snapshot.
///
/// Returns the unrounded result, or `None` whenever there is nothing
/// meaningful to show; callers must treat `None` as "do not render a
/// converted figure", never as zero. `None` cases:
///
/// - the two codes are the same currency (a no-op conversion is not a
///   figure worth rendering);
/// - the snapshot or the amount is absent;
/// - either code is blank, or a required rate is missing from the table;
/// - the arithmetic degenerates (zero `from` rate).
///
/// Two non-base currencies convert by pivoting through the snapshot's
/// base: `amount * (to_rate / from_rate)`. This function never panics,
/// whatever the inputs.
pub fn convert_using_snapshot(
    snapshot: Option<&FxSnapshot>,
    amount: Option<f64>,
    from: &str,
    to: &str,
) -> Option<f64> {
    let snapshot = snapshot?;
    let amount = amount?;
    let from = CurrencyCode::parse(from)?;
    let to = CurrencyCode::parse(to)?;
    if from == to {
        return None;
    }

    let from_rate = snapshot.rate_for(&from)?;
    let to_rate = snapshot.rate_for(&to)?;

    let converted = amount * (to_rate / from_rate);
    converted.is_finite().then_some(converted)
}
