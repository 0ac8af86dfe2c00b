//! Section aggregation.
//!
//! Buckets normalized line items into statement sections with deterministic
//! ordering and quantized totals.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{LineItem, StatementSection};

/// Number of fraction digits in presented amounts.
pub const MONEY_DP: u32 = 2;

/// Quantizes a monetary amount to 2 decimal places, rounding half up.
///
/// Applied at section totalling and report assembly so repeated aggregation
/// cannot accumulate rounding drift. The rounding mode is fixed; changing it
/// changes every published total.
#[must_use]
pub fn quantize(amount: Decimal) -> Decimal {
    let mut quantized =
        amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    // Fix the scale so totals always serialize with two fraction digits.
    quantized.rescale(MONEY_DP);
    quantized
}

/// Builds a statement section from its line items.
///
/// Items are sorted by account code ascending so source arrival order never
/// leaks into output; the total is the quantized sum of item amounts.
#[must_use]
pub fn build_section(mut items: Vec<LineItem>) -> StatementSection {
    items.sort_by(|a, b| a.code.cmp(&b.code));
    let total = quantize(items.iter().map(|item| item.amount).sum());
    StatementSection { items, total }
}
