//! Aggregate calculations over the current holding list.

use rust_decimal::Decimal;

use crate::holdings::Holding;

/// Total acquisition cost of the portfolio.
///
/// Sum over all holdings of `quantity x purchase_price`, in exact decimal
/// arithmetic. No rounding or currency formatting is applied here; that is
/// the presentation layer's job.
pub fn total_acquisition_cost(holdings: &[Holding]) -> Decimal {
    holdings
        .iter()
        .map(|holding| holding.quantity * holding.purchase_price)
        .sum()
}
