//! Valuation module - aggregate calculations over the holding list.

mod valuation_calculator;

pub use valuation_calculator::total_acquisition_cost;
