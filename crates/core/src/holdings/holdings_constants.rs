/// Validation limits and messages
///
/// Message texts are what the presentation shell shows next to a field, so
/// they are part of the public contract and covered by tests.

/// Longest instrument name the validator accepts, in Unicode scalar values.
/// Names of exactly this length are valid; longer ones are rejected.
pub const NAME_MAX_CHARS: usize = 20;

/// Shown when the ticker is empty after trimming.
pub const MSG_TICKER_REQUIRED: &str = "Ticker is required.";

/// Shown when the name is empty after trimming.
pub const MSG_NAME_REQUIRED: &str = "Name is required.";

/// Shown when the name exceeds [`NAME_MAX_CHARS`].
pub const MSG_NAME_TOO_LONG: &str = "Name must be 20 characters or fewer.";

/// Shown when the quantity does not parse or is not strictly positive.
pub const MSG_QUANTITY_INVALID: &str = "Enter a valid quantity.";

/// Shown when the purchase price does not parse or is not strictly positive.
pub const MSG_PRICE_INVALID: &str = "Enter a valid purchase price.";
