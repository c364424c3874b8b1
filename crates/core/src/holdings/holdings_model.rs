//! Holding domain models and input validation.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::holdings_constants::{
    MSG_NAME_REQUIRED, MSG_NAME_TOO_LONG, MSG_PRICE_INVALID, MSG_QUANTITY_INVALID,
    MSG_TICKER_REQUIRED, NAME_MAX_CHARS,
};

/// One line-item record of an owned quantity of an instrument at a recorded
/// acquisition price.
///
/// The `id` is assigned once at creation and never changes; every other
/// field is replaceable through an update. A `Holding` only ever enters the
/// store through a successfully validated [`HoldingDraft`], so stored
/// records always satisfy the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub ticker: String,
    pub name: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
}

/// Validated candidate ready to become or replace a holding.
///
/// Strings are trimmed and non-empty, numbers parsed and strictly positive.
/// The only way to obtain one is [`HoldingInput::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingDraft {
    pub ticker: String,
    pub name: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
}

impl HoldingDraft {
    /// Attaches an id, producing the final record.
    pub(crate) fn into_holding(self, id: String) -> Holding {
        Holding {
            id,
            ticker: self.ticker,
            name: self.name,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
        }
    }
}

/// Raw form input for creating or editing a holding.
///
/// All four fields are free-form strings exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingInput {
    pub ticker: String,
    pub name: String,
    pub quantity: String,
    pub purchase_price: String,
}

impl HoldingInput {
    /// Validates the raw input into a [`HoldingDraft`].
    ///
    /// Rules are independent and all applicable errors are collected, not
    /// just the first:
    /// - ticker must be non-empty after trimming;
    /// - name must be non-empty after trimming and at most
    ///   [`NAME_MAX_CHARS`] characters;
    /// - quantity and purchase price must parse as decimal numbers and be
    ///   strictly positive.
    ///
    /// Pure and deterministic; safe to call repeatedly while the user edits.
    pub fn validate(&self) -> std::result::Result<HoldingDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let ticker = self.ticker.trim();
        if ticker.is_empty() {
            errors.insert(HoldingField::Ticker, MSG_TICKER_REQUIRED);
        }

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(HoldingField::Name, MSG_NAME_REQUIRED);
        } else if name.chars().count() > NAME_MAX_CHARS {
            errors.insert(HoldingField::Name, MSG_NAME_TOO_LONG);
        }

        let quantity = parse_positive_decimal(&self.quantity);
        if quantity.is_none() {
            errors.insert(HoldingField::Quantity, MSG_QUANTITY_INVALID);
        }

        let purchase_price = parse_positive_decimal(&self.purchase_price);
        if purchase_price.is_none() {
            errors.insert(HoldingField::PurchasePrice, MSG_PRICE_INVALID);
        }

        match (quantity, purchase_price) {
            (Some(quantity), Some(purchase_price)) if errors.is_empty() => Ok(HoldingDraft {
                ticker: ticker.to_string(),
                name: name.to_string(),
                quantity,
                purchase_price,
            }),
            _ => Err(errors),
        }
    }
}

/// Parses a strictly positive decimal, `None` on anything else.
fn parse_positive_decimal(raw: &str) -> Option<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|value| *value > Decimal::ZERO)
}

/// Identifies one of the four user-editable holding fields.
///
/// Used as the key of [`FieldErrors`]; serializes to the camelCase field
/// name the presentation shell binds error messages to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoldingField {
    Ticker,
    Name,
    Quantity,
    PurchasePrice,
}

impl HoldingField {
    /// The camelCase field name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            HoldingField::Ticker => "ticker",
            HoldingField::Name => "name",
            HoldingField::Quantity => "quantity",
            HoldingField::PurchasePrice => "purchasePrice",
        }
    }
}

impl fmt::Display for HoldingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation errors.
///
/// At most one message per field, iterated in field order. Supports clearing
/// a single field's error without re-validating the rest: when the user
/// edits a field that currently has an error, the shell calls
/// [`FieldErrors::clear`] for that field only, so errors disappear one at a
/// time as they are fixed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<HoldingField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: HoldingField, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    /// The message for a field, if it currently has an error.
    pub fn get(&self, field: HoldingField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether a field currently has an error.
    pub fn contains(&self, field: HoldingField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Clears a single field's error, leaving the others untouched.
    pub fn clear(&mut self, field: HoldingField) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (HoldingField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
