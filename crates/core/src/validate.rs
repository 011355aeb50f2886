//! The validation engine.
//!
//! Pure functions that check a candidate record (login credential or product
//! draft) against the rules and return a tagged [`Validation`] result: either
//! the accepted, parsed record or a field-keyed error map. Every applicable
//! field is checked and every violation reported - there is no short-circuit
//! on the first error, so a form can highlight all invalid fields at once.
//!
//! Validators never panic and never perform I/O; malformed numeric input is
//! a validation failure, not a runtime error.

use core::fmt;
use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Category, Credential, Product, ProductDraft};

/// Maximum length of a product description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Identifier length bounds.
pub const IDENTIFIER_MIN_CHARS: usize = 3;
pub const IDENTIFIER_MAX_CHARS: usize = 50;

/// Secret length bounds.
pub const SECRET_MIN_CHARS: usize = 6;
pub const SECRET_MAX_CHARS: usize = 100;

/// A field that can carry a validation error.
///
/// Serializes as the lowercase field name, which doubles as the error slot
/// key on the wire and in forms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Identifier,
    Secret,
    Name,
    Description,
    Price,
    Stock,
    Category,
}

impl Field {
    /// The field's wire/form name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Secret => "secret",
            Self::Name => "name",
            Self::Description => "description",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered map from field to human-readable error message.
///
/// At most one message per field; the first failing rule for a field wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Create an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record an error for a field, keeping an earlier message if one exists.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// The message recorded for a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether a field has an error recorded.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Whether no errors are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over (field, message) pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// The two-armed result of a validation check.
///
/// Either the parsed, accepted record or the field-keyed error map. An
/// explicit tagged type so callers cannot mistake an error map for success.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Validation<T> {
    /// The candidate passed every rule; carries the parsed record.
    Accepted(T),
    /// One or more rules failed; carries a message per offending field.
    Rejected(FieldErrors),
}

impl<T> Validation<T> {
    /// Whether the candidate was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The error map, if the candidate was rejected.
    #[must_use]
    pub const fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }

    /// Convert into a `Result`, discarding the tag.
    ///
    /// # Errors
    ///
    /// Returns the field error map if the candidate was rejected.
    pub fn into_result(self) -> Result<T, FieldErrors> {
        match self {
            Self::Accepted(value) => Ok(value),
            Self::Rejected(errors) => Err(errors),
        }
    }
}

/// Validate a login credential.
///
/// Rules:
/// - identifier: required; 3-50 characters; letters, digits, hyphen, period
/// - secret: required; 6-100 characters; at least one letter and one digit
///
/// Both fields are always checked, so empty input reports both errors.
pub fn validate_credential(identifier: &str, secret: &str) -> Validation<Credential> {
    let mut errors = FieldErrors::new();

    let identifier = identifier.trim();
    let identifier_chars = identifier.chars().count();
    if identifier.is_empty() {
        errors.insert(Field::Identifier, "Identifier is required");
    } else if identifier_chars < IDENTIFIER_MIN_CHARS {
        errors.insert(
            Field::Identifier,
            format!("Identifier must be at least {IDENTIFIER_MIN_CHARS} characters"),
        );
    } else if identifier_chars > IDENTIFIER_MAX_CHARS {
        errors.insert(
            Field::Identifier,
            format!("Identifier must be at most {IDENTIFIER_MAX_CHARS} characters"),
        );
    } else if !identifier.chars().all(is_identifier_char) {
        errors.insert(Field::Identifier, "Identifier contains invalid characters");
    }

    let secret_chars = secret.chars().count();
    if secret.is_empty() {
        errors.insert(Field::Secret, "Secret is required");
    } else if secret_chars < SECRET_MIN_CHARS {
        errors.insert(
            Field::Secret,
            format!("Secret must be at least {SECRET_MIN_CHARS} characters"),
        );
    } else if secret_chars > SECRET_MAX_CHARS {
        errors.insert(
            Field::Secret,
            format!("Secret must be at most {SECRET_MAX_CHARS} characters"),
        );
    } else if !secret.chars().any(|c| c.is_ascii_alphabetic())
        || !secret.chars().any(|c| c.is_ascii_digit())
    {
        errors.insert(Field::Secret, "Secret must include both letters and numbers");
    }

    if errors.is_empty() {
        Validation::Accepted(Credential::new(identifier, secret))
    } else {
        Validation::Rejected(errors)
    }
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

/// Validate a product draft.
///
/// Rules:
/// - name: required, non-blank
/// - price: required, numeric, greater than zero
/// - stock: required, integer, not negative
/// - description: optional, at most 500 characters
/// - category: optional, must be in the fixed allowed set when present
///
/// All violations are reported simultaneously. The accepted arm carries the
/// parsed [`Product`].
pub fn validate_product(draft: &ProductDraft) -> Validation<Product> {
    let mut errors = FieldErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    let description = draft.description.trim();
    let description = if description.is_empty() {
        None
    } else {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.insert(
                Field::Description,
                format!("Description must be at most {MAX_DESCRIPTION_CHARS} characters"),
            );
        }
        Some(description.to_owned())
    };

    let price = parse_price(draft.price.trim(), &mut errors);
    let stock = parse_stock(draft.stock.trim(), &mut errors);

    let category = draft.category.trim();
    let category = if category.is_empty() {
        None
    } else {
        match Category::from_str(category) {
            Ok(category) => Some(category),
            Err(_) => {
                errors.insert(Field::Category, "Invalid category");
                None
            }
        }
    };

    match (price, stock) {
        (Some(price), Some(stock)) if errors.is_empty() => Validation::Accepted(Product {
            name: name.to_owned(),
            description,
            price,
            stock,
            category,
        }),
        _ => Validation::Rejected(errors),
    }
}

fn parse_price(raw: &str, errors: &mut FieldErrors) -> Option<Decimal> {
    if raw.is_empty() {
        errors.insert(Field::Price, "Price is required");
        return None;
    }
    match Decimal::from_str(raw) {
        Ok(price) if price > Decimal::ZERO => Some(price),
        Ok(_) => {
            errors.insert(Field::Price, "Price must be greater than 0");
            None
        }
        Err(_) => {
            errors.insert(Field::Price, "Price must be a number");
            None
        }
    }
}

fn parse_stock(raw: &str, errors: &mut FieldErrors) -> Option<u32> {
    if raw.is_empty() {
        errors.insert(Field::Stock, "Stock is required");
        return None;
    }
    match i64::from_str(raw) {
        Ok(stock) if stock < 0 => {
            errors.insert(Field::Stock, "Stock must not be negative");
            None
        }
        Ok(stock) => match u32::try_from(stock) {
            Ok(stock) => Some(stock),
            Err(_) => {
                errors.insert(Field::Stock, "Stock is too large");
                None
            }
        },
        Err(_) => {
            errors.insert(Field::Stock, "Stock must be an integer");
            None
        }
    }
}
