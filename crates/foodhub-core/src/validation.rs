//! # Validation Module
//!
//! Input validation for the forms the FoodHub front ends submit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (CLI args / web form)                              │
//! │  ├── Type parsing (clap, form fields)                                   │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, lengths, ranges                                  │
//! │  └── Price strings parsed to Money                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Marketplace API                                              │
//! │  └── Authoritative checks, reported as { "error": "..." }              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use foodhub_core::validation::{validate_delivery_address, validate_rating};
//!
//! let address = validate_delivery_address("  House 12, Road 5  ").unwrap();
//! assert_eq!(address, "House 12, Road 5");
//! assert!(validate_rating(6).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ADDRESS_LEN: usize = 500;
const MAX_NOTES_LEN: usize = 500;
const MAX_COMMENT_LEN: usize = 1000;
const MAX_MEAL_NAME_LEN: usize = 200;
const MAX_SEARCH_LEN: usize = 100;

fn required_trimmed(value: &str, field: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

fn optional_trimmed(value: Option<&str>, field: &str, max: usize) -> ValidationResult<Option<String>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(Some(value.to_string()))
}

// =============================================================================
// Checkout
// =============================================================================

/// Validates the checkout delivery address.
///
/// ## Rules
/// - Trimmed, must not be empty
/// - At most 500 characters
pub fn validate_delivery_address(address: &str) -> ValidationResult<String> {
    required_trimmed(address, "delivery address", MAX_ADDRESS_LEN)
}

/// Validates the optional kitchen notes. Blank notes become `None`.
pub fn validate_notes(notes: Option<&str>) -> ValidationResult<Option<String>> {
    optional_trimmed(notes, "notes", MAX_NOTES_LEN)
}

/// Validates a quantity typed by the user.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (99)
///
/// The cart itself accepts any quantity; this is only for explicit input.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Reviews
// =============================================================================

/// Star rating, 1 to 5 inclusive.
pub fn validate_rating(rating: i64) -> ValidationResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
        });
    }
    Ok(())
}

pub fn validate_review_comment(comment: Option<&str>) -> ValidationResult<Option<String>> {
    optional_trimmed(comment, "comment", MAX_COMMENT_LEN)
}

// =============================================================================
// Menu Editor
// =============================================================================

pub fn validate_meal_name(name: &str) -> ValidationResult<String> {
    required_trimmed(name, "meal name", MAX_MEAL_NAME_LEN)
}

/// Validates a price typed into the menu editor.
///
/// ## Example
/// ```rust
/// use foodhub_core::validation::validate_price;
///
/// assert_eq!(validate_price("120.5").unwrap().minor_units(), 12050);
/// assert!(validate_price("0").is_err());
/// assert!(validate_price("abc").is_err());
/// ```
pub fn validate_price(price: &str) -> ValidationResult<Money> {
    let money = Money::parse_decimal(price).map_err(|e| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: e.to_string(),
    })?;

    if !money.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(money)
}

/// Category slugs are lowercase ASCII letters, digits and hyphens.
pub fn validate_category_slug(slug: &str) -> ValidationResult<String> {
    let slug = required_trimmed(slug, "slug", MAX_MEAL_NAME_LEN)?;

    let well_formed = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "use lowercase letters, digits and hyphens".to_string(),
        });
    }

    Ok(slug)
}

// =============================================================================
// Identifiers & Search
// =============================================================================

/// Characters that would end or re-route a URL path segment.
const ROUTE_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// Validates an id that will be placed in a URL path segment.
///
/// ## Rules
/// - Must not be empty, `.` or `..` (dot segments are resolved away)
/// - No whitespace, control characters, or any of `/ \ ? # %`
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id == "." || id == ".." {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not be a dot segment".to_string(),
        });
    }

    if id
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || ROUTE_CHARS.contains(&c))
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain whitespace or any of / \\ ? # %".to_string(),
        });
    }

    Ok(())
}

/// Validates a meal search query.
///
/// ## Rules
/// - Can be empty (lists everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
