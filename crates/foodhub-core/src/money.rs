//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The API sends prices as decimal strings: "120.50"                      │
//! │                                                                         │
//! │  parseFloat("0.10") + parseFloat("0.20") = 0.30000000000000004  ❌      │
//! │                                                                         │
//! │  OUR SOLUTION: parse the string straight into integer minor units       │
//! │    "0.10" → 10,  "0.20" → 20,  10 + 20 = 30 → "0.30"  ✅                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use foodhub_core::money::Money;
//!
//! let price = Money::parse_decimal("99.90").unwrap();
//! let line = price * 3;
//! assert_eq!(line.to_decimal_string(), "299.70");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::error::MoneyParseError;
use crate::DEFAULT_CURRENCY_SYMBOL;

/// Minor units per major unit (2 decimal places).
const SCALE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paisa for BDT).
///
/// ## Design Decisions
/// - **i64 (signed)**: Differences and refunds can go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as minor units**: Only the API boundary uses decimal strings
///
/// ## Where Money is Used
/// ```text
/// Meal.price ("120.50") ──► Money::parse_decimal ──► CartItem line total
///                                                         │
///                                 Cart.total() ◄──────────┘
///                                      │
///                                      └──► Displayed as "৳241.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use foodhub_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.to_decimal_string(), "10.99");
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * SCALE)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion (truncated toward zero).
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / SCALE
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % SCALE).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a quantity, saturating instead of overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use foodhub_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(5000);
    /// assert_eq!(unit_price.multiply_quantity(3).minor_units(), 15000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Parses a decimal string as sent by the API (`"120"`, `"120.5"`,
    /// `"120.50"`).
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - Optional leading `+` or `-`
    /// - At most one `.`; digits on at least one side of it
    /// - Fraction digits past the second are rounded half away from zero
    ///
    /// ## Example
    /// ```rust
    /// use foodhub_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("100.00").unwrap().minor_units(), 10000);
    /// assert_eq!(Money::parse_decimal("2.5").unwrap().minor_units(), 250);
    /// assert_eq!(Money::parse_decimal("0.125").unwrap().minor_units(), 13);
    /// assert!(Money::parse_decimal("12,50").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Money, MoneyParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::Invalid(trimmed.to_string());
        let overflow = || MoneyParseError::Overflow(trimmed.to_string());

        let (negative, unsigned) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let mut major: i64 = 0;
        for digit in whole.bytes() {
            major = major
                .checked_mul(10)
                .and_then(|m| m.checked_add(i64::from(digit - b'0')))
                .ok_or_else(overflow)?;
        }

        let digits: Vec<i64> = fraction.bytes().map(|b| i64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|d| *d >= 5);

        let minor = major
            .checked_mul(SCALE)
            .and_then(|m| m.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -minor } else { minor }))
    }

    /// Renders the amount the way the API expects it: `"123.45"`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / SCALE as u64, abs % SCALE as u64)
    }

    /// Renders the amount with a currency symbol: `"৳123.45"`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            abs / SCALE as u64,
            abs % SCALE as u64
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the default currency symbol. Front ends with a configured
/// symbol should call [`Money::format_with_symbol`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_decimal(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Serde Helpers
// =============================================================================

/// `Money` as the API's decimal string (`"123.45"`).
///
/// ```rust,ignore
/// #[serde(with = "foodhub_core::money::as_decimal_string")]
/// pub total: Money,
/// ```
pub mod as_decimal_string {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&money.to_decimal_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Money::parse_decimal(&raw).map_err(D::Error::custom)
    }
}

/// Optional `Money` as a JSON number of major units (`120.5`), the form the
/// menu editor submits.
///
/// Reading goes through [`Money::parse_decimal`], so a number with more than
/// two fraction digits rounds the same way a typed price does.
pub mod as_major_number {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Money, SCALE};

    pub fn serialize<S: Serializer>(price: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error> {
        match price {
            Some(money) => serializer.serialize_f64(money.minor_units() as f64 / SCALE as f64),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Money>, D::Error> {
        let Some(value) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        Money::parse_decimal(&value.to_string())
            .map(Some)
            .map_err(D::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
