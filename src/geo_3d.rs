mod proc_errors;
mod vector;
mod plane;

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

// Re-export errors
pub use proc_errors::{
    GeoError,
    ProcResult,
    err_str,
};
// Re-export geometry types
pub use vector::GeoVector;
pub use plane::Plane;

/// Scalar type used by every geometric computation.
/// Arbitrary-precision decimal, never binary floating point.
pub type Decimal = BigDecimal;

/// Significant digits kept after a division or square root.
pub const PRECISION: u64 = 30;

/// Decimal places shown when printing equations and vectors.
pub const DISPLAY_PLACES: i64 = 3;

/// Magnitude at or below which a value is treated as zero (1e-10).
pub fn near_zero_tolerance() -> Decimal {
    Decimal::new(1.into(), 10)
}

/// Check if a value is within the near-zero tolerance.
/// The tolerance itself counts as zero.
pub fn is_near_zero(value: &Decimal) -> bool {
    value.abs() <= near_zero_tolerance()
}

/// Index of the first element whose magnitude exceeds the near-zero tolerance.
/// An all-zero (or empty) sequence yields `GeoError::NoNonzeroElements`,
/// which callers are expected to match on.
pub fn first_nonzero_index<'a, I>(values: I) -> ProcResult<usize>
where I: IntoIterator<Item = &'a Decimal>
{
    values.into_iter()
        .position(|value| !is_near_zero(value))
        .ok_or(GeoError::NoNonzeroElements)
}

/// Parse a decimal from text (`"-0.412"`, `"1e-10"`).
pub fn parse_decimal(text: &str) -> ProcResult<Decimal> {
    match Decimal::from_str(text.trim()) {
        Ok(value) => Ok(value),
        Err(_) => Err(GeoError::ParseDecimal(text.to_string())),
    }
}

/// Nearest finite `f64`, for results that leave decimal arithmetic (angles).
pub fn to_f64(value: &Decimal) -> ProcResult<f64> {
    match value.to_f64() {
        Some(float) if float.is_finite() => Ok(float),
        _ => Err(GeoError::NotRepresentable(value.to_string())),
    }
}

/// Divide, keeping `PRECISION` significant digits.
pub(crate) fn divide(numerator: &Decimal, denominator: &Decimal) -> Decimal {
    (numerator / denominator).with_prec(PRECISION)
}

/// Round to `places` decimal places, half to even.
pub fn round_places(value: &Decimal, places: i64) -> Decimal {
    value.with_scale_round(places, RoundingMode::HalfEven)
}

/// Fixed-point text with exactly `places` decimals, never exponent notation.
pub fn format_fixed(value: &Decimal, places: i64) -> String {
    let places = places.max(0);
    let (digits, _) = round_places(value, places)
        .with_scale(places)
        .as_bigint_and_exponent();
    let digits = digits.to_string();
    let (negative, mut text) = match digits.strip_prefix('-') {
        Some(magnitude) => (true, magnitude.to_string()),
        None => (false, digits),
    };

    let places = places as usize;
    if places > 0 {
        if text.len() <= places {
            text = "0".repeat(places + 1 - text.len()) + &text;
        }
        text.insert(text.len() - places, '.');
    }
    if negative {
        text.insert(0, '-');
    }
    text
}

/// Render a value rounded to `DISPLAY_PLACES`.
/// Integral results print without a decimal point.
pub fn display_rounded(value: &Decimal) -> String {
    let rounded = round_places(value, DISPLAY_PLACES);
    if rounded.with_scale(0) == rounded {
        format_fixed(&rounded, 0)
    } else {
        format_fixed(&rounded, DISPLAY_PLACES)
    }
}
