//! Division helpers used by the function demonstration.

use crate::error::{Error, Result};

/// Floating-point quotient of two integers. A zero divisor yields `0.0`.
pub fn div(num: i64, denom: i64) -> f64 {
    if denom == 0 {
        return 0.0;
    }
    num as f64 / denom as f64
}

/// Truncating quotient and remainder.
///
/// # Errors
///
/// [`Error::DivisionByZero`] if `denom` is zero.
pub fn div_and_remainder(num: i64, denom: i64) -> Result<(i64, i64)> {
    if denom == 0 {
        return Err(Error::DivisionByZero);
    }
    Ok((num / denom, num % denom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div() {
        assert_eq!(div(73, 37), 1.972972972972973);
        assert_eq!(div(1, 0), 0.0);
        assert_eq!(format!("{:.2}", div(73, 37)), "1.97");
    }

    #[test]
    fn test_div_and_remainder() {
        assert_eq!(div_and_remainder(73, 37).unwrap(), (1, 36));
        assert_eq!(div_and_remainder(-7, 2).unwrap(), (-3, -1));
        assert!(matches!(
            div_and_remainder(1, 0),
            Err(Error::DivisionByZero)
        ));
    }
}
