//! Fixed-precision arithmetic helpers shared by every pricing module.
//!
//! The reference curve this crate follows does its math in 18-decimal
//! fixed-point (`WAD`) integers. [`rust_decimal::Decimal`] already carries
//! ~28-29 significant digits of exact base-10 precision, so instead of
//! reimplementing a wei-scaled bignum we round explicitly at the same
//! points the reference implementation truncates or rounds, and keep
//! `Decimal` as the single number type throughout.

use crate::error::{AmmError, AmmResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places a token reserve or swap amount is truncated to. The
/// curve this crate mirrors represents on-chain quantities as 18-decimal
/// fixed point; results are rounded to this many places so they stay
/// representable at that scale.
pub const TOKEN_DECIMALS: u32 = 18;

/// 10^18, the fixed-point scale the reference curve stores on-chain
/// quantities at. `Decimal` already tracks its own scale internally, so
/// nothing in this crate multiplies by `wad()` to "enter" fixed-point —
/// it exists for call sites that need to compare against or reproduce a
/// raw on-chain integer.
pub fn wad() -> Decimal {
    Decimal::new(1_000_000_000_000_000_000, 0)
}

/// Round down (toward zero), matching Solidity's default integer division.
pub fn round_down_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::ToZero)
}

/// Round up (away from zero).
pub fn round_up_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::AwayFromZero)
}

/// Round half-to-even, used where the reference curve banker-rounds.
pub fn round_half_even_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

pub fn truncate_to_token_scale(value: Decimal) -> Decimal {
    round_down_dp(value, TOKEN_DECIMALS)
}

pub fn truncate_to_integer(value: Decimal) -> Decimal {
    round_down_dp(value, 0)
}

/// Rejects negative quantities. Shared by every entry point that takes a
/// quantity rather than a ratio, so the guard only needs testing once.
pub fn validate_non_negative(value: Decimal) -> AmmResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(AmmError::NegativeInput);
    }
    Ok(value)
}

/// Division that turns a zero denominator into [`AmmError::InsufficientLiquidity`]
/// rather than panicking, since every denominator in this crate is a
/// pool reserve.
pub fn checked_div(numerator: Decimal, denominator: Decimal) -> AmmResult<Decimal> {
    if denominator.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(numerator / denominator)
}

/// Square root via Newton's method. `Decimal` has no native `sqrt` without
/// the `maths` feature, and the reference curve implements its own
/// bisecting Babylonian method for the geometric-mean LP formula, so this
/// follows the same approach: iterate `x_{n+1} = (x_n + n/x_n) / 2` from a
/// coarse initial guess until two iterations agree, capped so a
/// pathological input can't loop forever.
pub fn decimal_sqrt(value: Decimal) -> Decimal {
    if value.is_sign_negative() || value.is_zero() {
        return Decimal::ZERO;
    }
    if value == Decimal::ONE {
        return Decimal::ONE;
    }

    let two = Decimal::from(2u8);
    let mut x = if value > Decimal::ONE {
        value / two
    } else {
        Decimal::ONE
    };

    for _ in 0..100 {
        let next = (x + value / x) / two;
        if next == x {
            break;
        }
        x = next;
    }
    round_down_dp(x, TOKEN_DECIMALS)
}

/// Integer power, used for the rare spot where the reference curve raises
/// a ratio to a small fixed exponent rather than taking a root.
pub fn pow(base: Decimal, exponent: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let mut b = base;
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result *= b;
        }
        b *= b;
        e >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sqrt_of_perfect_square() {
        assert_eq!(decimal_sqrt(dec!(100)), dec!(10));
    }

    #[test]
    fn sqrt_of_zero_and_negative_is_zero() {
        assert_eq!(decimal_sqrt(dec!(0)), dec!(0));
        assert_eq!(decimal_sqrt(dec!(-5)), dec!(0));
    }

    #[test]
    fn sqrt_of_two_is_close_enough() {
        let root = decimal_sqrt(dec!(2));
        let squared = round_down_dp(root * root, 10);
        assert!((squared - dec!(2)).abs() < dec!(0.0000001));
    }

    #[test]
    fn round_down_truncates_toward_zero() {
        assert_eq!(round_down_dp(dec!(1.999999), 0), dec!(1));
        assert_eq!(round_down_dp(dec!(-1.999999), 0), dec!(-1));
    }

    #[test]
    fn validate_non_negative_rejects_negative_values() {
        assert_eq!(validate_non_negative(dec!(-1)), Err(AmmError::NegativeInput));
        assert_eq!(validate_non_negative(dec!(0)), Ok(dec!(0)));
    }

    #[test]
    fn checked_div_rejects_zero_denominator() {
        assert_eq!(
            checked_div(dec!(1), dec!(0)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        assert_eq!(pow(dec!(3), 4), dec!(81));
        assert_eq!(pow(dec!(2), 0), dec!(1));
    }
}
