//! Two-sided ("pair") liquidity entry: contributing base and quote in the
//! pool's existing ratio, and the geometric-mean bootstrap for a pool's
//! very first deposit.

use crate::decimal::{checked_div, decimal_sqrt, round_down_dp, TOKEN_DECIMALS};
use crate::error::{AmmError, AmmResult};
use crate::types::InternalBalances;
use rust_decimal::Decimal;

/// Given desired base/quote amounts, returns the actual `(base, quote)`
/// pair a contributor must deposit to match the pool's current ratio,
/// using as much of the larger desired amount as the ratio allows and
/// trimming the other side down to match.
pub fn required_pair_for_ratio(
    base_desired: Decimal,
    quote_desired: Decimal,
    base_min: Decimal,
    quote_min: Decimal,
    internal: InternalBalances,
) -> AmmResult<(Decimal, Decimal)> {
    // The reference curve's equivalent of this function guards on
    // `baseDesired <= 0 && quoteMin <= 0` before computing the required
    // quote amount. That `&&` is almost certainly meant to be `||`
    // (rejecting either bad input on its own, not only both at once); this
    // applies the corrected guard rather than the original's.
    if base_desired <= Decimal::ZERO || quote_min < Decimal::ZERO {
        return Err(AmmError::InsufficientTokenQty);
    }

    let ratio = checked_div(
        internal.quote_token_reserve_qty,
        internal.base_token_reserve_qty,
    )?;
    let required_quote = round_down_dp(base_desired * ratio, TOKEN_DECIMALS);

    if required_quote <= quote_desired {
        if required_quote < quote_min {
            return Err(AmmError::InsufficientQuoteTokenQty {
                got: required_quote,
                min: quote_min,
            });
        }
        Ok((base_desired, required_quote))
    } else {
        let inverse_ratio = checked_div(
            internal.base_token_reserve_qty,
            internal.quote_token_reserve_qty,
        )?;
        let required_base = round_down_dp(quote_desired * inverse_ratio, TOKEN_DECIMALS);
        if required_base < base_min {
            return Err(AmmError::InsufficientBaseTokenQty {
                got: required_base,
                min: base_min,
            });
        }
        Ok((required_base, quote_desired))
    }
}

/// LP tokens minted for a two-sided contribution of `quote_contributed`
/// against the pool's `external_quote` reserve and current `lp_supply`.
pub fn lp_for_pair_entry(
    quote_contributed: Decimal,
    lp_supply: Decimal,
    external_quote: Decimal,
) -> AmmResult<Decimal> {
    let lp = checked_div(quote_contributed * lp_supply, external_quote)?;
    Ok(round_down_dp(lp, TOKEN_DECIMALS))
}

/// LP tokens minted for a pool's very first liquidity event: the
/// geometric mean of the two deposited amounts.
pub fn first_liquidity(base_desired: Decimal, quote_desired: Decimal) -> AmmResult<Decimal> {
    if base_desired <= Decimal::ZERO {
        return Err(AmmError::InsufficientBaseQtyDesired);
    }
    if quote_desired <= Decimal::ZERO {
        return Err(AmmError::InsufficientQuoteQtyDesired);
    }
    Ok(decimal_sqrt(base_desired * quote_desired))
}
