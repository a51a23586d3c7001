//! Top-level add/remove liquidity orchestration: routes a contribution
//! through the first-liquidity, decay-resolution, and pair-entry paths in
//! sequence, and handles proportional withdrawal.

use crate::decay::is_sufficient_decay_present;
use crate::decimal::{checked_div, decimal_sqrt, round_down_dp, validate_non_negative, TOKEN_DECIMALS};
use crate::error::{AmmError, AmmResult};
use crate::pair_entry::{first_liquidity, lp_for_pair_entry, required_pair_for_ratio};
use crate::params::PoolParams;
use crate::single_entry::{add_base_to_resolve_quote_decay, add_quote_to_resolve_base_decay};
use crate::types::{InternalBalances, PairEntryResult};
use rust_decimal::Decimal;

/// Everything [`add_liquidity`] needs to know about the pool and the
/// contribution being made.
#[derive(Debug, Clone, Copy)]
pub struct AddLiquidityRequest {
    pub base_desired: Decimal,
    pub quote_desired: Decimal,
    pub base_min: Decimal,
    pub quote_min: Decimal,
    pub external_base: Decimal,
    pub external_quote: Decimal,
    pub lp_supply: Decimal,
    pub internal: InternalBalances,
    pub params: PoolParams,
}

/// LP tokens minted to the protocol for the growth in `k = base * quote`
/// since the last checkpoint, following the Uniswap-style
/// `sqrt(k) - sqrt(k_last)` formula with the curve's own divisor.
pub fn dao_fee_growth_in_k(
    internal_base: Decimal,
    internal_quote: Decimal,
    k_last: Decimal,
    lp_supply: Decimal,
    dao_fee_divisor: u32,
) -> AmmResult<Decimal> {
    let root_k = decimal_sqrt(internal_base * internal_quote);
    let root_k_last = decimal_sqrt(k_last);
    if root_k <= root_k_last {
        return Ok(Decimal::ZERO);
    }
    let numerator = lp_supply * (root_k - root_k_last);
    let denominator = root_k * Decimal::from(dao_fee_divisor) + root_k_last;
    Ok(round_down_dp(checked_div(numerator, denominator)?, TOKEN_DECIMALS))
}

/// Adds liquidity to the pool, routing through whichever of the three
/// paths applies:
///
/// - the pool has no liquidity yet: geometric-mean bootstrap.
/// - the pool has liquidity and no decay: plain pair entry at the
///   current ratio.
/// - the pool has liquidity and decay: close as much of the gap as the
///   contribution allows via the single-asset path, then contribute any
///   remainder as a pair entry against the post-decay ratio.
pub fn add_liquidity(request: AddLiquidityRequest) -> AmmResult<(PairEntryResult, InternalBalances)> {
    let AddLiquidityRequest {
        base_desired,
        quote_desired,
        base_min,
        quote_min,
        external_base,
        external_quote,
        lp_supply,
        internal,
        params,
    } = request;

    if lp_supply.is_zero() {
        let lp = first_liquidity(base_desired, quote_desired)?;
        let new_internal = InternalBalances {
            base_token_reserve_qty: base_desired,
            quote_token_reserve_qty: quote_desired,
            k_last: base_desired * quote_desired,
        };
        return Ok((
            PairEntryResult {
                base_token_qty: base_desired,
                quote_token_qty: quote_desired,
                liquidity_token_qty: lp,
                liquidity_token_fee_qty: Decimal::ZERO,
            },
            new_internal,
        ));
    }

    let fee = dao_fee_growth_in_k(
        internal.base_token_reserve_qty,
        internal.quote_token_reserve_qty,
        internal.k_last,
        lp_supply,
        params.dao_fee_divisor,
    )?;
    let lp_supply_with_fee = lp_supply + fee;

    if !is_sufficient_decay_present(external_base, internal)? {
        let (base, quote) =
            required_pair_for_ratio(base_desired, quote_desired, base_min, quote_min, internal)?;
        let lp = lp_for_pair_entry(quote, lp_supply_with_fee, external_quote)?;
        return Ok((
            PairEntryResult {
                base_token_qty: base,
                quote_token_qty: quote,
                liquidity_token_qty: lp,
                liquidity_token_fee_qty: fee,
            },
            internal,
        ));
    }

    let (mut base_total, mut quote_total, mut lp_total, post_decay_internal, post_decay_supply) =
        if external_base > internal.base_token_reserve_qty {
            let (single, new_internal) = add_quote_to_resolve_base_decay(
                quote_desired,
                Decimal::ZERO,
                external_base,
                lp_supply_with_fee,
                internal,
            )?;
            (
                Decimal::ZERO,
                single.single_token_qty,
                single.liquidity_token_qty,
                new_internal,
                lp_supply_with_fee + single.liquidity_token_qty,
            )
        } else {
            let (single, new_internal) = add_base_to_resolve_quote_decay(
                base_desired,
                Decimal::ZERO,
                external_base,
                lp_supply_with_fee,
                internal,
            )?;
            (
                single.single_token_qty,
                Decimal::ZERO,
                single.liquidity_token_qty,
                new_internal,
                lp_supply_with_fee + single.liquidity_token_qty,
            )
        };

    let base_remaining = base_desired - base_total;
    let quote_remaining = quote_desired - quote_total;
    if base_remaining > Decimal::ZERO && quote_remaining > Decimal::ZERO {
        let (base, quote) = required_pair_for_ratio(
            base_remaining,
            quote_remaining,
            Decimal::ZERO,
            Decimal::ZERO,
            post_decay_internal,
        )?;
        let lp = lp_for_pair_entry(quote, post_decay_supply, external_quote)?;
        base_total += base;
        quote_total += quote;
        lp_total += lp;
    }

    if base_total < base_min {
        return Err(AmmError::InsufficientBaseQty {
            got: base_total,
            min: base_min,
        });
    }
    if quote_total < quote_min {
        return Err(AmmError::InsufficientQuoteQty {
            got: quote_total,
            min: quote_min,
        });
    }

    Ok((
        PairEntryResult {
            base_token_qty: base_total,
            quote_token_qty: quote_total,
            liquidity_token_qty: lp_total,
            liquidity_token_fee_qty: fee,
        },
        post_decay_internal,
    ))
}

/// Proportional withdrawal: burns `lp_to_redeem` of `lp_supply` for a
/// `(base, quote)` share of the pool's *external* reserves, discounted by
/// `slip_percent` (0-100) of slippage tolerance.
pub fn remove_liquidity(
    lp_to_redeem: Decimal,
    lp_supply: Decimal,
    external_base: Decimal,
    external_quote: Decimal,
    slip_percent: Decimal,
) -> AmmResult<(Decimal, Decimal)> {
    let lp_to_redeem = validate_non_negative(lp_to_redeem)?;
    if lp_supply <= Decimal::ZERO {
        return Err(AmmError::InsufficientLiquidity);
    }

    let ratio = checked_div(lp_to_redeem, lp_supply)?;
    let slip_multiplier = Decimal::ONE - slip_percent / Decimal::from(100u8);
    let base_received = round_down_dp(external_base * ratio * slip_multiplier, TOKEN_DECIMALS);
    let quote_received = round_down_dp(external_quote * ratio * slip_multiplier, TOKEN_DECIMALS);
    Ok((base_received, quote_received))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params() -> PoolParams {
        PoolParams::new(crate::types::BasisPoints::new(30), 5)
    }

    #[test]
    fn first_deposit_bootstraps_via_geometric_mean() {
        let request = AddLiquidityRequest {
            base_desired: dec!(100),
            quote_desired: dec!(100),
            base_min: dec!(0),
            quote_min: dec!(0),
            external_base: dec!(0),
            external_quote: dec!(0),
            lp_supply: dec!(0),
            internal: InternalBalances::new(dec!(0), dec!(0)),
            params: params(),
        };
        let (result, internal) = add_liquidity(request).unwrap();
        assert_eq!(result.liquidity_token_qty, dec!(100));
        assert_eq!(internal.k_last, dec!(10000));
    }

    #[test]
    fn pair_entry_without_decay_mints_pro_rata() {
        let internal = InternalBalances {
            base_token_reserve_qty: dec!(1000),
            quote_token_reserve_qty: dec!(1000),
            k_last: dec!(1000) * dec!(1000),
        };
        let request = AddLiquidityRequest {
            base_desired: dec!(100),
            quote_desired: dec!(100),
            base_min: dec!(0),
            quote_min: dec!(0),
            external_base: dec!(1000),
            external_quote: dec!(1000),
            lp_supply: dec!(1000),
            internal,
            params: params(),
        };
        let (result, _) = add_liquidity(request).unwrap();
        assert_eq!(result.base_token_qty, dec!(100));
        assert_eq!(result.quote_token_qty, dec!(100));
        assert_eq!(result.liquidity_token_qty, dec!(100));
    }

    #[test]
    fn remove_liquidity_is_pro_rata_on_external_reserves() {
        let (base, quote) =
            remove_liquidity(dec!(100), dec!(1000), dec!(5000), dec!(5000), dec!(0)).unwrap();
        assert_eq!(base, dec!(500));
        assert_eq!(quote, dec!(500));
    }

    #[test]
    fn remove_liquidity_applies_slippage_discount() {
        let (base, _) =
            remove_liquidity(dec!(100), dec!(1000), dec!(5000), dec!(5000), dec!(1)).unwrap();
        assert_eq!(base, dec!(495));
    }

    #[test]
    fn remove_liquidity_rejects_zero_supply() {
        assert_eq!(
            remove_liquidity(dec!(10), dec!(0), dec!(100), dec!(100), dec!(0)),
            Err(AmmError::InsufficientLiquidity)
        );
    }
}
