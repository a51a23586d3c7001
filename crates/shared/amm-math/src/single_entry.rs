//! Single-asset liquidity entry: contributing one side of the pool to
//! close a decay gap, minted LP via the gamma formula rather than the
//! plain pro-rata one used for two-sided entries.

use crate::decimal::{checked_div, truncate_to_integer};
use crate::error::{AmmError, AmmResult};
use crate::types::{InternalBalances, SingleEntryResult};
use rust_decimal::Decimal;

/// LP tokens minted for a single-sided contribution that only partially
/// (or fully) closes a decay gap.
///
/// `delta_same_side` is the amount deposited on the side the decay gap
/// sits on; `same_side_reserve` is that side's internal reserve;
/// `opposite_side_change` is the proportional change in the other side's
/// virtual reserve the deposit implies; `opposite_side_decay` is the
/// full size of that gap. Shared by both decay directions since the
/// reference curve derives the same formula for each, just with base and
/// quote swapped.
pub fn gamma_lp_issuance(
    delta_same_side: Decimal,
    same_side_reserve: Decimal,
    opposite_side_change: Decimal,
    opposite_side_decay: Decimal,
    lp_supply: Decimal,
) -> AmmResult<Decimal> {
    let two = Decimal::from(2u8);
    let half_share = checked_div(delta_same_side, same_side_reserve)? / two;
    let decay_share = checked_div(opposite_side_change, opposite_side_decay)?;
    let gamma = half_share * decay_share;

    let one = Decimal::ONE;
    if gamma >= one {
        return Err(AmmError::InsufficientLiquidity);
    }
    let lp = checked_div(lp_supply * gamma, one - gamma)?;
    Ok(truncate_to_integer(lp))
}

/// Add base tokens to resolve quote decay (`external_base <
/// internal.base_token_reserve_qty`): the trader tops up the real base
/// balance toward what the curve already believes it holds.
pub fn add_base_to_resolve_quote_decay(
    base_desired: Decimal,
    base_min: Decimal,
    external_base: Decimal,
    lp_supply: Decimal,
    internal: InternalBalances,
) -> AmmResult<(SingleEntryResult, InternalBalances)> {
    let max_base = internal.base_token_reserve_qty - external_base;
    if base_min >= max_base {
        return Err(AmmError::InsufficientDecay);
    }

    let base = base_desired.min(max_base);
    let ratio = checked_div(
        internal.quote_token_reserve_qty,
        internal.base_token_reserve_qty,
    )?;
    let quote_decay_change = base * ratio;
    if quote_decay_change <= Decimal::ZERO {
        return Err(AmmError::InsufficientChangeInDecay);
    }
    let quote_decay = max_base * ratio;
    if quote_decay <= Decimal::ZERO {
        return Err(AmmError::NoQuoteDecay);
    }

    let lp = gamma_lp_issuance(
        base,
        internal.base_token_reserve_qty,
        quote_decay_change,
        quote_decay,
        lp_supply,
    )?;

    // Unlike the base-decay direction below, nothing here mutates
    // `internal`: the deposited base tokens replenish a real shortfall
    // against a reserve figure that was already correct, so the curve's
    // own bookkeeping needs no adjustment once the external balance
    // catches back up to it.
    Ok((
        SingleEntryResult {
            single_token_qty: base,
            liquidity_token_qty: lp,
        },
        internal,
    ))
}

/// Add quote tokens to resolve base decay (`external_base >
/// internal.base_token_reserve_qty`): the mirror of
/// [`add_base_to_resolve_quote_decay`] for a rebase-up.
pub fn add_quote_to_resolve_base_decay(
    quote_desired: Decimal,
    quote_min: Decimal,
    external_base: Decimal,
    lp_supply: Decimal,
    internal: InternalBalances,
) -> AmmResult<(SingleEntryResult, InternalBalances)> {
    let base_decay = external_base - internal.base_token_reserve_qty;
    if base_decay <= Decimal::ZERO {
        return Err(AmmError::NoQuoteDecay);
    }

    let omega = checked_div(
        internal.base_token_reserve_qty,
        internal.quote_token_reserve_qty,
    )?;
    let max_quote = checked_div(base_decay, omega)?;
    if quote_min >= max_quote {
        return Err(AmmError::InsufficientDecay);
    }

    let quote = quote_desired.min(max_quote);
    let base_decay_change = quote * omega;
    if base_decay_change <= Decimal::ZERO {
        return Err(AmmError::InsufficientChangeInDecay);
    }

    let lp = gamma_lp_issuance(
        quote,
        internal.quote_token_reserve_qty,
        base_decay_change,
        base_decay,
        lp_supply,
    )?;

    let new_internal = InternalBalances {
        base_token_reserve_qty: internal.base_token_reserve_qty + base_decay_change,
        quote_token_reserve_qty: internal.quote_token_reserve_qty + quote,
        k_last: internal.k_last,
    };

    Ok((
        SingleEntryResult {
            single_token_qty: quote,
            liquidity_token_qty: lp,
        },
        new_internal,
    ))
}
