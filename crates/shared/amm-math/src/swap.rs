//! Swap pricing: fee deduction, the constant-product output formula, its
//! inverse, and the decay-aware variants used once a pool's base token
//! has rebased away from the curve's internal bookkeeping.

use crate::decimal::{checked_div, round_down_dp, validate_non_negative, TOKEN_DECIMALS};
use crate::error::{AmmError, AmmResult};
use crate::types::{BasisPoints, InternalBalances, BASIS_POINTS_DENOMINATOR};
use rust_decimal::Decimal;

/// Fee owed on a swap of `swap_amount`, at `fee_bp` basis points.
pub fn fee_amount(swap_amount: Decimal, fee_bp: BasisPoints) -> AmmResult<Decimal> {
    let swap_amount = validate_non_negative(swap_amount)?;
    Ok(round_down_dp(
        swap_amount * fee_bp.as_decimal() / Decimal::from(BASIS_POINTS_DENOMINATOR),
        TOKEN_DECIMALS,
    ))
}

/// Constant-product swap output net of fees: the amount of the output
/// token a trader receives for `in_qty` of the input token, given the
/// pool's current `in_reserve`/`out_reserve`.
pub fn qty_out_after_fees(
    in_qty: Decimal,
    in_reserve: Decimal,
    out_reserve: Decimal,
    fee_bp: BasisPoints,
) -> AmmResult<Decimal> {
    let in_qty = validate_non_negative(in_qty)?;
    if in_reserve <= Decimal::ZERO || out_reserve <= Decimal::ZERO {
        return Err(AmmError::InsufficientLiquidity);
    }

    let diff_bp = Decimal::from(BASIS_POINTS_DENOMINATOR) - fee_bp.as_decimal();
    let in_qty_less_fee = round_down_dp(in_qty * diff_bp, TOKEN_DECIMALS);
    let numerator = round_down_dp(in_qty_less_fee * out_reserve, TOKEN_DECIMALS);
    let denominator = in_reserve * Decimal::from(BASIS_POINTS_DENOMINATOR) + in_qty_less_fee;
    let out = checked_div(numerator, denominator)?;
    Ok(round_down_dp(out, 0))
}

/// `impliedQuote = externalBase / Ω`, where `Ω = internalBase /
/// internalQuote`. Preserves the pool's pre-rebase price when one side
/// of a swap must use the curve's stale internal reserve while the other
/// uses the true external one.
fn implied_opposite_reserve(external_base: Decimal, internal: InternalBalances) -> AmmResult<Decimal> {
    let omega = checked_div(
        internal.base_token_reserve_qty,
        internal.quote_token_reserve_qty,
    )?;
    checked_div(external_base, omega)
}

/// Base-out from quote-in, decay-aware. Used when `external_base <
/// internal.base_token_reserve_qty` (quote decay): the base reserve the
/// trader draws against is the real, already-shrunk `external_base`, but
/// the quote side of the curve has not itself decayed, so it is rescaled
/// to `impliedQuote` to hold the pre-rebase price constant.
pub fn base_out_from_quote_in_with_decay(
    quote_in: Decimal,
    external_base: Decimal,
    internal: InternalBalances,
    fee_bp: BasisPoints,
) -> AmmResult<Decimal> {
    let implied_quote = implied_opposite_reserve(external_base, internal)?;
    qty_out_after_fees(quote_in, implied_quote, external_base, fee_bp)
}

/// Quote-out from base-in, decay-aware — the mirror of
/// [`base_out_from_quote_in_with_decay`] for the opposite decay
/// direction (`external_base > internal.base_token_reserve_qty`, a
/// rebase-up). The base side the trader deposits against is the real
/// `external_base`; the quote side is rescaled the same way, by the same
/// `Ω`, just occupying the output position instead of the input one.
pub fn quote_out_from_base_in_with_decay(
    base_in: Decimal,
    external_base: Decimal,
    internal: InternalBalances,
    fee_bp: BasisPoints,
) -> AmmResult<Decimal> {
    let implied_quote = implied_opposite_reserve(external_base, internal)?;
    qty_out_after_fees(base_in, external_base, implied_quote, fee_bp)
}

/// Inverse of [`qty_out_after_fees`]: how much of the input token is
/// needed to receive at least `out_qty` of the output token, with
/// `slip_percent` (0-100) of extra headroom built in.
pub fn qty_in_from_qty_out(
    out_qty: Decimal,
    out_reserve: Decimal,
    in_reserve: Decimal,
    slip_percent: Decimal,
    fee_bp: BasisPoints,
) -> AmmResult<Decimal> {
    if out_qty <= Decimal::ZERO {
        return Err(AmmError::InsufficientQty);
    }
    if out_reserve <= Decimal::ZERO || in_reserve <= Decimal::ZERO {
        return Err(AmmError::InsufficientLiquidity);
    }

    let diff_bp = Decimal::from(BASIS_POINTS_DENOMINATOR) - fee_bp.as_decimal();
    let numerator = out_qty * in_reserve * Decimal::from(BASIS_POINTS_DENOMINATOR);
    let slip_term = out_reserve * (slip_percent / Decimal::from(100u8));
    let denominator = (out_qty + slip_term - out_reserve) * diff_bp;
    if denominator.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(round_down_dp((numerator / denominator).abs(), 0))
}

/// Spot exchange rate `in_reserve / out_reserve`, unrounded.
pub fn exchange_rate(in_reserve: Decimal, out_reserve: Decimal) -> AmmResult<Decimal> {
    let in_reserve = validate_non_negative(in_reserve)?;
    let out_reserve = validate_non_negative(out_reserve)?;
    checked_div(in_reserve, out_reserve)
}

/// Output amount after both the pool fee and `slip_percent` slippage
/// tolerance have been deducted.
pub fn output_amount_less_fees_and_slippage(
    in_qty: Decimal,
    in_reserve: Decimal,
    out_reserve: Decimal,
    slip_percent: Decimal,
    fee_bp: BasisPoints,
) -> AmmResult<Decimal> {
    let raw_out = qty_out_after_fees(in_qty, in_reserve, out_reserve, fee_bp)?;
    let slip_multiplier = Decimal::ONE - slip_percent / Decimal::from(100u8);
    Ok(round_down_dp(raw_out * slip_multiplier, 0))
}

/// Percentage price impact of a swap of `in_qty`, relative to the pool's
/// `initial_rate` (its exchange rate before the swap executes).
pub fn price_impact(
    in_qty: Decimal,
    in_reserve: Decimal,
    out_reserve: Decimal,
    initial_rate: Decimal,
    slip_percent: Decimal,
    fee_bp: BasisPoints,
) -> AmmResult<Decimal> {
    let initial_out = checked_div(in_qty, initial_rate)?;
    if initial_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let out_less_fees_slip =
        output_amount_less_fees_and_slippage(in_qty, in_reserve, out_reserve, slip_percent, fee_bp)?;
    let hundred = Decimal::from(100u8);
    Ok(hundred - (out_less_fees_slip / initial_out * hundred))
}
