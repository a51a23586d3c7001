use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fee/slippage rate expressed in hundredths of a percent, e.g. `30` is
/// 0.30%. The curve this crate follows passes these around as raw
/// integers; the newtype exists so a basis-point value can never be
/// mistaken for a token quantity at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BasisPoints(u16);

pub const BASIS_POINTS_DENOMINATOR: u16 = 10_000;

impl BasisPoints {
    /// Caller is expected to keep this within `0..=10_000`; values above
    /// that flip the fee math's sign rather than panicking, so debug
    /// builds assert it instead of paying for a runtime check everywhere.
    pub const fn new(value: u16) -> Self {
        debug_assert!(value <= BASIS_POINTS_DENOMINATOR);
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for BasisPoints {
    fn default() -> Self {
        Self(0)
    }
}

/// The curve's own view of the pool's reserves, as distinct from the
/// reserves actually sitting in the token contracts. Diverges from the
/// external balances whenever the base token rebases underneath the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InternalBalances {
    pub base_token_reserve_qty: Decimal,
    pub quote_token_reserve_qty: Decimal,
    /// `base * quote` as of the last DAO fee checkpoint. Zero before the
    /// pool has ever minted liquidity.
    pub k_last: Decimal,
}

impl InternalBalances {
    pub fn new(base_token_reserve_qty: Decimal, quote_token_reserve_qty: Decimal) -> Self {
        Self {
            base_token_reserve_qty,
            quote_token_reserve_qty,
            k_last: Decimal::ZERO,
        }
    }

    pub fn k(self) -> Decimal {
        self.base_token_reserve_qty * self.quote_token_reserve_qty
    }
}

/// Which side of the pool has decayed relative to the curve's internal
/// bookkeeping, if either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecayDirection {
    None,
    /// External base reserve exceeds the internal one (a rebase-up).
    BaseSurplus,
    /// External base reserve is below the internal one (a rebase-down).
    QuoteSurplus,
}

/// Outcome of a two-sided (pair) liquidity contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PairEntryResult {
    pub base_token_qty: Decimal,
    pub quote_token_qty: Decimal,
    pub liquidity_token_qty: Decimal,
    /// LP tokens minted to the protocol for growth in k since the last
    /// checkpoint. Zero on the pool's first liquidity event.
    pub liquidity_token_fee_qty: Decimal,
}

/// Outcome of a single-sided contribution made to resolve decay.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SingleEntryResult {
    pub single_token_qty: Decimal,
    pub liquidity_token_qty: Decimal,
}
