//! Elastic AMM Math Core
//!
//! Pure, synchronous pricing and liquidity math for a constant-product
//! pool whose base token can rebase underneath it. No async, no I/O, no
//! logging, no shared mutable state — every function here takes the
//! state it needs by value and returns any updated state alongside its
//! result, so callers (an on-chain contract binding, a simulator, a
//! quoting service) own the question of where that state actually lives.

pub mod decay;
pub mod decimal;
pub mod error;
pub mod liquidity;
pub mod pair_entry;
pub mod params;
pub mod single_entry;
pub mod swap;
pub mod types;

pub use decay::{classify_decay, is_sufficient_decay_present};
pub use decimal::{decimal_sqrt, round_down_dp, round_half_even_dp, round_up_dp, TOKEN_DECIMALS};
pub use error::{AmmError, AmmResult};
pub use liquidity::{add_liquidity, dao_fee_growth_in_k, remove_liquidity, AddLiquidityRequest};
pub use pair_entry::{first_liquidity, lp_for_pair_entry, required_pair_for_ratio};
pub use params::PoolParams;
pub use single_entry::{
    add_base_to_resolve_quote_decay, add_quote_to_resolve_base_decay, gamma_lp_issuance,
};
pub use swap::{
    base_out_from_quote_in_with_decay, exchange_rate, fee_amount, output_amount_less_fees_and_slippage,
    price_impact, qty_in_from_qty_out, qty_out_after_fees, quote_out_from_base_in_with_decay,
};
pub use types::{
    BasisPoints, DecayDirection, InternalBalances, PairEntryResult, SingleEntryResult,
    BASIS_POINTS_DENOMINATOR,
};
