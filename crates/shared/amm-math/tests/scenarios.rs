//! End-to-end scenarios covering a rebase event and its resolution
//! through both the single-asset and pair-entry liquidity paths.

use athena_amm_math::{
    add_base_to_resolve_quote_decay, add_liquidity, add_quote_to_resolve_base_decay,
    classify_decay, dao_fee_growth_in_k, is_sufficient_decay_present, qty_out_after_fees,
    remove_liquidity, AddLiquidityRequest, BasisPoints, DecayDirection, InternalBalances,
    PoolParams,
};
use rust_decimal_macros::dec;

fn thirty_bp() -> BasisPoints {
    BasisPoints::new(30)
}

#[test]
fn scenario_plain_swap_against_a_balanced_pool() {
    let out = qty_out_after_fees(dec!(1000), dec!(100000), dec!(50000), thirty_bp()).unwrap();
    assert!(out < dec!(500));
    assert!(out > dec!(490));
}

#[test]
fn scenario_rebase_down_creates_quote_decay_then_gets_resolved_by_single_asset_entry() {
    let internal = InternalBalances::new(dec!(100000), dec!(50000));
    let external_base = dec!(95000); // base token rebased down by 5000

    assert!(is_sufficient_decay_present(external_base, internal).unwrap());
    assert_eq!(
        classify_decay(external_base, internal).unwrap(),
        DecayDirection::QuoteSurplus
    );

    let (single, new_internal) = add_base_to_resolve_quote_decay(
        dec!(5000),
        dec!(0),
        external_base,
        dec!(10000),
        internal,
    )
    .unwrap();

    assert_eq!(single.single_token_qty, dec!(5000));
    assert!(single.liquidity_token_qty > dec!(0));
    // internal bookkeeping was already correct pre-rebase; topping up the
    // real shortfall doesn't change it.
    assert_eq!(new_internal, internal);
    // the external base, once topped up by the contribution, lines back
    // up with what internal already believed.
    assert_eq!(external_base + dec!(5000), internal.base_token_reserve_qty);
}

#[test]
fn scenario_rebase_up_creates_base_decay_then_gets_resolved_by_single_asset_entry() {
    let internal = InternalBalances::new(dec!(100000), dec!(50000));
    let external_base = dec!(105000); // base token rebased up by 5000

    assert_eq!(
        classify_decay(external_base, internal).unwrap(),
        DecayDirection::BaseSurplus
    );

    let (single, new_internal) = add_quote_to_resolve_base_decay(
        dec!(10000),
        dec!(0),
        external_base,
        dec!(10000),
        internal,
    )
    .unwrap();

    assert!(single.single_token_qty > dec!(0));
    assert!(new_internal.quote_token_reserve_qty > internal.quote_token_reserve_qty);
    assert!(!is_sufficient_decay_present(external_base, new_internal).unwrap());
}

#[test]
fn scenario_add_liquidity_routes_through_decay_then_pair_residual() {
    let internal = InternalBalances {
        base_token_reserve_qty: dec!(100000),
        quote_token_reserve_qty: dec!(50000),
        k_last: dec!(100000) * dec!(50000),
    };
    let request = AddLiquidityRequest {
        base_desired: dec!(10000),
        quote_desired: dec!(5000),
        base_min: dec!(0),
        quote_min: dec!(0),
        external_base: dec!(95000),
        external_quote: dec!(50000),
        lp_supply: dec!(20000),
        internal,
        params: PoolParams::new(thirty_bp(), 5),
    };

    let (result, new_internal) = add_liquidity(request).unwrap();
    assert!(result.base_token_qty > dec!(0));
    assert!(result.liquidity_token_qty > dec!(0));
    assert!(new_internal.base_token_reserve_qty >= internal.base_token_reserve_qty);
}

#[test]
fn scenario_dao_fee_accrues_only_after_k_grows() {
    let fee_before_growth =
        dao_fee_growth_in_k(dec!(1000), dec!(1000), dec!(1_000_000), dec!(1000), 5).unwrap();
    assert_eq!(fee_before_growth, dec!(0));

    let fee_after_growth =
        dao_fee_growth_in_k(dec!(1100), dec!(1100), dec!(1_000_000), dec!(1000), 5).unwrap();
    assert!(fee_after_growth > dec!(0));
}

#[test]
fn scenario_remove_liquidity_returns_pro_rata_external_shares() {
    let (base, quote) =
        remove_liquidity(dec!(2000), dec!(20000), dec!(100000), dec!(50000), dec!(0)).unwrap();
    assert_eq!(base, dec!(10000));
    assert_eq!(quote, dec!(5000));
}

/// spec's S3: double-asset add against an established, undecayed pool.
/// external=(10000,50000), internal=(10000,50000,5e8), LP supply=22360,
/// base_desired=1000, quote_desired=5000, mins=1,1 -> both desired
/// amounts accepted, ΔLP = 5000*22360/50000 = 2236.
#[test]
fn scenario_s3_double_asset_add_established_pool() {
    let internal = InternalBalances {
        base_token_reserve_qty: dec!(10000),
        quote_token_reserve_qty: dec!(50000),
        k_last: dec!(500000000),
    };
    let request = AddLiquidityRequest {
        base_desired: dec!(1000),
        quote_desired: dec!(5000),
        base_min: dec!(1),
        quote_min: dec!(1),
        external_base: dec!(10000),
        external_quote: dec!(50000),
        lp_supply: dec!(22360),
        internal,
        params: PoolParams::new(thirty_bp(), 5),
    };

    let (result, _) = add_liquidity(request).unwrap();
    assert_eq!(result.base_token_qty, dec!(1000));
    assert_eq!(result.quote_token_qty, dec!(5000));
    assert_eq!(result.liquidity_token_qty, dec!(2236));
}

/// spec's S4: quote-decay single-asset add. internal=(1000,5000,5e6),
/// external_base=950, LP supply=5000, base_desired=50 -> maxBase=50,
/// quoteDecayChange=250, gamma=0.025, ΔLP = 5000*0.025/0.975 ≈ 128.
#[test]
fn scenario_s4_quote_decay_single_asset_add() {
    let internal = InternalBalances {
        base_token_reserve_qty: dec!(1000),
        quote_token_reserve_qty: dec!(5000),
        k_last: dec!(5000000),
    };

    let (result, new_internal) =
        add_base_to_resolve_quote_decay(dec!(50), dec!(0), dec!(950), dec!(5000), internal)
            .unwrap();

    assert_eq!(result.single_token_qty, dec!(50));
    assert_eq!(result.liquidity_token_qty, dec!(128));
    assert_eq!(new_internal, internal);
}
