//! Detects and classifies divergence between a pool's internal
//! bookkeeping and the token balances actually held externally, caused by
//! the base token rebasing underneath the curve.

use crate::decimal::checked_div;
use crate::error::AmmResult;
use crate::types::{DecayDirection, InternalBalances};
use rust_decimal::Decimal;

/// True once the gap between `external_base` and the internal base
/// reserve, expressed in quote-token units via the pool's price ratio
/// `Ω = internalBase / internalQuote`, exceeds one whole quote token.
/// Below that threshold the divergence is treated as dust, not decay.
pub fn is_sufficient_decay_present(
    external_base: Decimal,
    internal: InternalBalances,
) -> AmmResult<bool> {
    let omega = checked_div(
        internal.base_token_reserve_qty,
        internal.quote_token_reserve_qty,
    )?;
    let diff = (external_base - internal.base_token_reserve_qty).abs();
    let divergence_in_quote_units = checked_div(diff, omega)?;
    Ok(divergence_in_quote_units > Decimal::ONE)
}

/// Which side of the pool decay must be resolved through, or `None` if
/// the divergence does not clear [`is_sufficient_decay_present`].
pub fn classify_decay(
    external_base: Decimal,
    internal: InternalBalances,
) -> AmmResult<DecayDirection> {
    if !is_sufficient_decay_present(external_base, internal)? {
        return Ok(DecayDirection::None);
    }
    if external_base > internal.base_token_reserve_qty {
        Ok(DecayDirection::BaseSurplus)
    } else {
        Ok(DecayDirection::QuoteSurplus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn no_decay_when_balances_match() {
        let internal = InternalBalances::new(dec!(1000), dec!(1000));
        assert_eq!(
            classify_decay(dec!(1000), internal).unwrap(),
            DecayDirection::None
        );
    }

    #[test]
    fn dust_divergence_is_not_decay() {
        let internal = InternalBalances::new(dec!(1000), dec!(1000));
        assert!(!is_sufficient_decay_present(dec!(1000.5), internal).unwrap());
    }

    #[test]
    fn base_surplus_detected_on_rebase_up() {
        let internal = InternalBalances::new(dec!(1000), dec!(1000));
        assert_eq!(
            classify_decay(dec!(1010), internal).unwrap(),
            DecayDirection::BaseSurplus
        );
    }

    #[test]
    fn quote_surplus_detected_on_rebase_down() {
        let internal = InternalBalances::new(dec!(1000), dec!(1000));
        assert_eq!(
            classify_decay(dec!(990), internal).unwrap(),
            DecayDirection::QuoteSurplus
        );
    }
}
