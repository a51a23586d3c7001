use crate::types::BasisPoints;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-pool constants the math core needs but never mutates itself.
/// Governance of these values (who may change `fee_bp`, when) is out of
/// scope here; this is just the typed input the pure functions take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoolParams {
    #[cfg_attr(feature = "serde", serde(default = "PoolParams::default_fee_bp"))]
    pub fee_bp: BasisPoints,
    /// Divisor in the DAO fee growth-in-k formula. The reference curve
    /// hardcodes this to 5; exposed here as a field rather than a
    /// constant so callers can reproduce it exactly without touching the
    /// formula.
    #[cfg_attr(
        feature = "serde",
        serde(default = "PoolParams::default_dao_fee_divisor")
    )]
    pub dao_fee_divisor: u32,
}

impl PoolParams {
    pub const fn new(fee_bp: BasisPoints, dao_fee_divisor: u32) -> Self {
        Self {
            fee_bp,
            dao_fee_divisor,
        }
    }

    const fn default_fee_bp() -> BasisPoints {
        BasisPoints::new(30)
    }

    const fn default_dao_fee_divisor() -> u32 {
        5
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_the_reference_curve_defaults() {
        let params: PoolParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.fee_bp, PoolParams::default_fee_bp());
        assert_eq!(params.dao_fee_divisor, 5);
    }
}
