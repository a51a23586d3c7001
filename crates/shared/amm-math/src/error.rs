use rust_decimal::Decimal;
use thiserror::Error;

/// Every failure mode the math core can produce. Mirrors the error
/// taxonomy of the curve this crate reimplements: one variant per named
/// guard rather than a single catch-all, so callers can match on cause.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    #[error("value is not a finite number")]
    Nan,

    #[error("input must be non-negative")]
    NegativeInput,

    #[error("quantity must be positive")]
    InsufficientQty,

    #[error("pool has insufficient liquidity")]
    InsufficientLiquidity,

    #[error("base token quantity {got} is below the minimum {min}")]
    InsufficientBaseTokenQty { got: Decimal, min: Decimal },

    #[error("quote token quantity {got} is below the minimum {min}")]
    InsufficientQuoteTokenQty { got: Decimal, min: Decimal },

    #[error("base quantity {got} is below the minimum {min}")]
    InsufficientBaseQty { got: Decimal, min: Decimal },

    #[error("quote quantity {got} is below the minimum {min}")]
    InsufficientQuoteQty { got: Decimal, min: Decimal },

    #[error("desired base quantity must be positive")]
    InsufficientBaseQtyDesired,

    #[error("desired quote quantity must be positive")]
    InsufficientQuoteQtyDesired,

    #[error("decay gap is too small relative to the requested minimum")]
    InsufficientDecay,

    #[error("change in decay is not positive")]
    InsufficientChangeInDecay,

    #[error("no decay is present on this pool for the requested side")]
    NoQuoteDecay,

    #[error("token quantity inputs are insufficient")]
    InsufficientTokenQty,
}

pub type AmmResult<T> = Result<T, AmmError>;
