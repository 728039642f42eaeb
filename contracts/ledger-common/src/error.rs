use core::fmt;

use soroban_sdk::contracterror;

/// Failure kinds shared by every ledger contract. The discriminant is the
/// contract error code surfaced to callers.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    ZeroAmount = 3,
    ZeroAddress = 4,
    ComplianceDenied = 5,
    PriceNotSet = 6,
    ExceedsLoanToValue = 7,
    InsufficientPoolLiquidity = 8,
    InsufficientCollateral = 9,
    RepayExceedsDebt = 10,
    PositionHealthy = 11,
    InsufficientBalanceOrAllowance = 12,
    InvalidParameter = 13,
    MathOverflow = 14,
}

impl LedgerError {
    pub fn reason(&self) -> &'static str {
        match self {
            LedgerError::AlreadyInitialized => "contract already initialized",
            LedgerError::NotInitialized => "contract not initialized",
            LedgerError::ZeroAmount => "amount must be greater than zero",
            LedgerError::ZeroAddress => "destination is the unowned sink address",
            LedgerError::ComplianceDenied => "address is not on the compliance allow-list",
            LedgerError::PriceNotSet => "no price has been set for the asset",
            LedgerError::ExceedsLoanToValue => "debt would exceed the maximum loan-to-value",
            LedgerError::InsufficientPoolLiquidity => "pool liquidity cannot cover the borrow",
            LedgerError::InsufficientCollateral => "not enough collateral locked",
            LedgerError::RepayExceedsDebt => "repayment exceeds outstanding debt",
            LedgerError::PositionHealthy => "position is above the liquidation threshold",
            LedgerError::InsufficientBalanceOrAllowance => "balance or allowance too low",
            LedgerError::InvalidParameter => "parameter outside its allowed range",
            LedgerError::MathOverflow => "arithmetic overflow",
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.reason(), *self as u32)
    }
}
