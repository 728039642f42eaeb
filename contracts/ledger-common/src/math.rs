//! Fixed-point helpers for collateral valuation and risk checks.
//!
//! Prices carry `PRICE_DECIMALS` fractional digits. Values are expressed in
//! the stable token's smallest unit, percentages are whole numbers out of 100.

use crate::error::LedgerError;

pub const PRICE_DECIMALS: u32 = 8;
pub const PRICE_SCALE: u128 = 100_000_000u128; // 1e8
pub const PERCENT_SCALE: u128 = 100u128;
pub const INFINITE_HEALTH: u128 = u128::MAX;
const MAX_POW10: u32 = 38;

pub fn pow10(exp: u32) -> Result<u128, LedgerError> {
    if exp > MAX_POW10 {
        return Err(LedgerError::MathOverflow);
    }
    Ok(10u128.pow(exp))
}

/// Percent parameters live in `(0, 100]`.
pub fn validate_percent(percent: u32) -> Result<(), LedgerError> {
    if percent == 0 || percent as u128 > PERCENT_SCALE {
        return Err(LedgerError::InvalidParameter);
    }
    Ok(())
}

/// `amount * price / PRICE_SCALE`, rescaled from collateral decimals to
/// stable decimals.
pub fn collateral_value(
    amount: u128,
    price: u128,
    collateral_decimals: u32,
    stable_decimals: u32,
) -> Result<u128, LedgerError> {
    let gross = amount
        .checked_mul(price)
        .ok_or(LedgerError::MathOverflow)?;
    if collateral_decimals >= stable_decimals {
        let divisor = PRICE_SCALE
            .checked_mul(pow10(collateral_decimals - stable_decimals)?)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(gross / divisor)
    } else {
        let scaled = gross
            .checked_mul(pow10(stable_decimals - collateral_decimals)?)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(scaled / PRICE_SCALE)
    }
}

pub fn percent_of(value: u128, percent: u32) -> Result<u128, LedgerError> {
    value
        .checked_mul(percent as u128)
        .map(|v| v / PERCENT_SCALE)
        .ok_or(LedgerError::MathOverflow)
}

pub fn max_borrowable(collateral_value: u128, max_ltv_percent: u32) -> Result<u128, LedgerError> {
    percent_of(collateral_value, max_ltv_percent)
}

pub fn within_loan_to_value(
    collateral_value: u128,
    debt: u128,
    max_ltv_percent: u32,
) -> Result<bool, LedgerError> {
    if debt == 0 {
        return Ok(true);
    }
    Ok(debt <= max_borrowable(collateral_value, max_ltv_percent)?)
}

/// Returns `INFINITE_HEALTH` for debt-free positions.
pub fn health_ratio_percent(collateral_value: u128, debt: u128) -> Result<u128, LedgerError> {
    if debt == 0 {
        return Ok(INFINITE_HEALTH);
    }
    collateral_value
        .checked_mul(PERCENT_SCALE)
        .map(|v| v / debt)
        .ok_or(LedgerError::MathOverflow)
}

/// `collateral_value * 100 < debt * threshold`, compared without division.
pub fn is_below_threshold(
    collateral_value: u128,
    debt: u128,
    threshold_percent: u32,
) -> Result<bool, LedgerError> {
    if debt == 0 {
        return Ok(false);
    }
    let lhs = collateral_value
        .checked_mul(PERCENT_SCALE)
        .ok_or(LedgerError::MathOverflow)?;
    let rhs = debt
        .checked_mul(threshold_percent as u128)
        .ok_or(LedgerError::MathOverflow)?;
    Ok(lhs < rhs)
}

pub fn to_i128(amount: u128) -> Result<i128, LedgerError> {
    i128::try_from(amount).map_err(|_| LedgerError::MathOverflow)
}
