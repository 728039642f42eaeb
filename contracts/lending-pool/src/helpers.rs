use ledger_common::math::{self, to_i128};
use ledger_common::LedgerError;
use soroban_sdk::{Address, Env};

use crate::constants::*;
use crate::storage::*;

/// Collapse a generated `try_` client result into a `LedgerError`. Failures
/// that carry no contract error (host traps, bad return values) become
/// `fallback`.
pub fn settle<T, C, I>(
    result: Result<Result<T, C>, Result<LedgerError, I>>,
    fallback: LedgerError,
) -> Result<T, LedgerError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err),
        _ => Err(fallback),
    }
}

pub fn require_positive(amount: u128) -> Result<(), LedgerError> {
    if amount == 0 {
        return Err(LedgerError::ZeroAmount);
    }
    Ok(())
}

pub fn load_config(env: &Env) -> Result<PoolConfig, LedgerError> {
    if !env.storage().instance().has(&DataKey::Initialized) {
        return Err(LedgerError::NotInitialized);
    }
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)?;
    bump_core_ttl(env);
    Ok(config)
}

pub fn read_position(env: &Env, user: &Address) -> Position {
    let key = DataKey::Position(user.clone());
    match env.storage().persistent().get::<_, Position>(&key) {
        Some(position) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            position
        }
        None => Position::default(),
    }
}

pub fn write_position(env: &Env, user: &Address, position: &Position) {
    let key = DataKey::Position(user.clone());
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn read_liquidity(env: &Env) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::PoolLiquidity)
        .unwrap_or(0u128)
}

pub fn write_liquidity(env: &Env, liquidity: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::PoolLiquidity, &liquidity);
}

pub fn read_totals(env: &Env) -> PoolTotals {
    env.storage()
        .persistent()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

pub fn write_totals(env: &Env, totals: &PoolTotals) {
    env.storage().persistent().set(&DataKey::Totals, totals);
}

pub fn checked_add(a: u128, b: u128) -> Result<u128, LedgerError> {
    a.checked_add(b).ok_or(LedgerError::MathOverflow)
}

pub fn checked_sub(a: u128, b: u128) -> Result<u128, LedgerError> {
    a.checked_sub(b).ok_or(LedgerError::MathOverflow)
}

/// Move `amount` of `token` from `from` into the pool. Needs a prior
/// `approve` naming the pool as spender.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: u128) -> Result<(), LedgerError> {
    let pool = env.current_contract_address();
    let amount = to_i128(amount)?;
    settle(
        LedgerTokenClient::new(env, token).try_transfer_from(&pool, from, &pool, &amount),
        LedgerError::InsufficientBalanceOrAllowance,
    )
}

/// Pay `amount` of `token` out of the pool's own balance.
pub fn push(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
    let pool = env.current_contract_address();
    let amount = to_i128(amount)?;
    settle(
        LedgerTokenClient::new(env, token).try_transfer(&pool, to, &amount),
        LedgerError::InsufficientBalanceOrAllowance,
    )
}

pub fn collateral_price(env: &Env, config: &PoolConfig) -> Result<u128, LedgerError> {
    settle(
        PriceFeedClient::new(env, &config.oracle).try_get_price(&config.collateral_token),
        LedgerError::PriceNotSet,
    )
}

/// Value of `collateral_amount` in stable smallest units. An empty position is
/// worth zero without consulting the oracle.
pub fn value_of(env: &Env, config: &PoolConfig, collateral_amount: u128) -> Result<u128, LedgerError> {
    if collateral_amount == 0 {
        return Ok(0);
    }
    let price = collateral_price(env, config)?;
    math::collateral_value(
        collateral_amount,
        price,
        config.collateral_decimals,
        config.stable_decimals,
    )
}

pub fn is_compliant(env: &Env, config: &PoolConfig, user: &Address) -> bool {
    matches!(
        ComplianceRegistryClient::new(env, &config.collateral_token).try_is_whitelisted(user),
        Ok(Ok(true))
    )
}

pub fn bump_core_ttl(env: &Env) {
    let persistent = env.storage().persistent();
    for key in [DataKey::Admin, DataKey::Config, DataKey::PoolLiquidity, DataKey::Totals] {
        if persistent.has(&key) {
            persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
        }
    }
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
