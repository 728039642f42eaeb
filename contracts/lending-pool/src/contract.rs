use ledger_common::math::{self, validate_percent};
use ledger_common::LedgerError;
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::events::*;
use crate::helpers::*;
use crate::storage::*;

/// Over-collateralised stable-token lending against a compliance-gated
/// collateral token.
#[contract]
pub struct LendingPool;

#[contractimpl]
impl LendingPool {
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        collateral_token: Address,
        stable_token: Address,
        max_ltv_percent: u32,
        liquidation_threshold_percent: u32,
    ) -> Result<(), LedgerError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(LedgerError::AlreadyInitialized);
        }
        admin.require_auth();
        validate_percent(max_ltv_percent)?;
        validate_percent(liquidation_threshold_percent)?;

        let collateral_decimals = LedgerTokenClient::new(&env, &collateral_token).decimals();
        let stable_decimals = LedgerTokenClient::new(&env, &stable_token).decimals();
        let config = PoolConfig {
            oracle: oracle.clone(),
            collateral_token: collateral_token.clone(),
            stable_token: stable_token.clone(),
            collateral_decimals,
            stable_decimals,
            max_ltv_percent,
            liquidation_threshold_percent,
        };
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(&DataKey::Config, &config);
        write_liquidity(&env, 0);
        write_totals(&env, &PoolTotals::default());
        env.storage().instance().set(&DataKey::Initialized, &true);
        bump_core_ttl(&env);

        PoolInitialized {
            admin,
            oracle,
            collateral_token,
            stable_token,
            max_ltv_percent,
            liquidation_threshold_percent,
        }
        .publish(&env);
        Ok(())
    }

    /// Deposit stable token as lendable liquidity. Open to any holder.
    pub fn fund_pool(env: Env, provider: Address, amount: u128) -> Result<(), LedgerError> {
        let config = load_config(&env)?;
        provider.require_auth();
        require_positive(amount)?;

        let liquidity = checked_add(read_liquidity(&env), amount)?;
        write_liquidity(&env, liquidity);
        pull(&env, &config.stable_token, &provider, amount)?;

        PoolFunded {
            provider,
            amount,
            pool_liquidity: liquidity,
        }
        .publish(&env);
        Ok(())
    }

    pub fn lock_collateral(env: Env, user: Address, amount: u128) -> Result<(), LedgerError> {
        let config = load_config(&env)?;
        user.require_auth();
        lock_collateral_for(&env, &config, &user, amount)
    }

    pub fn borrow(env: Env, user: Address, amount: u128) -> Result<(), LedgerError> {
        let config = load_config(&env)?;
        user.require_auth();
        borrow_for(&env, &config, &user, amount)
    }

    /// Lock then borrow in one invocation; a failed borrow unwinds the lock.
    pub fn lock_and_borrow(
        env: Env,
        user: Address,
        collateral_amount: u128,
        borrow_amount: u128,
    ) -> Result<(), LedgerError> {
        let config = load_config(&env)?;
        user.require_auth();
        lock_collateral_for(&env, &config, &user, collateral_amount)?;
        borrow_for(&env, &config, &user, borrow_amount)
    }

    pub fn repay(env: Env, user: Address, amount: u128) -> Result<(), LedgerError> {
        let config = load_config(&env)?;
        user.require_auth();
        require_positive(amount)?;

        let mut position = read_position(&env, &user);
        if amount > position.debt_amount {
            return Err(LedgerError::RepayExceedsDebt);
        }
        position.debt_amount -= amount;
        let liquidity = checked_add(read_liquidity(&env), amount)?;
        let mut totals = read_totals(&env);
        totals.total_debt = checked_sub(totals.total_debt, amount)?;

        write_position(&env, &user, &position);
        write_liquidity(&env, liquidity);
        write_totals(&env, &totals);
        pull(&env, &config.stable_token, &user, amount)?;

        Repaid {
            user,
            amount,
            debt_amount: position.debt_amount,
            pool_liquidity: liquidity,
        }
        .publish(&env);
        Ok(())
    }

    pub fn unlock_collateral(env: Env, user: Address, amount: u128) -> Result<(), LedgerError> {
        let config = load_config(&env)?;
        user.require_auth();
        require_positive(amount)?;

        let mut position = read_position(&env, &user);
        if amount > position.collateral_amount {
            return Err(LedgerError::InsufficientCollateral);
        }
        let remaining = position.collateral_amount - amount;
        if position.debt_amount > 0 {
            let value = value_of(&env, &config, remaining)?;
            if !math::within_loan_to_value(value, position.debt_amount, config.max_ltv_percent)? {
                return Err(LedgerError::ExceedsLoanToValue);
            }
        }
        position.collateral_amount = remaining;
        let mut totals = read_totals(&env);
        totals.total_collateral = checked_sub(totals.total_collateral, amount)?;

        write_position(&env, &user, &position);
        write_totals(&env, &totals);
        push(&env, &config.collateral_token, &user, amount)?;

        CollateralUnlocked {
            user,
            amount,
            collateral_amount: remaining,
        }
        .publish(&env);
        Ok(())
    }

    /// Seize an unhealthy position whole: the liquidator repays all of its
    /// debt and receives all of its collateral.
    pub fn liquidate(env: Env, liquidator: Address, user: Address) -> Result<(), LedgerError> {
        let config = load_config(&env)?;
        liquidator.require_auth();

        let position = read_position(&env, &user);
        if !position_is_liquidatable(&env, &config, &position)? {
            return Err(LedgerError::PositionHealthy);
        }
        let debt = position.debt_amount;
        let collateral = position.collateral_amount;
        let liquidity = checked_add(read_liquidity(&env), debt)?;
        let mut totals = read_totals(&env);
        totals.total_debt = checked_sub(totals.total_debt, debt)?;
        totals.total_collateral = checked_sub(totals.total_collateral, collateral)?;

        write_position(&env, &user, &Position::default());
        write_liquidity(&env, liquidity);
        write_totals(&env, &totals);
        pull(&env, &config.stable_token, &liquidator, debt)?;
        if collateral > 0 {
            push(&env, &config.collateral_token, &liquidator, collateral)?;
        }

        Liquidated {
            liquidator,
            user,
            debt_repaid: debt,
            collateral_seized: collateral,
        }
        .publish(&env);
        Ok(())
    }

    pub fn check_compliance(env: Env, user: Address) -> Result<bool, LedgerError> {
        let config = load_config(&env)?;
        Ok(is_compliant(&env, &config, &user))
    }

    pub fn get_position(env: Env, user: Address) -> Result<Position, LedgerError> {
        load_config(&env)?;
        Ok(read_position(&env, &user))
    }

    pub fn get_pool_liquidity(env: Env) -> Result<u128, LedgerError> {
        load_config(&env)?;
        Ok(read_liquidity(&env))
    }

    pub fn get_totals(env: Env) -> Result<PoolTotals, LedgerError> {
        load_config(&env)?;
        Ok(read_totals(&env))
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, LedgerError> {
        load_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        load_config(&env)?;
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(LedgerError::NotInitialized)
    }

    /// Collateral value in stable smallest units at the current price.
    pub fn get_collateral_value(env: Env, user: Address) -> Result<u128, LedgerError> {
        let config = load_config(&env)?;
        let position = read_position(&env, &user);
        value_of(&env, &config, position.collateral_amount)
    }

    /// Additional stable the user could borrow right now, ignoring pool
    /// liquidity.
    pub fn get_max_borrowable(env: Env, user: Address) -> Result<u128, LedgerError> {
        let config = load_config(&env)?;
        let position = read_position(&env, &user);
        let value = value_of(&env, &config, position.collateral_amount)?;
        let cap = math::max_borrowable(value, config.max_ltv_percent)?;
        Ok(cap.saturating_sub(position.debt_amount))
    }

    /// `collateral_value * 100 / debt`; `u128::MAX` when debt is zero.
    pub fn get_health_ratio(env: Env, user: Address) -> Result<u128, LedgerError> {
        let config = load_config(&env)?;
        let position = read_position(&env, &user);
        if position.debt_amount == 0 {
            return Ok(math::INFINITE_HEALTH);
        }
        let value = value_of(&env, &config, position.collateral_amount)?;
        math::health_ratio_percent(value, position.debt_amount)
    }

    pub fn is_liquidatable(env: Env, user: Address) -> Result<bool, LedgerError> {
        let config = load_config(&env)?;
        let position = read_position(&env, &user);
        position_is_liquidatable(&env, &config, &position)
    }
}

fn lock_collateral_for(
    env: &Env,
    config: &PoolConfig,
    user: &Address,
    amount: u128,
) -> Result<(), LedgerError> {
    require_positive(amount)?;
    if !is_compliant(env, config, user) {
        return Err(LedgerError::ComplianceDenied);
    }

    let mut position = read_position(env, user);
    position.collateral_amount = checked_add(position.collateral_amount, amount)?;
    let mut totals = read_totals(env);
    totals.total_collateral = checked_add(totals.total_collateral, amount)?;

    write_position(env, user, &position);
    write_totals(env, &totals);
    pull(env, &config.collateral_token, user, amount)?;

    CollateralLocked {
        user: user.clone(),
        amount,
        collateral_amount: position.collateral_amount,
    }
    .publish(env);
    Ok(())
}

fn borrow_for(
    env: &Env,
    config: &PoolConfig,
    user: &Address,
    amount: u128,
) -> Result<(), LedgerError> {
    require_positive(amount)?;

    let mut position = read_position(env, user);
    let debt = checked_add(position.debt_amount, amount)?;
    let value = value_of(env, config, position.collateral_amount)?;
    if !math::within_loan_to_value(value, debt, config.max_ltv_percent)? {
        return Err(LedgerError::ExceedsLoanToValue);
    }
    let liquidity = read_liquidity(env);
    if amount > liquidity {
        return Err(LedgerError::InsufficientPoolLiquidity);
    }
    let liquidity = liquidity - amount;
    position.debt_amount = debt;
    let mut totals = read_totals(env);
    totals.total_debt = checked_add(totals.total_debt, amount)?;

    write_position(env, user, &position);
    write_liquidity(env, liquidity);
    write_totals(env, &totals);
    push(env, &config.stable_token, user, amount)?;

    Borrowed {
        user: user.clone(),
        amount,
        debt_amount: debt,
        pool_liquidity: liquidity,
    }
    .publish(env);
    Ok(())
}

fn position_is_liquidatable(
    env: &Env,
    config: &PoolConfig,
    position: &Position,
) -> Result<bool, LedgerError> {
    if position.debt_amount == 0 {
        return Ok(false);
    }
    let value = value_of(env, config, position.collateral_amount)?;
    math::is_below_threshold(
        value,
        position.debt_amount,
        config.liquidation_threshold_percent,
    )
}
