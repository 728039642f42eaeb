//! Checked balance moves shared by the token contracts.
//!
//! Balances, allowances and supply live in `stellar-tokens` storage. These
//! wrappers reject bad input with a `LedgerError` before `Base` is touched, so
//! callers see a typed failure instead of a library panic.

use soroban_sdk::{Address, Env};
use stellar_tokens::fungible::{emit_transfer, Base as TokenBase};

use crate::error::LedgerError;

pub fn require_positive(amount: i128) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::ZeroAmount);
    }
    Ok(())
}

/// The token contract's own address has no key that can spend from it.
pub fn require_not_sink(env: &Env, to: &Address) -> Result<(), LedgerError> {
    if *to == env.current_contract_address() {
        return Err(LedgerError::ZeroAddress);
    }
    Ok(())
}

pub fn validate_move(env: &Env, to: &Address, amount: i128) -> Result<(), LedgerError> {
    require_positive(amount)?;
    require_not_sink(env, to)
}

pub fn ensure_balance(env: &Env, owner: &Address, amount: i128) -> Result<(), LedgerError> {
    if TokenBase::balance(env, owner) < amount {
        return Err(LedgerError::InsufficientBalanceOrAllowance);
    }
    Ok(())
}

pub fn ensure_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    if TokenBase::allowance(env, owner, spender) < amount {
        return Err(LedgerError::InsufficientBalanceOrAllowance);
    }
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), LedgerError> {
    from.require_auth();
    validate_move(env, to, amount)?;
    ensure_balance(env, from, amount)?;
    TokenBase::update(env, Some(from), Some(to), amount);
    emit_transfer(env, from, to, amount);
    Ok(())
}

pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    validate_move(env, to, amount)?;
    ensure_allowance(env, from, spender, amount)?;
    ensure_balance(env, from, amount)?;
    TokenBase::transfer_from(env, spender, from, to, amount);
    Ok(())
}

pub fn approve(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), LedgerError> {
    // `Base::approve` checks the owner's auth.
    if amount < 0 {
        return Err(LedgerError::InvalidParameter);
    }
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(LedgerError::InvalidParameter);
    }
    TokenBase::approve(env, owner, spender, amount, expiration_ledger);
    Ok(())
}

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), LedgerError> {
    validate_move(env, to, amount)?;
    let supply = TokenBase::total_supply(env);
    if supply.checked_add(amount).is_none() {
        return Err(LedgerError::MathOverflow);
    }
    TokenBase::mint(env, to, amount);
    Ok(())
}
