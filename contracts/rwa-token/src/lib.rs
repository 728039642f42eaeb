#![no_std]
use ledger_common::{fungible, LedgerError};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use stellar_tokens::fungible::Base as TokenBase;

mod events;
mod storage;

use crate::events::{AdminUpdated, WhitelistUpdated};
use crate::storage::*;

/// Restricted real-world-asset token. Only allow-listed addresses can
/// receive it; senders are not screened.
#[contract]
pub struct RwaToken;

#[contractimpl]
impl RwaToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
    ) -> Result<(), LedgerError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(LedgerError::AlreadyInitialized);
        }
        admin.require_auth();
        TokenBase::set_metadata(&env, DECIMALS, name, symbol);
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Initialized, &true);
        bump_core_ttl(&env);
        AdminUpdated { admin }.publish(&env);
        Ok(())
    }

    pub fn name(env: Env) -> String {
        TokenBase::name(&env)
    }

    pub fn symbol(env: Env) -> String {
        TokenBase::symbol(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenBase::decimals(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        TokenBase::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        TokenBase::balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        TokenBase::allowance(&env, &owner, &spender)
    }

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), LedgerError> {
        fungible::approve(&env, &owner, &spender, amount, expiration_ledger)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        fungible::validate_move(&env, &to, amount)?;
        require_compliant(&env, &to)?;
        fungible::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        fungible::validate_move(&env, &to, amount)?;
        require_compliant(&env, &to)?;
        fungible::transfer_from(&env, &spender, &from, &to, amount)
    }

    /// Issue new units. Issuer only.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), LedgerError> {
        require_admin(&env)?;
        fungible::validate_move(&env, &to, amount)?;
        require_compliant(&env, &to)?;
        fungible::mint(&env, &to, amount)
    }

    pub fn add_to_whitelist(env: Env, account: Address) -> Result<(), LedgerError> {
        require_admin(&env)?;
        set_whitelisted(&env, &account, true);
        WhitelistUpdated {
            account,
            listed: true,
        }
        .publish(&env);
        Ok(())
    }

    /// Self-service enrolment: `account` lists itself.
    pub fn add_me_to_whitelist(env: Env, account: Address) {
        account.require_auth();
        set_whitelisted(&env, &account, true);
        WhitelistUpdated {
            account,
            listed: true,
        }
        .publish(&env);
    }

    pub fn remove_from_whitelist(env: Env, account: Address) -> Result<(), LedgerError> {
        require_admin(&env)?;
        set_whitelisted(&env, &account, false);
        WhitelistUpdated {
            account,
            listed: false,
        }
        .publish(&env);
        Ok(())
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        read_whitelisted(&env, &account)
    }

    pub fn admin(env: Env) -> Result<Address, LedgerError> {
        bump_core_ttl(&env);
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(LedgerError::NotInitialized)
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), LedgerError> {
        require_admin(&env)?;
        env.storage().persistent().set(&DataKey::Admin, &new_admin);
        AdminUpdated { admin: new_admin }.publish(&env);
        Ok(())
    }
}

#[cfg(test)]
mod test;
