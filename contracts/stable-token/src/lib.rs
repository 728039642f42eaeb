#![no_std]
use ledger_common::{fungible, LedgerError};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};
use stellar_tokens::fungible::Base as TokenBase;

pub const DECIMALS: u32 = 6;

#[contracttype]
enum DataKey {
    Initialized,
}

/// Unrestricted USDC-style settlement token with a public faucet mint.
#[contract]
pub struct StableToken;

#[contractimpl]
impl StableToken {
    pub fn initialize(env: Env, name: String, symbol: String) -> Result<(), LedgerError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(LedgerError::AlreadyInitialized);
        }
        TokenBase::set_metadata(&env, DECIMALS, name, symbol);
        env.storage().instance().set(&DataKey::Initialized, &true);
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
        fungible::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        fungible::transfer_from(&env, &spender, &from, &to, amount)
    }

    // Test faucet: anyone may mint.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), LedgerError> {
        fungible::mint(&env, &to, amount)
    }
}
