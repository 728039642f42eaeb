#![no_std]
use ledger_common::math::PRICE_DECIMALS;
use ledger_common::LedgerError;
use soroban_sdk::{contract, contractimpl, Address, Env};

mod events;
mod storage;

use crate::events::{AdminUpdated, PriceUpdated};
pub use crate::storage::PriceEntry;
use crate::storage::*;

#[contract]
pub struct PriceOracle;

#[contractimpl]
impl PriceOracle {
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(LedgerError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Initialized, &true);
        bump_core_ttl(&env);
        AdminUpdated { admin }.publish(&env);
        Ok(())
    }

    /// Overwrite the price of `asset` (scaled 1e8). Zero is a valid price.
    pub fn set_price(env: Env, asset: Address, price: u128) -> Result<(), LedgerError> {
        require_admin(&env)?;
        let entry = PriceEntry {
            price,
            updated_at: env.ledger().timestamp(),
        };
        write_price(&env, &asset, &entry);
        PriceUpdated {
            asset,
            price,
            updated_at: entry.updated_at,
        }
        .publish(&env);
        Ok(())
    }

    pub fn get_price(env: Env, asset: Address) -> Result<u128, LedgerError> {
        read_price(&env, &asset)
            .map(|entry| entry.price)
            .ok_or(LedgerError::PriceNotSet)
    }

    pub fn get_price_entry(env: Env, asset: Address) -> Option<PriceEntry> {
        read_price(&env, &asset)
    }

    pub fn decimals(_env: Env) -> u32 {
        PRICE_DECIMALS
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
