use ledger_common::LedgerError;
use soroban_sdk::{contracttype, Address, Env};

const TTL_THRESHOLD: u32 = 100_000;
const TTL_EXTEND_TO: u32 = 200_000;

#[contracttype]
pub enum DataKey {
    Admin,
    Initialized,
    Price(Address), // PriceEntry; absent until first set
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceEntry {
    /// Scaled 1e8.
    pub price: u128,
    /// Ledger timestamp of the last set.
    pub updated_at: u64,
}

pub fn require_admin(env: &Env) -> Result<Address, LedgerError> {
    let admin: Address = env
        .storage()
        .persistent()
        .get(&DataKey::Admin)
        .ok_or(LedgerError::NotInitialized)?;
    bump_core_ttl(env);
    admin.require_auth();
    Ok(admin)
}

pub fn read_price(env: &Env, asset: &Address) -> Option<PriceEntry> {
    let key = DataKey::Price(asset.clone());
    let entry: Option<PriceEntry> = env.storage().persistent().get(&key);
    if entry.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    entry
}

pub fn write_price(env: &Env, asset: &Address, entry: &PriceEntry) {
    let key = DataKey::Price(asset.clone());
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn bump_core_ttl(env: &Env) {
    let persistent = env.storage().persistent();
    if persistent.has(&DataKey::Admin) {
        persistent.extend_ttl(&DataKey::Admin, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if env.storage().instance().has(&DataKey::Initialized) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
