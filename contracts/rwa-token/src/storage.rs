use ledger_common::LedgerError;
use soroban_sdk::{contracttype, Address, Env};

pub const DECIMALS: u32 = 18;

const TTL_THRESHOLD: u32 = 100_000;
const TTL_EXTEND_TO: u32 = 200_000;

#[contracttype]
pub enum DataKey {
    Admin,
    Initialized,
    Whitelisted(Address), // bool; absence means not compliant
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

pub fn read_whitelisted(env: &Env, account: &Address) -> bool {
    let key = DataKey::Whitelisted(account.clone());
    let listed = env
        .storage()
        .persistent()
        .get::<_, bool>(&key)
        .unwrap_or(false);
    if listed {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    listed
}

pub fn set_whitelisted(env: &Env, account: &Address, listed: bool) {
    let key = DataKey::Whitelisted(account.clone());
    if listed {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    } else {
        env.storage().persistent().remove(&key);
    }
}

/// Destinations of every balance-increasing move must be allow-listed.
pub fn require_compliant(env: &Env, to: &Address) -> Result<(), LedgerError> {
    if !read_whitelisted(env, to) {
        return Err(LedgerError::ComplianceDenied);
    }
    Ok(())
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
