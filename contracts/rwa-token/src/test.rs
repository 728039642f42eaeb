#![cfg(test)]
use super::*;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, Env, IntoVal, String};

const ONE: i128 = 1_000_000_000_000_000_000;

fn setup(env: &Env) -> (Address, Address, RwaTokenClient<'_>) {
    let admin = Address::generate(env);
    let id = env.register(RwaToken, ());
    let client = RwaTokenClient::new(env, &id);
    env.mock_all_auths();
    client.initialize(
        &admin,
        &String::from_str(env, "Tokenized Real Estate"),
        &String::from_str(env, "RWA"),
    );
    (id, admin, client)
}

#[test]
fn test_metadata() {
    let env = Env::default();
    let (_id, admin, client) = setup(&env);
    assert_eq!(client.decimals(), 18u32);
    assert_eq!(client.symbol(), String::from_str(&env, "RWA"));
    assert_eq!(client.name(), String::from_str(&env, "Tokenized Real Estate"));
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.admin(), admin);
}

#[test]
fn test_mint_requires_whitelisted_recipient() {
    let env = Env::default();
    let (_id, _admin, client) = setup(&env);
    let user = Address::generate(&env);

    assert_eq!(
        client.try_mint(&user, &(10 * ONE)),
        Err(Ok(LedgerError::ComplianceDenied))
    );
    assert_eq!(client.balance(&user), 0);

    client.add_to_whitelist(&user);
    client.mint(&user, &(10 * ONE));
    assert_eq!(client.balance(&user), 10 * ONE);
    assert_eq!(client.total_supply(), 10 * ONE);
}

#[test]
fn test_mint_is_issuer_only() {
    let env = Env::default();
    let (id, _admin, client) = setup(&env);
    let user = Address::generate(&env);
    client.add_to_whitelist(&user);

    env.mock_auths(&[MockAuth {
        address: &user,
        invoke: &MockAuthInvoke {
            contract: &id,
            fn_name: "mint",
            args: (user.clone(), ONE).into_val(&env),
            sub_invokes: &[],
        },
    }]);
    assert!(client.try_mint(&user, &ONE).is_err());
    assert_eq!(client.balance(&user), 0);
}

#[test]
fn test_transfer_to_non_whitelisted_fails() {
    let env = Env::default();
    let (_id, _admin, client) = setup(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.add_to_whitelist(&alice);
    client.mint(&alice, &(5 * ONE));

    assert_eq!(
        client.try_transfer(&alice, &bob, &ONE),
        Err(Ok(LedgerError::ComplianceDenied))
    );
    assert_eq!(client.balance(&alice), 5 * ONE);

    client.add_me_to_whitelist(&bob);
    assert!(client.is_whitelisted(&bob));
    client.transfer(&alice, &bob, &ONE);
    assert_eq!(client.balance(&alice), 4 * ONE);
    assert_eq!(client.balance(&bob), ONE);
}

#[test]
fn test_sender_is_not_screened() {
    let env = Env::default();
    let (_id, _admin, client) = setup(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.add_to_whitelist(&alice);
    client.add_to_whitelist(&bob);
    client.mint(&alice, &(2 * ONE));

    // Delisting freezes inflows only.
    client.remove_from_whitelist(&alice);
    assert!(!client.is_whitelisted(&alice));
    client.transfer(&alice, &bob, &ONE);
    assert_eq!(client.balance(&bob), ONE);
    assert_eq!(
        client.try_transfer(&bob, &alice, &ONE),
        Err(Ok(LedgerError::ComplianceDenied))
    );
}

#[test]
fn test_transfer_rejects_zero_and_sink() {
    let env = Env::default();
    let (id, _admin, client) = setup(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.add_to_whitelist(&alice);
    client.add_to_whitelist(&bob);
    client.mint(&alice, &ONE);

    assert_eq!(
        client.try_transfer(&alice, &bob, &0),
        Err(Ok(LedgerError::ZeroAmount))
    );
    assert_eq!(
        client.try_transfer(&alice, &bob, &-1),
        Err(Ok(LedgerError::ZeroAmount))
    );
    assert_eq!(
        client.try_transfer(&alice, &id, &ONE),
        Err(Ok(LedgerError::ZeroAddress))
    );
}

#[test]
fn test_transfer_insufficient_balance() {
    let env = Env::default();
    let (_id, _admin, client) = setup(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.add_to_whitelist(&alice);
    client.add_to_whitelist(&bob);
    client.mint(&alice, &ONE);

    assert_eq!(
        client.try_transfer(&alice, &bob, &(ONE + 1)),
        Err(Ok(LedgerError::InsufficientBalanceOrAllowance))
    );
}

#[test]
fn test_approve_and_transfer_from() {
    let env = Env::default();
    let (_id, _admin, client) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let dest = Address::generate(&env);
    client.add_to_whitelist(&owner);
    client.add_to_whitelist(&dest);
    client.mint(&owner, &(10 * ONE));

    client.approve(&owner, &spender, &(3 * ONE), &1_000);
    assert_eq!(client.allowance(&owner, &spender), 3 * ONE);

    client.transfer_from(&spender, &owner, &dest, &(2 * ONE));
    assert_eq!(client.balance(&dest), 2 * ONE);
    assert_eq!(client.balance(&owner), 8 * ONE);
    assert_eq!(client.allowance(&owner, &spender), ONE);

    assert_eq!(
        client.try_transfer_from(&spender, &owner, &dest, &(2 * ONE)),
        Err(Ok(LedgerError::InsufficientBalanceOrAllowance))
    );
}

#[test]
fn test_transfer_from_checks_destination() {
    let env = Env::default();
    let (_id, _admin, client) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let outsider = Address::generate(&env);
    client.add_to_whitelist(&owner);
    client.mint(&owner, &ONE);
    client.approve(&owner, &spender, &ONE, &1_000);

    assert_eq!(
        client.try_transfer_from(&spender, &owner, &outsider, &ONE),
        Err(Ok(LedgerError::ComplianceDenied))
    );
    assert_eq!(client.allowance(&owner, &spender), ONE);
}

#[test]
fn test_approve_rejects_negative_amount() {
    let env = Env::default();
    let (_id, _admin, client) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    assert_eq!(
        client.try_approve(&owner, &spender, &-5, &1_000),
        Err(Ok(LedgerError::InvalidParameter))
    );
}

#[test]
fn test_whitelist_admin_only() {
    let env = Env::default();
    let (id, _admin, client) = setup(&env);
    let user = Address::generate(&env);

    env.mock_auths(&[MockAuth {
        address: &user,
        invoke: &MockAuthInvoke {
            contract: &id,
            fn_name: "add_to_whitelist",
            args: (user.clone(),).into_val(&env),
            sub_invokes: &[],
        },
    }]);
    assert!(client.try_add_to_whitelist(&user).is_err());
    assert!(!client.is_whitelisted(&user));
}

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    let (_id, admin, client) = setup(&env);
    assert_eq!(
        client.try_initialize(
            &admin,
            &String::from_str(&env, "Again"),
            &String::from_str(&env, "AGN"),
        ),
        Err(Ok(LedgerError::AlreadyInitialized))
    );
}
