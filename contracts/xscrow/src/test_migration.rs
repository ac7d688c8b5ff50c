#![cfg(test)]

use crate::test_helpers::*;
use crate::ContractError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, FromVal, Symbol};

/// Two payees with deposits, a successor configured, escrow paused.
fn migration_ready<'a>() -> (Setup<'a>, Address, Address, Address) {
    let s = setup();
    let a = s.payee_with_deposit();
    let b = s.payee_with_deposit();
    let successor = Address::generate(&s.e);
    s.client.update_successor(&s.owner, &successor);
    s.client.pause(&s.owner);
    (s, a, b, successor)
}

// ═══════════════════════════════════════════════════════════════════
// 1. Single payee
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_migrate_moves_payee_balance() {
    let (s, a, b, successor) = migration_ready();

    let moved = s.client.migrate(&s.owner, &a);

    let (name, topics, data) = last_event(&s.e, &s.contract_id);
    assert_eq!(name, Symbol::new(&s.e, "payee_migrated"));
    assert_eq!(Address::from_val(&s.e, &topics.get(1).unwrap()), a);
    assert_eq!(
        <(i128, Address)>::from_val(&s.e, &data),
        (DEPOSIT_NET, successor.clone())
    );

    assert_eq!(moved, DEPOSIT_NET);
    assert_eq!(s.balance(&successor), DEPOSIT_NET);
    assert_eq!(s.client.balance_of(&a), 0);
    assert_eq!(s.client.balance_of(&b), DEPOSIT_NET);
    assert_record_consistent(&s, &a);
}

#[test]
fn test_migrate_zero_balance_is_noop() {
    let (s, _a, _b, successor) = migration_ready();
    let nobody = Address::generate(&s.e);

    assert_eq!(s.client.migrate(&s.owner, &nobody), 0);
    assert!(!emitted(&s.e, &s.contract_id, "payee_migrated"));
    assert_eq!(s.balance(&successor), 0);
}

#[test]
fn test_migrate_requires_pause() {
    let s = setup();
    let payee = s.payee_with_deposit();
    s.client.update_successor(&s.owner, &Address::generate(&s.e));
    assert_eq!(
        s.client.try_migrate(&s.owner, &payee),
        Err(Ok(ContractError::NotPaused))
    );
    assert_eq!(
        s.client.try_migrate_all(&s.owner),
        Err(Ok(ContractError::NotPaused))
    );
}

#[test]
fn test_migrate_requires_successor() {
    let s = setup_paused();
    let payee = Address::generate(&s.e);
    assert_eq!(
        s.client.try_migrate(&s.owner, &payee),
        Err(Ok(ContractError::ZeroAddress))
    );
    assert_eq!(
        s.client.try_migrate_all(&s.owner),
        Err(Ok(ContractError::ZeroAddress))
    );
}

#[test]
fn test_migrate_by_non_owner_fails() {
    let (s, a, _b, _successor) = migration_ready();
    assert_eq!(
        s.client.try_migrate(&a, &a),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(
        s.client.try_migrate_all(&a),
        Err(Ok(ContractError::NotOwner))
    );
    assert_eq!(s.client.balance_of(&a), DEPOSIT_NET);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Whole escrow
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_migrate_all_moves_custody_and_zeroes_records() {
    let (s, a, b, successor) = migration_ready();

    let moved = s.client.migrate_all(&s.owner);

    let (name, _topics, data) = last_event(&s.e, &s.contract_id);
    assert_eq!(name, Symbol::new(&s.e, "xscrow_migrated"));
    assert_eq!(
        <(Address, i128)>::from_val(&s.e, &data),
        (successor.clone(), 2 * DEPOSIT_NET)
    );

    assert_eq!(moved, 2 * DEPOSIT_NET);
    assert_eq!(s.balance(&successor), 2 * DEPOSIT_NET);
    assert_eq!(s.balance(&s.contract_id), 0);
    assert!(s.client.migrated());
    assert_eq!(s.client.payees().len(), 0);
    assert_record_consistent(&s, &a);
    assert_record_consistent(&s, &b);
}

#[test]
fn test_migrate_all_includes_unattributed_balance() {
    let (s, _a, _b, successor) = migration_ready();
    let stray = 777_i128;
    soroban_sdk::token::StellarAssetClient::new(&s.e, &s.token)
        .mint(&s.contract_id, &stray);

    assert_eq!(s.client.migrate_all(&s.owner), 2 * DEPOSIT_NET + stray);
    assert_eq!(s.balance(&successor), 2 * DEPOSIT_NET + stray);
}

#[test]
fn test_second_migrate_all_is_noop() {
    let (s, _a, _b, successor) = migration_ready();
    s.client.migrate_all(&s.owner);

    assert_eq!(s.client.migrate_all(&s.owner), 0);
    assert_eq!(s.balance(&successor), 2 * DEPOSIT_NET);
    assert!(s.client.migrated());
}

#[test]
fn test_migrated_flag_survives_unpause() {
    let (s, _a, _b, _successor) = migration_ready();
    s.client.migrate_all(&s.owner);
    s.client.unpause(&s.owner);
    assert!(s.client.migrated());
}

#[test]
fn test_deposit_after_migrate_all_moves_with_migrate() {
    let (s, _a, _b, successor) = migration_ready();
    s.client.migrate_all(&s.owner);
    s.client.unpause(&s.owner);

    let late = s.payee_with_deposit();
    s.client.pause(&s.owner);

    assert_eq!(s.client.migrate_all(&s.owner), 0);
    assert_eq!(s.client.balance_of(&late), DEPOSIT_NET);

    assert_eq!(s.client.migrate(&s.owner, &late), DEPOSIT_NET);
    assert_eq!(s.balance(&successor), 3 * DEPOSIT_NET);
    assert_eq!(s.balance(&s.contract_id), 0);
    assert_record_consistent(&s, &late);
}

#[test]
fn test_migrate_after_partial_migration() {
    let (s, a, _b, successor) = migration_ready();
    s.client.migrate(&s.owner, &a);

    assert_eq!(s.client.migrate_all(&s.owner), DEPOSIT_NET);
    assert_eq!(s.balance(&successor), 2 * DEPOSIT_NET);
}

#[test]
fn test_pending_request_voided_after_migration() {
    let s = setup();
    let payee = s.payee_with_deposit();
    let successor = Address::generate(&s.e);
    s.client.update_successor(&s.owner, &successor);
    let id = s.client.request_partial_withdraw(&payee, &4_500);

    s.client.pause(&s.owner);
    s.client.migrate(&s.owner, &payee);
    s.client.unpause(&s.owner);
    s.answer(id, true);

    assert!(emitted(&s.e, &s.contract_id, "request_voided"));
    assert_eq!(s.balance(&successor), DEPOSIT_NET);
    assert_eq!(s.balance(&payee), DEFAULT_MINT - DEPOSIT);
}
