#![cfg(test)]

use crate::test_helpers::*;
use crate::{Xscrow, XscrowClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, FromVal, String, Symbol};

#[test]
fn test_initialize_event() {
    let e = Env::default();
    e.mock_all_auths();
    let contract_id = e.register(Xscrow, ());
    let client = XscrowClient::new(&e, &contract_id);
    let owner = Address::generate(&e);

    client.initialize(
        &owner,
        &Address::generate(&e),
        &Address::generate(&e),
        &Address::generate(&e),
        &String::from_str(&e, IDENTIFIER),
        &Address::generate(&e),
        &MINIMUM_DEPOSIT,
        &MAXIMUM_DEPOSIT,
    );

    let (name, topics, data) = last_event(&e, &contract_id);
    assert_eq!(name, Symbol::new(&e, "initialized"));
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), owner);
    assert_eq!(String::from_val(&e, &data), String::from_str(&e, IDENTIFIER));
}

#[test]
fn test_deposit_event() {
    let s = setup();
    let sponsor = s.funded_payee();
    let payee = Address::generate(&s.e);

    s.client.deposit_to(&sponsor, &payee, &DEPOSIT);

    let (name, topics, data) = last_event(&s.e, &s.contract_id);
    assert_eq!(name, Symbol::new(&s.e, "deposit"));
    assert_eq!(Address::from_val(&s.e, &topics.get(1).unwrap()), payee);
    assert_eq!(
        <(i128, Address)>::from_val(&s.e, &data),
        (DEPOSIT_NET, sponsor)
    );
}

#[test]
fn test_deposit_event_with_full_fee_reports_zero() {
    let s = setup();
    s.client.update_deposit_fee(&s.owner, &100);
    let payee = s.funded_payee();

    s.client.deposit(&payee, &DEPOSIT);

    let (name, _topics, data) = last_event(&s.e, &s.contract_id);
    assert_eq!(name, Symbol::new(&s.e, "deposit"));
    assert_eq!(<(i128, Address)>::from_val(&s.e, &data).0, 0);
}

#[test]
fn test_deposit_fee_updated_event() {
    let s = setup();
    s.client.update_deposit_fee(&s.owner, &7);

    let (name, _topics, data) = last_event(&s.e, &s.contract_id);
    assert_eq!(name, Symbol::new(&s.e, "deposit_fee_updated"));
    assert_eq!(u32::from_val(&s.e, &data), 7);
}

#[test]
fn test_address_updated_events() {
    let s = setup();
    let value = Address::generate(&s.e);

    for (name, call) in [
        ("lender_treasury_updated", 0),
        ("vendor_treasury_updated", 1),
        ("oracle_updated", 2),
        ("successor_updated", 3),
    ] {
        match call {
            0 => s.client.update_lender_treasury(&s.owner, &value),
            1 => s.client.update_vendor_treasury(&s.owner, &value),
            2 => s.client.update_oracle(&s.owner, &value),
            _ => s.client.update_successor(&s.owner, &value),
        }
        let (event, _topics, data) = last_event(&s.e, &s.contract_id);
        assert_eq!(event, Symbol::new(&s.e, name));
        assert_eq!(Address::from_val(&s.e, &data), value);
    }
}

#[test]
fn test_bound_updated_events() {
    let s = setup();

    s.client.update_minimum_deposit_amount(&s.owner, &5);
    let (name, _topics, data) = last_event(&s.e, &s.contract_id);
    assert_eq!(name, Symbol::new(&s.e, "min_deposit_updated"));
    assert_eq!(i128::from_val(&s.e, &data), 5);

    s.client.update_maximum_deposit_amount(&s.owner, &50);
    let (name, _topics, data) = last_event(&s.e, &s.contract_id);
    assert_eq!(name, Symbol::new(&s.e, "max_deposit_updated"));
    assert_eq!(i128::from_val(&s.e, &data), 50);
}

#[test]
fn test_ownership_transferred_event() {
    let s = setup();
    let next = Address::generate(&s.e);
    s.client.transfer_ownership(&s.owner, &next);

    let (name, _topics, data) = last_event(&s.e, &s.contract_id);
    assert_eq!(name, Symbol::new(&s.e, "ownership_transferred"));
    assert_eq!(
        <(Address, Address)>::from_val(&s.e, &data),
        (s.owner.clone(), next)
    );
}

#[test]
fn test_failed_call_emits_nothing() {
    let s = setup();
    let payee = s.funded_payee();
    let _ = s.client.try_deposit(&payee, &(MAXIMUM_DEPOSIT + 1));
    assert!(!emitted(&s.e, &s.contract_id, "deposit"));
}
