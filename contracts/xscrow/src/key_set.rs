//! Iterable set of payees holding a non-zero balance.
//!
//! Payees occupy dense slots `0..count`; removal moves the last slot into
//! the freed one, so insert and remove touch a constant number of entries.
//! Enumeration order is slot order, which is stable between mutations.

use soroban_sdk::{Address, Env, Vec};

use crate::types::DataKey;

const BUMP_THRESHOLD: u32 = 17_280;
const BUMP_TARGET: u32 = 518_400;

pub fn len(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::PayeeCount).unwrap_or(0)
}

pub fn contains(e: &Env, payee: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::PayeeSlot(payee.clone()))
}

/// Adds `payee`; a no-op if already present.
pub fn insert(e: &Env, payee: &Address) {
    if contains(e, payee) {
        return;
    }
    let slot = len(e);
    write_slot(e, slot, payee);
    e.storage().instance().set(&DataKey::PayeeCount, &(slot + 1));
}

/// Removes `payee`; a no-op if absent.
pub fn remove(e: &Env, payee: &Address) {
    let storage = e.storage().persistent();
    let slot_key = DataKey::PayeeSlot(payee.clone());
    let slot: u32 = match storage.get(&slot_key) {
        Some(slot) => slot,
        None => return,
    };

    // Slots 0..count are always occupied: `insert` fills slot `count` and
    // every removal refills the gap from the last slot before shrinking.
    // A member's slot is therefore below `count`, and slot `last` holds a
    // payee unless storage was altered outside this module.
    let last = len(e) - 1;
    if slot != last {
        let moved: Address = storage
            .get(&DataKey::PayeeAt(last))
            .unwrap_or_else(|| panic!("payee set slot missing"));
        write_slot(e, slot, &moved);
    }
    storage.remove(&DataKey::PayeeAt(last));
    storage.remove(&slot_key);
    e.storage().instance().set(&DataKey::PayeeCount, &last);
}

/// Copies every member into a `Vec`, in slot order.
pub fn snapshot(e: &Env) -> Vec<Address> {
    let storage = e.storage().persistent();
    let mut out = Vec::new(e);
    for slot in 0..len(e) {
        if let Some(payee) = storage.get::<_, Address>(&DataKey::PayeeAt(slot)) {
            out.push_back(payee);
        }
    }
    out
}

fn write_slot(e: &Env, slot: u32, payee: &Address) {
    let storage = e.storage().persistent();
    let at_key = DataKey::PayeeAt(slot);
    let slot_key = DataKey::PayeeSlot(payee.clone());
    storage.set(&at_key, payee);
    storage.set(&slot_key, &slot);
    storage.extend_ttl(&at_key, BUMP_THRESHOLD, BUMP_TARGET);
    storage.extend_ttl(&slot_key, BUMP_THRESHOLD, BUMP_TARGET);
}
