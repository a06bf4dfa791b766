use soroban_sdk::{contracttype, Address, Env};
use crate::types::Parcel;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Counter lives in instance storage; each parcel and each holder count
/// is its own persistent entry, so no call touches more than a few keys.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Next,
    Parcel(u64),
    Balance(Address),
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_record(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

/// Ids start at 1 and are never reused.
pub fn next_id(e: &Env) -> u64 {
    let id = last_id(e) + 1;
    e.storage().instance().set(&DataKey::Next, &id);
    id
}

pub fn last_id(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::Next).unwrap_or(0)
}

pub fn read_parcel(e: &Env, id: u64) -> Option<Parcel> {
    let key = DataKey::Parcel(id);
    let parcel: Option<Parcel> = e.storage().persistent().get(&key);
    if parcel.is_some() {
        bump_record(e, &key);
    }
    parcel
}

pub fn write_parcel(e: &Env, parcel: &Parcel) {
    let key = DataKey::Parcel(parcel.id);
    e.storage().persistent().set(&key, parcel);
    bump_record(e, &key);
}

pub fn read_balance(e: &Env, holder: &Address) -> u32 {
    let key = DataKey::Balance(holder.clone());
    match e.storage().persistent().get::<_, u32>(&key) {
        Some(n) => {
            bump_record(e, &key);
            n
        }
        None => 0,
    }
}

fn write_balance(e: &Env, holder: &Address, n: u32) {
    let key = DataKey::Balance(holder.clone());
    if n == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &n);
        bump_record(e, &key);
    }
}

/// Moves one unit of custody count from `from` (if any) to `to` (if any).
pub fn move_balance(e: &Env, from: Option<&Address>, to: Option<&Address>) {
    if let Some(a) = from {
        let n = read_balance(e, a);
        write_balance(e, a, n.saturating_sub(1));
    }
    if let Some(a) = to {
        let n = read_balance(e, a);
        write_balance(e, a, n + 1);
    }
}
