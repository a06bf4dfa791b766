#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, Address, Env
};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SensorRecord {
    pub parcel_id: u64,
    pub active: bool,
    pub activated_ledger: u32, // sequence of the first activation
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidParcelId = 1,
}

#[contracttype]
#[derive(Clone, Copy, PartialEq)]
pub enum Event {
    SensorActivated,    // (parcel_id) -> ledger
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Operator,           // instance
    Sensor(u64),        // persistent, one entry per parcel
}

fn check_id(parcel_id: u64) -> Result<(), Error> {
    if parcel_id == 0 { return Err(Error::InvalidParcelId); }
    Ok(())
}

fn read_sensor(e: &Env, parcel_id: u64) -> Option<SensorRecord> {
    let key = DataKey::Sensor(parcel_id);
    let record: Option<SensorRecord> = e.storage().persistent().get(&key);
    if record.is_some() {
        e.storage().persistent().extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    record
}

fn write_sensor(e: &Env, record: &SensorRecord) {
    let key = DataKey::Sensor(record.parcel_id);
    e.storage().persistent().set(&key, record);
    e.storage().persistent().extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

#[contract]
pub struct SensorBinding;

#[contractimpl]
impl SensorBinding {
    /// Runs once, at deploy. With an operator set, only it may activate
    /// sensors; there is no way to change it afterwards.
    pub fn __constructor(e: Env, operator: Option<Address>) {
        if let Some(operator) = operator {
            e.storage().instance().set(&DataKey::Operator, &operator);
        }
    }

    pub fn operator(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Operator)
    }

    /// Mark the sensor bound to `parcel_id` active. Repeat calls are no-ops.
    pub fn activate_sensor(e: Env, parcel_id: u64) -> Result<(), Error> {
        check_id(parcel_id)?;
        if let Some(operator) = Self::operator(e.clone()) {
            operator.require_auth();
        }
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if read_sensor(&e, parcel_id).is_some_and(|s| s.active) {
            return Ok(());
        }

        let ledger = e.ledger().sequence();
        write_sensor(&e, &SensorRecord { parcel_id, active: true, activated_ledger: ledger });

        log!(&e, "sensor activated", parcel_id);
        e.events().publish((Event::SensorActivated, parcel_id), ledger);
        Ok(())
    }

    /// False for sensors never activated.
    pub fn get_sensor_status(e: Env, parcel_id: u64) -> Result<bool, Error> {
        Ok(Self::get_sensor(e, parcel_id)?.is_some_and(|s| s.active))
    }

    pub fn get_sensor(e: Env, parcel_id: u64) -> Result<Option<SensorRecord>, Error> {
        check_id(parcel_id)?;
        Ok(read_sensor(&e, parcel_id))
    }
}
