#![no_std]
use soroban_sdk::{
    contract, contractimpl, contracttype, log, Address, Env, String
};

mod storage;
mod types;

pub use types::{Error, Parcel};

#[contracttype]
#[derive(Clone, Copy, PartialEq)]
pub enum Event {
    ParcelRegistered,   // (id) -> holder
    TransferApproved,   // (id) -> (holder, transferee)
    ParcelTransferred,  // (id) -> (from, to)
}

#[contract]
pub struct ParcelRegistry;

#[contractimpl]
impl ParcelRegistry {
    /// Register a new parcel in `owner`'s custody and return its id.
    /// Anyone may register; the registry itself can never be the owner.
    pub fn register_parcel(
        e: Env,
        owner: Address,
        description: String,
        sla_value: u64,
    ) -> Result<u64, Error> {
        if owner == e.current_contract_address() {
            return Err(Error::InvalidOwner);
        }

        storage::bump_instance(&e);
        let id = storage::next_id(&e);
        let parcel = Parcel {
            id,
            holder: owner.clone(),
            approved: None,
            description,
            sla_value,
        };

        storage::write_parcel(&e, &parcel);
        storage::move_balance(&e, None, Some(&owner));

        log!(&e, "parcel registered", id, owner);
        e.events().publish((Event::ParcelRegistered, id), owner);
        Ok(id)
    }

    pub fn owner_of(e: Env, parcel_id: u64) -> Result<Address, Error> {
        Ok(Self::get_parcel(e, parcel_id)?.holder)
    }

    /// Current holder names the one account allowed to take custody next.
    /// A new approval replaces any outstanding one.
    pub fn approve_transfer(
        e: Env,
        holder: Address,
        transferee: Address,
        parcel_id: u64,
    ) -> Result<(), Error> {
        holder.require_auth();
        storage::bump_instance(&e);

        let mut parcel = storage::read_parcel(&e, parcel_id).ok_or(Error::UnknownParcel)?;
        if parcel.holder != holder {
            return Err(Error::NotHolder);
        }
        if transferee == holder || transferee == e.current_contract_address() {
            return Err(Error::InvalidTransferee);
        }

        parcel.approved = Some(transferee.clone());
        storage::write_parcel(&e, &parcel);

        e.events().publish((Event::TransferApproved, parcel_id), (holder, transferee));
        Ok(())
    }

    pub fn get_approved(e: Env, parcel_id: u64) -> Result<Option<Address>, Error> {
        Ok(Self::get_parcel(e, parcel_id)?.approved)
    }

    /// Move custody `from` -> `to`. `to` must be the approved transferee and
    /// must sign; the approval is consumed.
    pub fn transfer_parcel(e: Env, from: Address, to: Address, parcel_id: u64) -> Result<(), Error> {
        to.require_auth();
        storage::bump_instance(&e);

        let mut parcel = storage::read_parcel(&e, parcel_id).ok_or(Error::UnknownParcel)?;
        if parcel.holder != from {
            return Err(Error::NotHolder);
        }
        if parcel.approved.as_ref() != Some(&to) {
            return Err(Error::TransferNotApproved);
        }

        // all checks passed; holder and approval change together
        parcel.holder = to.clone();
        parcel.approved = None;
        storage::write_parcel(&e, &parcel);
        storage::move_balance(&e, Some(&from), Some(&to));

        log!(&e, "parcel transferred", parcel_id, from, to);
        e.events().publish((Event::ParcelTransferred, parcel_id), (from, to));
        Ok(())
    }

    pub fn get_parcel(e: Env, parcel_id: u64) -> Result<Parcel, Error> {
        storage::read_parcel(&e, parcel_id).ok_or(Error::UnknownParcel)
    }

    /// Number of parcels registered so far; also the most recent id.
    pub fn parcel_count(e: Env) -> u64 {
        storage::last_id(&e)
    }

    /// Parcels currently in `holder`'s custody.
    pub fn balance_of(e: Env, holder: Address) -> u32 {
        storage::read_balance(&e, &holder)
    }
}
