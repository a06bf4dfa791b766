use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parcel {
    pub id: u64,
    pub holder: Address,
    pub approved: Option<Address>, // at most one outstanding approval
    pub description: String,
    pub sla_value: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    UnknownParcel = 1,
    NotHolder = 2,
    TransferNotApproved = 3,
    InvalidOwner = 4,
    InvalidTransferee = 5,
}
