use soroban_sdk::{contracttype, Address, String};

/// Lifecycle of a product. Transitions only move forward, one step at a time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProductState {
    Created = 0,
    Shipped = 1,
    Received = 2,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Farmer = 0,
    Shipper = 1,
    Receiver = 2,
}

/// Role membership of a single account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountRoles {
    pub farmer: bool,
    pub shipper: bool,
    pub receiver: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub origin_farm: String,
    pub metadata_cid: String, // Content identifier of off-chain descriptive data
    pub farmer: Address,
    pub shipper: Option<Address>,
    pub receiver: Option<Address>,
    pub current_owner: Address,
    pub state: ProductState,
    pub created_at: u64,
    pub shipped_at: u64, // 0 until shipped
    pub received_at: u64, // 0 until received
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProvenanceAction {
    Created = 0,
    Shipped = 1,
    Received = 2,
    MetadataUpdated = 3,
}

/// One step in a product's recorded history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProvenanceEntry {
    pub action: ProvenanceAction,
    pub actor: Address,
    pub timestamp: u64,
}
