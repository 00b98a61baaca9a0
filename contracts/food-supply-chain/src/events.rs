use crate::types::Role;
use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductCreatedEvent {
    pub id: u64,
    pub name: String,
    pub origin_farm: String,
    pub farmer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductShippedEvent {
    pub id: u64,
    pub shipper: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductReceivedEvent {
    pub id: u64,
    pub receiver: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetadataUpdatedEvent {
    pub id: u64,
    pub cid: String,
    pub updated_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleUpdatedEvent {
    pub account: Address,
    pub role: Role,
    pub enabled: bool,
}

pub fn emit_initialized(env: &Env, owner: Address) {
    env.events().publish((symbol_short!("init"),), owner);
}

pub fn emit_product_created(
    env: &Env,
    id: u64,
    name: String,
    origin_farm: String,
    farmer: Address,
) {
    let event = ProductCreatedEvent {
        id,
        name,
        origin_farm,
        farmer,
    };
    env.events().publish((symbol_short!("created"), id), event);
}

pub fn emit_product_shipped(env: &Env, id: u64, shipper: Address) {
    let event = ProductShippedEvent { id, shipper };
    env.events().publish((symbol_short!("shipped"), id), event);
}

pub fn emit_product_received(env: &Env, id: u64, receiver: Address) {
    let event = ProductReceivedEvent { id, receiver };
    env.events().publish((symbol_short!("received"), id), event);
}

pub fn emit_metadata_updated(env: &Env, id: u64, cid: String, updated_by: Address) {
    let event = MetadataUpdatedEvent {
        id,
        cid,
        updated_by,
    };
    env.events().publish((symbol_short!("metadata"), id), event);
}

pub fn emit_role_updated(env: &Env, account: Address, role: Role, enabled: bool) {
    let event = RoleUpdatedEvent {
        account,
        role,
        enabled,
    };
    env.events().publish((symbol_short!("role"), role), event);
}
