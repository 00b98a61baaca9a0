use crate::error::SupplyChainError;
use crate::events::*;
use crate::roles;
use crate::storage;
use crate::types::{Product, ProductState, ProvenanceAction, ProvenanceEntry, Role};
use crate::utils;
use soroban_sdk::{log, Address, Env, String, Vec};

pub fn create_product(
    env: &Env,
    caller: Address,
    id: u64,
    name: String,
    origin_farm: String,
) -> Result<(), SupplyChainError> {
    roles::require_role(env, Role::Farmer, &caller)?;

    if id == 0 {
        return Err(SupplyChainError::InvalidProductId);
    }
    if utils::is_blank(&name) {
        return Err(SupplyChainError::EmptyName);
    }
    if utils::is_blank(&origin_farm) {
        return Err(SupplyChainError::EmptyOrigin);
    }
    if storage::has_product(env, id) {
        return Err(SupplyChainError::ProductAlreadyExists);
    }

    let timestamp = utils::now(env);
    let product = Product {
        id,
        name: name.clone(),
        origin_farm: origin_farm.clone(),
        metadata_cid: String::from_str(env, ""),
        farmer: caller.clone(),
        shipper: None,
        receiver: None,
        current_owner: caller.clone(),
        state: ProductState::Created,
        created_at: timestamp,
        shipped_at: 0,
        received_at: 0,
    };

    storage::set_product(env, &product);
    record(env, id, ProvenanceAction::Created, &caller, timestamp);
    log!(env, "product {} created by {}", id, caller);

    emit_product_created(env, id, name, origin_farm, caller);

    Ok(())
}

pub fn ship_product(env: &Env, caller: Address, id: u64) -> Result<(), SupplyChainError> {
    roles::require_role(env, Role::Shipper, &caller)?;

    let mut product = load(env, id)?;
    if product.state != ProductState::Created {
        return Err(SupplyChainError::NotInCreatedState);
    }

    let timestamp = utils::now(env);
    product.state = ProductState::Shipped;
    product.shipper = Some(caller.clone());
    product.current_owner = caller.clone();
    product.shipped_at = timestamp;

    storage::set_product(env, &product);
    record(env, id, ProvenanceAction::Shipped, &caller, timestamp);
    log!(env, "product {} shipped by {}", id, caller);

    emit_product_shipped(env, id, caller);

    Ok(())
}

pub fn receive_product(env: &Env, caller: Address, id: u64) -> Result<(), SupplyChainError> {
    roles::require_role(env, Role::Receiver, &caller)?;

    let mut product = load(env, id)?;
    if product.state != ProductState::Shipped {
        return Err(SupplyChainError::NotInShippedState);
    }

    let timestamp = utils::now(env);
    product.state = ProductState::Received;
    product.receiver = Some(caller.clone());
    product.current_owner = caller.clone();
    product.received_at = timestamp;

    storage::set_product(env, &product);
    record(env, id, ProvenanceAction::Received, &caller, timestamp);
    log!(env, "product {} received by {}", id, caller);

    emit_product_received(env, id, caller);

    Ok(())
}

/// Replaces the metadata CID. Allowed in any state for the owner or the
/// product's farmer. An empty CID clears the pointer.
pub fn set_metadata_cid(
    env: &Env,
    caller: Address,
    id: u64,
    cid: String,
) -> Result<(), SupplyChainError> {
    let mut product = load(env, id)?;

    let is_owner = storage::get_owner(env).map_or(false, |owner| owner == caller);
    if !is_owner && product.farmer != caller {
        return Err(SupplyChainError::NotMetadataEditor);
    }

    product.metadata_cid = cid.clone();

    storage::set_product(env, &product);
    record(env, id, ProvenanceAction::MetadataUpdated, &caller, utils::now(env));
    log!(env, "product {} metadata set by {}", id, caller);

    emit_metadata_updated(env, id, cid, caller);

    Ok(())
}

pub fn get_product(env: &Env, id: u64) -> Result<Product, SupplyChainError> {
    load(env, id)
}

pub fn get_product_state(env: &Env, id: u64) -> Result<ProductState, SupplyChainError> {
    Ok(load(env, id)?.state)
}

pub fn get_product_history(env: &Env, id: u64) -> Result<Vec<ProvenanceEntry>, SupplyChainError> {
    if !storage::has_product(env, id) {
        return Err(SupplyChainError::ProductNotFound);
    }
    Ok(storage::get_history(env, id))
}

pub fn product_exists(env: &Env, id: u64) -> bool {
    storage::has_product(env, id)
}

fn load(env: &Env, id: u64) -> Result<Product, SupplyChainError> {
    storage::get_product(env, id).ok_or(SupplyChainError::ProductNotFound)
}

fn record(env: &Env, id: u64, action: ProvenanceAction, actor: &Address, timestamp: u64) {
    storage::append_history(
        env,
        id,
        ProvenanceEntry {
            action,
            actor: actor.clone(),
            timestamp,
        },
    );
}
