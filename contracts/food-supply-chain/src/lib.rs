#![no_std]

mod error;
mod events;
mod product;
mod roles;
mod storage;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use types::*;

use utils::log_rejection;

#[contract]
pub struct SupplyChain;

#[contractimpl]
impl SupplyChain {
    /// Initialize the contract with its owner. The owner manages roles and may
    /// update any product's metadata.
    pub fn initialize(env: Env, owner: Address) -> Result<(), SupplyChainError> {
        if storage::has_owner(&env) {
            return Err(SupplyChainError::AlreadyInitialized);
        }

        owner.require_auth();

        storage::set_owner(&env, &owner);
        emit_initialized(&env, owner);

        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, SupplyChainError> {
        storage::get_owner(&env).ok_or(SupplyChainError::NotInitialized)
    }

    // Role management
    pub fn set_farmer(
        env: Env,
        caller: Address,
        account: Address,
        enabled: bool,
    ) -> Result<(), SupplyChainError> {
        Self::set_role(env, caller, Role::Farmer, account, enabled)
    }

    pub fn set_shipper(
        env: Env,
        caller: Address,
        account: Address,
        enabled: bool,
    ) -> Result<(), SupplyChainError> {
        Self::set_role(env, caller, Role::Shipper, account, enabled)
    }

    pub fn set_receiver(
        env: Env,
        caller: Address,
        account: Address,
        enabled: bool,
    ) -> Result<(), SupplyChainError> {
        Self::set_role(env, caller, Role::Receiver, account, enabled)
    }

    pub fn set_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
        enabled: bool,
    ) -> Result<(), SupplyChainError> {
        Self::check_initialized(&env)?;
        caller.require_auth();

        log_rejection(
            &env,
            symbol_short!("set_role"),
            roles::set_role(&env, &caller, role, account, enabled),
        )
    }

    pub fn is_farmer(env: Env, account: Address) -> bool {
        roles::has_role(&env, Role::Farmer, &account)
    }

    pub fn is_shipper(env: Env, account: Address) -> bool {
        roles::has_role(&env, Role::Shipper, &account)
    }

    pub fn is_receiver(env: Env, account: Address) -> bool {
        roles::has_role(&env, Role::Receiver, &account)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        roles::has_role(&env, role, &account)
    }

    pub fn get_roles(env: Env, account: Address) -> AccountRoles {
        roles::get_roles(&env, &account)
    }

    // Product lifecycle
    pub fn create_product(
        env: Env,
        caller: Address,
        id: u64,
        name: String,
        origin_farm: String,
    ) -> Result<(), SupplyChainError> {
        Self::check_initialized(&env)?;
        caller.require_auth();

        log_rejection(
            &env,
            symbol_short!("create"),
            product::create_product(&env, caller, id, name, origin_farm),
        )
    }

    pub fn ship_product(env: Env, caller: Address, id: u64) -> Result<(), SupplyChainError> {
        Self::check_initialized(&env)?;
        caller.require_auth();

        log_rejection(
            &env,
            symbol_short!("ship"),
            product::ship_product(&env, caller, id),
        )
    }

    pub fn receive_product(env: Env, caller: Address, id: u64) -> Result<(), SupplyChainError> {
        Self::check_initialized(&env)?;
        caller.require_auth();

        log_rejection(
            &env,
            symbol_short!("receive"),
            product::receive_product(&env, caller, id),
        )
    }

    pub fn set_metadata_cid(
        env: Env,
        caller: Address,
        id: u64,
        cid: String,
    ) -> Result<(), SupplyChainError> {
        Self::check_initialized(&env)?;
        caller.require_auth();

        log_rejection(
            &env,
            symbol_short!("metadata"),
            product::set_metadata_cid(&env, caller, id, cid),
        )
    }

    // Reads
    pub fn get_product(env: Env, id: u64) -> Result<Product, SupplyChainError> {
        product::get_product(&env, id)
    }

    pub fn get_product_state(env: Env, id: u64) -> Result<ProductState, SupplyChainError> {
        product::get_product_state(&env, id)
    }

    pub fn get_product_history(
        env: Env,
        id: u64,
    ) -> Result<Vec<ProvenanceEntry>, SupplyChainError> {
        product::get_product_history(&env, id)
    }

    pub fn product_exists(env: Env, id: u64) -> bool {
        product::product_exists(&env, id)
    }

    fn check_initialized(env: &Env) -> Result<(), SupplyChainError> {
        if !storage::has_owner(env) {
            return Err(SupplyChainError::NotInitialized);
        }
        Ok(())
    }
}
