use crate::error::SupplyChainError;
use crate::events::emit_role_updated;
use crate::storage;
use crate::types::{AccountRoles, Role};
use soroban_sdk::{log, Address, Env};

/// Ensures `caller` is the owner fixed at initialization.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), SupplyChainError> {
    let owner = storage::get_owner(env).ok_or(SupplyChainError::NotInitialized)?;
    if owner != *caller {
        return Err(SupplyChainError::NotOwner);
    }
    Ok(())
}

pub fn require_role(env: &Env, role: Role, caller: &Address) -> Result<(), SupplyChainError> {
    if storage::has_role(env, role, caller) {
        return Ok(());
    }
    Err(match role {
        Role::Farmer => SupplyChainError::NotFarmer,
        Role::Shipper => SupplyChainError::NotShipper,
        Role::Receiver => SupplyChainError::NotReceiver,
    })
}

/// Grants or clears `role` for `account`. Setting a role to its current value
/// succeeds and still publishes the update.
pub fn set_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: Address,
    enabled: bool,
) -> Result<(), SupplyChainError> {
    require_owner(env, caller)?;

    storage::set_role(env, role, &account, enabled);
    log!(env, "role {} for {} set to {}", role as u32, account, enabled);
    emit_role_updated(env, account, role, enabled);

    Ok(())
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    storage::has_role(env, role, account)
}

pub fn get_roles(env: &Env, account: &Address) -> AccountRoles {
    AccountRoles {
        farmer: storage::has_role(env, Role::Farmer, account),
        shipper: storage::has_role(env, Role::Shipper, account),
        receiver: storage::has_role(env, Role::Receiver, account),
    }
}
