use crate::types::{Product, ProvenanceEntry, Role};
use soroban_sdk::{contracttype, Address, Env, Vec};

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    RoleMember(Role, Address), // (role, account) -> bool
    Product(u64), // product id -> Product
    HistoryLen(u64), // product id -> number of entries
    HistoryEntry(u64, u32), // (product id, index) -> ProvenanceEntry
}

// Owner
pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

// Role registry
pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::RoleMember(role, account.clone()))
        .unwrap_or(false)
}

pub fn set_role(env: &Env, role: Role, account: &Address, enabled: bool) {
    let key = DataKey::RoleMember(role, account.clone());
    if enabled {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// Products
pub fn has_product(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Product(id))
}

pub fn get_product(env: &Env, id: u64) -> Option<Product> {
    env.storage().persistent().get(&DataKey::Product(id))
}

pub fn set_product(env: &Env, product: &Product) {
    env.storage()
        .persistent()
        .set(&DataKey::Product(product.id), product);
}

// Provenance history
pub fn history_len(env: &Env, id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::HistoryLen(id))
        .unwrap_or(0)
}

pub fn get_history(env: &Env, id: u64) -> Vec<ProvenanceEntry> {
    let mut history: Vec<ProvenanceEntry> = Vec::new(env);
    for index in 0..history_len(env, id) {
        if let Some(entry) = env
            .storage()
            .persistent()
            .get(&DataKey::HistoryEntry(id, index))
        {
            history.push_back(entry);
        }
    }
    history
}

pub fn append_history(env: &Env, id: u64, entry: ProvenanceEntry) {
    let index = history_len(env, id);
    env.storage()
        .persistent()
        .set(&DataKey::HistoryEntry(id, index), &entry);
    env.storage()
        .persistent()
        .set(&DataKey::HistoryLen(id), &(index + 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProvenanceAction;
    use crate::SupplyChain;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_history_entries_are_stored_under_separate_keys() {
        let env = Env::default();
        let contract_id = env.register(SupplyChain, ());
        let actor = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(history_len(&env, 7), 0);
            assert_eq!(get_history(&env, 7).len(), 0);

            for timestamp in 0..3u64 {
                append_history(
                    &env,
                    7,
                    ProvenanceEntry {
                        action: ProvenanceAction::MetadataUpdated,
                        actor: actor.clone(),
                        timestamp,
                    },
                );
            }

            assert_eq!(history_len(&env, 7), 3);
            let stored: Option<ProvenanceEntry> = env
                .storage()
                .persistent()
                .get(&DataKey::HistoryEntry(7, 2));
            assert_eq!(stored.map(|entry| entry.timestamp), Some(2));
            assert!(!env.storage().persistent().has(&DataKey::HistoryEntry(7, 3)));

            let history = get_history(&env, 7);
            assert_eq!(history.len(), 3);
            assert_eq!(history.get(0).unwrap().timestamp, 0);
            assert_eq!(history.get(2).unwrap().timestamp, 2);

            // Other products keep their own sequence
            assert_eq!(history_len(&env, 8), 0);
        });
    }
}
