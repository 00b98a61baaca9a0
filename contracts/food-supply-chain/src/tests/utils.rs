#![cfg(test)]

use crate::{Product, SupplyChain, SupplyChainClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

pub struct TestSetup {
    pub env: Env,
    pub client: SupplyChainClient<'static>,
    pub owner: Address,
    pub farmer: Address,
    pub shipper: Address,
    pub receiver: Address,
    pub outsider: Address,
}

impl TestSetup {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(1_700_000_000);

        let contract_id = env.register(SupplyChain, ());
        let client = SupplyChainClient::new(&env, &contract_id);

        let owner = Address::generate(&env);
        let farmer = Address::generate(&env);
        let shipper = Address::generate(&env);
        let receiver = Address::generate(&env);
        let outsider = Address::generate(&env);

        client.initialize(&owner);
        client.set_farmer(&owner, &farmer, &true);
        client.set_shipper(&owner, &shipper, &true);
        client.set_receiver(&owner, &receiver, &true);

        Self {
            env,
            client,
            owner,
            farmer,
            shipper,
            receiver,
            outsider,
        }
    }

    pub fn text(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    /// Creates product `id` as the registered farmer.
    pub fn create_product(&self, id: u64, name: &str, origin: &str) -> Product {
        self.client
            .create_product(&self.farmer, &id, &self.text(name), &self.text(origin));
        self.client.get_product(&id)
    }

    pub fn create_default_product(&self, id: u64) -> Product {
        self.create_product(id, "Mango", "Alphonso Farm")
    }

    pub fn ship(&self, id: u64) -> Product {
        self.client.ship_product(&self.shipper, &id);
        self.client.get_product(&id)
    }

    pub fn receive(&self, id: u64) -> Product {
        self.client.receive_product(&self.receiver, &id);
        self.client.get_product(&id)
    }

    pub fn advance_time(&self, seconds: u64) {
        let current = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(current + seconds);
    }

    pub fn new_account(&self) -> Address {
        Address::generate(&self.env)
    }
}
