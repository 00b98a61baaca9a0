use crate::error::SupplyChainError;
use soroban_sdk::{log, Env, String, Symbol};

pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

pub fn is_blank(value: &String) -> bool {
    value.len() == 0
}

/// Passes `result` through, writing a diagnostic line when it is a rejection.
pub fn log_rejection<T>(
    env: &Env,
    operation: Symbol,
    result: Result<T, SupplyChainError>,
) -> Result<T, SupplyChainError> {
    if let Err(err) = &result {
        log!(env, "{} rejected with code {}", operation, *err as u32);
    }
    result
}
