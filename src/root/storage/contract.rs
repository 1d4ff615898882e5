use crate::error::StoreResult;

/// Key/value persistence for root state.
///
/// Implementations only need to round-trip a single string per key.
pub trait RootStorage: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
