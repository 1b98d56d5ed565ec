use std::sync::Arc;

use persistence::local_storage::{
    LocalStorage, MemoryLocalStorage, StorageConfig, open_file_storage,
};

/// Value of CART_STORAGE_PATH that keeps the cart in memory only.
pub const IN_MEMORY: &str = ":memory:";

/// Read the storage location from environment variables
///
/// Environment variables:
/// - CART_STORAGE_PATH: JSON file holding the persisted cart
///   (default: ".cart-storage.json", ":memory:" for a non-durable store)
pub fn from_env() -> StorageConfig {
    let path =
        std::env::var("CART_STORAGE_PATH").unwrap_or_else(|_| ".cart-storage.json".to_string());
    StorageConfig::new(path)
}

/// Open the local storage backing the cart
///
/// # Errors
/// Returns error if the storage directory cannot be created
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<Arc<dyn LocalStorage>> {
    if config.path.as_os_str() == IN_MEMORY {
        tracing::warn!("cart storage is in memory, the cart will not survive a restart");
        return Ok(Arc::new(MemoryLocalStorage::new()));
    }

    let storage = open_file_storage(config).await?;
    tracing::info!(path = %config.path.display(), "cart storage ready");
    Ok(Arc::new(storage))
}
