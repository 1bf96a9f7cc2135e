use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::storage::StorageConfig;

pub mod api;
pub mod storage;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}
