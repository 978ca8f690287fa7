pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{storage::LocalStorage, CliConfig};
pub use crate::core::{
    cache::ResultCache, client::ApiClient, engine::HarvestEngine, harvest::Harvester,
};
pub use crate::domain::model::{ElectionType, HarvestKey, ResultRow};
pub use crate::utils::error::{HarvestError, Result};
