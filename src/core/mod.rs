pub mod cache;
pub mod client;
pub mod engine;
pub mod export;
pub mod harvest;
pub mod links;
pub mod table;

pub use crate::domain::model::{ElectionType, HarvestKey, ResultRow};
pub use crate::domain::ports::{ConfigProvider, Harvest, Storage};
pub use crate::utils::error::Result;
