//! Data-driven content definitions and loaders.
//!
//! This crate houses the default battle content and provides loaders for
//! RON/TOML data files:
//! - Action catalogs (RON lists of `ActionDefinition`)
//! - Scenarios: a roster plus the orders to queue (RON)
//! - Combat configuration (TOML)
//!
//! All loaders use tactics-core types directly with serde for RON/TOML
//! deserialization. The default content is embedded in the binary so a
//! session can be built without touching the filesystem.

pub mod embedded;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActionCatalogLoader, AreaOrder, ConfigLoader, LoadResult, Order, Scenario, ScenarioLoader,
};
