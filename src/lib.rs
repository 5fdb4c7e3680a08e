pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{PromptFieldSupplier, ScriptedFieldSupplier};
pub use config::RegistryConfig;
pub use crate::core::{export::OutputFormat, registry::AgencyRegistry};
pub use domain::model::{
    AgencyDetails, AgencyField, AgencyRecord, AgencyType, PrintMedia, RadioStation,
};
pub use domain::ports::FieldSupplier;
pub use utils::error::{RegistryError, Result};
