pub mod export;
pub mod registry;

pub use crate::domain::model::{AgencyDetails, AgencyField, AgencyRecord, AgencyType};
pub use crate::domain::ports::FieldSupplier;
pub use crate::utils::error::Result;
