//! Models module for the SDK
//!
//! Defines the entity tree the audit runs over: tables owning columns and
//! measures, plus the relationship list.

pub mod column;
pub mod data_model;
pub mod measure;
pub mod relationship;
pub mod table;

pub use column::Column;
pub use data_model::DataModel;
pub use measure::{Measure, MeasureRef};
pub use relationship::Relationship;
pub use table::Table;
