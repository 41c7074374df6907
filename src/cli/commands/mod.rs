//! Command handlers

pub mod audit;
pub mod refs;

pub use audit::handle_audit;
pub use refs::handle_refs;
