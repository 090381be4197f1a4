//! Command implementations.

pub mod generate;
pub mod models;

pub use self::generate::execute_generate;
pub use self::models::execute_models;
