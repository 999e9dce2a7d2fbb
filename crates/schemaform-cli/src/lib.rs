pub mod logging;
pub mod summary;
pub mod types;
