pub mod defaults;
pub mod ids;
pub mod resolve;

pub use defaults::derive_default_state;
pub use ids::to_id_schema;
pub use resolve::{check_document, definition_name, resolve_ref};
