pub mod controller;
pub mod error_display;
pub mod field;
pub mod state;

pub use controller::{FormOptions, SchemaForm, SubmitHandler};
pub use error_display::render_errors;
pub use field::{FieldKind, FieldNode};
pub use state::{append_default_item, apply_change, lookup, remove_item};
