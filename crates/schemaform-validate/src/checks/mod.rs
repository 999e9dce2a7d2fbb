//! One check function per validation rule.

mod datatype;
mod enumeration;
mod length;
mod presence;
mod range;

pub use datatype::{type_issue, value_kind};
pub use enumeration::enum_issue;
pub use length::length_issues;
pub use presence::required_issues;
pub use range::range_issues;
