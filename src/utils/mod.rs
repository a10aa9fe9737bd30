pub mod deadline;
pub mod validate;

pub use deadline::{is_late, parse_due_date};
pub use validate::{clamp_percentage, require_non_empty};
