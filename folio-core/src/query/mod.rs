pub mod filtering;
pub mod sorting;
pub mod types;

pub use filtering::{BookView, ViewKind, categorize, other_status_icons};
pub use sorting::{compare_sequence, sort_by_field, sorted_by_field};
pub use types::*;
