pub mod compare;
pub mod list;

pub use compare::*;
pub use list::*;
