//! Domain types shared across the workspace

mod budget;
mod index;
mod policy;

pub use budget::Budget;
pub use index::{IndexDescriptor, IndexName};
pub use policy::PolicyKind;
