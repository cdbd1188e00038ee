mod age;
mod composite;
mod size;

pub use age::MaxAgePolicy;
pub use composite::CompositePolicy;
pub use size::SizeBudgetPolicy;
