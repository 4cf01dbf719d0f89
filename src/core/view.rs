// Derived selectors, recomputed from raw state on each read.

pub mod filter;
pub mod paginate;
