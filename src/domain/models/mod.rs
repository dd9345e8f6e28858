mod comparison;
mod extraction;
mod price_estimate;
mod vehicle;

pub use comparison::*;
pub use extraction::*;
pub use price_estimate::*;
pub use vehicle::*;
