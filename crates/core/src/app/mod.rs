pub mod queries;
pub mod sampler;

pub use queries::*;
pub use sampler::*;
