/// Uniform selection without replacement and run seeding
pub mod sampler;
