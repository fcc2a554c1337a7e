pub mod errors;
pub mod market;
pub mod ml;
pub mod prediction;
