pub mod ml;
pub mod predictor;
