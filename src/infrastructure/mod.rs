pub mod mock;
pub mod smartcore_model;
pub mod standard_scaler;
