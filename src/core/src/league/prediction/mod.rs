mod predictor;

pub use predictor::*;
