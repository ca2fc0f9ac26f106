mod competitor;

pub use competitor::*;
