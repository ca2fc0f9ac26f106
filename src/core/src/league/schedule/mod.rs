mod fixture;
mod generator;
mod schedule;

pub use fixture::*;
pub use generator::*;
pub use schedule::*;
