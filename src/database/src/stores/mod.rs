mod file;
mod store;

pub use file::*;
pub use store::*;
