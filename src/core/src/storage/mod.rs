mod memory;
mod repository;

#[cfg(test)]
pub(crate) mod flaky;

pub use memory::*;
pub use repository::*;
