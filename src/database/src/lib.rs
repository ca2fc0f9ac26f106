mod loaders;
mod stores;

pub use loaders::*;
pub use stores::*;
