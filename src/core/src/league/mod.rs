mod league;
mod result;
mod season;

pub mod prediction;
pub mod schedule;
pub mod table;

pub use league::*;
pub use prediction::*;
pub use result::*;
pub use schedule::*;
pub use season::*;
pub use table::*;
