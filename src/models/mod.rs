pub mod common;
pub mod history;
pub mod prediction;

pub use common::*;
pub use history::*;
pub use prediction::*;
