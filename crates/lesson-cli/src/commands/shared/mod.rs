pub mod generation;
pub mod limit;
pub mod parse;
