pub mod ai;
pub mod cli;
