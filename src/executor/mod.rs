mod runner;

pub use runner::{run_prune, RunOptions};
