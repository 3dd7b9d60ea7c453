pub mod cli;
pub mod error;
pub mod executor;
pub mod filter;
pub mod plan;
pub mod report;
pub mod storage;

pub use error::{PruneError, Result};
pub use executor::{run_prune, RunOptions};
pub use plan::Plan;
pub use report::PruneReport;
