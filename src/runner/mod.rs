mod executor;
mod orchestrator;
#[cfg(test)]
pub(crate) mod testing;

pub use executor::plan_file;
pub use orchestrator::{check_paths, CheckStatus, FileResult, Orchestrator, RunReport};
