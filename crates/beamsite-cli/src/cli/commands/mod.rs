//! CLI command handlers, one per file.

mod completions;
mod hints;
mod links;
mod show;
mod validate;
mod verify;

pub use completions::run_completions;
pub use hints::run_hints;
pub use links::run_links;
pub use show::run_show;
pub use validate::run_validate;
pub use verify::run_verify;
