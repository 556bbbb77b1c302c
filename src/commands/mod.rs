pub mod fetch;
pub mod pipeline;
pub mod summarize;

pub use fetch::run_fetch;
pub use pipeline::run_pipeline;
pub use summarize::run_summarize;
