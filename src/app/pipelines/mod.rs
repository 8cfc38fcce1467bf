pub mod chaos_pipeline;
pub mod trickest_pipeline;

pub use chaos_pipeline::ChaosPipeline;
pub use trickest_pipeline::TrickestPipeline;
