pub mod defaults;

mod memory_config;
mod pipeline_config;
mod retrieval_config;

pub use memory_config::MemoryConfig;
pub use pipeline_config::PipelineConfig;
pub use retrieval_config::RetrievalConfig;
