pub mod client;
pub mod models;
pub mod source;
pub mod weaviate;

pub use client::{ApiError, HttpClient};
pub use models::{ClusterReport, NodeHealth, NodeStats, NodeStatus, ShardInfo};
pub use source::NodeSource;
pub use weaviate::WeaviateClient;
