pub mod bundle;
pub mod config;
pub mod error;
pub mod link;
pub mod pipeline;
pub mod store;
pub mod transform;
pub mod watcher;
