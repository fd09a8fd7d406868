//! Infrastructure layer - Persistence, configuration and workspace layout

pub mod config;
pub mod latency;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use latency::{Latency, Operation};
pub use storage::{FileSystemStorage, KeyValueStorage, MemoryStorage};
pub use workspace::{Workspace, WorkspaceRepository};
