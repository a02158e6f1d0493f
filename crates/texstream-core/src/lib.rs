pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod resolve;
pub mod store;

pub use config::{AsyncLoadingConfig, CacheConfig, FallbackConfig, LoggingConfig, TextureConfig, TextureSettings};
pub use error::{StoreError, StoreResult};
pub use report::report_lines;
pub use resolve::{resolve, Outcome, Resolution, ResolvePolicy, CONFIG_BLOB};
pub use store::{BlobStore, DataDirStore, MemoryStore};
