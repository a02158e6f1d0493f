pub mod manifest;
pub mod optimize;
pub mod plugin;
pub mod reapply;

pub use manifest::PluginManifest;
pub use optimize::TextureOptimizer;
pub use plugin::ServerPlugin;
pub use reapply::TextureReapply;
