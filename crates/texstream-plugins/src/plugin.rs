use crate::manifest::PluginManifest;
use texstream_core::{report_lines, BlobStore, Outcome, Resolution, ResolvePolicy, TextureConfig};
use tracing::info;

/// Host-facing plugin surface. The host calls `on_server_initialized` once
/// at startup and consumes no return value; the resolved settings are
/// returned for embedding hosts that want them.
pub trait ServerPlugin: Send + Sync {
    fn manifest(&self) -> &PluginManifest;

    fn on_server_initialized(&self, store: &dyn BlobStore) -> TextureConfig;
}

/// Shared startup routine of both variants: resolve, announce the outcome,
/// then report every setting as one informational line.
pub(crate) fn run_startup(
    tag: &str,
    policy: ResolvePolicy,
    store: &dyn BlobStore,
    loaded_line: &str,
) -> TextureConfig {
    let Resolution { config, outcome } = texstream_core::resolve(store, policy);
    match outcome {
        Outcome::Loaded => info!("[{tag}] {loaded_line}"),
        Outcome::CreatedDefault => {
            info!("[{tag}] texture_config.json not found, creating default configuration")
        }
        Outcome::RecoveredDefault => {
            info!("[{tag}] failed to read texture_config.json, falling back to default configuration")
        }
    }
    for line in report_lines(tag, &config.texture_settings) {
        info!("{line}");
    }
    config
}
