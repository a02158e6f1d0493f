use crate::manifest::PluginManifest;
use crate::plugin::{run_startup, ServerPlugin};
use texstream_core::{BlobStore, ResolvePolicy, TextureConfig};

/// Reapplies the texture configuration on every server restart: a loaded
/// document is trusted as complete and re-persisted as-is.
pub struct TextureReapply {
    manifest: PluginManifest,
}

impl TextureReapply {
    pub fn new() -> Self {
        Self {
            manifest: PluginManifest::new(
                "TextureReapply",
                "Jeremias",
                "0.1.0",
                "Reapplies the texture configuration when the server restarts",
            ),
        }
    }
}

impl Default for TextureReapply {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerPlugin for TextureReapply {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    fn on_server_initialized(&self, store: &dyn BlobStore) -> TextureConfig {
        run_startup(
            "TextureReapply",
            ResolvePolicy::TrustLoadedAlways,
            store,
            "texture_config.json loaded successfully",
        )
    }
}
