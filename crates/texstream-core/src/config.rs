use serde::{Deserialize, Serialize};

/// Wrapper object persisted as `texture_config.json`. The on-disk document
/// holds a single `textureSettings` field; field names inside are camelCase.
///
/// Deserialization is all-or-nothing: a document missing any field fails to
/// parse, and the caller falls back to a full default. There is no
/// field-level merging of partial documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextureConfig {
    pub texture_settings: TextureSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureSettings {
    pub streaming_enabled: bool,
    pub streaming_priority: String,
    pub max_texture_size: i32,
    pub mip_bias: i32,
    pub preload_critical_textures: bool,
    pub critical_textures_list: Vec<String>,
    pub async_loading: AsyncLoadingConfig,
    pub cache: CacheConfig,
    pub fallback: FallbackConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncLoadingConfig {
    pub enabled: bool,
    pub batch_size: i32,
    pub delay_between_batches_ms: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    pub enable_disk_cache: bool,
    pub cache_folder: String,
    #[serde(rename = "maxCacheSizeMB")]
    pub max_cache_size_mb: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackConfig {
    pub low_res_placeholder: bool,
    pub placeholder_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    pub enable_debug_logs: bool,
    pub log_file: String,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            streaming_enabled: true,
            streaming_priority: "balanced".to_string(),
            max_texture_size: 1024,
            mip_bias: -1,
            preload_critical_textures: true,
            critical_textures_list: vec![
                "ui/icons/player.png".to_string(),
                "ui/icons/weapon.png".to_string(),
                "environment/terrain/grass_diffuse.png".to_string(),
            ],
            async_loading: AsyncLoadingConfig::default(),
            cache: CacheConfig::default(),
            fallback: FallbackConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AsyncLoadingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            batch_size: 4,
            delay_between_batches_ms: 50,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enable_disk_cache: true,
            cache_folder: "oxide/data/texture_cache".to_string(),
            max_cache_size_mb: 512,
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            low_res_placeholder: true,
            placeholder_color: "#333333".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_debug_logs: false,
            log_file: "oxide/logs/texture_loader.log".to_string(),
        }
    }
}
