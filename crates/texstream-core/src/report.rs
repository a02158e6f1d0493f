use crate::config::TextureSettings;

/// Render the resolved settings as the fixed sequence of startup log lines,
/// each prefixed with `[tag]`. Pure function of its input; the caller owns
/// delivery to a console or log sink.
///
/// Line order is part of the contract: streaming, max size, mip bias,
/// critical textures, async loading, cache, fallback, debug logs.
pub fn report_lines(tag: &str, settings: &TextureSettings) -> Vec<String> {
    let mut lines = Vec::new();

    if settings.streaming_enabled {
        lines.push(format!(
            "[{tag}] Streaming enabled with {} priority",
            settings.streaming_priority
        ));
    }

    lines.push(format!("[{tag}] Max texture size: {}px", settings.max_texture_size));
    lines.push(format!("[{tag}] Mip bias: {}", settings.mip_bias));

    if settings.preload_critical_textures {
        if settings.critical_textures_list.is_empty() {
            lines.push(format!("[{tag}] No critical textures configured for preload"));
        } else {
            for tex in &settings.critical_textures_list {
                lines.push(format!("[{tag}] Preloading critical texture: {tex}"));
            }
        }
    }

    if settings.async_loading.enabled {
        lines.push(format!(
            "[{tag}] Async loading enabled in batches of {} with {}ms delay",
            settings.async_loading.batch_size, settings.async_loading.delay_between_batches_ms
        ));
    }

    if settings.cache.enable_disk_cache {
        lines.push(format!(
            "[{tag}] Disk cache enabled in {} with {}MB limit",
            settings.cache.cache_folder, settings.cache.max_cache_size_mb
        ));
    }

    if settings.fallback.low_res_placeholder {
        lines.push(format!(
            "[{tag}] Using {} placeholder while textures load",
            settings.fallback.placeholder_color
        ));
    }

    if settings.logging.enable_debug_logs {
        lines.push(format!("[{tag}] Debug logs written to {}", settings.logging.log_file));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_gates_open() -> TextureSettings {
        let mut settings = TextureSettings::default();
        settings.critical_textures_list = vec!["a.png".to_string(), "b.png".to_string()];
        settings.logging.enable_debug_logs = true;
        settings
    }

    #[test]
    fn lines_follow_fixed_order() {
        let lines = report_lines("TextureReapply", &all_gates_open());
        assert_eq!(lines.len(), 9);
        assert!(lines[0].contains("Streaming enabled with balanced priority"));
        assert!(lines[1].contains("Max texture size: 1024px"));
        assert!(lines[2].contains("Mip bias: -1"));
        assert!(lines[3].ends_with("Preloading critical texture: a.png"));
        assert!(lines[4].ends_with("Preloading critical texture: b.png"));
        assert!(lines[5].contains("Async loading enabled in batches of 4 with 50ms delay"));
        assert!(lines[6].contains("Disk cache enabled in oxide/data/texture_cache with 512MB limit"));
        assert!(lines[7].contains("Using #333333 placeholder"));
        assert!(lines[8].contains("Debug logs written to oxide/logs/texture_loader.log"));
        assert!(lines.iter().all(|l| l.starts_with("[TextureReapply] ")));
    }

    #[test]
    fn disabled_gates_suppress_their_lines() {
        let mut settings = all_gates_open();
        settings.streaming_enabled = false;
        settings.preload_critical_textures = false;
        settings.async_loading.enabled = false;
        settings.cache.enable_disk_cache = false;
        settings.fallback.low_res_placeholder = false;
        settings.logging.enable_debug_logs = false;

        let lines = report_lines("TextureOptimizer", &settings);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Max texture size"));
        assert!(lines[1].contains("Mip bias"));
    }

    #[test]
    fn empty_critical_list_emits_single_placeholder_line() {
        let mut settings = all_gates_open();
        settings.critical_textures_list.clear();

        let lines = report_lines("TextureOptimizer", &settings);
        let preload_lines: Vec<_> = lines
            .iter()
            .filter(|l| l.contains("Preloading critical texture"))
            .collect();
        assert!(preload_lines.is_empty());
        let empty_lines: Vec<_> = lines
            .iter()
            .filter(|l| l.contains("No critical textures configured for preload"))
            .collect();
        assert_eq!(empty_lines.len(), 1);
    }
}
