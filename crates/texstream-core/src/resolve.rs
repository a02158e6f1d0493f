use crate::config::TextureConfig;
use crate::error::StoreResult;
use crate::store::BlobStore;
use tracing::warn;

/// Name of the settings blob in the backing store.
pub const CONFIG_BLOB: &str = "texture_config";

/// What a variant does with the blob once a load succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvePolicy {
    /// Trust a successful load as complete and re-persist it on every
    /// resolution (reapply variant).
    TrustLoadedAlways,
    /// Leave an existing valid blob untouched (optimizer variant).
    SkipRewriteOnValidLoad,
}

/// How the settings value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A valid document was loaded from the store.
    Loaded,
    /// No document existed; the default was created and persisted.
    CreatedDefault,
    /// A document existed but failed to parse; the default took over.
    RecoveredDefault,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: TextureConfig,
    pub outcome: Outcome,
}

/// Load-or-default-and-persist. Always returns a complete, usable settings
/// value; no failure escalates past this call. Persisting the fallback is
/// best-effort and at most one blob write happens per call.
///
/// Not safe for concurrent invocation against the same store key: the
/// read-check-write sequence is unguarded.
pub fn resolve(store: &dyn BlobStore, policy: ResolvePolicy) -> Resolution {
    match load(store) {
        Ok(config) => {
            if policy == ResolvePolicy::TrustLoadedAlways {
                persist_best_effort(store, &config);
            }
            Resolution { config, outcome: Outcome::Loaded }
        }
        Err(err) => {
            let outcome = if err.is_not_found() {
                Outcome::CreatedDefault
            } else {
                warn!("discarding unreadable {CONFIG_BLOB} blob: {err}");
                Outcome::RecoveredDefault
            };
            let config = TextureConfig::default();
            persist_best_effort(store, &config);
            Resolution { config, outcome }
        }
    }
}

fn load(store: &dyn BlobStore) -> StoreResult<TextureConfig> {
    let raw = store.read(CONFIG_BLOB)?;
    Ok(serde_json::from_str(&raw)?)
}

fn persist_best_effort(store: &dyn BlobStore, config: &TextureConfig) {
    let serialized = match serde_json::to_string_pretty(config) {
        Ok(s) => s,
        Err(err) => {
            warn!("failed to serialize {CONFIG_BLOB}: {err}");
            return;
        }
    };
    if let Err(err) = store.write(CONFIG_BLOB, &serialized) {
        warn!("failed to persist {CONFIG_BLOB}: {err}");
    }
}
