use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("texstream=info,info"));
    let _ = fmt().with_env_filter(filter).compact().try_init();
}
