//! Tracing subscriber setup for processes embedding the client.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVES: &str = "tour_api=info,tour_lib=info";

/// Installs a fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVES`]. Does nothing if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        tracing::info!("logging initialized twice");
    }
}
