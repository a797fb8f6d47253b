//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Inputs that decide the log filter.
#[derive(Debug, Default, Clone)]
pub struct LogSettings {
    /// Filter string from the config file, e.g. `arcwiki=debug`.
    pub config_filter: Option<String>,
    /// Number of `-v` flags on the command line.
    pub verbosity: u8,
}

impl LogSettings {
    /// Resolves the filter directive.
    ///
    /// Precedence order:
    /// 1. `RUST_LOG` environment variable
    /// 2. Config file `log` setting
    /// 3. Level derived from the `-v` count
    pub fn directive(&self, env_filter: Option<&str>) -> String {
        if let Some(env) = env_filter.filter(|s| !s.trim().is_empty()) {
            return env.to_string();
        }
        if let Some(filter) = self.config_filter.as_deref().filter(|s| !s.trim().is_empty()) {
            return filter.to_string();
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    }
}

/// Installs the global `fmt` subscriber writing to stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(settings: &LogSettings) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = settings.directive(env.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
