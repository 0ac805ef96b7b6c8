//! Logging setup utilities for the Hiroba chat application.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The default level is applied to every target in `targets`. The log level can be
/// overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `targets` - Crate names to enable (e.g., `["hiroba_server", "tower_http"]`)
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use hiroba_shared::logger::setup_logger;
///
/// setup_logger(&["hiroba_server"], "debug");
/// ```
pub fn setup_logger(targets: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(targets, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build `target=level` directives joined by commas.
fn default_directives(targets: &[&str], default_log_level: &str) -> String {
    targets
        .iter()
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_normalizes_crate_names() {
        // テスト項目: ハイフンを含むクレート名がアンダースコアに正規化される
        // given (前提条件):
        let targets = ["hiroba-server", "tower_http"];

        // when (操作):
        let directives = default_directives(&targets, "debug");

        // then (期待する結果):
        assert_eq!(directives, "hiroba_server=debug,tower_http=debug");
    }
}
