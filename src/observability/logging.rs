//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Configure log level from config and environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive when neither RUST_LOG nor config says otherwise.
pub const DEFAULT_DIRECTIVE: &str = "roommate_client=info";

fn directive_for(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        DEFAULT_DIRECTIVE.to_string()
    } else {
        format!("roommate_client={level},roommate_cli={level}")
    }
}

/// Install the global subscriber. RUST_LOG wins over `level`.
///
/// Returns false if a subscriber was already installed.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| directive_for(level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive() {
        assert_eq!(directive_for(""), DEFAULT_DIRECTIVE);
        assert_eq!(directive_for("debug"), "roommate_client=debug,roommate_cli=debug");
    }
}
