use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Level used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Targets whose warnings and errors are user-facing diagnostics.
const FLOOR_TARGETS: [&str; 2] = ["words", "limits"];
const FLOOR_LEVEL: &str = "warn";

fn is_floor_target(target: &str) -> bool {
    FLOOR_TARGETS.iter().any(|floor| {
        target == *floor
            || target
                .strip_prefix(floor)
                .is_some_and(|rest| rest.starts_with("::"))
    })
}

/// A directive that would hide warnings from one of our own targets.
fn silences_floor(directive: &str) -> bool {
    match directive.split_once('=') {
        Some((target, level)) => {
            is_floor_target(target.trim())
                && matches!(level.trim().to_ascii_lowercase().as_str(), "off" | "error")
        }
        None => false,
    }
}

/// Build the filter directives for a `RUST_LOG` value.
///
/// The floor directives come first so that a more verbose user directive for
/// the same target replaces them. Directives that would drop our warnings are
/// left out.
pub fn directives(env: Option<&str>) -> String {
    let user = env.unwrap_or(DEFAULT_DIRECTIVE);
    FLOOR_TARGETS
        .iter()
        .map(|target| format!("{target}={FLOOR_LEVEL}"))
        .chain(
            user.split(',')
                .map(str::trim)
                .filter(|directive| !directive.is_empty() && !silences_floor(directive))
                .map(str::to_owned),
        )
        .collect::<Vec<_>>()
        .join(",")
}

/// Route `log` records to stderr, filtered by `RUST_LOG`. Warnings and
/// errors from this crate are always shown.
pub fn init() -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(directives(env.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(directives(None)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|err| Error::Initialization(err.to_string()))
}
