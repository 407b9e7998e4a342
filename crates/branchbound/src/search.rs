//! Search entry point that hides configuration wiring.

use std::path::Path;

use branchbound_config::{ConfigError, SearchConfig};
use branchbound_core::Node;
use branchbound_solver::{BestFirstSearch, SearchResult};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// File [`run_search`] reads its settings from.
pub const DEFAULT_CONFIG_PATH: &str = "search.toml";

/// Runs a search configured from `search.toml` in the working directory.
///
/// A missing file means default settings.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed or fails
/// validation.
pub fn run_search<N: Node>(start: N, seed: Option<N>) -> Result<SearchResult<N>, ConfigError> {
    let config = load_or_default(DEFAULT_CONFIG_PATH)?;
    run_search_with_config(&config, start, seed, None)
}

/// Runs a search with explicit settings, optionally streaming improvements.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if `config` fails validation.
pub fn run_search_with_config<N: Node>(
    config: &SearchConfig,
    start: N,
    seed: Option<N>,
    improvements: Option<&UnboundedSender<N>>,
) -> Result<SearchResult<N>, ConfigError> {
    let engine = BestFirstSearch::from_config(config)?;
    Ok(match improvements {
        Some(sender) => engine.solve_with_channel(start, seed, sender),
        None => engine.solve(start, seed),
    })
}

fn load_or_default(path: impl AsRef<Path>) -> Result<SearchConfig, ConfigError> {
    let path = path.as_ref();
    match SearchConfig::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "config_default", path = %path.display());
            Ok(SearchConfig::default())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use branchbound_test::BinaryStringNode;
    use tokio::sync::mpsc::unbounded_channel;

    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_or_default("does/not/exist/search.toml").unwrap();
        assert!(config.pruning);
        assert!(config.termination.is_none());
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let path = std::env::temp_dir().join(format!("branchbound-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[termination]\nnode_count_limit = 0").unwrap();
        drop(file);

        let err = load_or_default(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_run_with_config_streams_improvements() {
        let (sender, mut receiver) = unbounded_channel();
        let config = SearchConfig::new().with_termination_seconds(30);
        let result =
            run_search_with_config(&config, BinaryStringNode::root("0110"), None, Some(&sender))
                .unwrap();

        assert!(result.optimal_found);
        assert_eq!(result.best().map(BinaryStringNode::value), Some("0110"));
        let mut last = None;
        while let Ok(node) = receiver.try_recv() {
            last = Some(node);
        }
        assert_eq!(last.as_ref().map(BinaryStringNode::value), Some("0110"));
    }
}
