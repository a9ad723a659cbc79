use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio;
use toml;
use tracing::{Level, debug, instrument};

use cycler::TypingConfig;

// folio configuration
//
// the webapp compiles its content in, so this only describes what the native tools need.  for
// now that is just the typing cycler, but it is kept as its own struct so that further subtables
// can be added without touching every caller
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FolioConfig {
    pub typing: TypingConfig,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: FolioConfig,
}

pub fn parse_config(doc: &str) -> Result<FolioConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> Result<Arc<FolioConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {}", filename.display()))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    use cycler::{CyclerError, TypingCycler};

    #[test]
    fn parses_typing_table() {
        let config = parse_config(
            r#"
            [config.typing]
            phrases = ["Designer", "Developer"]
            type_speed_ms = 80
            pause_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.typing.phrases, vec!["Designer", "Developer"]);
        assert_eq!(config.typing.type_speed_ms, 80);
        assert_eq!(config.typing.pause_ms, 500);
    }

    #[test]
    fn timings_default_when_omitted() {
        let config = parse_config(
            r#"
            [config.typing]
            phrases = ["Artist"]
            "#,
        )
        .unwrap();

        assert_eq!(config.typing.type_speed_ms, 100);
        assert_eq!(config.typing.pause_ms, 1000);
    }

    #[test]
    fn missing_config_table_is_an_error() {
        assert!(parse_config("[typing]\nphrases = [\"a\"]\n").is_err());
    }

    // an empty list parses fine but must be refused once we try to build a cycler from it
    #[test]
    fn empty_phrases_fail_at_construction() {
        let config = parse_config(
            r#"
            [config.typing]
            phrases = []
            "#,
        )
        .unwrap();

        let err = TypingCycler::from_config(&config.typing).unwrap_err();
        assert!(matches!(err, CyclerError::InvalidConfiguration(_)));
    }

    #[tokio::test]
    async fn read_config_reports_missing_file() {
        let err = read_config(PathBuf::from("/nonexistent/folio.toml"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("/nonexistent/folio.toml"));
    }
}
