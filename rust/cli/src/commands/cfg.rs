//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value next to where it
//! came from (`default`, `file` or `env`):
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "history_cap": { "value": 500, "source": "default" },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?;
    write_resolved(&resolved, out)
}

pub(crate) fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "history_cap": {
            "value": config.history_cap,
            "source": sources.history_cap,
        },
        "default_bets": {
            "value": config.default_bets.to_string(),
            "source": sources.default_bets,
        },
        "paytable": {
            "value": config.paytable,
            "source": sources.paytable,
        }
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSources, ValueSource};

    #[test]
    fn test_cfg_reports_values_and_sources() {
        let mut resolved = ConfigResolved {
            config: Default::default(),
            sources: ConfigSources::default(),
        };
        resolved.config.seed = Some(99);
        resolved.sources.seed = ValueSource::Env;

        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["seed"]["value"], 99);
        assert_eq!(v["seed"]["source"], "env");
        assert_eq!(v["history_cap"]["value"], 500);
        assert_eq!(v["history_cap"]["source"], "default");
        assert_eq!(
            v["default_bets"]["value"],
            "ante=25,bonus=0,jackpot=0,flop=0,turn=0,river=0"
        );
        assert!(v["paytable"]["value"]["bonus"].is_object());
    }

    #[test]
    fn test_cfg_writes_pretty_json() {
        let resolved = ConfigResolved {
            config: Default::default(),
            sources: ConfigSources::default(),
        };
        let mut out = Vec::new();
        write_resolved(&resolved, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  \""));
    }
}
