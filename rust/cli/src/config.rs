use bonusholdem_engine::bets::BetStructure;
use bonusholdem_engine::paytable::Paytable;
use serde::{Deserialize, Serialize};
use std::fs;

pub const ENV_CONFIG: &str = "BONUSHOLDEM_CONFIG";
pub const ENV_SEED: &str = "BONUSHOLDEM_SEED";
pub const ENV_HISTORY_CAP: &str = "BONUSHOLDEM_HISTORY_CAP";
pub const ENV_BETS: &str = "BONUSHOLDEM_BETS";

/// Entries kept in a history file before the oldest are dropped.
pub const DEFAULT_HISTORY_CAP: usize = 500;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub history_cap: usize,
    pub default_bets: BetStructure,
    pub paytable: Paytable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub history_cap: ValueSource,
    pub default_bets: ValueSource,
    pub paytable: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            history_cap: ValueSource::Default,
            default_bets: ValueSource::Default,
            paytable: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            history_cap: DEFAULT_HISTORY_CAP,
            default_bets: BetStructure {
                ante: 25,
                ..BetStructure::default()
            },
            paytable: Paytable::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration from defaults, the TOML file named by
/// `BONUSHOLDEM_CONFIG`, then `BONUSHOLDEM_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Same as [`load_with_sources`] with the environment supplied by `env`.
pub fn load_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|v| !v.is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(ENV_CONFIG) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.history_cap {
            cfg.history_cap = v;
            sources.history_cap = ValueSource::File;
        }
        if let Some(v) = f.default_bets {
            cfg.default_bets = parse_bets(&v)?;
            sources.default_bets = ValueSource::File;
        }
        if let Some(v) = f.paytable {
            cfg.paytable = v;
            sources.paytable = ValueSource::File;
        }
    }

    if let Some(seed) = lookup(ENV_SEED) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(cap) = lookup(ENV_HISTORY_CAP) {
        cfg.history_cap = cap
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid history_cap: {}", cap)))?;
        sources.history_cap = ValueSource::Env;
    }
    if let Some(bets) = lookup(ENV_BETS) {
        cfg.default_bets = parse_bets(&bets)?;
        sources.default_bets = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    history_cap: Option<usize>,
    #[serde(default)]
    default_bets: Option<String>,
    #[serde(default)]
    paytable: Option<Paytable>,
}

fn parse_bets(s: &str) -> Result<BetStructure, ConfigError> {
    s.parse()
        .map_err(|e| ConfigError::Invalid(format!("Invalid default_bets: {}", e)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.history_cap == 0 {
        return Err(ConfigError::Invalid("history_cap must be >=1".into()));
    }
    cfg.paytable
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
