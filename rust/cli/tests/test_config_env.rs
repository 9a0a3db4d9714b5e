//! Configuration precedence through the real process environment.

use bonusholdem_cli::config::{self, ENV_BETS, ENV_CONFIG, ENV_HISTORY_CAP, ENV_SEED, ValueSource};
use serial_test::serial;

struct EnvGuard(&'static [&'static str]);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in self.0 {
            unsafe { std::env::remove_var(key) };
        }
    }
}

const KEYS: &[&str] = &[ENV_CONFIG, ENV_SEED, ENV_HISTORY_CAP, ENV_BETS];

fn set(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

#[test]
#[serial]
fn test_file_then_env_precedence() {
    let _guard = EnvGuard(KEYS);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bonusholdem.toml");
    std::fs::write(
        &path,
        r#"
seed = 7
history_cap = 20
default_bets = "ante=50,bonus=10"

[paytable.jackpot]
royal_flush_amount = 250000
"#,
    )
    .unwrap();
    set(ENV_CONFIG, path.to_str().unwrap());
    set(ENV_SEED, "99");

    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.seed, Some(99));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
    assert_eq!(resolved.config.history_cap, 20);
    assert_eq!(resolved.sources.history_cap, ValueSource::File);
    assert_eq!(resolved.config.default_bets.ante, 50);
    assert_eq!(resolved.config.paytable.jackpot.royal_flush_amount, 250_000);
    assert_eq!(resolved.sources.paytable, ValueSource::File);
}

#[test]
#[serial]
fn test_configured_seed_drives_deal() {
    let _guard = EnvGuard(KEYS);
    set(ENV_SEED, "31337");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = bonusholdem_cli::run(["bonusholdem", "deal"], &mut out, &mut err);
    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().starts_with("Seed: 31337\n"));
}

#[test]
#[serial]
fn test_invalid_config_fails_commands() {
    let _guard = EnvGuard(KEYS);
    set(ENV_HISTORY_CAP, "0");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = bonusholdem_cli::run(
        ["bonusholdem", "bonus", "--player", "AH AD"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("history_cap must be >=1"));
}

#[test]
#[serial]
fn test_missing_config_file_is_reported() {
    let _guard = EnvGuard(KEYS);
    let dir = tempfile::tempdir().unwrap();
    set(ENV_CONFIG, dir.path().join("absent.toml").to_str().unwrap());

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = bonusholdem_cli::run(["bonusholdem", "cfg"], &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(String::from_utf8(err).unwrap().contains("Configuration error: cannot read config file"));
}

#[test]
#[serial]
fn test_eval_runs_without_config_but_settling_commands_need_it() {
    let _guard = EnvGuard(KEYS);
    set(ENV_HISTORY_CAP, "0");

    let run = |args: &[&str]| {
        let mut argv = vec!["bonusholdem"];
        argv.extend_from_slice(args);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = bonusholdem_cli::run(argv, &mut out, &mut err);
        (code, String::from_utf8(err).unwrap())
    };

    assert_eq!(run(&["eval", "--cards", "AH KH QH JH 10H"]).0, 0);
    for args in [
        &["deal", "--seed", "1"][..],
        &["sim", "--hands", "2", "--seed", "1"][..],
        &["resolve", "--player", "AH KH", "--dealer", "2C 7D", "--fold"][..],
        &["cfg"][..],
    ] {
        let (code, err) = run(args);
        assert_eq!(code, 2, "{:?} should fail", args);
        assert!(err.contains("history_cap must be >=1"), "{:?}: {}", args, err);
    }
}
