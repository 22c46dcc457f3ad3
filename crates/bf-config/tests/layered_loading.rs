//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use bf_config::BugFlowConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "./data/tracker.db"

[seed]
on_startup = true
file = "demo.json"
"#,
        )?;

        let config: BugFlowConfig = Figment::from(Serialized::defaults(BugFlowConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "./data/tracker.db");
        assert!(config.seed.on_startup);
        assert_eq!(config.seed.file, "demo.json");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bugflow")?;
        jail.create_file(
            ".bugflow/config.toml",
            r#"
[database]
path = "local.db"
"#,
        )?;

        let config = BugFlowConfig::load().expect("config loads");
        assert_eq!(config.database.path, "local.db");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".bugflow")?;
        jail.create_file(
            ".bugflow/config.toml",
            r#"
[database]
path = "from-file.db"
"#,
        )?;
        jail.set_env("BUGFLOW_DATABASE__PATH", "from-env.db");
        jail.set_env("BUGFLOW_SEED__ON_STARTUP", "true");

        let config = BugFlowConfig::load().expect("config loads");
        assert_eq!(config.database.path, "from-env.db");
        assert!(config.seed.on_startup);
        Ok(())
    });
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = BugFlowConfig::load().expect("config loads");
        assert!(config.database.resolved_path().ends_with("bugflow.db"));
        assert!(config.seed.file_path().is_none());
        Ok(())
    });
}
