#[cfg(test)]
mod tests {
    use chrono::Duration;
    use hamster_redmine::libs::config::{Config, ConfigError, ENV_DB_PATH, ENV_REDMINE_HOST, ENV_REDMINE_KEY};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn write(&self, content: &str) -> PathBuf {
            let path = self.temp_dir.path().join("config.json");
            fs::write(&path, content).unwrap();
            path
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_minimal_config_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.write(r#"{"redmine_host": "https://redmine.example.com", "redmine_key": "secret"}"#);

        let config = Config::read_from(&path).unwrap();

        assert!(config.db_path.ends_with("hamster-applet/hamster.db"));
        assert_eq!(config.day_start_minutes, 0);
        assert_eq!(config.day_start(), Duration::zero());
        assert!(config.validate().is_ok());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unknown_keys_are_rejected(ctx: &mut ConfigTestContext) {
        let path = ctx.write(r#"{"redmine_host": "https://redmine.example.com", "redmine_key": "secret", "jira": {}}"#);

        assert!(matches!(Config::read_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("absent.json");

        assert!(matches!(Config::read_from(&path), Err(ConfigError::NotFound(_))));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_validation(_ctx: &mut ConfigTestContext) {
        let mut config = Config {
            redmine_host: "https://redmine.example.com".to_string(),
            redmine_key: "secret".to_string(),
            day_start_minutes: 300,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.day_start(), Duration::hours(5));

        config.day_start_minutes = 1440;
        assert!(matches!(config.validate(), Err(ConfigError::DayStart(1440))));

        config.day_start_minutes = 0;
        config.redmine_key = " ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Missing("redmine_key"))));

        config.redmine_host.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Missing("redmine_host"))));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_creates_parent_directory(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("nested").join("config.json");
        let config = Config {
            db_path: PathBuf::from("/tmp/hamster.db"),
            redmine_host: "https://redmine.example.com".to_string(),
            redmine_key: "secret".to_string(),
            day_start_minutes: 360,
        };

        config.save(&path).unwrap();

        assert_eq!(Config::read_from(&path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_load_applies_environment(ctx: &mut ConfigTestContext) {
        let path = ctx.write(r#"{"redmine_host": "", "redmine_key": "file-key", "db_path": "/data/hamster.db"}"#);

        assert!(Config::load(Some(&path)).is_err());

        std::env::set_var(ENV_REDMINE_HOST, "https://env.example.com");
        std::env::set_var(ENV_DB_PATH, "/env/hamster.db");
        std::env::set_var(ENV_REDMINE_KEY, "");
        let config = Config::load(Some(&path));
        std::env::remove_var(ENV_REDMINE_HOST);
        std::env::remove_var(ENV_DB_PATH);
        std::env::remove_var(ENV_REDMINE_KEY);

        let config = config.unwrap();
        assert_eq!(config.redmine_host, "https://env.example.com");
        assert_eq!(config.redmine_key, "file-key");
        assert_eq!(config.db_path, PathBuf::from("/env/hamster.db"));
    }
}
