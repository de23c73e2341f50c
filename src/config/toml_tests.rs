//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [credentials]
            key = "pub-key"
            secret = "s3cret"

            [client]
            environment = "sandbox"
            timeout = 30
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.credentials.key.as_deref(), Some("pub-key"));
        assert_eq!(config.credentials.secret.as_deref(), Some("s3cret"));
        assert_eq!(config.client.environment.as_deref(), Some("sandbox"));
        assert_eq!(config.client.timeout, Some(30));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.credentials.key.is_none());
        assert!(config.credentials.secret.is_none());
        assert!(config.client.environment.is_none());
        assert!(config.client.timeout.is_none());
    }

    #[test]
    fn sections_are_independent() {
        let config = TomlConfig::parse("[client]\ntimeout = 5\n").unwrap();

        assert_eq!(config.client.timeout, Some(5));
        assert!(config.credentials.key.is_none());
    }
}

mod errors {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[webhook]\nurl = \"https://example.com\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[credentials]\ntoken = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[client]\ntimeout = \"soon\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn negative_timeout_is_rejected() {
        let result = TomlConfig::parse("[client]\ntimeout = -1\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::path::Path::new("/definitely/not/here/yellowcard.toml");
        let err = TomlConfig::load(path).unwrap_err();

        assert!(matches!(err, ConfigError::FileRead { .. }));
        assert!(err.to_string().contains("yellowcard.toml"));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.client.environment.as_deref(), Some("sandbox"));
        assert!(config.credentials.key.is_none());
        assert!(config.credentials.secret.is_none());
    }

    #[test]
    fn template_mentions_env_vars() {
        let template = default_config_template();

        assert!(template.contains("YELLOWCARD_API_KEY"));
        assert!(template.contains("YELLOWCARD_API_SECRET"));
        assert!(template.contains("[credentials]"));
        assert!(template.contains("[client]"));
    }
}
