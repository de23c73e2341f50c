//! Tests for CLI argument parsing.

use super::cli::{Cli, Command, EnvironmentArg};

mod parsing {
    use super::*;

    #[test]
    fn parse_global_options() {
        let cli = Cli::parse_from_iter([
            "yellowcard",
            "--key",
            "pub-key",
            "--secret",
            "s3cret",
            "--environment",
            "sandbox",
            "--timeout",
            "15",
            "rates",
        ]);

        assert_eq!(cli.key.as_deref(), Some("pub-key"));
        assert_eq!(cli.secret.as_deref(), Some("s3cret"));
        assert_eq!(cli.environment, Some(EnvironmentArg::Sandbox));
        assert_eq!(cli.timeout, Some(15));
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from_iter([
            "yellowcard",
            "lookup",
            "abc",
            "--environment",
            "production",
            "-v",
        ]);

        assert_eq!(cli.environment, Some(EnvironmentArg::Production));
        assert!(cli.verbose);
    }

    #[test]
    fn environment_aliases() {
        let test = Cli::parse_from_iter(["yellowcard", "--environment", "test", "rates"]);
        assert_eq!(test.environment, Some(EnvironmentArg::Sandbox));

        let live = Cli::parse_from_iter(["yellowcard", "--environment", "live", "rates"]);
        assert_eq!(live.environment, Some(EnvironmentArg::Production));
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let result = Cli::try_parse_from_iter(["yellowcard", "--environment", "staging", "rates"]);
        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from_iter(["yellowcard"]).is_err());
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from_iter(["yellowcard", "-c", "/path/to/config.toml", "rates"]);

        assert_eq!(
            cli.config.as_ref().unwrap().to_str(),
            Some("/path/to/config.toml")
        );
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from_iter(["yellowcard", "rates"]);

        assert!(cli.timeout.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }
}

mod subcommands {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn catalogue_filters() {
        let cli = Cli::parse_from_iter(["yellowcard", "channels", "--country", "NG"]);
        assert_eq!(
            cli.command,
            Command::Channels {
                country: Some("NG".to_string())
            }
        );

        let cli = Cli::parse_from_iter(["yellowcard", "networks"]);
        assert_eq!(cli.command, Command::Networks { country: None });

        let cli = Cli::parse_from_iter(["yellowcard", "rates", "--currency", "KES"]);
        assert_eq!(
            cli.command,
            Command::Rates {
                currency: Some("KES".to_string())
            }
        );
    }

    #[test]
    fn resolve_bank_requires_both_fields() {
        let cli = Cli::parse_from_iter([
            "yellowcard",
            "resolve-bank",
            "--account-number",
            "1111111111",
            "--network-id",
            "net-1",
        ]);
        assert_eq!(
            cli.command,
            Command::ResolveBank {
                account_number: "1111111111".to_string(),
                network_id: "net-1".to_string(),
            }
        );

        assert!(
            Cli::try_parse_from_iter(["yellowcard", "resolve-bank", "--network-id", "x"]).is_err()
        );
    }

    #[test]
    fn payment_commands() {
        let cli = Cli::parse_from_iter(["yellowcard", "pay", "--file", "payment.json"]);
        assert_eq!(
            cli.command,
            Command::Pay {
                file: PathBuf::from("payment.json")
            }
        );

        for (name, id) in [("accept", "p-1"), ("deny", "p-2"), ("lookup", "p-3")] {
            let cli = Cli::parse_from_iter(["yellowcard", name, id]);
            let parsed = match cli.command {
                Command::Accept { id } | Command::Deny { id } | Command::Lookup { id } => id,
                other => panic!("unexpected command {other:?}"),
            };
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn id_is_required() {
        assert!(Cli::try_parse_from_iter(["yellowcard", "accept"]).is_err());
    }
}

mod init_command {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["yellowcard", "init"]);

        assert!(cli.is_init());
        assert_eq!(
            cli.command,
            Command::Init {
                output: PathBuf::from("yellowcard.toml")
            }
        );
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = Cli::parse_from_iter(["yellowcard", "init", "--output", "/custom/path/config.toml"]);

        assert_eq!(
            cli.command,
            Command::Init {
                output: PathBuf::from("/custom/path/config.toml")
            }
        );
    }

    #[test]
    fn is_init_false_for_api_commands() {
        let cli = Cli::parse_from_iter(["yellowcard", "rates"]);

        assert!(!cli.is_init());
    }
}

mod environment_variables {
    use super::*;
    use clap::CommandFactory;

    fn env_of(id: &str) -> Option<String> {
        Cli::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_env())
            .map(|env| env.to_string_lossy().into_owned())
    }

    #[test]
    fn credentials_and_environment_read_env_vars() {
        assert_eq!(env_of("key").as_deref(), Some("YELLOWCARD_API_KEY"));
        assert_eq!(env_of("secret").as_deref(), Some("YELLOWCARD_API_SECRET"));
        assert_eq!(
            env_of("environment").as_deref(),
            Some("YELLOWCARD_ENVIRONMENT")
        );
    }

    #[test]
    fn timeout_has_no_env_var() {
        assert!(env_of("timeout").is_none());
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}

mod environment_arg {
    use super::*;
    use crate::api::Environment;

    #[test]
    fn converts_to_api_environment() {
        assert_eq!(
            Environment::from(EnvironmentArg::Sandbox),
            Environment::Sandbox
        );
        assert_eq!(
            Environment::from(EnvironmentArg::Production),
            Environment::Production
        );
    }
}
