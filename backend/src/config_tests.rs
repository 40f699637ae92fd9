#[cfg(test)]
mod config_tests {
    use crate::config::{Config, Environment, FixtureConfig, ServerConfig};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;

    fn config_with(port: u16, workers: usize, fixture: &str) -> Config {
        Config {
            environment: Environment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port,
                workers,
                allowed_origins: vec![],
            },
            fixture: FixtureConfig {
                path: PathBuf::from(fixture),
            },
        }
    }

    #[rstest]
    #[case("development", Environment::Development)]
    #[case("dev", Environment::Development)]
    #[case("TEST", Environment::Test)]
    #[case("prod", Environment::Production)]
    #[case("production", Environment::Production)]
    fn test_environment_parsing(#[case] input: &str, #[case] expected: Environment) {
        assert_eq!(input.parse::<Environment>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_environment_is_rejected() {
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[rstest]
    #[case("http://localhost:5000", "localhost", 5000)]
    #[case("http://0.0.0.0:50002", "0.0.0.0", 50002)]
    #[case("http://example.com", "example.com", 5000)]
    #[case("not a url", "127.0.0.1", 5000)]
    fn test_parse_backend_url(#[case] url: &str, #[case] host: &str, #[case] port: u16) {
        assert_eq!(Config::parse_backend_url(url), (host.to_string(), port));
    }

    #[test]
    fn test_parse_origins_trims_and_drops_blanks() {
        assert_eq!(
            Config::parse_origins(" http://a:8080, ,http://b:8080,"),
            vec!["http://a:8080".to_string(), "http://b:8080".to_string()]
        );
    }

    #[test]
    fn test_validate() {
        assert!(config_with(5000, 1, "fixture.json").validate().is_ok());
        assert!(config_with(0, 1, "fixture.json").validate().is_err());
        assert!(config_with(5000, 0, "fixture.json").validate().is_err());
        assert!(config_with(5000, 1, "").validate().is_err());
    }
}
