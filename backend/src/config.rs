use dotenv::dotenv;
use log::{info, warn};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub fixture: FixtureConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Origins allowed by CORS, normally the dev frontend.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub path: PathBuf,
}

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_FIXTURE_PATH: &str = "backend/fixtures/etsy-analysis.json";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";

impl Config {
    pub(crate) fn parse_backend_url(url: &str) -> (String, u16) {
        // Parse BACKEND_URL like "http://localhost:5000" or "http://127.0.0.1:5000"
        if let Ok(parsed_url) = url::Url::parse(url) {
            let host = parsed_url.host_str().unwrap_or("127.0.0.1").to_string();
            let port = parsed_url.port().unwrap_or(5000);
            (host, port)
        } else {
            ("127.0.0.1".to_string(), 5000)
        }
    }

    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_env_files();

        let environment = env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);

        info!("Loading configuration for environment: {:?}", environment);

        let config = Config {
            server: Self::load_server_config(&environment),
            fixture: Self::load_fixture_config(),
            environment,
        };

        config.validate()?;
        config.log_configuration();

        Ok(config)
    }

    fn load_env_files() {
        // ENV_FILE_PATH wins over every other .env file
        if let Ok(env_file_path) = env::var("ENV_FILE_PATH") {
            if !env_file_path.is_empty() {
                info!("Loading environment from ENV_FILE_PATH: {}", env_file_path);
                dotenv::from_filename(&env_file_path).ok();
                return;
            }
        }

        dotenv().ok();
        let environment_hint = env::var("RUST_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or(Environment::Development);
        let env_file = format!(".env.{:?}", environment_hint).to_lowercase();
        if env_file != ".env.development" {
            let _ = dotenv::from_filename(&env_file);
        }
    }

    fn load_server_config(env: &Environment) -> ServerConfig {
        let backend_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let (host, port) = Self::parse_backend_url(&backend_url);
        let default_workers = match env {
            Environment::Production => 4,
            Environment::Development | Environment::Test => 1,
        };

        ServerConfig {
            // SERVER_HOST takes precedence over the BACKEND_URL host
            host: env::var("SERVER_HOST").unwrap_or(host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(port),
            workers: env::var("BACKEND_WORKERS")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(default_workers),
            allowed_origins: Self::parse_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
        }
    }

    fn load_fixture_config() -> FixtureConfig {
        let path = env::var("FIXTURE_PATH").unwrap_or_else(|_| {
            warn!("FIXTURE_PATH not set, using {}", DEFAULT_FIXTURE_PATH);
            DEFAULT_FIXTURE_PATH.to_string()
        });
        FixtureConfig { path: PathBuf::from(path) }
    }

    pub(crate) fn parse_origins(list: &str) -> Vec<String> {
        list.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.server.port == 0 {
            return Err("Server port cannot be 0".into());
        }
        if self.server.workers == 0 {
            return Err("Worker count cannot be 0".into());
        }
        if self.fixture.path.as_os_str().is_empty() {
            return Err("Fixture path cannot be empty".into());
        }
        Ok(())
    }

    fn log_configuration(&self) {
        info!("Configuration loaded successfully");
        info!("Environment: {:?}", self.environment);
        info!("Server: {}:{} (workers: {})", self.server.host, self.server.port, self.server.workers);
        info!("Fixture: {}", self.fixture.path.display());
        info!("Allowed origins: {}", self.server.allowed_origins.join(", "));

        if self.environment == Environment::Production {
            warn!("The fixture service replays canned data and is not meant for production traffic");
        }
    }
}
