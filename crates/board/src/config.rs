use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "board", about = "In-memory card and list API")]
pub struct Args {
    /// Bearer token every request must present
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Runtime environment, controls log format and error detail
    #[arg(long, env = "APP_ENV", value_enum, default_value = "development")]
    pub environment: Environment,

    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port
    #[arg(short = 'p', long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Base url used for Location headers of created resources
    #[arg(long, env = "PUBLIC_URL", default_value = "http://localhost:8000")]
    pub public_url: String,

    /// Log level
    #[arg(short = 'l', long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Start with a demo card and a list referencing it
    #[arg(long, env = "SEED_DEMO")]
    pub seed_demo: bool,
}
