//! Server configuration
//!
//! Command-line flags with environment fallbacks. Secrets are read once at
//! startup and passed down explicitly.

use std::time::Duration;

use clap::Parser;
use orglens_client::DEFAULT_API_URL;

#[derive(Parser, Clone)]
#[command(name = "orglens-server")]
#[command(about = "Greeting, Basic-Auth and GitHub organization listing API", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ORGLENS_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub github_api_url: String,

    /// Timeout for a single GitHub request, in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value_t = 10)]
    pub github_timeout_secs: u64,

    /// GitHub access token; requests are anonymous without one
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Username expected by GET /protected
    #[arg(long, env = "AUTH_USERNAME")]
    pub auth_username: Option<String>,

    /// Password expected by GET /protected
    #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
    pub auth_password: Option<String>,
}

impl Config {
    pub fn github_timeout(&self) -> Duration {
        Duration::from_secs(self.github_timeout_secs)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if !self.github_api_url.starts_with("http://")
            && !self.github_api_url.starts_with("https://")
        {
            anyhow::bail!("github_api_url must start with http:// or https://");
        }

        if self.github_timeout_secs == 0 {
            anyhow::bail!("github_timeout_secs must be greater than 0");
        }

        Ok(())
    }
}
