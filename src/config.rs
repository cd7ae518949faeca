use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: String,
    pub openai_api_key: String,
    pub port: u16,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            supabase_url: get_env("SUPABASE_URL")?,
            supabase_key: get_env("SUPABASE_KEY")?,
            openai_api_key: get_env("OPENAI_API_KEY")?,
            port: match env::var("PORT") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|e| Error::Config(format!("Invalid value for PORT: {}", e)))?,
                Err(_) => 8000,
            },
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
