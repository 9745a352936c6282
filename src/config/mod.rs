use anyhow::{Context, Result};
use std::env;

/// Config holds the controller endpoint and credentials
#[derive(Debug, Clone)]
pub struct Config {
    pub apic_url: String,
    pub apic_user: String,
    pub apic_password: String,
    pub verify_tls: bool,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults.
    /// A `.env` credentials file, if present, should be loaded first.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            apic_url: lookup("APIC_URL")
                .filter(|v| !v.is_empty())
                .context("APIC_URL is not set")?,
            apic_user: get("APIC_USER", "admin"),
            apic_password: lookup("APIC_PASSWORD")
                .filter(|v| !v.is_empty())
                .context("APIC_PASSWORD is not set")?,
            verify_tls: parse_bool(&get("APIC_VERIFY_TLS", "false")),
            timeout_secs: get("APIC_TIMEOUT_SECS", "30").parse().unwrap_or(30),
        })
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
