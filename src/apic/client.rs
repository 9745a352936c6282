use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::config::Config;
use crate::models::ManagedObject;

use super::session::FabricSession;
use super::types::*;

/// APIC REST API client
pub struct ApicClient {
    base_url: String,
    user: String,
    password: String,
    token: Option<String>,
    client: Client,
}

impl ApicClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        if !config.verify_tls {
            tracing::warn!("TLS certificate verification disabled for {}", config.apic_url);
        }

        Ok(Self {
            base_url: config.apic_url.trim_end_matches('/').to_string(),
            user: config.apic_user.clone(),
            password: config.apic_password.clone(),
            token: None,
            client,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn cookie_header(&self) -> Result<String> {
        let token = self
            .token
            .as_deref()
            .context("APIC session is not logged in")?;
        Ok(format!("APIC-cookie={}", token))
    }

    /// Authenticate and keep the session token for later calls
    pub async fn login(&mut self) -> Result<()> {
        let resp = self
            .client
            .post(self.api_url("/aaaLogin.json"))
            .json(&LoginRequest::new(&self.user, &self.password))
            .send()
            .await
            .with_context(|| format!("Failed to reach APIC at {}", self.base_url))?;

        let body = read_imdata(resp).await?;
        let login = body
            .objects_of::<AaaLoginAttributes>("aaaLogin")
            .into_iter()
            .next()
            .context("APIC login reply carried no token")?;

        tracing::info!(
            "Logged in to {} as {} (refresh timeout: {}s)",
            self.base_url,
            self.user,
            login.refresh_timeout_seconds.as_deref().unwrap_or("?")
        );
        self.token = Some(login.token);
        Ok(())
    }
}

/// Decode an APIC reply, turning HTTP failures and `error` entries into `ApicError`
async fn read_imdata(resp: Response) -> Result<ImdataResponse> {
    let status = resp.status();
    let text = resp.text().await?;

    match serde_json::from_str::<ImdataResponse>(&text) {
        Ok(body) => {
            if let Some(err) = body.error() {
                return Err(ApicError {
                    status: status.as_u16(),
                    code: err.code,
                    text: err.text,
                }
                .into());
            }
            if !status.is_success() {
                return Err(ApicError {
                    status: status.as_u16(),
                    code: String::new(),
                    text,
                }
                .into());
            }
            Ok(body)
        }
        Err(e) if status.is_success() => {
            Err(anyhow::anyhow!("Malformed APIC reply: {}", e))
        }
        Err(_) => Err(ApicError {
            status: status.as_u16(),
            code: String::new(),
            text,
        }
        .into()),
    }
}

#[async_trait]
impl FabricSession for ApicClient {
    async fn class_query(&self, class: &str, filter: &str) -> Result<ImdataResponse> {
        tracing::debug!("Class query {} filter {}", class, filter);
        let resp = self
            .client
            .get(self.api_url(&format!("/class/{}.json", class)))
            .query(&[("query-target-filter", filter)])
            .header("Cookie", self.cookie_header()?)
            .header("Accept", "application/json")
            .send()
            .await?;

        read_imdata(resp).await
    }

    async fn commit(&self, tree: &ManagedObject) -> Result<()> {
        tracing::debug!("Posting {} objects to {}", tree.len(), self.api_url("/mo/uni.json"));
        let resp = self
            .client
            .post(self.api_url("/mo/uni.json"))
            .header("Cookie", self.cookie_header()?)
            .json(tree)
            .send()
            .await?;

        read_imdata(resp).await?;
        Ok(())
    }
}
