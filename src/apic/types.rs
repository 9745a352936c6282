use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// --- APIC API types ---

/// Every APIC reply wraps its objects in `imdata`
#[derive(Debug, Deserialize)]
pub struct ImdataResponse {
    #[serde(rename = "totalCount", default)]
    pub total_count: String,
    #[serde(default)]
    pub imdata: Vec<Map<String, Value>>,
}

impl ImdataResponse {
    /// First `error` object in the reply, if the controller reported one
    pub fn error(&self) -> Option<ApicErrorBody> {
        self.imdata
            .iter()
            .filter_map(|entry| entry.get("error"))
            .find_map(|err| serde_json::from_value::<ClassBody<ApicErrorBody>>(err.clone()).ok())
            .map(|body| body.attributes)
    }

    /// Attribute bodies of every entry of the given class
    pub fn objects_of<T: serde::de::DeserializeOwned>(&self, class: &str) -> Vec<T> {
        self.imdata
            .iter()
            .filter_map(|entry| entry.get(class))
            .filter_map(|body| serde_json::from_value::<ClassBody<T>>(body.clone()).ok())
            .map(|body| body.attributes)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBody<T> {
    pub attributes: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApicErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AaaLoginAttributes {
    pub token: String,
    #[serde(rename = "refreshTimeoutSeconds", default)]
    pub refresh_timeout_seconds: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TenantAttributes {
    pub dn: String,
    pub name: String,
    #[serde(default)]
    pub descr: String,
}

// --- Request types ---

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest {
    #[serde(rename = "aaaUser")]
    pub aaa_user: ClassBody<LoginCredentials>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginCredentials {
    pub name: String,
    pub pwd: String,
}

impl LoginRequest {
    pub fn new(user: &str, password: &str) -> Self {
        Self {
            aaa_user: ClassBody {
                attributes: LoginCredentials {
                    name: user.to_string(),
                    pwd: password.to_string(),
                },
            },
        }
    }
}

// --- Errors ---

/// Typed error for a reply the controller marked as failed
#[derive(Debug)]
pub struct ApicError {
    pub status: u16,
    pub code: String,
    pub text: String,
}

impl std::fmt::Display for ApicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.code.is_empty() {
            write!(f, "APIC API error {}: {}", self.status, self.text)
        } else {
            write!(f, "APIC API error {} (code {}): {}", self.status, self.code, self.text)
        }
    }
}

impl std::error::Error for ApicError {}
