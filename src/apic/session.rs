use anyhow::Result;
use async_trait::async_trait;

use crate::models::ManagedObject;

use super::types::ImdataResponse;

/// Read/write RPCs the provisioning run needs from the controller.
///
/// `ApicClient` talks REST; tests substitute an in-memory recorder.
#[async_trait]
pub trait FabricSession: Send + Sync {
    /// Objects of `class` matching an APIC property filter such as
    /// `eq(fvTenant.name,"t1")`
    async fn class_query(&self, class: &str, filter: &str) -> Result<ImdataResponse>;

    /// Submit a whole tree in one create-or-update request
    async fn commit(&self, tree: &ManagedObject) -> Result<()>;
}
