use anyhow::Result;

use crate::apic::types::TenantAttributes;
use crate::apic::FabricSession;
use crate::blueprints::Blueprint;
use crate::models::{check_references, ManagedObject};

/// Typed error for a tenant name that is already taken on the controller
#[derive(Debug)]
pub struct TenantExists {
    pub name: String,
}

impl std::fmt::Display for TenantExists {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tenant {} is already created on the APIC", self.name)
    }
}

impl std::error::Error for TenantExists {}

/// Property filter selecting tenants by exact name
pub fn tenant_name_filter(name: &str) -> String {
    format!("eq(fvTenant.name,\"{}\")", name)
}

/// Fail with `TenantExists` if any tenant called `name` is already present.
pub async fn ensure_tenant_absent(session: &dyn FabricSession, name: &str) -> Result<()> {
    let resp = session
        .class_query("fvTenant", &tenant_name_filter(name))
        .await?;

    if resp.imdata.is_empty() {
        tracing::info!("Tenant name {} is free", name);
        return Ok(());
    }

    tracing::warn!("{} tenant(s) named {} already exist", resp.total_count, name);
    for tenant in resp.objects_of::<TenantAttributes>("fvTenant") {
        tracing::warn!("Existing tenant {} at {} ({})", tenant.name, tenant.dn, tenant.descr);
    }
    Err(TenantExists {
        name: name.to_string(),
    }
    .into())
}

/// Build the blueprint's tree and check it without touching the controller
pub fn prepare(blueprint: Blueprint, owner: &str) -> Result<ManagedObject> {
    let tree = blueprint.build(owner);
    check_references(&tree)?;
    tracing::debug!("Built {} objects for tenant {}", tree.len(), blueprint.tenant_name());
    Ok(tree)
}

/// Guard, build and submit in that order. The tree is submitted in a single
/// write; nothing is written when the guard or the reference check fails.
pub async fn provision(
    session: &dyn FabricSession,
    blueprint: Blueprint,
    owner: &str,
) -> Result<ManagedObject> {
    ensure_tenant_absent(session, blueprint.tenant_name()).await?;

    let tree = prepare(blueprint, owner)?;

    session.commit(&tree).await?;
    tracing::info!("Committed tenant {} ({} objects)", blueprint.tenant_name(), tree.len());
    Ok(tree)
}
