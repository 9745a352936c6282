pub mod common;
pub mod inter_epg;
pub mod mpod_pbr;

use clap::ValueEnum;

use crate::models::ManagedObject;

/// Built-in tenant layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Blueprint {
    /// Client and server EPGs with no contract
    InterEpgLab,
    /// Client and server EPGs joined by an HTTPS/SSH/ICMP contract
    InterEpg,
    /// Multi-pod policy-based redirect through a virtual firewall
    MpodPbr,
}

impl Blueprint {
    pub fn tenant_name(self) -> &'static str {
        match self {
            Blueprint::InterEpgLab => inter_epg::lab::TENANT,
            Blueprint::InterEpg => inter_epg::TENANT,
            Blueprint::MpodPbr => mpod_pbr::TENANT,
        }
    }

    /// Build the full tenant tree; `owner` lands in the tenant description
    pub fn build(self, owner: &str) -> ManagedObject {
        match self {
            Blueprint::InterEpgLab => inter_epg::build_lab(owner),
            Blueprint::InterEpg => inter_epg::build(owner),
            Blueprint::MpodPbr => mpod_pbr::build(owner),
        }
    }

    /// Extra text printed after a successful run
    pub fn summary(self) -> Option<&'static str> {
        match self {
            Blueprint::InterEpg => Some(inter_epg::SUMMARY),
            _ => None,
        }
    }

    /// Whether the submitted payload is printed even without `--show-config`
    pub fn always_shows_config(self) -> bool {
        matches!(self, Blueprint::InterEpgLab)
    }
}
