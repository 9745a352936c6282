use crate::models::ManagedObject;

use super::common::*;

/// Plain client/server lab tenant without contracts
pub mod lab {
    pub const TENANT: &str = "0Script_TEST";
    pub const AP: &str = "AP-inter-EPG";
    pub const BD_CLIENT: &str = "BD_Client";
    pub const EPG_CLIENT: &str = "EPG_Client";
    pub const BD_SERVER: &str = "BD_Server";
    pub const EPG_SERVER: &str = "EPG_Server";
    pub const GW_CLIENT: &str = "192.180.0.1/24";
    pub const GW_SERVER: &str = "172.32.0.1/24";
    pub const SUBNET_NAME: &str = "test";
}

pub const TENANT: &str = "script-inter-epg";
pub const AP: &str = "AP-Inter-EPG";
pub const CONTRACT: &str = "Inter-EPG";
pub const BD_CLIENT: &str = "BD_Client";
pub const EPG_CLIENT: &str = "EPG_Client";
pub const BD_SERVER: &str = "BD_Server";
pub const EPG_SERVER: &str = "EPG_Server";
pub const GW_CLIENT: &str = "192.168.0.1/24";
pub const GW_SERVER: &str = "172.31.0.1/24";

pub const SUMMARY: &str = "\
Source:
VM: Script-Inter-EPG-Client
IP: 192.168.0.10
Node: Pod1 Leaf 101/103

Destination:
VM: Script-Inter-EPG-Server1
IP: 172.31.0.10
Node: Pod2 Leaf 205
VM: Script-Inter-EPG-Server2
IP: 172.31.0.11
Node: Pod1 Leaf 102";

pub fn build_lab(owner: &str) -> ManagedObject {
    let named_subnet = |gw: &str| subnet(gw).with("name", lab::SUBNET_NAME);

    tenant(lab::TENANT, owner)
        .with_child(vrf(VRF))
        .with_child(app_profile(lab::AP).with_children([
            endpoint_group(lab::EPG_CLIENT, lab::BD_CLIENT, vmm_domain(false)),
            endpoint_group(lab::EPG_SERVER, lab::BD_SERVER, vmm_domain(false)),
        ]))
        .with_child(bridge_domain(lab::BD_CLIENT, VRF, named_subnet(lab::GW_CLIENT)))
        .with_child(bridge_domain(lab::BD_SERVER, VRF, named_subnet(lab::GW_SERVER)))
}

pub fn build(owner: &str) -> ManagedObject {
    tenant(TENANT, owner)
        .with_child(vrf(VRF))
        .with_child(server_traffic_filter())
        .with_child(contract(CONTRACT))
        .with_child(app_profile(AP).with_children([
            endpoint_group(EPG_CLIENT, BD_CLIENT, vmm_domain(true)).with_child(consumes(CONTRACT)),
            endpoint_group(EPG_SERVER, BD_SERVER, vmm_domain(false)).with_child(provides(CONTRACT)),
        ]))
        .with_child(bridge_domain(BD_CLIENT, VRF, subnet(GW_CLIENT)))
        .with_child(bridge_domain(BD_SERVER, VRF, subnet(GW_SERVER)))
}
