use crate::models::{ManagedObject, MoClass};

use super::common::*;

pub const TENANT: &str = "Script-mpod-pbr";
pub const AP: &str = "AP-PBR";
pub const CONTRACT: &str = "PBR-CT";

// Client
pub const BD_CLIENT: &str = "BD_Client";
pub const GW_CLIENT: &str = "192.168.0.1/24";
pub const EPG_CLIENT: &str = "EPG_Client";
// Server
pub const BD_SERVER: &str = "BD_Server";
pub const GW_SERVER: &str = "172.31.0.1/24";
pub const EPG_SERVER: &str = "EPG_Server";
// Firewall
pub const BD_INSIDE: &str = "BD_ASA_Inside";
pub const GW_INSIDE: &str = "10.0.10.1/25";
pub const BD_OUTSIDE: &str = "BD_ASA_Outside";
pub const GW_OUTSIDE: &str = "10.0.10.129/25";

pub const DEVICE: &str = "ASAV";
pub const CONCRETE_DEVICE: &str = "ASAv-1";
pub const VCENTER: &str = "shared-vc";
pub const FIREWALL_VM: &str = "Script-pbr-ASAV";
pub const FIREWALL_PATH_DN: &str = "topology/pod-1/paths-102/pathep-[eth1/43]";
pub const GRAPH: &str = "epg-SG";
pub const NODE: &str = "N1";

/// One leg of the routed firewall
struct Leg {
    name: &'static str,
    connector: &'static str,
    bridge_domain: &'static str,
    vnic: &'static str,
    redirect_ip: &'static str,
    redirect_mac: &'static str,
}

const INSIDE: Leg = Leg {
    name: "inside",
    connector: "consumer",
    bridge_domain: BD_INSIDE,
    vnic: "Network adapter 2",
    redirect_ip: "10.0.10.2",
    redirect_mac: "00:50:56:a8:92:d6",
};

const OUTSIDE: Leg = Leg {
    name: "outside",
    connector: "provider",
    bridge_domain: BD_OUTSIDE,
    vnic: "Network adapter 3",
    redirect_ip: "10.0.10.130",
    redirect_mac: "00:50:56:a8:a5:61",
};

fn tenant_dn() -> String {
    format!("uni/tn-{}", TENANT)
}

fn device_dn() -> String {
    format!("{}/lDevVip-{}", tenant_dn(), DEVICE)
}

fn graph_dn() -> String {
    format!("{}/AbsGraph-{}", tenant_dn(), GRAPH)
}

fn redirect_policies() -> ManagedObject {
    let policy = |leg: &Leg| {
        ManagedObject::new(MoClass::SvcRedirectPol)
            .with("name", leg.name)
            .with("destType", "L3")
            .with_child(
                ManagedObject::new(MoClass::RedirectDest)
                    .with("ip", leg.redirect_ip)
                    .with("mac", leg.redirect_mac),
            )
    };

    ManagedObject::new(MoClass::SvcCont)
        .with_child(policy(&INSIDE))
        .with_child(policy(&OUTSIDE))
}

/// Unmanaged virtual firewall with one concrete device and two legs
fn l4_device() -> ManagedObject {
    let concrete_if = |leg: &Leg| {
        ManagedObject::new(MoClass::CIf)
            .with("name", leg.name)
            .with("vnicName", leg.vnic)
            .with_child(ManagedObject::new(MoClass::RsCIfPathAtt).with("tDn", FIREWALL_PATH_DN))
    };
    let logical_if = |leg: &Leg| {
        ManagedObject::new(MoClass::LIf).with("name", leg.name).with_child(
            ManagedObject::new(MoClass::RsCIfAttN).with(
                "tDn",
                format!("{}/cDev-{}/cIf-[{}]", device_dn(), CONCRETE_DEVICE, leg.name),
            ),
        )
    };

    ManagedObject::new(MoClass::LDevVip)
        .with("name", DEVICE)
        .with("managed", "no")
        .with("devtype", "VIRTUAL")
        .with("svcType", "FW")
        .with_child(ManagedObject::new(MoClass::RsALDevToDomP).with("tDn", VMM_DOMAIN_DN))
        .with_child(
            ManagedObject::new(MoClass::CDev)
                .with("name", CONCRETE_DEVICE)
                .with("vcenterName", VCENTER)
                .with("vmName", FIREWALL_VM)
                .with_child(concrete_if(&INSIDE))
                .with_child(concrete_if(&OUTSIDE)),
        )
        .with_child(logical_if(&INSIDE))
        .with_child(logical_if(&OUTSIDE))
}

/// Single-node routed firewall graph in redirect mode
fn service_graph() -> ManagedObject {
    let node_dn = format!("{}/AbsNode-{}", graph_dn(), NODE);
    let connection = |name: &str, terminal_dn: String, func_conn: &str| {
        ManagedObject::new(MoClass::AbsConnection)
            .with("name", name)
            .with("adjType", "L3")
            .with("connDir", "provider")
            .with("connType", "external")
            .with_child(ManagedObject::new(MoClass::RsAbsConnectionConns).with("tDn", terminal_dn))
            .with_child(
                ManagedObject::new(MoClass::RsAbsConnectionConns)
                    .with("tDn", format!("{}/AbsFConn-{}", node_dn, func_conn)),
            )
    };
    let terminal_conn = || ManagedObject::new(MoClass::AbsTermConn).with("name", "1");

    ManagedObject::new(MoClass::AbsGraph)
        .with("name", GRAPH)
        .with_child(
            ManagedObject::new(MoClass::AbsNode)
                .with("name", NODE)
                .with("funcTemplateType", "FW_ROUTED")
                .with("routingMode", "Redirect")
                .with("funcType", "GoTo")
                .with("managed", "no")
                .with_child(ManagedObject::new(MoClass::RsNodeToLDev).with("tDn", device_dn()))
                .with_child(ManagedObject::new(MoClass::AbsFuncConn).with("name", INSIDE.connector))
                .with_child(ManagedObject::new(MoClass::AbsFuncConn).with("name", OUTSIDE.connector)),
        )
        .with_child(connection(
            "C1",
            format!("{}/AbsTermNodeCon-T1/AbsTConn", graph_dn()),
            INSIDE.connector,
        ))
        .with_child(connection(
            "C2",
            format!("{}/AbsTermNodeProv-T2/AbsTConn", graph_dn()),
            OUTSIDE.connector,
        ))
        .with_child(
            ManagedObject::new(MoClass::AbsTermNodeCon)
                .with("name", "T1")
                .with_child(terminal_conn()),
        )
        .with_child(
            ManagedObject::new(MoClass::AbsTermNodeProv)
                .with("name", "T2")
                .with_child(terminal_conn()),
        )
}

/// Device selection policy binding contract, graph and node to the firewall
fn device_selection() -> ManagedObject {
    let interface_ctx = |leg: &Leg| {
        ManagedObject::new(MoClass::LIfCtx)
            .with("connNameOrLbl", leg.connector)
            .with("L3Dest", "yes")
            .with_child(
                ManagedObject::new(MoClass::RsLIfCtxToBD)
                    .with("tDn", format!("{}/BD-{}", tenant_dn(), leg.bridge_domain)),
            )
            .with_child(
                ManagedObject::new(MoClass::RsLIfCtxToLIf)
                    .with("tDn", format!("{}/lIf-{}", device_dn(), leg.name)),
            )
            .with_child(
                ManagedObject::new(MoClass::RsLIfCtxToSvcRedirectPol)
                    .with("tDn", format!("{}/svcCont/svcRedirectPol-{}", tenant_dn(), leg.name)),
            )
    };

    ManagedObject::new(MoClass::LDevCtx)
        .with("ctrctNameOrLbl", CONTRACT)
        .with("graphNameOrLbl", GRAPH)
        .with("nodeNameOrLbl", NODE)
        .with_child(ManagedObject::new(MoClass::RsLDevCtxToLDev).with("tDn", device_dn()))
        .with_child(interface_ctx(&INSIDE))
        .with_child(interface_ctx(&OUTSIDE))
}

pub fn build(owner: &str) -> ManagedObject {
    tenant(TENANT, owner)
        .with_child(vrf(VRF))
        .with_child(server_traffic_filter())
        .with_child(contract_with_graph(CONTRACT, GRAPH))
        .with_child(app_profile(AP).with_children([
            endpoint_group(EPG_CLIENT, BD_CLIENT, vmm_domain(false)).with_child(consumes(CONTRACT)),
            endpoint_group(EPG_SERVER, BD_SERVER, vmm_domain(true)).with_child(provides(CONTRACT)),
        ]))
        .with_child(bridge_domain(BD_CLIENT, VRF, subnet(GW_CLIENT)))
        .with_child(bridge_domain(BD_SERVER, VRF, subnet(GW_SERVER)))
        .with_child(flooding_bridge_domain(BD_INSIDE, VRF, GW_INSIDE))
        .with_child(flooding_bridge_domain(BD_OUTSIDE, VRF, GW_OUTSIDE))
        .with_child(redirect_policies())
        .with_child(l4_device())
        .with_child(service_graph())
        .with_child(device_selection())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::check_references;

    #[test]
    fn test_tree_resolves() {
        let tree = build("carol");
        assert_eq!(tree.walk()[0].0, tenant_dn());
        if let Err(e) = check_references(&tree) {
            panic!("{}", e);
        }
    }

    #[test]
    fn test_firewall_subnets() {
        let tree = build("carol");
        let inside = tree.find(MoClass::BridgeDomain, BD_INSIDE).unwrap();
        assert_eq!(inside.attr("arpFlood"), Some("yes"));
        assert_eq!(inside.child(MoClass::Subnet).and_then(|s| s.attr("ip")), Some(GW_INSIDE));

        let outside = tree.find(MoClass::BridgeDomain, BD_OUTSIDE).unwrap();
        assert_eq!(outside.child(MoClass::Subnet).and_then(|s| s.attr("ip")), Some(GW_OUTSIDE));
        assert_eq!(outside.child(MoClass::Subnet).and_then(|s| s.attr("scope")), Some("private"));
    }

    #[test]
    fn test_redirect_destinations() {
        let tree = build("carol");
        let inside = tree.find(MoClass::SvcRedirectPol, "inside").unwrap();
        let dest = inside.child(MoClass::RedirectDest).unwrap();
        assert_eq!(dest.attr("ip"), Some("10.0.10.2"));
        assert_eq!(dest.attr("mac"), Some("00:50:56:a8:92:d6"));

        let outside = tree.find(MoClass::SvcRedirectPol, "outside").unwrap();
        assert_eq!(outside.child(MoClass::RedirectDest).and_then(|d| d.attr("ip")), Some("10.0.10.130"));
    }

    #[test]
    fn test_known_dns_present() {
        let tree = build("carol");
        let dns: Vec<String> = tree.walk().into_iter().map(|(dn, _)| dn).collect();
        for expected in [
            "uni/tn-Script-mpod-pbr/lDevVip-ASAV/cDev-ASAv-1/cIf-[inside]",
            "uni/tn-Script-mpod-pbr/AbsGraph-epg-SG/AbsTermNodeCon-T1/AbsTConn",
            "uni/tn-Script-mpod-pbr/AbsGraph-epg-SG/AbsNode-N1/AbsFConn-provider",
            "uni/tn-Script-mpod-pbr/svcCont/svcRedirectPol-outside",
            "uni/tn-Script-mpod-pbr/ldevCtx-c-PBR-CT-g-epg-SG-n-N1/lIfCtx-c-consumer",
        ] {
            assert!(dns.iter().any(|dn| dn == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_interface_contexts_point_at_legs() {
        let tree = build("carol");
        let consumer = tree
            .find_all(MoClass::LIfCtx)
            .into_iter()
            .find(|c| c.attr("connNameOrLbl") == Some("consumer"))
            .unwrap();

        assert_eq!(
            consumer.child(MoClass::RsLIfCtxToBD).and_then(|r| r.attr("tDn")),
            Some("uni/tn-Script-mpod-pbr/BD-BD_ASA_Inside")
        );
        assert_eq!(
            consumer.child(MoClass::RsLIfCtxToSvcRedirectPol).and_then(|r| r.attr("tDn")),
            Some("uni/tn-Script-mpod-pbr/svcCont/svcRedirectPol-inside")
        );
    }

    #[test]
    fn test_lag_on_server_only() {
        let tree = build("carol");
        let server = tree.find(MoClass::EndpointGroup, EPG_SERVER).unwrap();
        let client = tree.find(MoClass::EndpointGroup, EPG_CLIENT).unwrap();
        assert!(server.child(MoClass::RsDomAtt).and_then(|d| d.child(MoClass::EpgLagPolAtt)).is_some());
        assert!(client.child(MoClass::RsDomAtt).and_then(|d| d.child(MoClass::EpgLagPolAtt)).is_none());
    }
}
