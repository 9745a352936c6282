//! Building blocks shared by the blueprints.

use crate::models::{ManagedObject, MoClass};

pub const VRF: &str = "VRF-internal";
pub const PRIVATE: &str = "private";
pub const VMM_DOMAIN_DN: &str = "uni/vmmp-VMware/dom-shared-DVS";
pub const ENHANCED_LAG_DN: &str = "uni/vmmp-VMware/dom-shared-DVS/vswitchpolcont/enlacplagp-active";
pub const PRE_PROVISION: &str = "pre-provision";

pub const FILTER: &str = "Server-Traffic";
pub const SUBJECT: &str = "Server-Subject";

pub fn tenant(name: &str, owner: &str) -> ManagedObject {
    ManagedObject::new(MoClass::Tenant)
        .with("name", name)
        .with("descr", owner)
}

pub fn vrf(name: &str) -> ManagedObject {
    ManagedObject::new(MoClass::Ctx).with("name", name)
}

pub fn app_profile(name: &str) -> ManagedObject {
    ManagedObject::new(MoClass::Ap).with("name", name)
}

pub fn subnet(gateway: &str) -> ManagedObject {
    ManagedObject::new(MoClass::Subnet)
        .with("ip", gateway)
        .with("scope", PRIVATE)
}

/// Bridge domain bound to `vrf` with a single private subnet
pub fn bridge_domain(name: &str, vrf: &str, subnet: ManagedObject) -> ManagedObject {
    ManagedObject::new(MoClass::BridgeDomain)
        .with("name", name)
        .with_child(ManagedObject::new(MoClass::RsCtx).with("tnFvCtxName", vrf))
        .with_child(subnet)
}

/// Bridge domain for a routed firewall leg: unknown unicast and ARP are flooded
pub fn flooding_bridge_domain(name: &str, vrf: &str, gateway: &str) -> ManagedObject {
    bridge_domain(name, vrf, subnet(gateway))
        .with("unkMacUcastAct", "flood")
        .with("arpFlood", "yes")
}

/// VMM domain attachment, optionally pinned to the enhanced LAG policy
pub fn vmm_domain(with_lag: bool) -> ManagedObject {
    let attachment = ManagedObject::new(MoClass::RsDomAtt)
        .with("tDn", VMM_DOMAIN_DN)
        .with("resImedcy", PRE_PROVISION);

    if !with_lag {
        return attachment;
    }

    attachment.with_child(
        ManagedObject::new(MoClass::EpgLagPolAtt).with_child(
            ManagedObject::new(MoClass::RsVmmVSwitchEnhancedLagPol).with("tDn", ENHANCED_LAG_DN),
        ),
    )
}

pub fn endpoint_group(name: &str, bridge_domain: &str, domain: ManagedObject) -> ManagedObject {
    ManagedObject::new(MoClass::EndpointGroup)
        .with("name", name)
        .with_child(ManagedObject::new(MoClass::RsBd).with("tnFvBDName", bridge_domain))
        .with_child(domain)
}

pub fn consumes(contract: &str) -> ManagedObject {
    ManagedObject::new(MoClass::RsCons).with("tnVzBrCPName", contract)
}

pub fn provides(contract: &str) -> ManagedObject {
    ManagedObject::new(MoClass::RsProv).with("tnVzBrCPName", contract)
}

fn filter_entry(name: &str, protocol: &str, port: Option<u16>) -> ManagedObject {
    let entry = ManagedObject::new(MoClass::Entry)
        .with("name", name)
        .with("etherT", "ip")
        .with("prot", protocol);

    match port {
        Some(p) => entry
            .with("dFromPort", p.to_string())
            .with("dToPort", p.to_string()),
        None => entry,
    }
}

/// Filter admitting HTTPS, SSH and ICMP towards the servers
pub fn server_traffic_filter() -> ManagedObject {
    ManagedObject::new(MoClass::Filter)
        .with("name", FILTER)
        .with_child(filter_entry("HTTPS", "tcp", Some(443)))
        .with_child(filter_entry("SSH", "tcp", Some(22)))
        .with_child(filter_entry("ICMP", "icmp", None))
}

/// Contract with a single subject carrying the server-traffic filter
pub fn contract(name: &str) -> ManagedObject {
    ManagedObject::new(MoClass::Contract)
        .with("name", name)
        .with_child(subject())
}

/// Contract whose subject also steers traffic through `graph`
pub fn contract_with_graph(name: &str, graph: &str) -> ManagedObject {
    ManagedObject::new(MoClass::Contract)
        .with("name", name)
        .with_child(
            subject().with_child(ManagedObject::new(MoClass::RsSubjGraphAtt).with("tnVnsAbsGraphName", graph)),
        )
}

fn subject() -> ManagedObject {
    ManagedObject::new(MoClass::Subject)
        .with("name", SUBJECT)
        .with_child(ManagedObject::new(MoClass::RsSubjFiltAtt).with("tnVzFilterName", FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_entries() {
        let filter = server_traffic_filter();
        let entries: Vec<_> = filter.children().iter().map(|e| e.rn()).collect();
        assert_eq!(entries, vec!["e-HTTPS", "e-SSH", "e-ICMP"]);

        let https = filter.find(MoClass::Entry, "HTTPS").unwrap();
        assert_eq!(https.attr("dFromPort"), Some("443"));
        assert_eq!(https.attr("dToPort"), Some("443"));

        let icmp = filter.find(MoClass::Entry, "ICMP").unwrap();
        assert_eq!(icmp.attr("prot"), Some("icmp"));
        assert!(icmp.attr("dFromPort").is_none());
    }

    #[test]
    fn test_vmm_domain_lag() {
        assert!(vmm_domain(false).children().is_empty());

        let with_lag = vmm_domain(true);
        let lag = with_lag
            .child(MoClass::EpgLagPolAtt)
            .and_then(|att| att.child(MoClass::RsVmmVSwitchEnhancedLagPol))
            .unwrap();
        assert_eq!(lag.attr("tDn"), Some(ENHANCED_LAG_DN));
        assert_eq!(with_lag.attr("resImedcy"), Some("pre-provision"));
    }

    #[test]
    fn test_flooding_bridge_domain() {
        let bd = flooding_bridge_domain("BD_X", VRF, "10.0.0.1/25");
        assert_eq!(bd.attr("arpFlood"), Some("yes"));
        assert_eq!(bd.attr("unkMacUcastAct"), Some("flood"));
        assert_eq!(bd.child(MoClass::Subnet).and_then(|s| s.attr("scope")), Some(PRIVATE));
    }

    #[test]
    fn test_contract_with_graph() {
        let ct = contract_with_graph("CT", "SG");
        let subj = ct.child(MoClass::Subject).unwrap();
        assert_eq!(
            subj.child(MoClass::RsSubjGraphAtt).and_then(|g| g.attr("tnVnsAbsGraphName")),
            Some("SG")
        );
        assert!(contract("CT").child(MoClass::Subject).unwrap().child(MoClass::RsSubjGraphAtt).is_none());
    }
}
