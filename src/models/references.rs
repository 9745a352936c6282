use std::collections::HashSet;

use super::class::MoClass;
use super::mo::ManagedObject;

/// Relation attributes that name a sibling object inside the same tenant
const NAMED_RELATIONS: &[(&str, MoClass)] = &[
    ("tnFvCtxName", MoClass::Ctx),
    ("tnFvBDName", MoClass::BridgeDomain),
    ("tnVzBrCPName", MoClass::Contract),
    ("tnVzFilterName", MoClass::Filter),
    ("tnVnsAbsGraphName", MoClass::AbsGraph),
];

/// Typed error for a tree that would be rejected or half-wired by the
/// controller. Carries every problem found, not just the first.
#[derive(Debug)]
pub struct ReferenceError {
    pub problems: Vec<String>,
}

impl std::fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration tree has unresolved references: {}", self.problems.join("; "))
    }
}

impl std::error::Error for ReferenceError {}

/// Check that every in-tenant reference resolves inside the tree and that no
/// two siblings share a relative name.
///
/// Targets outside the root's dn (VMM domains, fabric paths) are external and
/// are not checked.
pub fn check_references(root: &ManagedObject) -> Result<(), ReferenceError> {
    let nodes = root.walk();
    let root_prefix = format!("{}/", nodes[0].0);
    let dns: HashSet<&str> = nodes.iter().map(|(dn, _)| dn.as_str()).collect();
    let mut problems = Vec::new();

    for (dn, mo) in &nodes {
        let mut seen = HashSet::new();
        for child in mo.children() {
            let rn = child.rn();
            if !seen.insert(rn.clone()) {
                problems.push(format!("{}: duplicate child {}", dn, rn));
            }
        }

        for (attr, target) in NAMED_RELATIONS {
            if let Some(name) = mo.attr(attr) {
                if root.find(*target, name).is_none() {
                    problems.push(format!("{}: {}={} names no {}", dn, attr, name, target));
                }
            }
        }

        if let Some(target_dn) = mo.attr("tDn") {
            if target_dn.starts_with(&root_prefix) && !dns.contains(target_dn) {
                problems.push(format!("{}: tDn {} is not part of the tree", dn, target_dn));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ReferenceError { problems })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant() -> ManagedObject {
        ManagedObject::new(MoClass::Tenant).with("name", "t1")
    }

    #[test]
    fn test_resolved_tree_passes() {
        let tree = tenant()
            .with_child(ManagedObject::new(MoClass::Ctx).with("name", "vrf"))
            .with_child(
                ManagedObject::new(MoClass::BridgeDomain)
                    .with("name", "bd")
                    .with_child(ManagedObject::new(MoClass::RsCtx).with("tnFvCtxName", "vrf")),
            )
            .with_child(
                ManagedObject::new(MoClass::LDevVip)
                    .with("name", "fw")
                    .with_child(
                        ManagedObject::new(MoClass::RsALDevToDomP)
                            .with("tDn", "uni/vmmp-VMware/dom-shared-DVS"),
                    ),
            )
            .with_child(
                ManagedObject::new(MoClass::LDevCtx)
                    .with("ctrctNameOrLbl", "c")
                    .with("graphNameOrLbl", "g")
                    .with("nodeNameOrLbl", "n")
                    .with_child(
                        ManagedObject::new(MoClass::RsLDevCtxToLDev).with("tDn", "uni/tn-t1/lDevVip-fw"),
                    ),
            );

        assert!(check_references(&tree).is_ok());
    }

    #[test]
    fn test_dangling_named_relation() {
        let tree = tenant().with_child(
            ManagedObject::new(MoClass::BridgeDomain)
                .with("name", "bd")
                .with_child(ManagedObject::new(MoClass::RsCtx).with("tnFvCtxName", "nope")),
        );

        let err = check_references(&tree).unwrap_err();
        assert_eq!(err.problems.len(), 1);
        assert!(err.problems[0].contains("tnFvCtxName=nope"));
    }

    #[test]
    fn test_dangling_in_tenant_dn() {
        let tree = tenant().with_child(
            ManagedObject::new(MoClass::AbsGraph).with("name", "g").with_child(
                ManagedObject::new(MoClass::AbsNode)
                    .with("name", "N1")
                    .with_child(ManagedObject::new(MoClass::RsNodeToLDev).with("tDn", "uni/tn-t1/lDevVip-gone")),
            ),
        );

        let err = check_references(&tree).unwrap_err();
        assert!(err.to_string().contains("uni/tn-t1/lDevVip-gone"));
    }

    #[test]
    fn test_other_tenant_dn_is_external() {
        let tree = tenant().with_child(
            ManagedObject::new(MoClass::LDevVip)
                .with("name", "fw")
                .with_child(ManagedObject::new(MoClass::RsALDevToDomP).with("tDn", "uni/tn-t10/x")),
        );

        assert!(check_references(&tree).is_ok());
    }

    #[test]
    fn test_duplicate_sibling_rn() {
        let tree = tenant().with_child(
            ManagedObject::new(MoClass::Filter)
                .with("name", "f")
                .with_child(ManagedObject::new(MoClass::Entry).with("name", "SSH").with("prot", "tcp"))
                .with_child(ManagedObject::new(MoClass::Entry).with("name", "SSH").with("prot", "icmp")),
        );

        let err = check_references(&tree).unwrap_err();
        assert_eq!(err.problems, vec!["uni/tn-t1/flt-f: duplicate child e-SSH".to_string()]);
    }
}
