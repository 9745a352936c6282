use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

use super::class::MoClass;

/// Distinguished name of the policy universe every tenant lives under
pub const UNI_DN: &str = "uni";

/// ManagedObject is one node of a configuration tree submitted to the controller
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedObject {
    class: MoClass,
    attributes: BTreeMap<String, String>,
    children: Vec<ManagedObject>,
}

impl ManagedObject {
    pub fn new(class: MoClass) -> Self {
        Self {
            class,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn with_child(mut self, child: ManagedObject) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ManagedObject>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn children(&self) -> &[ManagedObject] {
        &self.children
    }

    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    pub fn rn(&self) -> String {
        self.class.rn(&self.attributes)
    }

    /// Distinguished name of this object when placed directly under `parent_dn`
    pub fn dn_under(&self, parent_dn: &str) -> String {
        format!("{}/{}", parent_dn, self.rn())
    }

    /// Every object of the tree paired with its dn, root first (depth-first).
    /// The root is assumed to sit directly under `uni`.
    pub fn walk(&self) -> Vec<(String, &ManagedObject)> {
        let mut out = Vec::new();
        self.collect(UNI_DN, &mut out);
        out
    }

    fn collect<'a>(&'a self, parent_dn: &str, out: &mut Vec<(String, &'a ManagedObject)>) {
        let dn = self.dn_under(parent_dn);
        out.push((dn.clone(), self));
        for child in &self.children {
            child.collect(&dn, out);
        }
    }

    /// First object of the given class whose `name` attribute matches
    pub fn find(&self, class: MoClass, name: &str) -> Option<&ManagedObject> {
        if self.class == class && self.name() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(class, name))
    }

    /// All objects of the given class, in depth-first order
    #[cfg(test)]
    pub fn find_all(&self, class: MoClass) -> Vec<&ManagedObject> {
        let mut out = Vec::new();
        self.collect_class(class, &mut out);
        out
    }

    #[cfg(test)]
    fn collect_class<'a>(&'a self, class: MoClass, out: &mut Vec<&'a ManagedObject>) {
        if self.class == class {
            out.push(self);
        }
        for child in &self.children {
            child.collect_class(class, out);
        }
    }

    /// First direct child of the given class
    #[cfg(test)]
    pub fn child(&self, class: MoClass) -> Option<&ManagedObject> {
        self.children.iter().find(|c| c.class == class)
    }

    /// Number of objects in the tree, root included
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(ManagedObject::len).sum::<usize>()
    }
}

/// Wire body of a managed object: `{"attributes": {...}, "children": [...]}`
#[derive(Serialize)]
struct MoBody<'a> {
    attributes: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "no_children")]
    children: &'a [ManagedObject],
}

fn no_children(children: &&[ManagedObject]) -> bool {
    children.is_empty()
}

impl Serialize for ManagedObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            self.class.as_str(),
            &MoBody {
                attributes: &self.attributes,
                children: &self.children,
            },
        )?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ManagedObject {
        ManagedObject::new(MoClass::Tenant)
            .with("name", "t1")
            .with("descr", "ops")
            .with_child(ManagedObject::new(MoClass::Ctx).with("name", "vrf"))
            .with_child(
                ManagedObject::new(MoClass::BridgeDomain)
                    .with("name", "bd")
                    .with_child(ManagedObject::new(MoClass::RsCtx).with("tnFvCtxName", "vrf"))
                    .with_child(
                        ManagedObject::new(MoClass::Subnet)
                            .with("ip", "10.0.0.1/24")
                            .with("scope", "private"),
                    ),
            )
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "fvTenant": {
                    "attributes": {"name": "t1", "descr": "ops"},
                    "children": [
                        {"fvCtx": {"attributes": {"name": "vrf"}}},
                        {"fvBD": {
                            "attributes": {"name": "bd"},
                            "children": [
                                {"fvRsCtx": {"attributes": {"tnFvCtxName": "vrf"}}},
                                {"fvSubnet": {"attributes": {"ip": "10.0.0.1/24", "scope": "private"}}}
                            ]
                        }}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_leaf_has_no_children_key() {
        let value = serde_json::to_value(ManagedObject::new(MoClass::Ctx).with("name", "v")).unwrap();
        assert!(value["fvCtx"].get("children").is_none());
    }

    #[test]
    fn test_walk_dns() {
        let tree = sample();
        let dns: Vec<String> = tree.walk().into_iter().map(|(dn, _)| dn).collect();
        assert_eq!(
            dns,
            vec![
                "uni/tn-t1",
                "uni/tn-t1/ctx-vrf",
                "uni/tn-t1/BD-bd",
                "uni/tn-t1/BD-bd/rsctx",
                "uni/tn-t1/BD-bd/subnet-[10.0.0.1/24]",
            ]
        );
    }

    #[test]
    fn test_find() {
        let tree = sample();
        let bd = tree.find(MoClass::BridgeDomain, "bd").unwrap();
        assert_eq!(bd.child(MoClass::Subnet).and_then(|s| s.attr("ip")), Some("10.0.0.1/24"));
        assert!(tree.find(MoClass::BridgeDomain, "missing").is_none());
        assert_eq!(tree.find_all(MoClass::RsCtx).len(), 1);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_with_replaces_attribute() {
        let mo = ManagedObject::new(MoClass::Ap).with("name", "a").with("name", "b");
        assert_eq!(mo.name(), Some("b"));
        assert_eq!(mo.attributes().len(), 1);
    }
}
