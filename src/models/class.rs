use std::collections::BTreeMap;
use std::fmt;

/// Controller object classes emitted by the blueprints.
///
/// Each variant knows its wire name and how the controller derives its
/// relative name (rn) from the object's naming attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoClass {
    // fv: tenant, networking and endpoint groups
    Tenant,
    Ctx,
    Ap,
    BridgeDomain,
    RsCtx,
    Subnet,
    EndpointGroup,
    RsBd,
    RsDomAtt,
    EpgLagPolAtt,
    RsVmmVSwitchEnhancedLagPol,
    RsCons,
    RsProv,
    // vz: contracts and filters
    Filter,
    Entry,
    Contract,
    Subject,
    RsSubjFiltAtt,
    RsSubjGraphAtt,
    // vns: service insertion
    SvcCont,
    SvcRedirectPol,
    RedirectDest,
    LDevVip,
    RsALDevToDomP,
    CDev,
    CIf,
    RsCIfPathAtt,
    LIf,
    RsCIfAttN,
    AbsGraph,
    AbsNode,
    RsNodeToLDev,
    AbsFuncConn,
    AbsConnection,
    AbsTermNodeCon,
    AbsTermNodeProv,
    AbsTermConn,
    RsAbsConnectionConns,
    LDevCtx,
    RsLDevCtxToLDev,
    LIfCtx,
    RsLIfCtxToBD,
    RsLIfCtxToLIf,
    RsLIfCtxToSvcRedirectPol,
}

impl MoClass {
    /// Class name as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            MoClass::Tenant => "fvTenant",
            MoClass::Ctx => "fvCtx",
            MoClass::Ap => "fvAp",
            MoClass::BridgeDomain => "fvBD",
            MoClass::RsCtx => "fvRsCtx",
            MoClass::Subnet => "fvSubnet",
            MoClass::EndpointGroup => "fvAEPg",
            MoClass::RsBd => "fvRsBd",
            MoClass::RsDomAtt => "fvRsDomAtt",
            MoClass::EpgLagPolAtt => "fvAEPgLagPolAtt",
            MoClass::RsVmmVSwitchEnhancedLagPol => "fvRsVmmVSwitchEnhancedLagPol",
            MoClass::RsCons => "fvRsCons",
            MoClass::RsProv => "fvRsProv",
            MoClass::Filter => "vzFilter",
            MoClass::Entry => "vzEntry",
            MoClass::Contract => "vzBrCP",
            MoClass::Subject => "vzSubj",
            MoClass::RsSubjFiltAtt => "vzRsSubjFiltAtt",
            MoClass::RsSubjGraphAtt => "vzRsSubjGraphAtt",
            MoClass::SvcCont => "vnsSvcCont",
            MoClass::SvcRedirectPol => "vnsSvcRedirectPol",
            MoClass::RedirectDest => "vnsRedirectDest",
            MoClass::LDevVip => "vnsLDevVip",
            MoClass::RsALDevToDomP => "vnsRsALDevToDomP",
            MoClass::CDev => "vnsCDev",
            MoClass::CIf => "vnsCIf",
            MoClass::RsCIfPathAtt => "vnsRsCIfPathAtt",
            MoClass::LIf => "vnsLIf",
            MoClass::RsCIfAttN => "vnsRsCIfAttN",
            MoClass::AbsGraph => "vnsAbsGraph",
            MoClass::AbsNode => "vnsAbsNode",
            MoClass::RsNodeToLDev => "vnsRsNodeToLDev",
            MoClass::AbsFuncConn => "vnsAbsFuncConn",
            MoClass::AbsConnection => "vnsAbsConnection",
            MoClass::AbsTermNodeCon => "vnsAbsTermNodeCon",
            MoClass::AbsTermNodeProv => "vnsAbsTermNodeProv",
            MoClass::AbsTermConn => "vnsAbsTermConn",
            MoClass::RsAbsConnectionConns => "vnsRsAbsConnectionConns",
            MoClass::LDevCtx => "vnsLDevCtx",
            MoClass::RsLDevCtxToLDev => "vnsRsLDevCtxToLDev",
            MoClass::LIfCtx => "vnsLIfCtx",
            MoClass::RsLIfCtxToBD => "vnsRsLIfCtxToBD",
            MoClass::RsLIfCtxToLIf => "vnsRsLIfCtxToLIf",
            MoClass::RsLIfCtxToSvcRedirectPol => "vnsRsLIfCtxToSvcRedirectPol",
        }
    }

    /// Relative name of an object of this class with the given attributes.
    /// Missing naming attributes render as empty strings.
    pub fn rn(self, attrs: &BTreeMap<String, String>) -> String {
        let a = |key: &str| attrs.get(key).map(String::as_str).unwrap_or_default();

        match self {
            MoClass::Tenant => format!("tn-{}", a("name")),
            MoClass::Ctx => format!("ctx-{}", a("name")),
            MoClass::Ap => format!("ap-{}", a("name")),
            MoClass::BridgeDomain => format!("BD-{}", a("name")),
            MoClass::RsCtx => "rsctx".to_string(),
            MoClass::Subnet => format!("subnet-[{}]", a("ip")),
            MoClass::EndpointGroup => format!("epg-{}", a("name")),
            MoClass::RsBd => "rsbd".to_string(),
            MoClass::RsDomAtt => format!("rsdomAtt-[{}]", a("tDn")),
            MoClass::EpgLagPolAtt => "epglagpolatt".to_string(),
            MoClass::RsVmmVSwitchEnhancedLagPol => "rsvmmVSwitchEnhancedLagPol".to_string(),
            MoClass::RsCons => format!("rscons-{}", a("tnVzBrCPName")),
            MoClass::RsProv => format!("rsprov-{}", a("tnVzBrCPName")),
            MoClass::Filter => format!("flt-{}", a("name")),
            MoClass::Entry => format!("e-{}", a("name")),
            MoClass::Contract => format!("brc-{}", a("name")),
            MoClass::Subject => format!("subj-{}", a("name")),
            MoClass::RsSubjFiltAtt => format!("rssubjFiltAtt-{}", a("tnVzFilterName")),
            MoClass::RsSubjGraphAtt => "rsSubjGraphAtt".to_string(),
            MoClass::SvcCont => "svcCont".to_string(),
            MoClass::SvcRedirectPol => format!("svcRedirectPol-{}", a("name")),
            MoClass::RedirectDest => format!("RedirectDest_ip-[{}]", a("ip")),
            MoClass::LDevVip => format!("lDevVip-{}", a("name")),
            MoClass::RsALDevToDomP => "rsALDevToDomP".to_string(),
            MoClass::CDev => format!("cDev-{}", a("name")),
            MoClass::CIf => format!("cIf-[{}]", a("name")),
            MoClass::RsCIfPathAtt => "rsCIfPathAtt".to_string(),
            MoClass::LIf => format!("lIf-{}", a("name")),
            MoClass::RsCIfAttN => format!("rscIfAttN-[{}]", a("tDn")),
            MoClass::AbsGraph => format!("AbsGraph-{}", a("name")),
            MoClass::AbsNode => format!("AbsNode-{}", a("name")),
            MoClass::RsNodeToLDev => "rsNodeToLDev".to_string(),
            MoClass::AbsFuncConn => format!("AbsFConn-{}", a("name")),
            MoClass::AbsConnection => format!("AbsConnection-{}", a("name")),
            MoClass::AbsTermNodeCon => format!("AbsTermNodeCon-{}", a("name")),
            MoClass::AbsTermNodeProv => format!("AbsTermNodeProv-{}", a("name")),
            MoClass::AbsTermConn => "AbsTConn".to_string(),
            MoClass::RsAbsConnectionConns => format!("rsabsConnectionConns-[{}]", a("tDn")),
            MoClass::LDevCtx => format!(
                "ldevCtx-c-{}-g-{}-n-{}",
                a("ctrctNameOrLbl"),
                a("graphNameOrLbl"),
                a("nodeNameOrLbl")
            ),
            MoClass::RsLDevCtxToLDev => "rsLDevCtxToLDev".to_string(),
            MoClass::LIfCtx => format!("lIfCtx-c-{}", a("connNameOrLbl")),
            MoClass::RsLIfCtxToBD => "rsLIfCtxToBD".to_string(),
            MoClass::RsLIfCtxToLIf => "rsLIfCtxToLIf".to_string(),
            MoClass::RsLIfCtxToSvcRedirectPol => "rsLIfCtxToSvcRedirectPol".to_string(),
        }
    }
}

impl fmt::Display for MoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
