use crate::domain::models::{PolicyIdentifier, PolicyKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub identifiers: Vec<PolicyIdentifier>,
    pub scan_all: bool,
}

/// Turn the raw target argument into an ordered identifier list.
///
/// An absent or empty argument means "scan everything the catalog knows",
/// in catalog order. Otherwise the argument is stripped of all whitespace and
/// split on `,`; the first token is the primary target, later tokens keep
/// their position. Duplicate names are kept as-is; re-evaluating the same
/// framework is idempotent downstream.
pub fn resolve_targets(
    raw: Option<&str>,
    kind: PolicyKind,
    known_frameworks: &[&str],
) -> Resolved {
    let raw = raw.unwrap_or("");
    if raw.is_empty() {
        let identifiers = known_frameworks
            .iter()
            .map(|name| PolicyIdentifier::new(PolicyKind::Framework, *name))
            .collect();
        return Resolved {
            identifiers,
            scan_all: true,
        };
    }

    let stripped: String = raw.split_whitespace().collect();
    let identifiers = stripped
        .split(',')
        .map(|token| PolicyIdentifier::new(kind, token))
        .collect();
    Resolved {
        identifiers,
        scan_all: false,
    }
}
