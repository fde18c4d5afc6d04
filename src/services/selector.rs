use crate::domain::models::NamespaceFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceOperator {
    Include,
    Exclude,
}

impl NamespaceOperator {
    fn as_str(self) -> &'static str {
        match self {
            NamespaceOperator::Include => "==",
            NamespaceOperator::Exclude => "!=",
        }
    }
}

/// Field-selector source for list/watch calls. Implementations are scoped per
/// resource: only namespaced resources and the namespace objects themselves
/// ever get a selector.
pub trait FieldSelector {
    fn namespaces_selector(&self, group: &str, resource: &str) -> String;
}

pub struct EmptySelector;

impl FieldSelector for EmptySelector {
    fn namespaces_selector(&self, _group: &str, _resource: &str) -> String {
        String::new()
    }
}

pub struct ScopedNamespaceSelector {
    namespaces: Vec<String>,
    operator: NamespaceOperator,
}

impl ScopedNamespaceSelector {
    pub fn new(namespaces: Vec<String>, operator: NamespaceOperator) -> Self {
        Self {
            namespaces,
            operator,
        }
    }
}

impl FieldSelector for ScopedNamespaceSelector {
    fn namespaces_selector(&self, group: &str, resource: &str) -> String {
        build_namespace_selector(group, resource, &self.namespaces, self.operator)
    }
}

pub fn selector_for(filter: &NamespaceFilter) -> Box<dyn FieldSelector> {
    match filter {
        NamespaceFilter::None => Box::new(EmptySelector),
        NamespaceFilter::Include(namespaces) => Box::new(ScopedNamespaceSelector::new(
            namespaces.clone(),
            NamespaceOperator::Include,
        )),
        NamespaceFilter::Exclude(namespaces) => Box::new(ScopedNamespaceSelector::new(
            namespaces.clone(),
            NamespaceOperator::Exclude,
        )),
    }
}

/// One `<key><op><name>,` clause per namespace. Every clause keeps its
/// trailing separator, the last one included; the list API tolerates it and
/// consumers depend on the exact shape.
pub fn build_namespace_selector(
    group: &str,
    resource: &str,
    namespaces: &[String],
    operator: NamespaceOperator,
) -> String {
    let Some(key) = selector_key(group, resource) else {
        return String::new();
    };
    let mut expression = String::new();
    for namespace in namespaces {
        expression.push_str(&format!("{}{}{},", key, operator.as_str(), namespace));
    }
    expression
}

// Namespace objects are filtered by their own name; everything else
// namespaced by the namespace field; cluster-scoped resources not at all.
fn selector_key(group: &str, resource: &str) -> Option<&'static str> {
    if resource == "namespaces" {
        Some("metadata.name")
    } else if is_namespace_scoped(group, resource) {
        Some("metadata.namespace")
    } else {
        None
    }
}

/// Well-known cluster-scoped resources. Anything not listed is treated as
/// namespace-scoped, which covers custom resources as well.
const CLUSTER_SCOPED: &[(&str, &str)] = &[
    ("", "componentstatuses"),
    ("", "nodes"),
    ("", "persistentvolumes"),
    ("admissionregistration.k8s.io", "mutatingwebhookconfigurations"),
    ("admissionregistration.k8s.io", "validatingwebhookconfigurations"),
    ("apiextensions.k8s.io", "customresourcedefinitions"),
    ("apiregistration.k8s.io", "apiservices"),
    ("certificates.k8s.io", "certificatesigningrequests"),
    ("node.k8s.io", "runtimeclasses"),
    ("policy", "podsecuritypolicies"),
    ("rbac.authorization.k8s.io", "clusterrolebindings"),
    ("rbac.authorization.k8s.io", "clusterroles"),
    ("scheduling.k8s.io", "priorityclasses"),
    ("storage.k8s.io", "csidrivers"),
    ("storage.k8s.io", "csinodes"),
    ("storage.k8s.io", "storageclasses"),
    ("storage.k8s.io", "volumeattachments"),
];

fn is_namespace_scoped(group: &str, resource: &str) -> bool {
    !CLUSTER_SCOPED
        .iter()
        .any(|(g, r)| *g == group && *r == resource)
}
