use derive_getters::Getters;
use serde::Serialize;

pub const SERVICE_ID_CE: &str = "1";
pub const SERVICE_ID_SCHEDD: &str = "109";

/// One well-formed `Resource` element of the resource summary.
///
/// Fields are declared in key order so the serialized form is already sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ResourceRecord {
    fqdn: String,
    group_name: String,
    name: String,
    service_ids: Vec<String>,
    tags: Vec<String>,
}

impl ResourceRecord {
    /// Builds a record, or `None` when name, FQDN or service ids are missing.
    pub fn new(
        group_name: &str,
        name: &str,
        fqdn: &str,
        service_ids: Vec<String>,
        tags: Vec<String>,
    ) -> Option<Self> {
        let name = name.trim();
        let fqdn = fqdn.trim();
        if name.is_empty() || fqdn.is_empty() || service_ids.is_empty() {
            return None;
        }
        Some(Self {
            fqdn: fqdn.to_string(),
            group_name: group_name.to_string(),
            name: name.to_string(),
            service_ids,
            tags,
        })
    }

    /// Compute entrypoint
    pub fn is_ce(&self) -> bool {
        self.service_ids.iter().any(|id| id == SERVICE_ID_CE)
    }

    pub fn is_schedd(&self) -> bool {
        self.service_ids.iter().any(|id| id == SERVICE_ID_SCHEDD)
    }

    pub fn as_submit_resource(&self) -> SubmitResource {
        SubmitResource {
            fqdn: self.fqdn.clone(),
            group_name: self.group_name.clone(),
            name: self.name.clone(),
        }
    }

    pub fn as_ce_ref(&self) -> CeRef {
        CeRef {
            fqdn: self.fqdn.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitResource {
    pub fqdn: String,
    pub group_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CeRef {
    pub fqdn: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecuteResourceGroup {
    pub ces: Vec<CeRef>,
    pub group_name: String,
    pub local_allocation_id: String,
}

/// A project's resource allocation with its references resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationRecord {
    pub execute_resource_groups: Vec<ExecuteResourceGroup>,
    pub submit_resources: Vec<SubmitResource>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn record_requires_name_fqdn_and_services() {
        assert!(ResourceRecord::new("G", "n", "f", ids(&["1"]), vec![]).is_some());
        assert!(ResourceRecord::new("G", " ", "f", ids(&["1"]), vec![]).is_none());
        assert!(ResourceRecord::new("G", "n", "", ids(&["1"]), vec![]).is_none());
        assert!(ResourceRecord::new("G", "n", "f", vec![], vec![]).is_none());
    }

    #[test]
    fn service_predicates() {
        let ce = ResourceRecord::new("G", "ce", "ce.example.net", ids(&["1", "5"]), vec![]).unwrap();
        let schedd = ResourceRecord::new("G", "sub", "sub.example.net", ids(&["109"]), vec![]).unwrap();
        assert!(ce.is_ce() && !ce.is_schedd());
        assert!(schedd.is_schedd() && !schedd.is_ce());
    }

    #[test]
    fn allocation_serializes_type_key() {
        let alloc = AllocationRecord {
            execute_resource_groups: vec![],
            submit_resources: vec![],
            kind: "Hosted Compute".into(),
        };
        let json = serde_json::to_value(&alloc).unwrap();
        assert_eq!(json["type"], "Hosted Compute");
        assert!(json.get("kind").is_none());
    }
}
