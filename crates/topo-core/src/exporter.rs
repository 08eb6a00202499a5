use std::collections::BTreeMap;

use serde::Serialize;

use crate::indexer::ResourceIndex;
use crate::model::ResourceRecord;

/// JSON view of a [`ResourceIndex`]; every entry carries all record fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceLookups {
    pub resource_lists_by_group: BTreeMap<String, Vec<ResourceRecord>>,
    pub resources_by_fqdn: BTreeMap<String, ResourceRecord>,
    pub resources_by_name: BTreeMap<String, ResourceRecord>,
}

pub fn export(index: &ResourceIndex) -> ResourceLookups {
    let resource_lists_by_group = index
        .by_group()
        .iter()
        .map(|(group, members)| {
            let records = members.iter().map(|r| ResourceRecord::clone(r)).collect();
            (group.clone(), records)
        })
        .collect();
    let resources_by_name = index
        .by_name()
        .iter()
        .map(|(k, v)| (k.clone(), ResourceRecord::clone(v)))
        .collect();
    let resources_by_fqdn = index
        .by_fqdn()
        .iter()
        .map(|(k, v)| (k.clone(), ResourceRecord::clone(v)))
        .collect();
    ResourceLookups {
        resource_lists_by_group,
        resources_by_fqdn,
        resources_by_name,
    }
}
