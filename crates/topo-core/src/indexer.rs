//! Resource summary indexing.
//!
//! 对 rgsummary 文档做一次顺序遍历，同时建立四个结构：
//! 平铺表、按组、按名称、按 FQDN。重复名称/FQDN 以最后出现者为准。

use std::collections::BTreeMap;
use std::sync::Arc;

use derive_getters::Getters;
use roxmltree::Document;

use crate::diag::{DiagnosticKind, Diagnostics};
use crate::model::ResourceRecord;
use crate::xml::{child_text, find_all, find_all_nonempty, render};

/// Immutable snapshot of the resource summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct ResourceIndex {
    table: Vec<Arc<ResourceRecord>>,
    by_group: BTreeMap<String, Vec<Arc<ResourceRecord>>>,
    by_name: BTreeMap<String, Arc<ResourceRecord>>,
    by_fqdn: BTreeMap<String, Arc<ResourceRecord>>,
}

impl ResourceIndex {
    /// Indexes every `ResourceGroup` under the document root.
    ///
    /// Never fails: nameless groups and incomplete resources are dropped and
    /// reported through the returned diagnostics.
    pub fn build(doc: &Document<'_>) -> (Self, Diagnostics) {
        let mut index = ResourceIndex::default();
        let mut diags = Diagnostics::new();

        for group in find_all(doc.root_element(), "ResourceGroup") {
            let group_name = child_text(group, "GroupName");
            if group_name.is_empty() {
                diags.record(
                    DiagnosticKind::MalformedResourceGroup,
                    format!("Skipping malformed ResourceGroup: {}", render(group)),
                );
                continue;
            }
            let mut members = Vec::new();

            for resource in find_all(group, "Resources/Resource") {
                let record = ResourceRecord::new(
                    &group_name,
                    &child_text(resource, "Name"),
                    &child_text(resource, "FQDN"),
                    find_all_nonempty(resource, "Services/Service/ID"),
                    find_all_nonempty(resource, "Tags/Tag"),
                );
                let Some(record) = record else {
                    diags.record(
                        DiagnosticKind::MalformedResource,
                        format!("Skipping malformed Resource: {}", render(resource)),
                    );
                    continue;
                };
                let record = Arc::new(record);
                index.table.push(record.clone());
                index
                    .by_name
                    .insert(record.name().clone(), record.clone());
                index
                    .by_fqdn
                    .insert(record.fqdn().clone(), record.clone());
                members.push(record);
            }
            // a repeated group name starts its list over
            index.by_group.insert(group_name, members);
        }

        debug_data!(
            "indexed {} resources in {} groups",
            index.table.len(),
            index.by_group.len()
        );
        (index, diags)
    }

    pub fn group(&self, group_name: &str) -> Option<&[Arc<ResourceRecord>]> {
        self.by_group.get(group_name).map(Vec::as_slice)
    }

    pub fn resource_by_name(&self, name: &str) -> Option<&Arc<ResourceRecord>> {
        self.by_name.get(name)
    }

    pub fn resource_by_fqdn(&self, fqdn: &str) -> Option<&Arc<ResourceRecord>> {
        self.by_fqdn.get(fqdn)
    }

    pub fn group_count(&self) -> usize {
        self.by_group.len()
    }

    pub fn resource_count(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_group.is_empty()
    }
}
