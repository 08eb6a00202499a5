//! Project allocation join.
//!
//! Resolves the `SubmitResource` and `ExecuteResourceGroup` references of each
//! `ResourceAllocation` in the project document against a [`ResourceIndex`].

use std::collections::BTreeMap;

use roxmltree::{Document, Node};

use crate::diag::{DiagnosticKind, Diagnostics};
use crate::indexer::ResourceIndex;
use crate::model::{AllocationRecord, ExecuteResourceGroup};
use crate::xml::{child_text, element_text, find_all, render};

/// Project name → allocations in document order.
pub type ProjectAllocations = BTreeMap<String, Vec<AllocationRecord>>;

/// Joins the project document with the resource index.
///
/// Returns an empty mapping when either input is absent.
pub fn join(
    projects: Option<&Document<'_>>,
    index: Option<&ResourceIndex>,
) -> (ProjectAllocations, Diagnostics) {
    let mut out = ProjectAllocations::new();
    let mut diags = Diagnostics::new();
    let (Some(projects), Some(index)) = (projects, index) else {
        return (out, diags);
    };

    for project in find_all(projects.root_element(), "Project") {
        let project_name = child_text(project, "Name");
        if project_name.is_empty() {
            diags.record(
                DiagnosticKind::UnnamedProject,
                format!("Project has a missing or empty Name: {}", render(project)),
            );
            continue;
        }

        let allocations = find_all(project, "ResourceAllocations/ResourceAllocation")
            .into_iter()
            .filter_map(|alloc| join_allocation(alloc, index, &mut diags))
            .collect();
        out.insert(project_name, allocations);
    }
    (out, diags)
}

fn join_allocation(
    alloc: Node<'_, '_>,
    index: &ResourceIndex,
    diags: &mut Diagnostics,
) -> Option<AllocationRecord> {
    let kind = child_text(alloc, "Type");
    let exec_groups = find_all(alloc, "ExecuteResourceGroups/ExecuteResourceGroup");
    let submits = find_all(alloc, "SubmitResources/SubmitResource");

    // every missing piece is reported before the allocation is dropped
    let mut complete = true;
    for (missing, field) in [
        (kind.is_empty(), "Type"),
        (exec_groups.is_empty(), "ExecuteResourceGroups"),
        (submits.is_empty(), "SubmitResources"),
    ] {
        if missing {
            diags.record(
                DiagnosticKind::IncompleteAllocation,
                format!(
                    "ResourceAllocation has a missing or empty {}: {}",
                    field,
                    render(alloc)
                ),
            );
            complete = false;
        }
    }
    if !complete {
        return None;
    }

    let mut submit_resources = Vec::with_capacity(submits.len());
    for submit in submits {
        match index.resource_by_name(&element_text(Some(submit))) {
            Some(res) => submit_resources.push(res.as_submit_resource()),
            None => diags.record(
                DiagnosticKind::UnresolvedSubmitResource,
                format!(
                    "Skipping missing or malformed SubmitResource: {}",
                    render(submit)
                ),
            ),
        }
    }

    let execute_resource_groups = exec_groups
        .into_iter()
        .filter_map(|group| resolve_execute_group(group, index, diags))
        .collect();

    Some(AllocationRecord {
        execute_resource_groups,
        submit_resources,
        kind,
    })
}

fn resolve_execute_group(
    group: Node<'_, '_>,
    index: &ResourceIndex,
    diags: &mut Diagnostics,
) -> Option<ExecuteResourceGroup> {
    let group_name = child_text(group, "GroupName");
    let local_allocation_id = child_text(group, "LocalAllocationID");
    if group_name.is_empty() || local_allocation_id.is_empty() {
        diags.record(
            DiagnosticKind::MalformedExecuteResourceGroup,
            format!("Skipping malformed ExecuteResourceGroup: {}", render(group)),
        );
        return None;
    }

    let members = match index.group(&group_name) {
        Some(members) if !members.is_empty() => members,
        _ => {
            diags.record(
                DiagnosticKind::MissingExecuteResourceGroup,
                format!("Skipping missing or empty ExecuteResourceGroup {}", group_name),
            );
            return None;
        }
    };

    let ces = members
        .iter()
        .filter(|r| r.is_ce())
        .map(|r| r.as_ce_ref())
        .collect();
    Some(ExecuteResourceGroup {
        ces,
        group_name,
        local_allocation_id,
    })
}
