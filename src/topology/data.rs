use std::sync::Arc;

use derive_getters::Getters;
use topo_core::{
    DataError, DataResult, Diagnostics, ProjectAllocations, ResourceIndex, ResourceLookups,
    SourceDocument, debug_ctrl, info_ctrl,
};

use super::{PROJECTS_ENDPOINT, RESOURCES_ENDPOINT, normalize_base};
use crate::fetch::Fetcher;

/// Downloads `endpoint` below `base` and validates it as XML.
pub async fn get_data<F>(fetcher: &F, base: &str, endpoint: &str) -> DataResult<SourceDocument>
where
    F: Fetcher + ?Sized,
{
    let url = format!("{}{}", base, endpoint);
    debug_ctrl!("querying {}", url);
    let bytes = fetcher
        .fetch(&url)
        .await
        .map_err(|source| DataError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;
    SourceDocument::from_bytes(endpoint, bytes)
}

/// Immutable snapshot of both registry documents plus the resource index.
///
/// Refreshing returns a new snapshot; the current one is never modified.
#[derive(Debug, Clone, Getters)]
pub struct TopologyData {
    base: String,
    projects: SourceDocument,
    resources: SourceDocument,
    index: Arc<ResourceIndex>,
    index_diagnostics: Diagnostics,
}

impl TopologyData {
    /// Fetches both documents and indexes the resource summary.
    pub async fn load<F>(fetcher: &F, base: &str) -> DataResult<Self>
    where
        F: Fetcher + ?Sized,
    {
        let base = normalize_base(base);
        let (projects, resources) = tokio::try_join!(
            get_data(fetcher, &base, PROJECTS_ENDPOINT),
            get_data(fetcher, &base, RESOURCES_ENDPOINT),
        )?;
        Self::from_documents(base, projects, resources)
    }

    pub fn from_documents(
        base: String,
        projects: SourceDocument,
        resources: SourceDocument,
    ) -> DataResult<Self> {
        let (index, index_diagnostics) = ResourceIndex::build(&resources.parse()?);
        info_ctrl!(
            "indexed {} resources in {} groups from {}",
            index.resource_count(),
            index.group_count(),
            base
        );
        Ok(Self {
            base,
            projects,
            resources,
            index: Arc::new(index),
            index_diagnostics,
        })
    }

    pub async fn update_projects<F>(&self, fetcher: &F) -> DataResult<Self>
    where
        F: Fetcher + ?Sized,
    {
        let projects = get_data(fetcher, &self.base, PROJECTS_ENDPOINT).await?;
        Ok(Self {
            projects,
            ..self.clone()
        })
    }

    /// Re-fetches the resource summary and rebuilds every index from scratch.
    pub async fn update_resources<F>(&self, fetcher: &F) -> DataResult<Self>
    where
        F: Fetcher + ?Sized,
    {
        let resources = get_data(fetcher, &self.base, RESOURCES_ENDPOINT).await?;
        Self::from_documents(self.base.clone(), self.projects.clone(), resources)
    }

    pub fn project_resource_allocations(&self) -> DataResult<(ProjectAllocations, Diagnostics)> {
        let projects = self.projects.parse()?;
        Ok(topo_core::join(Some(&projects), Some(self.index.as_ref())))
    }

    pub fn resource_info_lookups(&self) -> ResourceLookups {
        topo_core::export(&self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{MockFetcher, TransportError};
    use std::io;

    const RGSUMMARY: &str = "<ResourceSummary><ResourceGroup><GroupName>G</GroupName><Resources>\
        <Resource><Name>ce</Name><FQDN>ce.example.net</FQDN><Services><Service><ID>1</ID></Service></Services></Resource>\
        </Resources></ResourceGroup></ResourceSummary>";
    const RGSUMMARY_V2: &str = "<ResourceSummary><ResourceGroup><GroupName>H</GroupName><Resources>\
        <Resource><Name>ce2</Name><FQDN>ce2.example.net</FQDN><Services><Service><ID>1</ID></Service></Services></Resource>\
        </Resources></ResourceGroup></ResourceSummary>";
    const MISCPROJECT: &str = "<Projects><Project><Name>P</Name><ResourceAllocations><ResourceAllocation>\
        <Type>Hosted Compute</Type>\
        <SubmitResources><SubmitResource>ce</SubmitResource></SubmitResources>\
        <ExecuteResourceGroups><ExecuteResourceGroup><GroupName>G</GroupName><LocalAllocationID>1</LocalAllocationID></ExecuteResourceGroup></ExecuteResourceGroups>\
        </ResourceAllocation></ResourceAllocations></Project></Projects>";

    fn targets(url: &str, endpoint: &str) -> bool {
        url.strip_prefix("https://topology.example.org") == Some(endpoint)
    }

    fn serving(resources: &'static str) -> MockFetcher {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| targets(url, PROJECTS_ENDPOINT))
            .returning(|_| Ok(MISCPROJECT.as_bytes().to_vec()));
        fetcher
            .expect_fetch()
            .withf(|url| targets(url, RESOURCES_ENDPOINT))
            .returning(move |_| Ok(resources.as_bytes().to_vec()));
        fetcher
    }

    #[tokio::test]
    async fn load_fetches_both_documents() {
        let fetcher = serving(RGSUMMARY);
        let data = TopologyData::load(&fetcher, "topology.example.org").await.unwrap();

        assert_eq!(data.base(), "https://topology.example.org");
        assert_eq!(data.index().resource_count(), 1);
        let (allocs, diags) = data.project_resource_allocations().unwrap();
        assert!(diags.is_empty());
        assert_eq!(allocs["P"][0].submit_resources[0].fqdn, "ce.example.net");
        assert!(data.resource_info_lookups().resources_by_name.contains_key("ce"));
    }

    #[tokio::test]
    async fn transport_failure_names_endpoint() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().returning(|url| {
            if url.ends_with(RESOURCES_ENDPOINT) {
                let err: TransportError =
                    Box::new(io::Error::new(io::ErrorKind::TimedOut, "timed out"));
                Err(err)
            } else {
                Ok(MISCPROJECT.as_bytes().to_vec())
            }
        });

        let err = TopologyData::load(&fetcher, "https://topology.example.org")
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Transport { .. }));
        assert_eq!(err.to_string(), "Topology query to /rgsummary/xml failed");
    }

    #[tokio::test]
    async fn empty_payload_is_data_error() {
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().returning(|url| {
            if url.ends_with(PROJECTS_ENDPOINT) {
                Ok(Vec::new())
            } else {
                Ok(RGSUMMARY.as_bytes().to_vec())
            }
        });

        let err = TopologyData::load(&fetcher, "https://topology.example.org")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Topology query to /miscproject/xml returned no data"
        );
    }

    #[tokio::test]
    async fn update_resources_yields_fresh_snapshot() {
        let first = TopologyData::load(&serving(RGSUMMARY), "topology.example.org")
            .await
            .unwrap();
        let second = first
            .update_resources(&serving(RGSUMMARY_V2))
            .await
            .unwrap();

        assert!(first.index().resource_by_name("ce").is_some());
        assert!(second.index().resource_by_name("ce").is_none());
        assert!(second.index().resource_by_name("ce2").is_some());
        assert!(second.index().group("G").is_none());

        let (allocs, diags) = second.project_resource_allocations().unwrap();
        assert!(allocs["P"][0].submit_resources.is_empty());
        assert!(allocs["P"][0].execute_resource_groups.is_empty());
        assert_eq!(diags.len(), 2);
    }

    #[tokio::test]
    async fn update_projects_keeps_index() {
        let first = TopologyData::load(&serving(RGSUMMARY), "topology.example.org")
            .await
            .unwrap();
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(b"<Projects><Project><Name>Q</Name></Project></Projects>".to_vec()));
        let second = first.update_projects(&fetcher).await.unwrap();

        assert!(Arc::ptr_eq(first.index(), second.index()));
        let (allocs, _) = second.project_resource_allocations().unwrap();
        assert!(allocs.contains_key("Q") && !allocs.contains_key("P"));
    }
}
