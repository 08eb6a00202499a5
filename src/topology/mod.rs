//! Registry documents and the snapshot built from them.

mod data;

pub use data::{TopologyData, get_data};

pub const PROJECTS_ENDPOINT: &str = "/miscproject/xml";
pub const RESOURCES_ENDPOINT: &str = "/rgsummary/xml";

/// Adds `https://` when no scheme is given and drops trailing slashes.
pub fn normalize_base(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.contains("://") {
        base.to_string()
    } else {
        format!("https://{}", base)
    }
}
