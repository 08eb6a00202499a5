//! 输出文件写入
//!
//! 每次运行都完整覆盖上一次的输出，不做增量或备份。

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use topo_core::debug_ctrl;

pub const MISCPROJECT_XML: &str = "miscproject.xml";
pub const RGSUMMARY_XML: &str = "rgsummary.xml";
pub const PROJECT_RESOURCE_ALLOCATIONS_JSON: &str = "project_resource_allocations.json";
pub const RESOURCE_INFO_LOOKUPS_JSON: &str = "resource_info_lookups.json";

/// Persistence collaborator: replace the file at `path` with `content`.
pub trait ArtifactWriter {
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl ArtifactWriter for FsWriter {
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

/// Creates the output directory; failure is left for the first write to report.
pub fn ensure_dir(dir: &Path) {
    if let Err(e) = fs::create_dir_all(dir) {
        debug_ctrl!("cannot create {}: {}", dir.display(), e);
    }
}

/// Pretty JSON (2-space indent) with every object's keys sorted.
pub fn to_sorted_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let value = sort_keys(serde_json::to_value(value)?);
    serde_json::to_string_pretty(&value)
}

// rebuilt explicitly: `preserve_order` on serde_json keeps insertion order
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
