//! Topology cross-referencing core.
//!
//! 将 rgsummary（资源拓扑）与 miscproject（项目分配）两份 XML 文档交叉关联，
//! 生成可直接序列化为 JSON 的查找表。本 crate 不做任何网络或文件 IO。

#[macro_use]
pub mod logging;

pub mod diag;
pub mod document;
pub mod error;
pub mod exporter;
pub mod indexer;
pub mod joiner;
pub mod model;
pub mod xml;

pub use diag::{Diagnostic, DiagnosticKind, Diagnostics};
pub use document::SourceDocument;
pub use error::{BoxedCause, DataError, DataResult};
pub use exporter::{ResourceLookups, export};
pub use indexer::ResourceIndex;
pub use joiner::{ProjectAllocations, join};
pub use model::{AllocationRecord, CeRef, ExecuteResourceGroup, ResourceRecord, SubmitResource};
