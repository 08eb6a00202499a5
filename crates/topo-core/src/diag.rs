//! 非致命数据问题的结构化记录
//!
//! 每条被丢弃的资源/项目/分配/引用都会产生一条 [`Diagnostic`]，
//! 同时以 `data` target 输出 warn 日志。

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use derive_getters::Getters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticKind {
    MalformedResourceGroup,
    MalformedResource,
    UnnamedProject,
    IncompleteAllocation,
    UnresolvedSubmitResource,
    MalformedExecuteResourceGroup,
    MissingExecuteResourceGroup,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedResourceGroup => "malformed-resource-group",
            DiagnosticKind::MalformedResource => "malformed-resource",
            DiagnosticKind::UnnamedProject => "unnamed-project",
            DiagnosticKind::IncompleteAllocation => "incomplete-allocation",
            DiagnosticKind::UnresolvedSubmitResource => "unresolved-submit-resource",
            DiagnosticKind::MalformedExecuteResourceGroup => "malformed-execute-resource-group",
            DiagnosticKind::MissingExecuteResourceGroup => "missing-execute-resource-group",
        }
    }
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dropped unit and logs it.
    pub fn record(&mut self, kind: DiagnosticKind, message: String) {
        warn_data!("{}", message);
        self.items.push(Diagnostic { kind, message });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.kind == kind)
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Per-kind totals, in a stable order.
    pub fn tally(&self) -> BTreeMap<DiagnosticKind, usize> {
        let mut out = BTreeMap::new();
        for d in &self.items {
            *out.entry(d.kind).or_insert(0) += 1;
        }
        out
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_groups_by_kind() {
        let mut diags = Diagnostics::new();
        diags.record(DiagnosticKind::MalformedResource, "r1".into());
        diags.record(DiagnosticKind::UnnamedProject, "p".into());
        diags.record(DiagnosticKind::MalformedResource, "r2".into());

        let tally = diags.tally();
        assert_eq!(tally[&DiagnosticKind::MalformedResource], 2);
        assert_eq!(tally[&DiagnosticKind::UnnamedProject], 1);
        assert_eq!(diags.count(DiagnosticKind::IncompleteAllocation), 0);
    }

    #[test]
    fn merge_keeps_order() {
        let mut a = Diagnostics::new();
        a.record(DiagnosticKind::MalformedResourceGroup, "first".into());
        let mut b = Diagnostics::new();
        b.record(DiagnosticKind::UnnamedProject, "second".into());
        a.merge(b);

        let messages: Vec<_> = a.iter().map(|d| d.message().as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(
            a.iter().next().unwrap().to_string(),
            "[malformed-resource-group] first"
        );
    }
}
