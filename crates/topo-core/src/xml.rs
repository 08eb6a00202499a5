//! Lenient XML accessors.
//!
//! 缺失的元素一律视为空文本，调用方只需判断字符串是否为空，
//! 不必区分“元素不存在”与“元素无内容”。

use roxmltree::Node;

fn is_element_named(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// All elements reached by a relative child path such as `Services/Service/ID`.
pub fn find_all<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Vec<Node<'a, 'input>> {
    let mut current = vec![node];
    for step in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
        current = current
            .into_iter()
            .flat_map(|n| n.children().filter(move |c| is_element_named(c, step)))
            .collect();
    }
    current
}

/// First element reached by `path`, in document order.
pub fn find<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    find_all(node, path).into_iter().next()
}

/// Trimmed direct text of `node`; empty when the node is absent or has no text.
///
/// Only text before the first child element counts; comments and processing
/// instructions in that run are skipped.
pub fn element_text(node: Option<Node<'_, '_>>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    let text: String = node
        .children()
        .take_while(|c| !c.is_element())
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect();
    text.trim().to_string()
}

/// Trimmed text of the first element at `path` below `node`.
pub fn child_text(node: Node<'_, '_>, path: &str) -> String {
    element_text(find(node, path))
}

/// Texts of every element at `path`, empty ones dropped.
pub fn find_all_nonempty(node: Node<'_, '_>, path: &str) -> Vec<String> {
    find_all(node, path)
        .into_iter()
        .map(|n| element_text(Some(n)))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Original source text of an element, used in diagnostics.
pub fn render<'input>(node: Node<'_, 'input>) -> &'input str {
    &node.document().input_text()[node.range()]
}
