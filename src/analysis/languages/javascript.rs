//! JavaScript analyzer backed by a tree-sitter syntax tree.
//!
//! Unlike the line-oriented analyzers, this one rejects snippets that do not
//! parse. Self-calls are counted wherever they appear in the tree, not only
//! inside the target function's body, because the walk does not track the
//! enclosing function.

use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

use crate::analysis::{AnalysisError, Language, Signals, StructuralAnalyzer};

/// All four loop node kinds (`for_in_statement` also covers `for...of`).
const LOOP_KINDS: &[&str] = &[
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
];

/// Member names treated as sorting calls.
const SORT_MEMBERS: &[&str] = &["sort", "toSorted"];

/// Constructors of hash-backed containers.
const HASH_CONSTRUCTORS: &[&str] = &["Set", "Map"];

fn is_loop(node: Node) -> bool {
    LOOP_KINDS.contains(&node.kind())
}

/// First ERROR or MISSING node in document order.
fn first_syntax_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Narrow an error node to the innermost ERROR or MISSING node inside it.
fn innermost_syntax_error(node: Node<'_>) -> Node<'_> {
    let mut cursor = node.walk();
    let inner = node
        .children(&mut cursor)
        .filter(|child| child.has_error() || child.is_error() || child.is_missing())
        .find_map(first_syntax_error);
    match inner {
        Some(child) => innermost_syntax_error(child),
        None => node,
    }
}

/// Where an error node went wrong: an ERROR node absorbs tokens up to the one
/// the parser could not place, so its last leaf marks the failure.
fn error_position(node: Node) -> tree_sitter::Point {
    if !node.is_error() {
        return node.start_position();
    }
    let mut last = node;
    while let Some(child) = last.child_count().checked_sub(1).and_then(|i| last.child(i)) {
        last = child;
    }
    last.start_position()
}

/// Position is a 1-based line and 0-based column.
fn describe_syntax_error(node: Node) -> String {
    let node = innermost_syntax_error(node);
    let pos = error_position(node);
    if node.is_missing() {
        format!("missing {:?} ({}:{})", node.kind(), pos.row + 1, pos.column)
    } else {
        format!("unexpected token ({}:{})", pos.row + 1, pos.column)
    }
}

pub struct JavaScriptAnalyzer {
    language: TsLanguage,
}

impl JavaScriptAnalyzer {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    fn create_parser(&self) -> Result<Parser, AnalysisError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| AnalysisError::Parse {
                message: e.to_string(),
            })?;
        Ok(parser)
    }

    /// Parse the snippet, failing on any syntax error.
    fn parse(&self, source: &str) -> Result<Tree, AnalysisError> {
        let mut parser = self.create_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| AnalysisError::Parse {
                message: "parser produced no tree".to_string(),
            })?;

        if let Some(node) = first_syntax_error(tree.root_node()) {
            return Err(AnalysisError::Parse {
                message: describe_syntax_error(node),
            });
        }

        Ok(tree)
    }

    /// Inspect one node for call, constructor and literal signals.
    fn visit(&self, node: Node, source: &[u8], function_name: &str, signals: &mut Signals) {
        let text = |n: Node| n.utf8_text(source).unwrap_or("");

        match node.kind() {
            "call_expression" => {
                let Some(callee) = node.child_by_field_name("function") else {
                    return;
                };
                match callee.kind() {
                    "member_expression" => {
                        let is_sort = callee
                            .child_by_field_name("property")
                            .is_some_and(|p| SORT_MEMBERS.contains(&text(p)));
                        if is_sort {
                            signals.record_sort();
                        }
                    }
                    "identifier" => {
                        if !function_name.is_empty() && text(callee) == function_name {
                            signals.record_recursion();
                        }
                    }
                    _ => {}
                }
            }
            "new_expression" => {
                let is_hash = node
                    .child_by_field_name("constructor")
                    .is_some_and(|c| c.kind() == "identifier" && HASH_CONSTRUCTORS.contains(&text(c)));
                if is_hash {
                    signals.record_hash();
                }
            }
            "object" => signals.record_hash(),
            _ => {}
        }
    }

    /// Depth-first walk keeping an explicit loop depth.
    fn walk(&self, tree: &Tree, source: &[u8], function_name: &str) -> Signals {
        let mut signals = Signals::new();
        let mut cursor = tree.walk();
        let mut depth = 0usize;

        loop {
            let node = cursor.node();
            if is_loop(node) {
                depth += 1;
                signals.record_loop(depth);
            }
            self.visit(node, source, function_name, &mut signals);

            if cursor.goto_first_child() {
                continue;
            }

            // Leave finished nodes until one has an unvisited sibling.
            loop {
                if is_loop(cursor.node()) {
                    depth -= 1;
                }
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return signals;
                }
            }
        }
    }
}

impl Default for JavaScriptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralAnalyzer for JavaScriptAnalyzer {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn collect_signals(
        &self,
        source: &str,
        _lines: &[&str],
        function_name: &str,
    ) -> Result<Signals, AnalysisError> {
        let tree = self.parse(source)?;
        Ok(self.walk(&tree, source.as_bytes(), function_name))
    }
}
