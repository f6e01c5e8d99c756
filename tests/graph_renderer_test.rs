//! Tests for the graph renderer module

use std::io::Cursor;

use modgraph::graph::{GraphRenderer, ModuleGraph, ModuleGraphBuilder};
use modgraph::selection::{Selection, classify};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

/// Graph shaped like `go mod graph` output with competing versions
fn create_test_graph_with_versions() -> ModuleGraph {
    ModuleGraphBuilder::from_lines([
        "example.com/main golang.org/x/text@v0.3.0",
        "example.com/main golang.org/x/tools@v0.1.0",
        "golang.org/x/tools@v0.1.0 golang.org/x/text@v0.1.0",
        "golang.org/x/tools@v0.1.0 golang.org/x/mod@v0.4.0",
        "golang.org/x/mod@v0.4.0 golang.org/x/tools@v0.0.9",
    ])
    .unwrap()
}

fn render(graph: &ModuleGraph, selection: Option<&Selection>, split_versions: bool) -> String {
    let renderer = GraphRenderer::new(split_versions);
    let mut output = Cursor::new(Vec::new());

    renderer.render_dot(graph, selection, &mut output).unwrap();

    String::from_utf8(output.into_inner()).unwrap()
}

#[test]
fn test_dot_full_output() {
    let graph = create_test_graph_with_versions();
    let selection = classify(&graph);
    let result = render(&graph, Some(&selection), false);
    println!("DOT output:\n{result}");

    let expected = r#"digraph modgraph {
    node [shape=rectangle, fontsize=12];
    "example.com/main" -> "golang.org/x/text@v0.3.0";
    "example.com/main" -> "golang.org/x/tools@v0.1.0";
    "golang.org/x/tools@v0.1.0" -> "golang.org/x/text@v0.1.0";
    "golang.org/x/tools@v0.1.0" -> "golang.org/x/mod@v0.4.0";
    "golang.org/x/mod@v0.4.0" -> "golang.org/x/tools@v0.0.9";
    "golang.org/x/mod@v0.4.0" [style=filled, fillcolor=green];
    "golang.org/x/text@v0.3.0" [style=filled, fillcolor=green];
    "golang.org/x/tools@v0.1.0" [style=filled, fillcolor=green];
    "golang.org/x/text@v0.1.0" [style=filled, fillcolor=gray];
    "golang.org/x/tools@v0.0.9" [style=filled, fillcolor=gray];
}
"#;
    assert_eq!(result, expected);
}

#[test]
fn test_dot_one_statement_per_edge() {
    let graph = create_test_graph_with_versions();
    let result = render(&graph, None, false);

    let edge_lines = result.lines().filter(|line| line.contains(" -> ")).count();
    assert_eq!(edge_lines, graph.edge_count());
}

#[test]
fn test_dot_duplicate_input_edges_render_once() {
    let graph = ModuleGraphBuilder::from_lines(["a b@v1", "a b@v1", "a b@v1"]).unwrap();
    let result = render(&graph, None, false);

    let edge_lines = result.lines().filter(|line| line.contains(" -> ")).count();
    assert_eq!(edge_lines, 1);
}

#[test]
fn test_dot_root_is_never_styled() {
    let graph = create_test_graph_with_versions();
    let selection = classify(&graph);
    let result = render(&graph, Some(&selection), false);

    let styled_root = predicate::str::contains(r#""example.com/main" [style"#);
    assert!(!styled_root.eval(&result));
}

#[test]
fn test_dot_split_versions() {
    let graph = create_test_graph_with_versions();
    let selection = classify(&graph);
    let result = render(&graph, Some(&selection), true);

    let split_edge = predicate::str::contains(
        r#""example.com/main" -> "golang.org/x/text\n@v0.3.0";"#,
    );
    let split_style =
        predicate::str::contains(r#""golang.org/x/text\n@v0.1.0" [style=filled, fillcolor=gray];"#);
    assert!(split_edge.eval(&result));
    assert!(split_style.eval(&result));
}

#[test]
fn test_dot_quotes_awkward_names() {
    let graph = ModuleGraphBuilder::from_lines([r#"main we"ird@v1.0.0"#, r"main back\slash@v1"]).unwrap();
    let result = render(&graph, None, false);

    assert!(result.contains(r#""main" -> "we\"ird@v1.0.0";"#));
    assert!(result.contains(r#""main" -> "back\\slash@v1";"#));
}

#[test]
fn test_dot_extracted_paths_graph() {
    let graph = create_test_graph_with_versions();
    let paths = modgraph::paths::extract_paths_to(&graph, "golang.org/x/mod@v0.4.0").unwrap();
    let result = render(&paths, None, false);

    let expected = r#"digraph modgraph {
    node [shape=rectangle, fontsize=12];
    "example.com/main" -> "golang.org/x/tools@v0.1.0";
    "golang.org/x/tools@v0.1.0" -> "golang.org/x/mod@v0.4.0";
}
"#;
    assert_eq!(result, expected);
}
