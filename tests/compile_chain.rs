use route_tree::path::PathError;
use route_tree::pattern::PatternError;
use route_tree::{
    NodeType, RouteNode, RouterOptions, TreeError, UNBOUNDED_DEPTH, compile_route,
};

fn compile(pattern: &str) -> Result<Option<RouteNode<&'static str>>, TreeError> {
    compile_route(pattern, "handler", &RouterOptions::default())
}

fn chain_nodes<'a>(chain: &'a RouteNode<&'static str>) -> Vec<&'a RouteNode<&'static str>> {
    let mut nodes = Vec::new();
    chain.walk(|node| nodes.push(node));
    nodes
}

#[test]
fn compile_when_static_and_param_segments_then_builds_linear_chain() {
    let chain = compile("/users/<id:int>/edit")
        .expect("pattern should compile")
        .expect("pattern has segments");
    let nodes = chain_nodes(&chain);

    assert_eq!(nodes.len(), 3);
    let paths: Vec<&str> = nodes.iter().map(|n| n.path()).collect();
    assert_eq!(paths, vec!["users", "<id:int>", "edit"]);
    let types: Vec<NodeType> = nodes.iter().map(|n| n.node_type()).collect();
    assert_eq!(types, vec![NodeType::Static, NodeType::Param, NodeType::Static]);

    for (i, node) in nodes.iter().enumerate() {
        let depth = (i + 1) as u16;
        assert_eq!(node.cur_depth(), depth);
        assert_eq!(node.max_depth() + depth, 3 + 1);
        assert!(node.children().len() <= 1);
    }
}

#[test]
fn compile_when_route_compiled_then_handler_bound_to_last_node_only() {
    let chain = compile("a/b/c").unwrap().unwrap();
    let nodes = chain_nodes(&chain);

    assert!(nodes[0].handler().is_none());
    assert!(nodes[1].handler().is_none());
    assert_eq!(nodes[2].handler(), Some(&"handler"));
    assert!(nodes[2].is_leaf());
}

#[test]
fn compile_when_param_segment_then_populates_param_metadata() {
    let chain = compile("/posts/<year:int(4,4)>-<slug:word=lower>")
        .unwrap()
        .unwrap();
    let param = &chain.children()[0];

    assert_eq!(param.node_type(), NodeType::Param);
    assert_eq!(param.param_path(), "<year>-<slug>");
    assert_eq!(param.params().len(), 2);
    assert_eq!(param.params()["year"].validation, "int");
    assert_eq!(param.params()["year"].max_length, 4);
    assert_eq!(param.params()["slug"].setting, "lower");

    assert!(chain.param_path().is_empty());
    assert!(chain.params().is_empty());
}

#[test]
fn compile_when_pattern_ends_with_catch_all_then_depths_are_unbounded() {
    let chain = compile("/static/<bucket>/*pathInfo").unwrap().unwrap();
    let nodes = chain_nodes(&chain);

    assert_eq!(nodes.len(), 3);
    assert!(nodes.iter().all(|n| n.max_depth() == UNBOUNDED_DEPTH));
    assert!(nodes.iter().all(|n| n.is_unbounded()));

    let last = nodes[2];
    assert_eq!(last.node_type(), NodeType::CatchAll);
    assert!(!last.has_children());
    assert_eq!(last.cur_depth(), 3);
}

#[test]
fn compile_when_catch_all_not_last_then_returns_placement_error() {
    match compile("shell/*pathInfo/x").expect_err("expected placement error") {
        TreeError::CatchAllNotTerminal { pattern } => assert_eq!(pattern, "shell/*pathInfo/x"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_segment_contains_bare_wildcard_then_returns_misuse_error() {
    match compile("fo*o").expect_err("expected wildcard misuse error") {
        TreeError::WildcardMisuse { path } => assert_eq!(path, "fo*o"),
        other => panic!("unexpected error: {other:?}"),
    }

    match compile("/files/*rest").expect_err("expected wildcard misuse error") {
        TreeError::WildcardMisuse { path } => assert_eq!(path, "*rest"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_single_segment_then_root_of_chain_is_bound_leaf() {
    let chain = compile("/health").unwrap().unwrap();

    assert_eq!(chain.path(), "health");
    assert_eq!(chain.cur_depth(), 1);
    assert_eq!(chain.max_depth(), 1);
    assert_eq!(chain.handler(), Some(&"handler"));
    assert!(chain.is_leaf());

    let catch_all = compile("*pathInfo").unwrap().unwrap();
    assert_eq!(catch_all.node_type(), NodeType::CatchAll);
    assert_eq!(catch_all.max_depth(), UNBOUNDED_DEPTH);
    assert!(catch_all.handler().is_some());
}

#[test]
fn compile_when_pattern_has_no_segments_then_returns_none() {
    assert!(compile("").unwrap().is_none());
    assert!(compile("/").unwrap().is_none());
}

#[test]
fn compile_when_splitter_fails_then_error_is_propagated() {
    match compile("/a//b").expect_err("expected splitter error") {
        TreeError::Path(PathError::EmptySegment { position, .. }) => assert_eq!(position, 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_syntax_check_fails_then_error_is_propagated() {
    let err = compile("/users/<id").expect_err("expected syntax error");
    assert!(err.is_syntax());
    assert!(matches!(
        err,
        TreeError::Path(PathError::UnbalancedParameter { .. })
    ));
}

#[test]
fn compile_when_param_options_invalid_then_error_is_propagated() {
    match compile("/users/<1id>").expect_err("expected parameter error") {
        TreeError::Pattern(PatternError::ParameterInvalidStart { name, .. }) => {
            assert_eq!(name, "1id")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn compile_when_segment_limit_configured_then_enforced() {
    let options = RouterOptions::builder()
        .max_segments(2)
        .build()
        .expect("options should build");

    let err = compile_route("/a/b/c", (), &options).expect_err("expected segment limit");
    assert!(matches!(
        err,
        TreeError::Path(PathError::TooManySegments { count: 3, limit: 2, .. })
    ));
}
