//! Id-keyed plan arenas, JSON headers and config handling.

use planrep::{
    append_detail_line, BuildingPlan, DataType, DetailSink, Error, NodeBuilder, NodeHeader,
    PlanNodeId, PlanRepresentation, PrinterConfig, StatsEstimate, Symbol,
};

fn node(id: &str, node_type: &str, children: &[&str]) -> NodeBuilder {
    let header = NodeHeader::builder()
        .id(id)
        .node_type(node_type)
        .identifier("")
        .outputs(vec![Symbol::new("orderkey", DataType::Int64)])
        .no_stats()
        .estimated_stats(vec![])
        .estimated_cost(vec![])
        .children(children.iter().map(|c| PlanNodeId::new(*c)).collect())
        .build()
        .expect("valid header");
    NodeBuilder::new(header)
}

/// Output <- Join <- (Scan orders, Scan customer)
fn sample_plan() -> BuildingPlan {
    let mut plan = BuildingPlan::new("0");
    plan.insert(node("0", "Output", &["1"])).unwrap();
    plan.insert(node("1", "InnerJoin", &["3", "2"])).unwrap();
    plan.insert(node("2", "TableScan", &[])).unwrap();
    plan.insert(node("3", "TableScan", &[])).unwrap();
    plan
}

#[test]
fn test_children_resolve_in_listed_order() {
    let plan = sample_plan();
    plan.validate().unwrap();

    let children = plan.children_of(&PlanNodeId::new("1")).unwrap();
    let resolved: Vec<&str> = children.iter().map(|n| n.id().as_str()).collect();
    assert_eq!(resolved, vec!["3", "2"]);
    assert!(plan
        .children_of(&PlanNodeId::new("2"))
        .unwrap()
        .is_empty());
    assert_eq!(plan.root().unwrap().node_type(), "Output");
}

#[test]
fn test_dangling_child_reference() {
    let mut plan = BuildingPlan::new("0");
    plan.insert(node("0", "Output", &["1"])).unwrap();

    match plan.children_of(&PlanNodeId::new("0")) {
        Err(Error::DanglingReference { parent, child }) => {
            assert_eq!(parent.as_str(), "0");
            assert_eq!(child.as_str(), "1");
        }
        other => panic!("expected DanglingReference, got {other:?}"),
    }
    assert!(matches!(
        plan.validate(),
        Err(Error::DanglingReference { .. })
    ));
}

#[test]
fn test_details_survive_finish() {
    let mut plan = sample_plan();
    {
        let join = plan.get_mut(&PlanNodeId::new("1")).unwrap();
        append_detail_line!(*join, "Distribution: PARTITIONED");
        join.append_formatted_line(format_args!("o.custkey = c.custkey"));
    }
    let scan = plan.get_mut(&PlanNodeId::new("3")).unwrap();
    append_detail_line!(*scan, "table = {}", "tpch:orders");

    let done: PlanRepresentation = plan.finish();
    assert_eq!(done.len(), 4);
    assert_eq!(
        done.get(&PlanNodeId::new("1")).unwrap().details(),
        "Distribution: PARTITIONED\no.custkey = c.custkey\n"
    );
    assert_eq!(
        done.get(&PlanNodeId::new("3")).unwrap().details(),
        "table = tpch:orders\n"
    );
    assert_eq!(done.get(&PlanNodeId::new("0")).unwrap().details(), "");
    let order: Vec<&str> = done.ids().map(|id| id.as_str()).collect();
    assert_eq!(order, vec!["0", "1", "2", "3"]);
}

#[test]
fn test_fingerprint_is_stable_and_detail_sensitive() {
    let a = sample_plan().finish();
    let b = sample_plan().finish();
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());

    let mut plan = sample_plan();
    let root = plan.get_mut(&PlanNodeId::new("0")).unwrap();
    append_detail_line!(*root, "orderkey := orderkey");
    let c = plan.finish();
    assert_ne!(a.fingerprint().unwrap(), c.fingerprint().unwrap());
}

#[test]
fn test_finalized_plan_json_round_trip() {
    let mut plan = sample_plan();
    let scan = plan.get_mut(&PlanNodeId::new("2")).unwrap();
    append_detail_line!(*scan, "table = {}", "tpch:customer");
    let done = plan.finish();

    let json = serde_json::to_string(&done).unwrap();
    let back: PlanRepresentation = serde_json::from_str(&json).unwrap();
    assert_eq!(back.root_id(), done.root_id());
    assert_eq!(
        back.get(&PlanNodeId::new("2")),
        done.get(&PlanNodeId::new("2"))
    );
}

#[test]
fn test_decoded_plan_rejects_node_under_foreign_key() {
    let done = sample_plan().finish();
    let mut value = serde_json::to_value(&done).unwrap();
    let scan = value["nodes"]["2"].clone();
    value["nodes"]["0"] = scan;

    let err = serde_json::from_value::<PlanRepresentation>(value).unwrap_err();
    assert!(
        err.to_string().contains("arena key 0 holds node 2"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_header_from_json() {
    let header = NodeHeader::from_json(
        r#"{
            "id": "5",
            "type": "TableScan",
            "identifier": "lineitem",
            "outputs": [{"name": "qty", "data_type": "Float64"}],
            "stats": null,
            "estimated_stats": [{"output_row_count": 6000000.0, "output_size_bytes": 48000000.0}],
            "estimated_cost": [{"cpu_cost": 1.0, "max_memory": 0.0, "network_cost": 0.0}],
            "children": []
        }"#,
    )
    .unwrap();
    assert_eq!(header.id().as_str(), "5");
    assert_eq!(header.identifier(), "lineitem");
    assert!(header.stats().is_none());
    assert_eq!(
        header.estimated_stats(),
        &[StatsEstimate::new(6_000_000.0, 48_000_000.0)]
    );
}

#[test]
fn test_header_from_json_rejects_missing_and_null_fields() {
    // `stats` key absent entirely.
    let missing_stats = r#"{"id": "5", "type": "Values", "identifier": "", "outputs": [],
        "estimated_stats": [], "estimated_cost": [], "children": []}"#;
    assert!(matches!(
        NodeHeader::from_json(missing_stats),
        Err(Error::InvalidArgument(msg)) if msg == "stats is missing"
    ));

    let null_outputs = r#"{"id": "5", "type": "Values", "identifier": "", "outputs": null,
        "stats": null, "estimated_stats": [], "estimated_cost": [], "children": []}"#;
    assert!(matches!(
        NodeHeader::from_json(null_outputs),
        Err(Error::InvalidArgument(msg)) if msg == "outputs is missing"
    ));

    assert!(matches!(
        NodeHeader::from_json("not json"),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_header_from_json_size_mismatch() {
    let json = r#"{"id": "5", "type": "Values", "identifier": "", "outputs": [],
        "stats": null, "estimated_stats": [], "children": [],
        "estimated_cost": [{"cpu_cost": 1.0, "max_memory": 0.0, "network_cost": 0.0}]}"#;
    assert!(matches!(
        NodeHeader::from_json(json),
        Err(Error::SizeMismatch { cost: 1, stats: 0 })
    ));
}

#[test]
fn test_config_controls_optional_data() {
    let header = NodeHeader::from_json(
        r#"{"id": "7", "type": "Aggregate", "identifier": "PARTIAL", "outputs": [],
            "stats": {"node_id": "7", "scheduled_ms": 3, "cpu_ms": 2, "blocked_ms": 0,
                      "input_rows": 10, "input_bytes": 80, "output_rows": 1,
                      "output_bytes": 8, "peak_memory_bytes": 1024},
            "estimated_stats": [], "estimated_cost": [], "children": []}"#,
    )
    .unwrap();

    let keep = NodeBuilder::with_config(header.clone(), &PrinterConfig::default());
    assert_eq!(keep.stats().map(|s| s.output_rows), Some(1));

    let config = PrinterConfig {
        include_runtime_stats: false,
        ..PrinterConfig::default()
    };
    config.validate().unwrap();
    let dropped = NodeBuilder::with_config(header, &config);
    assert!(dropped.stats().is_none());
    assert_eq!(dropped.details(), "");
}
