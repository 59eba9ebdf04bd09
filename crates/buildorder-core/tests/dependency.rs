use buildorder_core::dependency::{installed_set, DependencyGraph};
use buildorder_core::package::{format_chain, PackageId};

#[test]
fn insert_keeps_insertion_order() {
    let mut graph = DependencyGraph::new();
    graph.insert("c", ["d"]);
    graph.insert("a", ["b", "c"]);
    graph.insert("b", Vec::<&str>::new());
    let keys: Vec<&str> = graph.packages().map(PackageId::as_str).collect();
    assert_eq!(keys, ["c", "a", "b"]);
}

#[test]
fn reinsert_replaces_dependencies_in_place() {
    let mut graph = DependencyGraph::new();
    graph.insert("a", ["b"]);
    graph.insert("b", Vec::<&str>::new());
    graph.insert("a", ["c"]);
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.first().unwrap().0.as_str(), "a");
    assert_eq!(graph.dependencies_of("a").unwrap(), &[PackageId::from("c")]);
}

#[test]
fn remove_preserves_order_of_remaining() {
    let mut graph: DependencyGraph = [
        ("a", vec!["b"]),
        ("b", vec![]),
        ("c", vec![]),
        ("d", vec![]),
    ]
    .into_iter()
    .collect();
    assert!(graph.remove("b").is_some());
    let keys: Vec<&str> = graph.packages().map(PackageId::as_str).collect();
    assert_eq!(keys, ["a", "c", "d"]);
    assert!(graph.remove("missing").is_none());
}

#[test]
fn undeclared_package_has_no_dependencies() {
    let graph = DependencyGraph::new();
    assert!(graph.dependencies_of("x").is_none());
    assert!(!graph.contains("x"));
    assert!(graph.is_empty());
}

#[test]
fn installed_set_from_names() {
    let set = installed_set(["a", "b", "a"]);
    assert_eq!(set.len(), 2);
    assert!(set.contains("a"));
}

#[test]
fn package_id_ordering_is_alphabetical() {
    let mut ids = vec![
        PackageId::from("zlib"),
        PackageId::from("bzip2"),
        PackageId::from("openssl"),
    ];
    ids.sort();
    assert_eq!(format_chain(&ids), "bzip2 -> openssl -> zlib");
}
