use xbeanc::model::{InterfaceDescriptor, InterfaceRegistry, MethodDescriptor, TypeRef};
use xbeanc::{synthesize_all, Config, Error};

fn registry(interfaces: Vec<InterfaceDescriptor>) -> InterfaceRegistry {
    let mut registry = InterfaceRegistry::new();
    for interface in interfaces {
        registry.register(interface);
    }
    registry
}

#[test]
fn children_are_synthesized_transitively() {
    let registry = registry(vec![
        InterfaceDescriptor::new("com.acme.Cluster").method(
            MethodDescriptor::new("getServers")
                .returns(TypeRef::list_of(TypeRef::interface("com.acme.Server"))),
        ),
        InterfaceDescriptor::new("com.acme.Server").method(
            MethodDescriptor::new("getListener")
                .returns(TypeRef::interface("com.acme.Listener")),
        ),
        InterfaceDescriptor::new("com.acme.Listener")
            .method(MethodDescriptor::new("getPort").returns(TypeRef::int())),
    ]);

    let all = synthesize_all(&["com.acme.Cluster"], &registry, &Config::default())
        .expect("synthesis failed");
    assert_eq!(all.len(), 3);
    assert!(all.contains_key("com.acme.Listener"));
}

#[test]
fn cyclic_interface_graphs_terminate() {
    let registry = registry(vec![
        InterfaceDescriptor::new("com.acme.A")
            .method(MethodDescriptor::new("getB").returns(TypeRef::interface("com.acme.B"))),
        InterfaceDescriptor::new("com.acme.B")
            .method(MethodDescriptor::new("getA").returns(TypeRef::interface("com.acme.A"))),
    ]);

    let all = synthesize_all(&["com.acme.A"], &registry, &Config::default())
        .expect("synthesis failed");
    assert_eq!(all.len(), 2);
}

#[test]
fn a_child_shared_by_two_parents_is_synthesized_once() {
    let shared = TypeRef::interface("com.acme.Shared");
    let registry = registry(vec![
        InterfaceDescriptor::new("com.acme.Left")
            .method(MethodDescriptor::new("getShared").returns(shared.clone())),
        InterfaceDescriptor::new("com.acme.Right")
            .method(MethodDescriptor::new("getShared").returns(shared)),
        InterfaceDescriptor::new("com.acme.Shared"),
    ]);

    let all = synthesize_all(&["com.acme.Left", "com.acme.Right"], &registry, &Config::default())
        .expect("synthesis failed");
    assert_eq!(all.len(), 3);
}

#[test]
fn an_unregistered_child_fails_the_whole_run() {
    let registry = registry(vec![InterfaceDescriptor::new("com.acme.Cluster").method(
        MethodDescriptor::new("getServer")
            .returns(TypeRef::interface("com.acme.Missing")),
    )]);

    let err = synthesize_all(&["com.acme.Cluster"], &registry, &Config::default())
        .expect_err("missing child must fail");
    match err {
        Error::UnknownInterface { name } => assert_eq!(name, "com.acme.Missing"),
        other => panic!("expected UnknownInterface, got {:?}", other),
    }
}

#[test]
fn builtin_interfaces_are_not_treated_as_children() {
    let registry = registry(vec![InterfaceDescriptor::new("com.acme.Server").method(
        MethodDescriptor::new("getComparator")
            .returns(TypeRef::interface("java.util.Comparator")),
    )]);

    let all = synthesize_all(&["com.acme.Server"], &registry, &Config::default())
        .expect("synthesis failed");
    assert_eq!(all.len(), 1);
    assert!(all["com.acme.Server"].children.is_empty());
}
