use xbeanc::config::Config;
use xbeanc::emit::synthesize;
use xbeanc::model::{InterfaceDescriptor, MethodDescriptor, TypeRef};
use xbeanc::rt::{BeanInstance, Customizer, Value};

fn instance(interface: InterfaceDescriptor) -> BeanInstance {
    let ty = synthesize(&interface, &Config::default()).expect("synthesis failed");
    BeanInstance::new(ty)
}

#[test]
fn setter_then_getter_round_trips_through_the_store() {
    let mut bean = instance(
        InterfaceDescriptor::new("com.acme.Server")
            .method(MethodDescriptor::new("getAddress").returns(TypeRef::string()))
            .method(MethodDescriptor::new("setAddress").param(TypeRef::string())),
    );

    bean.invoke("setAddress", &[Value::Str("localhost".to_string())])
        .expect("set failed");
    let value = bean.invoke("getAddress", &[]).expect("get failed");
    assert_eq!(value, Value::Str("localhost".to_string()));
}

#[test]
fn unset_primitive_properties_read_their_java_default() {
    let mut bean = instance(
        InterfaceDescriptor::new("com.acme.Server")
            .method(MethodDescriptor::new("getPort").returns(TypeRef::int()))
            .method(MethodDescriptor::new("isActive").returns(TypeRef::boolean())),
    );
    assert_eq!(bean.invoke("getPort", &[]).expect("get"), Value::Int(0));
    assert_eq!(bean.invoke("isActive", &[]).expect("get"), Value::Bool(false));
}

#[test]
fn unset_reference_properties_read_null() {
    let mut bean = instance(
        InterfaceDescriptor::new("com.acme.Server")
            .method(MethodDescriptor::new("getAddress").returns(TypeRef::string())),
    );
    assert_eq!(bean.invoke("getAddress", &[]).expect("get"), Value::Null);
}

#[test]
fn read_only_property_is_writable_through_the_synthesized_setter() {
    let mut bean = instance(
        InterfaceDescriptor::new("com.acme.Server")
            .method(MethodDescriptor::new("getAddress").returns(TypeRef::string())),
    );

    // setAddress exists only on the implementation, not the interface
    bean.invoke("setAddress", &[Value::Str("10.0.0.1".to_string())])
        .expect("implicit setter failed");
    assert_eq!(
        bean.invoke("getAddress", &[]).expect("get"),
        Value::Str("10.0.0.1".to_string())
    );
}

#[test]
fn keyed_children_support_add_lookup_and_remove() {
    let server = TypeRef::interface("com.acme.Server");
    let mut bean = instance(
        InterfaceDescriptor::new("com.acme.Cluster")
            .method(MethodDescriptor::new("addServer").param(TypeRef::string()))
            .method(
                MethodDescriptor::new("lookupServer")
                    .param(TypeRef::string())
                    .returns(server.clone()),
            )
            .method(
                MethodDescriptor::new("removeServer")
                    .param(TypeRef::string())
                    .returns(TypeRef::boolean()),
            ),
    );

    bean.invoke("addServer", &[Value::Str("alpha".to_string())])
        .expect("add failed");
    bean.invoke("addServer", &[Value::Str("beta".to_string())])
        .expect("add failed");
    assert_eq!(bean.store().child_count("server"), 2);

    let found = bean
        .invoke("lookupServer", &[Value::Str("beta".to_string())])
        .expect("lookup failed");
    assert_eq!(found, Value::Str("beta".to_string()));

    let removed = bean
        .invoke("removeServer", &[Value::Str("alpha".to_string())])
        .expect("remove failed");
    assert_eq!(removed, Value::Bool(true));
    assert_eq!(bean.store().child_count("server"), 1);

    // Removing it again reports failure on the boolean path
    let removed = bean
        .invoke("removeServer", &[Value::Str("alpha".to_string())])
        .expect("remove failed");
    assert_eq!(removed, Value::Bool(false));
}

#[test]
fn lookup_of_an_unknown_key_is_null() {
    let server = TypeRef::interface("com.acme.Server");
    let mut bean = instance(
        InterfaceDescriptor::new("com.acme.Cluster").method(
            MethodDescriptor::new("lookupServer")
                .param(TypeRef::string())
                .returns(server),
        ),
    );
    let found = bean
        .invoke("lookupServer", &[Value::Str("nope".to_string())])
        .expect("lookup failed");
    assert_eq!(found, Value::Null);
}

struct Doubler;

impl Customizer for Doubler {
    fn invoke(&mut self, operation: &str, args: &[Value]) -> Value {
        assert_eq!(operation, "doThing");
        Value::Int(args[0].as_int() * 2)
    }
}

#[test]
fn custom_operations_dispatch_to_the_customizer() {
    let interface = InterfaceDescriptor::new("com.acme.Server").method(
        MethodDescriptor::new("doThing")
            .param(TypeRef::int())
            .param(TypeRef::string())
            .returns(TypeRef::int()),
    );
    let ty = synthesize(&interface, &Config::default()).expect("synthesis failed");
    let mut bean = BeanInstance::new(ty).with_customizer(Box::new(Doubler));

    let result = bean
        .invoke("doThing", &[Value::Int(21), Value::Str("x".to_string())])
        .expect("custom dispatch failed");
    assert_eq!(result, Value::Int(42));
}

#[test]
fn custom_operation_without_a_customizer_is_an_error() {
    let mut bean = instance(
        InterfaceDescriptor::new("com.acme.Server")
            .method(MethodDescriptor::new("doThing").param(TypeRef::int())),
    );
    assert!(bean.invoke("doThing", &[Value::Int(1)]).is_err());
}

#[test]
fn invoking_an_unknown_method_is_an_error() {
    let mut bean = instance(InterfaceDescriptor::new("com.acme.Server"));
    assert!(bean.invoke("getMissing", &[]).is_err());
}
