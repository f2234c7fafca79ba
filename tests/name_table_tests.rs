use xbeanc::consts::NO_DEFAULT;
use xbeanc::model::{
    AttributeMeta, ElementMeta, InterfaceDescriptor, Metadata, MethodDescriptor, TypeRef,
};
use xbeanc::names::NameTable;

#[test]
fn explicit_element_name_overrides_the_property_name() {
    let interface = InterfaceDescriptor::new("com.acme.Server").method(
        MethodDescriptor::new("getAddress")
            .returns(TypeRef::string())
            .meta(Metadata::Element(ElementMeta::named("addr"))),
    );
    let table = NameTable::build(&interface);
    assert_eq!(table.serialized_name("address"), "addr");
    assert!(!table.is_naked("address"));
}

#[test]
fn defaulted_element_name_falls_back_to_the_property_name() {
    let interface = InterfaceDescriptor::new("com.acme.Server").method(
        MethodDescriptor::new("getAddress")
            .returns(TypeRef::string())
            .meta(Metadata::Element(
                ElementMeta::defaulted().with_default("localhost"),
            )),
    );
    let table = NameTable::build(&interface);
    assert_eq!(table.serialized_name("address"), "address");
    assert_eq!(table.default_value("address"), "localhost");
}

#[test]
fn attribute_metadata_names_the_property_with_no_default() {
    let interface = InterfaceDescriptor::new("com.acme.Server").method(
        MethodDescriptor::new("getPort")
            .returns(TypeRef::int())
            .meta(Metadata::Attribute(AttributeMeta::named("port-number"))),
    );
    let table = NameTable::build(&interface);
    assert_eq!(table.serialized_name("port"), "port-number");
    assert_eq!(table.default_value("port"), NO_DEFAULT);
    assert!(!table.is_naked("port"));
}

#[test]
fn property_mapped_through_one_accessor_is_not_naked() {
    let interface = InterfaceDescriptor::new("com.acme.Server")
        .method(
            MethodDescriptor::new("getAddress")
                .returns(TypeRef::string())
                .meta(Metadata::Attribute(AttributeMeta::defaulted())),
        )
        .method(MethodDescriptor::new("setAddress").param(TypeRef::string()));
    let table = NameTable::build(&interface);
    assert!(!table.is_naked("address"));
    assert_eq!(table.serialized_name("address"), "address");
}

#[test]
fn property_with_no_metadata_at_all_is_naked() {
    let interface = InterfaceDescriptor::new("com.acme.Server")
        .method(MethodDescriptor::new("getAddress").returns(TypeRef::string()))
        .method(MethodDescriptor::new("setAddress").param(TypeRef::string()));
    let table = NameTable::build(&interface);
    assert!(table.is_naked("address"));
    assert_eq!(table.serialized_name("address"), "address");
    assert_eq!(table.default_value("address"), NO_DEFAULT);
}

#[test]
fn conflicting_names_resolve_to_the_first_in_declaration_order() {
    let interface = InterfaceDescriptor::new("com.acme.Server")
        .method(
            MethodDescriptor::new("getAddress")
                .returns(TypeRef::string())
                .meta(Metadata::Element(ElementMeta::named("first"))),
        )
        .method(
            MethodDescriptor::new("setAddress")
                .param(TypeRef::string())
                .meta(Metadata::Element(ElementMeta::named("second"))),
        );
    let table = NameTable::build(&interface);
    assert_eq!(table.serialized_name("address"), "first");
}

#[test]
fn non_accessor_methods_do_not_contribute_names() {
    let interface = InterfaceDescriptor::new("com.acme.Server").method(
        MethodDescriptor::new("addServer")
            .param(TypeRef::string())
            .meta(Metadata::Element(ElementMeta::named("ignored"))),
    );
    let table = NameTable::build(&interface);
    assert_eq!(table.serialized_name("server"), "server");
}
