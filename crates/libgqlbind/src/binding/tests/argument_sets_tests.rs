use crate::binding::FieldId;
use crate::binding::ObjectId;
use crate::binding::tests::test_utils;

const SCHEMA: &str = "
    directive @cacheControl(maxAge: Int) on FIELD_DEFINITION
    directive @internal on FIELD_DEFINITION
    type Query {
        user(id: ID!): Boolean
        me: Boolean
        search(text: String, limit: Int = 20): Boolean
    }
    type Mutation { rename(id: ID!, name: String!): Boolean }
";

#[test]
fn every_non_empty_argument_list_is_collected() {
    let schema = test_utils::build_schema(SCHEMA);
    let graph = test_utils::build_graph(&schema).expect("graph builds");

    let sets = graph.argument_sets();

    assert_eq!(
        sets.keys().map(String::as_str).collect::<Vec<_>>(),
        vec![
            "field_query_user_args",
            "field_query_search_args",
            "field_mutation_rename_args",
            "dir_cache_control_args",
        ],
    );
    assert_eq!(
        sets["field_query_search_args"].iter().map(|arg| arg.name()).collect::<Vec<_>>(),
        vec!["text", "limit"],
    );
}

#[test]
fn values_are_the_owners_lists() {
    let schema = test_utils::build_schema(SCHEMA);
    let graph = test_utils::build_graph(&schema).expect("graph builds");

    let sets = graph.argument_sets();

    let rename = graph.object_by_name("Mutation")
        .and_then(|object| object.fields().iter().find(|field| field.name() == "rename"))
        .expect("Mutation.rename exists");
    assert!(std::ptr::eq(sets["field_mutation_rename_args"], rename.args()));

    let cache_control = graph.directive("cacheControl").expect("directive exists");
    assert!(std::ptr::eq(sets["dir_cache_control_args"], cache_control.args()));
}

#[test]
fn colliding_accessor_keys_keep_the_later_owner() {
    let schema = test_utils::build_schema("
        type Query { ok: Boolean }
        type FooBar { baz(first: Int): Boolean }
        type Foo { barBaz(second: Int): Boolean }
    ");
    let graph = test_utils::build_graph(&schema).expect("graph builds");

    let sets = graph.argument_sets();

    assert_eq!(sets.len(), 1);
    let later = graph.object_by_name("Foo").expect("Foo exists");
    assert!(std::ptr::eq(sets["field_foo_bar_baz_args"], later.fields()[0].args()));
    assert_eq!(sets["field_foo_bar_baz_args"][0].name(), "second");
}

#[test]
fn sets_reflect_the_current_graph() {
    let schema = test_utils::build_schema(SCHEMA);
    let mut graph = test_utils::build_graph(&schema).expect("graph builds");
    let user_field_id = FieldId {
        field: 0,
        object: ObjectId(0),
    };
    assert!(graph.argument_sets().contains_key("field_query_user_args"));

    graph.field_mut(user_field_id).expect("Query.user exists").args_mut().clear();
    assert!(!graph.argument_sets().contains_key("field_query_user_args"));

    let search_args = graph.argument_sets()["field_query_search_args"].to_vec();
    graph.field_mut(user_field_id).expect("Query.user exists").args_mut()
        .extend(search_args);
    assert_eq!(graph.argument_sets()["field_query_user_args"].len(), 2);
}

#[test]
fn graph_without_arguments_has_no_sets() {
    let schema = test_utils::build_schema("type Query { ok: Boolean }");
    let graph = test_utils::build_graph(&schema).expect("graph builds");

    assert!(graph.argument_sets().is_empty());
}
