use crate::binding::naming;

#[test]
fn binding_names_are_snake_case() {
    assert_eq!(naming::binding_name("firstName"), "first_name");
    assert_eq!(naming::binding_name("ID"), "id");
    assert_eq!(naming::binding_name("b"), "b");
}

#[test]
fn keywords_are_escaped() {
    assert_eq!(naming::binding_name("type"), "r#type");
    assert_eq!(naming::method_name("match"), "r#match");
    assert_eq!(naming::binding_name("self"), "self_");
    assert_eq!(naming::binding_name("Self"), "self_");
}

#[test]
fn accessor_keys_follow_owner_names() {
    assert_eq!(
        naming::field_args_accessor_key("Query", "addBookmark"),
        "field_query_add_bookmark_args",
    );
    assert_eq!(
        naming::directive_args_accessor_key("cacheControl"),
        "dir_cache_control_args",
    );
}
