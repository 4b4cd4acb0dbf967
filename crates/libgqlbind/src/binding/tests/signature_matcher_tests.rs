use crate::binding::ArgumentBindError;
use crate::binding::FieldBinding;
use crate::binding::ImplParameter;
use crate::binding::ImplType;
use crate::binding::SignatureBindingMode;
use crate::binding::bind_to_implementation_signature;
use crate::binding::tests::test_utils;

fn user_field() -> FieldBinding {
    let schema = test_utils::build_schema("
        type Query { user(id: ID, name: String, firstName: String): Boolean }
    ");
    FieldBinding {
        args: test_utils::build_field_args(&schema, "Query", "user").expect("args build"),
        bound_method: None,
        id: test_utils::placeholder_field_id(),
        name: "user".to_string(),
        object_name: "Query".to_string(),
    }
}

fn arg_names(field: &FieldBinding) -> Vec<&str> {
    field.args().iter().map(|arg| arg.name()).collect()
}

#[test]
fn parameters_reorder_and_retype_arguments() {
    let mut field = user_field();
    bind_to_implementation_signature(
        &mut field,
        &[
            ImplParameter::new("name", ImplType::path("String")),
            ImplParameter::new("id", ImplType::path("String")),
        ],
        SignatureBindingMode::Lenient,
    ).expect("signature binds");

    assert_eq!(arg_names(&field), vec!["name", "id"]);
    assert!(field.args().iter().all(
        |arg| arg.type_ref().impl_type() == &ImplType::path("String"),
    ));
}

#[test]
fn parameter_names_match_case_insensitively() {
    let mut field = user_field();
    bind_to_implementation_signature(
        &mut field,
        &[ImplParameter::new("ID", ImplType::path("u64"))],
        SignatureBindingMode::Lenient,
    ).expect("signature binds");

    assert_eq!(arg_names(&field), vec!["id"]);
    assert_eq!(field.args()[0].type_ref().impl_type(), &ImplType::path("u64"));
}

#[test]
fn parameter_matching_the_binding_name_binds() {
    let mut field = user_field();
    bind_to_implementation_signature(
        &mut field,
        &[ImplParameter::new("first_name", ImplType::path("String"))],
        SignatureBindingMode::Lenient,
    ).expect("signature binds");

    assert_eq!(arg_names(&field), vec!["firstName"]);
}

#[test]
fn unknown_parameter_fails_and_leaves_field_unmodified() {
    let mut field = user_field();
    let before = field.clone();

    let err = bind_to_implementation_signature(
        &mut field,
        &[
            ImplParameter::new("id", ImplType::path("String")),
            ImplParameter::new("name", ImplType::path("String")),
            ImplParameter::new("limit", ImplType::path("i32")),
        ],
        SignatureBindingMode::Lenient,
    ).expect_err("limit is not a schema argument");

    assert_eq!(err, ArgumentBindError::UnboundParameter {
        parameter_name: "limit".to_string(),
    });
    assert_eq!(err.to_string(), "arg limit not found on method");
    assert_eq!(field, before);
}

#[test]
fn two_parameters_for_one_argument_fail() {
    let mut field = user_field();
    let before = field.clone();

    let err = bind_to_implementation_signature(
        &mut field,
        &[
            ImplParameter::new("id", ImplType::path("String")),
            ImplParameter::new("Id", ImplType::path("String")),
        ],
        SignatureBindingMode::Lenient,
    ).expect_err("both parameters bind `id`");

    assert_eq!(err, ArgumentBindError::DuplicateParameter {
        parameter_name: "Id".to_string(),
        argument_name: "id".to_string(),
    });
    assert_eq!(field, before);
}

#[test]
fn lenient_mode_drops_unconsumed_arguments() {
    let mut field = user_field();
    bind_to_implementation_signature(
        &mut field,
        &[ImplParameter::new("id", ImplType::path("String"))],
        SignatureBindingMode::default(),
    ).expect("signature binds");

    assert_eq!(arg_names(&field), vec!["id"]);
}

#[test]
fn strict_mode_rejects_unconsumed_arguments() {
    let mut field = user_field();
    let before = field.clone();

    let err = bind_to_implementation_signature(
        &mut field,
        &[ImplParameter::new("id", ImplType::path("String"))],
        SignatureBindingMode::Strict,
    ).expect_err("name and firstName are not consumed");

    assert_eq!(err, ArgumentBindError::UnusedSchemaArgument {
        argument_name: "name".to_string(),
    });
    assert_eq!(field, before);
}

#[test]
fn empty_signature_clears_arguments() {
    let mut field = user_field();
    bind_to_implementation_signature(&mut field, &[], SignatureBindingMode::Lenient)
        .expect("signature binds");

    assert!(field.args().is_empty());
}

fn field_with_colliding_binding_names() -> FieldBinding {
    let schema = test_utils::build_schema("
        type Query { user(firstName: String, first_name: Int): Boolean }
    ");
    FieldBinding {
        args: test_utils::build_field_args(&schema, "Query", "user").expect("args build"),
        bound_method: None,
        id: test_utils::placeholder_field_id(),
        name: "user".to_string(),
        object_name: "Query".to_string(),
    }
}

#[test]
fn schema_name_match_outranks_earlier_binding_name_match() {
    let mut field = field_with_colliding_binding_names();
    bind_to_implementation_signature(
        &mut field,
        &[ImplParameter::new("first_name", ImplType::path("i64"))],
        SignatureBindingMode::Lenient,
    ).expect("signature binds");

    assert_eq!(arg_names(&field), vec!["first_name"]);
    assert_eq!(field.args()[0].type_ref().impl_type(), &ImplType::path("i64"));
}

#[test]
fn colliding_binding_names_each_bind_their_own_argument() {
    let mut field = field_with_colliding_binding_names();
    bind_to_implementation_signature(
        &mut field,
        &[
            ImplParameter::new("firstName", ImplType::path("String")),
            ImplParameter::new("first_name", ImplType::path("i64")),
        ],
        SignatureBindingMode::Strict,
    ).expect("signature binds");

    assert_eq!(arg_names(&field), vec!["firstName", "first_name"]);
    assert_eq!(field.args()[0].type_ref().impl_type(), &ImplType::path("String"));
    assert_eq!(field.args()[1].type_ref().impl_type(), &ImplType::path("i64"));
}
