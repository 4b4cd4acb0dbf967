use crate::binding::DirectiveBindError;
use crate::binding::SchemaDirectiveBinder;
use crate::binding::tests::test_utils;
use crate::value::Value;
use crate::value::ValueError;

const DIRECTIVES: &str = "
    directive @length(min: Int = 0, max: Int!, note: String) on ARGUMENT_DEFINITION
";

fn bind_on_param(
    param_sdl: &str,
) -> Result<Vec<crate::binding::BoundDirective>, DirectiveBindError> {
    let schema = test_utils::build_schema(
        format!("{DIRECTIVES} type Query {{ f({param_sdl}): Boolean }}").as_str(),
    );
    let param = test_utils::field_param(&schema, "Query", "f", "a");
    SchemaDirectiveBinder::new(&schema).bind_directives(param.directives())
}

#[test]
fn provided_and_default_arguments_are_bound() {
    let bound = bind_on_param("a: String @length(max: 5)").expect("directive binds");

    assert_eq!(bound.len(), 1);
    assert_eq!(bound[0].name(), "length");
    assert_eq!(
        bound[0].arguments().iter()
            .map(|(name, value)| (name.as_str(), value.to_owned()))
            .collect::<Vec<_>>(),
        vec![("min", Value::Int(0)), ("max", Value::Int(5))],
    );
    assert!(!bound[0].location().is_builtin());
}

#[test]
fn repeated_applications_bind_in_order() {
    let bound = bind_on_param("a: String @length(max: 5) @deprecated(reason: \"old\")")
        .expect("directives bind");

    assert_eq!(
        bound.iter().map(|directive| directive.name()).collect::<Vec<_>>(),
        vec!["length", "deprecated"],
    );
    assert_eq!(
        bound[1].arguments().get("reason"),
        Some(&Value::String("old".to_string())),
    );
}

#[test]
fn undefined_directive_is_rejected() {
    let err = bind_on_param("a: String @unknown").expect_err("@unknown is undefined");

    assert!(matches!(
        &err,
        DirectiveBindError::UndefinedDirective { directive_name, .. }
            if directive_name == "unknown",
    ));
}

#[test]
fn unknown_argument_is_rejected() {
    let err = bind_on_param("a: String @length(max: 5, maximum: 6)")
        .expect_err("maximum is not an argument of @length");

    assert!(matches!(
        &err,
        DirectiveBindError::UnknownArgument { argument_name, .. }
            if argument_name == "maximum",
    ));
}

#[test]
fn missing_required_argument_is_rejected() {
    let err = bind_on_param("a: String @length(min: 1)").expect_err("max is required");

    assert!(matches!(
        &err,
        DirectiveBindError::MissingRequiredArgument { argument_name, .. }
            if argument_name == "max",
    ));
}

#[test]
fn mistyped_argument_is_rejected() {
    let err = bind_on_param("a: String @length(max: \"five\")")
        .expect_err("max is an Int");

    assert_eq!(err, DirectiveBindError::InvalidArgumentValue {
        directive_name: "length".to_string(),
        argument_name: "max".to_string(),
        source: ValueError::TypeMismatch {
            expected: "Int".to_string(),
            value: "\"five\"".to_string(),
        },
    });
}

#[test]
fn explicit_null_for_required_argument_is_rejected() {
    let err = bind_on_param("a: String @length(max: null)").expect_err("max is non-null");

    assert!(matches!(
        err,
        DirectiveBindError::InvalidArgumentValue {
            source: ValueError::UnexpectedNull { .. },
            ..
        },
    ));
}
