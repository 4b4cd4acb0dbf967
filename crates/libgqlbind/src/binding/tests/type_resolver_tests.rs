use crate::binding::ImplType;
use crate::binding::ModelTypeResolver;
use crate::binding::TypeResolutionError;
use crate::binding::tests::test_utils;
use crate::schema::Schema;
use crate::types::TypeKind;

fn schema() -> Schema {
    test_utils::build_schema("
        type Query {
            f(
                a: Int!, b: Float, c: [String!]!, d: [ID], e: Boolean!,
                f: Color, g: Filter!, h: DateTime, i: Upload!, j: [[Int!]]
            ): Boolean
        }
        enum Color { RED }
        input Filter { text: String }
        scalar DateTime
        scalar Upload
    ")
}

fn resolve(
    resolver: &ModelTypeResolver<'_>,
    schema: &Schema,
    param_name: &str,
) -> Result<ImplType, TypeResolutionError> {
    resolver.resolve_type_reference(
        test_utils::field_param(schema, "Query", "f", param_name).type_annotation(),
    )
}

#[test]
fn builtin_scalars_map_to_primitives() {
    let schema = schema();
    let resolver = ModelTypeResolver::new(&schema);

    assert_eq!(resolve(&resolver, &schema, "a"), Ok(ImplType::path("i32")));
    assert_eq!(
        resolve(&resolver, &schema, "b"),
        Ok(ImplType::optional(ImplType::path("f64"))),
    );
    assert_eq!(resolve(&resolver, &schema, "e"), Ok(ImplType::path("bool")));
}

#[test]
fn lists_and_nullability_wrap() {
    let schema = schema();
    let resolver = ModelTypeResolver::new(&schema);

    assert_eq!(
        resolve(&resolver, &schema, "c").map(|ty| ty.to_string()),
        Ok("Vec<String>".to_string()),
    );
    assert_eq!(
        resolve(&resolver, &schema, "d").map(|ty| ty.to_string()),
        Ok("Option<Vec<Option<String>>>".to_string()),
    );
    assert_eq!(
        resolve(&resolver, &schema, "j").map(|ty| ty.to_string()),
        Ok("Option<Vec<Option<Vec<i32>>>>".to_string()),
    );
}

#[test]
fn generated_types_keep_their_schema_name() {
    let schema = schema();
    let resolver = ModelTypeResolver::new(&schema);

    assert_eq!(
        resolve(&resolver, &schema, "f"),
        Ok(ImplType::optional(ImplType::path("Color"))),
    );
    assert_eq!(resolve(&resolver, &schema, "g"), Ok(ImplType::path("Filter")));
}

#[test]
fn custom_scalars_need_a_model() {
    let schema = schema();
    let resolver = ModelTypeResolver::new(&schema)
        .bind_model("DateTime", "chrono::DateTime<chrono::Utc>");

    assert_eq!(
        resolve(&resolver, &schema, "h"),
        Ok(ImplType::optional(ImplType::path("chrono::DateTime<chrono::Utc>"))),
    );
    assert_eq!(
        resolve(&resolver, &schema, "i"),
        Err(TypeResolutionError::UnmappedScalar { type_name: "Upload".to_string() }),
    );
}

#[test]
fn models_take_precedence_over_builtins() {
    let schema = schema();
    let resolver = ModelTypeResolver::with_models(
        &schema,
        [("Int".to_string(), "i64".to_string())].into_iter().collect(),
    );

    assert_eq!(resolve(&resolver, &schema, "a"), Ok(ImplType::path("i64")));
}

#[test]
fn input_kinds_come_from_the_schema() {
    let schema = schema();
    let resolver = ModelTypeResolver::new(&schema);

    assert_eq!(resolver.input_kind_of("Color"), Some(TypeKind::Enum));
    assert_eq!(resolver.input_kind_of("Filter"), Some(TypeKind::InputObject));
    assert_eq!(resolver.input_kind_of("Query"), Some(TypeKind::Object));
    assert_eq!(resolver.input_kind_of("Int"), Some(TypeKind::Scalar));
    assert_eq!(resolver.input_kind_of("Nope"), None);
}
