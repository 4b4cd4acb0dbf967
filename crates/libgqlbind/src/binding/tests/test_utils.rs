use crate::binding::ArgumentBindError;
use crate::binding::ArgumentBinding;
use crate::binding::ArgumentBuilder;
use crate::binding::FieldId;
use crate::binding::ModelTypeResolver;
use crate::binding::ObjectGraph;
use crate::binding::ObjectGraphBuildError;
use crate::binding::ObjectGraphBuilder;
use crate::binding::ObjectId;
use crate::binding::SchemaDirectiveBinder;
use crate::schema::Schema;
use crate::types::InputValueDef;

pub(crate) fn build_schema(sdl: &str) -> Schema {
    Schema::builder()
        .load_str(None, sdl)
        .expect("schema parses")
        .build()
        .expect("schema builds")
}

pub(crate) fn build_graph(schema: &Schema) -> Result<ObjectGraph, ObjectGraphBuildError> {
    let resolver = ModelTypeResolver::new(schema);
    let directive_binder = SchemaDirectiveBinder::new(schema);
    ObjectGraphBuilder::new(schema, &resolver, &directive_binder).build()
}

pub(crate) fn field_param<'schema>(
    schema: &'schema Schema,
    type_name: &str,
    field_name: &str,
    param_name: &str,
) -> &'schema InputValueDef {
    let object_type = schema.get_type(type_name)
        .and_then(|graphql_type| graphql_type.as_object())
        .expect("object type exists");
    &object_type.fields()[field_name].parameters()[param_name]
}

/// Builds every argument of `type_name.field_name` with the default resolver,
/// owned by a placeholder field id.
pub(crate) fn build_field_args(
    schema: &Schema,
    type_name: &str,
    field_name: &str,
) -> Result<Vec<ArgumentBinding>, ArgumentBindError> {
    let resolver = ModelTypeResolver::new(schema);
    let directive_binder = SchemaDirectiveBinder::new(schema);
    let builder = ArgumentBuilder::new(schema, &resolver, &directive_binder);
    let object_type = schema.get_type(type_name)
        .and_then(|graphql_type| graphql_type.as_object())
        .expect("object type exists");
    object_type.fields()[field_name].parameters().values()
        .map(|param| builder.build_argument(Some(placeholder_field_id()), param))
        .collect()
}

pub(crate) fn placeholder_field_id() -> FieldId {
    FieldId {
        field: 0,
        object: ObjectId(0),
    }
}
