use crate::schema::SchemaBuilder;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::TypeKind;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema.
///
/// Types and directives are kept in the order they were defined (built-ins
/// first), so anything derived by walking the schema is deterministic.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn defined_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    pub fn defined_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn directive_def(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Every input object type, in definition order.
    pub fn input_object_types(&self) -> impl Iterator<Item = &InputObjectType> {
        self.types.values().filter_map(|type_| type_.as_input_object())
    }

    /// Every object type, in definition order.
    pub fn object_types(&self) -> impl Iterator<Item = &ObjectType> {
        self.types.values().filter_map(|type_| type_.as_object())
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    pub fn type_kind(&self, name: &str) -> Option<TypeKind> {
        self.types.get(name).map(TypeKind::from)
    }
}
