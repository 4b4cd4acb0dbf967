mod directive_annotation;
mod directive_definition;
mod enum_type;
mod field;
mod graphql_type;
mod input_object_type;
mod input_value_def;
mod interface_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_type;
mod scalar_type;
mod type_annotation;
mod type_kind;
mod union_type;

use crate::named_ref::NamedRef;
use crate::schema::Schema;

pub use directive_annotation::DirectiveAnnotation;
pub use directive_definition::DirectiveDefinition;
pub use enum_type::EnumType;
pub use enum_type::EnumValueDef;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input_object_type::InputObjectType;
pub use input_value_def::InputValueDef;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use type_kind::TypeKind;
pub use union_type::UnionType;

pub type NamedDirectiveRef = NamedRef<Schema, DirectiveDefinition>;
pub type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;

#[cfg(test)]
mod tests;
