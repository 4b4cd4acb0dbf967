use crate::types::GraphQLType;

/// Similar to [`GraphQLType`] except without the corresponding type metadata.
/// Useful when classifying a type, e.g. when deciding whether it may appear
/// in an input position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    /// The `__TypeKind` name GraphQL introspection uses for this kind (e.g.
    /// `INPUT_OBJECT`).
    pub fn introspection_name(&self) -> &'static str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }

    /// Only scalars, enums, and input objects may be used as the type of an
    /// argument or an input-object field.
    ///
    /// https://spec.graphql.org/October2021/#IsInputType()
    pub fn is_input_kind(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }
}
impl std::convert::From<&GraphQLType> for TypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.introspection_name())
    }
}
