use crate::binding::ImplType;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::types::TypeKind;
use indexmap::IndexMap;
use inherent::inherent;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeResolutionError>;

/// Maps schema type references onto implementation types.
pub trait TypeResolver {
    /// The kind of the named schema type, or `None` if the type is unknown.
    fn input_kind_of(&self, type_name: &str) -> Option<TypeKind>;

    fn resolve_type_reference(&self, type_annot: &TypeAnnotation) -> Result<ImplType>;
}

/// A [`TypeResolver`] backed by a [`Schema`] and a table of "models": schema
/// types that are bound to an existing Rust type path.
///
/// Types without a model resolve as follows:
/// * The built-in scalars map onto Rust primitives (`ID` is a `String`).
/// * Enums, input objects, objects, interfaces and unions map onto a
///   generated type of the same name.
/// * Custom scalars can't be generated and fail with
///   [`TypeResolutionError::UnmappedScalar`].
///
/// Nullable annotations wrap in `Option`, list annotations in `Vec`.
#[derive(Clone, Debug)]
pub struct ModelTypeResolver<'schema> {
    models: IndexMap<String, String>,
    schema: &'schema Schema,
}
impl<'schema> ModelTypeResolver<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            models: IndexMap::new(),
            schema,
        }
    }

    pub fn bind_model(
        mut self,
        type_name: impl Into<String>,
        rust_path: impl Into<String>,
    ) -> Self {
        self.models.insert(type_name.into(), rust_path.into());
        self
    }

    pub fn with_models(
        schema: &'schema Schema,
        models: IndexMap<String, String>,
    ) -> Self {
        Self {
            models,
            schema,
        }
    }

    fn resolve_named_type(&self, type_name: &str) -> Result<ImplType> {
        if let Some(rust_path) = self.models.get(type_name) {
            return Ok(ImplType::path(rust_path));
        }

        let graphql_type = self.schema.get_type(type_name).ok_or_else(
            || TypeResolutionError::UndefinedType { type_name: type_name.to_string() },
        )?;
        match graphql_type {
            GraphQLType::Scalar(scalar_type) if scalar_type.is_builtin() =>
                Ok(ImplType::path(match type_name {
                    "Boolean" => "bool",
                    "Float" => "f64",
                    "Int" => "i32",
                    _ => "String",
                })),

            GraphQLType::Scalar(_) => Err(TypeResolutionError::UnmappedScalar {
                type_name: type_name.to_string(),
            }),

            GraphQLType::Enum(_)
            | GraphQLType::InputObject(_)
            | GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => Ok(ImplType::path(type_name)),
        }
    }
}
#[inherent]
impl TypeResolver for ModelTypeResolver<'_> {
    pub fn input_kind_of(&self, type_name: &str) -> Option<TypeKind> {
        self.schema.type_kind(type_name)
    }

    pub fn resolve_type_reference(&self, type_annot: &TypeAnnotation) -> Result<ImplType> {
        let non_null_type = match type_annot {
            TypeAnnotation::List(list_annot) => ImplType::list(
                self.resolve_type_reference(list_annot.inner_type_annotation())?,
            ),
            TypeAnnotation::Named(named_annot) =>
                self.resolve_named_type(named_annot.graphql_type_name())?,
        };

        Ok(if type_annot.nullable() {
            ImplType::optional(non_null_type)
        } else {
            non_null_type
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeResolutionError {
    #[error("there is no type defined with the name `{type_name}`")]
    UndefinedType {
        type_name: String,
    },

    #[error(
        "the `{type_name}` scalar has no model bound to it, so there is no Rust \
        type to represent it with"
    )]
    UnmappedScalar {
        type_name: String,
    },
}
