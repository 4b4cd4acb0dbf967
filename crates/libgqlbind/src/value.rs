use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, ValueError>;

/// Values bound to variable names, used when evaluating a literal that may
/// reference `$variables`.
pub type Variables = IndexMap<String, Value>;

/// A fully evaluated (constant) GraphQL input value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Evaluates a schema/AST literal. Variable references are only resolvable
    /// when `variables` is provided and contains them.
    pub fn from_ast(
        ast_value: &ast::operation::Value,
        variables: Option<&Variables>,
    ) -> Result<Self> {
        use ast::operation::Value as AstValue;
        Ok(match ast_value {
            AstValue::Boolean(value) => Self::Boolean(*value),
            AstValue::Enum(value) => Self::Enum(value.to_string()),
            AstValue::Float(value) => Self::Float(*value),
            AstValue::Int(value) => Self::Int(
                value.as_i64().ok_or(ValueError::IntOutOfRange)?,
            ),
            AstValue::List(values) => Self::List(
                values.iter()
                    .map(|value| Self::from_ast(value, variables))
                    .collect::<Result<Vec<_>>>()?,
            ),
            AstValue::Null => Self::Null,
            AstValue::Object(entries) => Self::Object(
                entries.iter()
                    .map(|(key, value)| Ok((key.to_string(), Self::from_ast(value, variables)?)))
                    .collect::<Result<IndexMap<_, _>>>()?,
            ),
            AstValue::String(value) => Self::String(value.to_string()),
            AstValue::Variable(var_name) => variables
                .and_then(|vars| vars.get(var_name.as_str()))
                .cloned()
                .ok_or_else(|| ValueError::UndefinedVariable {
                    name: var_name.to_string(),
                })?,
        })
    }

    /// Checks that this value has a shape GraphQL input coercion would accept
    /// for `type_annot`.
    ///
    /// https://spec.graphql.org/October2021/#sec-Input-Values
    pub fn check_input_shape(
        &self,
        schema: &Schema,
        type_annot: &TypeAnnotation,
    ) -> Result<()> {
        if let Self::Null = self {
            return if type_annot.nullable() {
                Ok(())
            } else {
                Err(ValueError::UnexpectedNull {
                    type_string: type_annot.to_string(),
                })
            };
        }

        match type_annot {
            TypeAnnotation::List(list_annot) => match self {
                Self::List(items) => items.iter().try_for_each(|item|
                    item.check_input_shape(schema, list_annot.inner_type_annotation())
                ),
                // A single item is coerced into a list of one.
                //
                // https://spec.graphql.org/October2021/#sec-List.Input-Coercion
                single_item =>
                    single_item.check_input_shape(schema, list_annot.inner_type_annotation()),
            },

            TypeAnnotation::Named(named_annot) => {
                let type_name = named_annot.graphql_type_name();
                let graphql_type = schema.get_type(type_name).ok_or_else(
                    || ValueError::UndefinedType { type_name: type_name.to_string() },
                )?;
                self.check_named_type_shape(schema, graphql_type)
            },
        }
    }

    fn check_named_type_shape(
        &self,
        schema: &Schema,
        graphql_type: &GraphQLType,
    ) -> Result<()> {
        let mismatch = || ValueError::TypeMismatch {
            expected: graphql_type.name().to_string(),
            value: self.to_string(),
        };

        match graphql_type {
            GraphQLType::Scalar(scalar_type) if scalar_type.is_builtin() => {
                let matches = match (scalar_type.name(), self) {
                    ("Boolean", Self::Boolean(_)) => true,
                    ("Float", Self::Float(_) | Self::Int(_)) => true,
                    ("ID", Self::String(_) | Self::Int(_)) => true,
                    ("Int", Self::Int(value)) => i32::try_from(*value).is_ok(),
                    ("String", Self::String(_)) => true,
                    _ => false,
                };
                if matches { Ok(()) } else { Err(mismatch()) }
            },

            // Custom scalars define their own coercion rules, which aren't
            // knowable from the schema alone.
            GraphQLType::Scalar(_) => Ok(()),

            GraphQLType::Enum(enum_type) => match self {
                Self::Enum(value_name) if enum_type.values().contains_key(value_name) => Ok(()),
                Self::Enum(value_name) => Err(ValueError::UndefinedEnumValue {
                    enum_name: enum_type.name().to_string(),
                    value_name: value_name.to_string(),
                }),
                _ => Err(mismatch()),
            },

            GraphQLType::InputObject(input_type) => {
                let Self::Object(entries) = self else {
                    return Err(mismatch());
                };
                if let Some(unknown_field_name) = entries.keys()
                    .find(|name| !input_type.fields().contains_key(name.as_str())) {
                    return Err(ValueError::UnknownInputField {
                        type_name: input_type.name().to_string(),
                        field_name: unknown_field_name.to_string(),
                    });
                }
                for (field_name, field_def) in input_type.fields() {
                    match entries.get(field_name) {
                        Some(value) =>
                            value.check_input_shape(schema, field_def.type_annotation())?,
                        None if !field_def.type_annotation().nullable()
                            && field_def.default_value().is_none() =>
                            return Err(ValueError::MissingRequiredInputField {
                                type_name: input_type.name().to_string(),
                                field_name: field_name.to_string(),
                            }),
                        None => (),
                    }
                }
                Ok(())
            },

            GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => Err(ValueError::NotAnInputType {
                type_name: graphql_type.name().to_string(),
                kind: graphql_type.kind(),
            }),
        }
    }
}
/// Renders the value as a GraphQL literal.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(items) => write!(
                f,
                "[{}]",
                items.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(", "),
            ),
            Self::Null => write!(f, "null"),
            Self::Object(entries) => write!(
                f,
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("integer literal is out of range for a 64-bit integer")]
    IntOutOfRange,

    #[error("the required `{type_name}.{field_name}` input field was not provided")]
    MissingRequiredInputField {
        type_name: String,
        field_name: String,
    },

    #[error("`{type_name}` is a {kind} type and cannot hold an input value")]
    NotAnInputType {
        type_name: String,
        kind: crate::types::TypeKind,
    },

    #[error("expected a `{expected}` value but found `{value}`")]
    TypeMismatch {
        expected: String,
        value: String,
    },

    #[error("`{value_name}` is not a value of the `{enum_name}` enum")]
    UndefinedEnumValue {
        enum_name: String,
        value_name: String,
    },

    #[error("there is no type defined with the name `{type_name}`")]
    UndefinedType {
        type_name: String,
    },

    #[error("variable `${name}` is not defined")]
    UndefinedVariable {
        name: String,
    },

    #[error("expected a non-null `{type_string}` value but found null")]
    UnexpectedNull {
        type_string: String,
    },

    #[error("the `{type_name}` input object has no field named `{field_name}`")]
    UnknownInputField {
        type_name: String,
        field_name: String,
    },
}
