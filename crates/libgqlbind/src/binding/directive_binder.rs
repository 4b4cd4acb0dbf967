use crate::loc;
use crate::schema::Schema;
use crate::types::DirectiveAnnotation;
use crate::value::Value;
use crate::value::ValueError;
use indexmap::IndexMap;
use inherent::inherent;
use thiserror::Error;

type Result<T> = std::result::Result<T, DirectiveBindError>;

/// A directive application whose arguments have been evaluated and checked
/// against the directive's definition.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundDirective {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) location: loc::SourceLocation,
    pub(crate) name: String,
}
impl BoundDirective {
    /// Argument values in definition order. Arguments that were neither
    /// provided nor defaulted are absent.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

pub trait DirectiveBinder {
    fn bind_directives(
        &self,
        annotations: &[DirectiveAnnotation],
    ) -> Result<Vec<BoundDirective>>;
}

/// Binds directive applications against the directives a [`Schema`] defines.
#[derive(Clone, Copy, Debug)]
pub struct SchemaDirectiveBinder<'schema> {
    schema: &'schema Schema,
}
impl<'schema> SchemaDirectiveBinder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    fn bind_directive(&self, annot: &DirectiveAnnotation) -> Result<BoundDirective> {
        let directive_name = annot.directive_name();
        let directive_def = annot.directive_ref().deref(self.schema).map_err(
            |_| DirectiveBindError::UndefinedDirective {
                directive_name: directive_name.to_string(),
                location: annot.location().to_owned(),
            },
        )?;

        if let Some(unknown_arg_name) = annot.arguments().keys()
            .find(|name| !directive_def.parameters().contains_key(name.as_str())) {
            return Err(DirectiveBindError::UnknownArgument {
                directive_name: directive_name.to_string(),
                argument_name: unknown_arg_name.to_string(),
                location: annot.location().to_owned(),
            });
        }

        let mut arguments = IndexMap::new();
        for (param_name, param_def) in directive_def.parameters() {
            let invalid_value = |source| DirectiveBindError::InvalidArgumentValue {
                directive_name: directive_name.to_string(),
                argument_name: param_name.to_string(),
                source,
            };

            let ast_value = match annot.arguments().get(param_name) {
                Some(provided) => provided,
                None => match param_def.default_value() {
                    Some(default_value) => default_value,
                    None if param_def.type_annotation().nullable() => continue,
                    None => return Err(DirectiveBindError::MissingRequiredArgument {
                        directive_name: directive_name.to_string(),
                        argument_name: param_name.to_string(),
                        location: annot.location().to_owned(),
                    }),
                },
            };

            let value = Value::from_ast(ast_value, None).map_err(invalid_value)?;
            value.check_input_shape(self.schema, param_def.type_annotation())
                .map_err(invalid_value)?;
            arguments.insert(param_name.to_string(), value);
        }

        Ok(BoundDirective {
            arguments,
            location: annot.location().to_owned(),
            name: directive_name.to_string(),
        })
    }
}
#[inherent]
impl DirectiveBinder for SchemaDirectiveBinder<'_> {
    pub fn bind_directives(
        &self,
        annotations: &[DirectiveAnnotation],
    ) -> Result<Vec<BoundDirective>> {
        annotations.iter()
            .map(|annot| self.bind_directive(annot))
            .collect()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DirectiveBindError {
    #[error("invalid value for argument `{argument_name}` of @{directive_name}: {source}")]
    InvalidArgumentValue {
        directive_name: String,
        argument_name: String,
        source: ValueError,
    },

    #[error("@{directive_name} requires argument `{argument_name}` ({location})")]
    MissingRequiredArgument {
        directive_name: String,
        argument_name: String,
        location: loc::SourceLocation,
    },

    #[error("@{directive_name} is not a defined directive ({location})")]
    UndefinedDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("@{directive_name} has no argument named `{argument_name}` ({location})")]
    UnknownArgument {
        directive_name: String,
        argument_name: String,
        location: loc::SourceLocation,
    },
}
