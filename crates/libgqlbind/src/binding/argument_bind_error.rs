use crate::binding::DirectiveBindError;
use crate::binding::TypeResolutionError;
use crate::types::TypeKind;
use crate::value::ValueError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArgumentBindError {
    #[error("invalid directive on argument {argument_name}: {source}")]
    DirectiveBinding {
        argument_name: String,
        source: DirectiveBindError,
    },

    #[error(
        "arg {parameter_name} binds to argument {argument_name}, which an \
        earlier method parameter is already bound to"
    )]
    DuplicateParameter {
        parameter_name: String,
        argument_name: String,
    },

    #[error("default value is not valid: {source}")]
    InvalidDefaultValue {
        argument_name: String,
        source: ValueError,
    },

    #[error("cannot use {type_string} because {kind} is not a valid input type")]
    InvalidInputFieldType {
        field_name: String,
        type_name: String,
        type_string: String,
        kind: TypeKind,
    },

    #[error(
        "cannot use {type_string} as argument {argument_name} because {kind} \
        is not a valid input type"
    )]
    InvalidInputType {
        argument_name: String,
        type_name: String,
        type_string: String,
        kind: TypeKind,
    },

    #[error("unable to resolve the type of {argument_name}: {source}")]
    TypeResolutionFailure {
        argument_name: String,
        source: TypeResolutionError,
    },

    #[error("arg {parameter_name} not found on method")]
    UnboundParameter {
        parameter_name: String,
    },

    #[error("arg {argument_name} is declared in the schema but the method does not accept it")]
    UnusedSchemaArgument {
        argument_name: String,
    },
}
