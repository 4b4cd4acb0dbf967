use crate::file_reader;
use crate::loc;
use crate::schema::RootOperationKind;
use crate::types::TypeKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `@{directive_name}` directive is defined more than once ({location1} \
        and {location2})"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        location: loc::SourceLocation,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        location: loc::SourceLocation,
    },

    #[error("The {operation:?} root operation type is declared more than once")]
    DuplicateOperationDefinition {
        operation: RootOperationKind,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("`{owner_name}` declares the `{param_name}` parameter more than once")]
    DuplicateParameterDefinition {
        owner_name: String,
        param_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type is defined more than once ({def1} and {def2})"
    )]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error("Custom directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`: `{param_name}` on `{owner_name}`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SourceLocation,
        owner_name: String,
        param_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type as a different kind of type \
        than it is defined as ({type_kind})"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: TypeKind,
        extension_location: loc::SourceLocation,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema {}: {err}", .file.as_ref().map(|f| f.display().to_string()).unwrap_or_else(|| "string".to_string()))]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "The {operation:?} root operation type is declared as `{type_name}`, \
        which is not an object type defined in the schema"
    )]
    UndefinedRootOperationType {
        operation: RootOperationKind,
        type_name: String,
    },
}
