use crate::binding::ArgumentBindError;
use crate::binding::ArgumentBinding;
use crate::binding::DirectiveBinder;
use crate::binding::FieldId;
use crate::binding::TypeReference;
use crate::binding::TypeResolutionError;
use crate::binding::TypeResolver;
use crate::binding::naming;
use crate::schema::Schema;
use crate::types::InputValueDef;
use crate::types::TypeKind;
use crate::value::Value;
use crate::value::ValueError;

type Result<T> = std::result::Result<T, ArgumentBindError>;

/// Turns schema argument declarations into [`ArgumentBinding`]s.
///
/// Each declaration passes through, in order: the input-kind gate, type
/// resolution, directive binding and default-value evaluation. The first
/// failing step aborts the build.
pub struct ArgumentBuilder<'a> {
    directive_binder: &'a dyn DirectiveBinder,
    resolver: &'a dyn TypeResolver,
    schema: &'a Schema,
}
impl<'a> ArgumentBuilder<'a> {
    pub fn new(
        schema: &'a Schema,
        resolver: &'a dyn TypeResolver,
        directive_binder: &'a dyn DirectiveBinder,
    ) -> Self {
        Self {
            directive_binder,
            resolver,
            schema,
        }
    }

    /// Builds the binding for one argument of a field (`owner` is the field)
    /// or of a directive definition (`owner` is `None`).
    pub fn build_argument(
        &self,
        owner: Option<FieldId>,
        decl: &InputValueDef,
    ) -> Result<ArgumentBinding> {
        self.build_binding(owner, decl, |type_name, type_string, kind| {
            ArgumentBindError::InvalidInputType {
                argument_name: decl.name().to_string(),
                type_name,
                type_string,
                kind,
            }
        })
    }

    /// Builds the binding for a field of an input object.
    pub fn build_input_field(&self, decl: &InputValueDef) -> Result<ArgumentBinding> {
        self.build_binding(None, decl, |type_name, type_string, kind| {
            ArgumentBindError::InvalidInputFieldType {
                field_name: decl.name().to_string(),
                type_name,
                type_string,
                kind,
            }
        })
    }

    fn build_binding(
        &self,
        owner: Option<FieldId>,
        decl: &InputValueDef,
        invalid_kind: impl FnOnce(String, String, TypeKind) -> ArgumentBindError,
    ) -> Result<ArgumentBinding> {
        let argument_name = decl.name();
        let type_annot = decl.type_annotation();
        let type_name = type_annot.innermost_named_type_annotation().graphql_type_name();

        let kind = self.resolver.input_kind_of(type_name).ok_or_else(
            || ArgumentBindError::TypeResolutionFailure {
                argument_name: argument_name.to_string(),
                source: TypeResolutionError::UndefinedType {
                    type_name: type_name.to_string(),
                },
            },
        )?;
        if !kind.is_input_kind() {
            return Err(invalid_kind(type_name.to_string(), type_annot.to_string(), kind));
        }

        let impl_type = self.resolver.resolve_type_reference(type_annot).map_err(
            |source| ArgumentBindError::TypeResolutionFailure {
                argument_name: argument_name.to_string(),
                source,
            },
        )?;

        let directives = self.directive_binder.bind_directives(decl.directives()).map_err(
            |source| ArgumentBindError::DirectiveBinding {
                argument_name: argument_name.to_string(),
                source,
            },
        )?;

        let default_value = decl.default_value().map(|ast_value| {
            let value = Value::from_ast(ast_value, None)?;
            value.check_input_shape(self.schema, type_annot)?;
            Ok::<_, ValueError>(value)
        }).transpose().map_err(|source| ArgumentBindError::InvalidDefaultValue {
            argument_name: argument_name.to_string(),
            source,
        })?;

        log::trace!("bound argument `{argument_name}: {type_annot}` to `{impl_type}`");

        Ok(ArgumentBinding {
            binding_name: naming::binding_name(argument_name),
            default_value,
            directives,
            owner,
            resolved_value: None,
            schema_arg: decl.to_owned(),
            type_ref: TypeReference::new(type_annot.to_owned(), impl_type),
        })
    }
}
