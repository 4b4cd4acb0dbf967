use crate::binding::ArgumentBindError;
use crate::binding::ArgumentBuilder;
use crate::binding::DirectiveBinder;
use crate::binding::DirectiveDefBinding;
use crate::binding::FieldBinding;
use crate::binding::FieldId;
use crate::binding::InputObjectBinding;
use crate::binding::ObjectBinding;
use crate::binding::ObjectGraph;
use crate::binding::ObjectId;
use crate::binding::SignatureBindingMode;
use crate::binding::SignatureProvider;
use crate::binding::TypeResolver;
use crate::binding::naming;
use crate::binding::signature_matcher;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, ObjectGraphBuildError>;

/// Builds the [`ObjectGraph`] for a [`Schema`]: every custom directive
/// definition, object field and input-object field gets its arguments bound,
/// and fields of objects with a configured model are re-bound to the
/// signatures of the model's existing methods.
///
/// The first failure aborts the build.
pub struct ObjectGraphBuilder<'a> {
    argument_builder: ArgumentBuilder<'a>,
    binding_mode: SignatureBindingMode,
    models: IndexMap<String, String>,
    schema: &'a Schema,
    signature_provider: Option<&'a dyn SignatureProvider>,
}
impl<'a> ObjectGraphBuilder<'a> {
    pub fn bind_model(
        mut self,
        type_name: impl Into<String>,
        rust_path: impl Into<String>,
    ) -> Self {
        self.models.insert(type_name.into(), rust_path.into());
        self
    }

    pub fn binding_mode(mut self, mode: SignatureBindingMode) -> Self {
        self.binding_mode = mode;
        self
    }

    pub fn build(&self) -> Result<ObjectGraph> {
        let mut graph = ObjectGraph::default();

        for directive_def in self.schema.defined_directives().values() {
            if directive_def.is_builtin() {
                continue;
            }
            let directive_name = directive_def.name();
            let args = directive_def.parameters().values()
                .map(|param| self.argument_builder.build_argument(None, param))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|source| ObjectGraphBuildError::DirectiveDefinition {
                    directive_name: directive_name.to_string(),
                    source,
                })?;
            graph.directives.insert(directive_name.to_string(), DirectiveDefBinding {
                args,
                locations: directive_def.locations().to_vec(),
                name: directive_name.to_string(),
                repeatable: directive_def.is_repeatable(),
            });
        }
        log::debug!("Bound {} directive definitions.", graph.directives.len());

        let subscription_type_name = self.schema.subscription_type_name();
        for (object_idx, object_type) in self.schema.object_types().enumerate() {
            let object_binding = self.build_object(
                ObjectId(object_idx),
                object_type,
                subscription_type_name == Some(object_type.name()),
            )?;
            graph.objects.push(object_binding);
        }
        log::debug!("Bound {} object types.", graph.objects.len());

        for input_type in self.schema.input_object_types() {
            let mut fields = Vec::with_capacity(input_type.fields().len());
            for (field_name, field_def) in input_type.fields() {
                let binding = self.argument_builder.build_input_field(field_def)
                    .map_err(|source| ObjectGraphBuildError::InputDefinition {
                        type_name: input_type.name().to_string(),
                        field_name: field_name.to_string(),
                        source,
                    })?;
                fields.push(binding);
            }
            graph.inputs.push(InputObjectBinding {
                fields,
                name: input_type.name().to_string(),
            });
        }
        log::debug!("Bound {} input object types.", graph.inputs.len());

        Ok(graph)
    }

    pub fn new(
        schema: &'a Schema,
        resolver: &'a dyn TypeResolver,
        directive_binder: &'a dyn DirectiveBinder,
    ) -> Self {
        Self {
            argument_builder: ArgumentBuilder::new(schema, resolver, directive_binder),
            binding_mode: SignatureBindingMode::default(),
            models: IndexMap::new(),
            schema,
            signature_provider: None,
        }
    }

    pub fn signature_provider(mut self, provider: &'a dyn SignatureProvider) -> Self {
        self.signature_provider = Some(provider);
        self
    }

    fn build_object(
        &self,
        object_id: ObjectId,
        object_type: &ObjectType,
        stream: bool,
    ) -> Result<ObjectBinding> {
        let model = self.models.get(object_type.name()).cloned();

        let mut fields = Vec::with_capacity(object_type.fields().len());
        for (field_idx, field) in object_type.fields().values().enumerate() {
            let field_id = FieldId {
                field: field_idx,
                object: object_id,
            };
            let mut field_binding = self.build_field(field_id, field)?;
            if let Some(model_path) = &model {
                self.bind_field_to_model(&mut field_binding, model_path)?;
            }
            fields.push(field_binding);
        }

        Ok(ObjectBinding {
            fields,
            id: object_id,
            model,
            name: object_type.name().to_string(),
            stream,
        })
    }

    fn build_field(&self, field_id: FieldId, field: &Field) -> Result<FieldBinding> {
        let object_definition_error = |source: ArgumentBindError| {
            ObjectGraphBuildError::ObjectDefinition {
                type_name: field.parent_type_name().to_string(),
                field_name: field.name().to_string(),
                source,
            }
        };

        let args = field.parameters().values()
            .map(|param| self.argument_builder.build_argument(Some(field_id), param))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(object_definition_error)?;

        Ok(FieldBinding {
            args,
            bound_method: None,
            id: field_id,
            name: field.name().to_string(),
            object_name: field.parent_type_name().to_string(),
        })
    }

    fn bind_field_to_model(
        &self,
        field_binding: &mut FieldBinding,
        model_path: &str,
    ) -> Result<()> {
        let Some(provider) = self.signature_provider else {
            return Ok(());
        };

        let method_name = naming::method_name(field_binding.name());
        let Some(params) = provider.method_parameters(model_path, &method_name) else {
            log::trace!(
                "`{model_path}` has no `{method_name}` method; `{}.{}` keeps its schema arguments.",
                field_binding.object_name(),
                field_binding.name(),
            );
            return Ok(());
        };

        signature_matcher::bind_to_implementation_signature(
            field_binding,
            &params,
            self.binding_mode,
        ).map_err(|source| ObjectGraphBuildError::SignatureBinding {
            type_name: field_binding.object_name().to_string(),
            field_name: field_binding.name().to_string(),
            method_name: method_name.to_string(),
            source,
        })?;

        log::trace!(
            "Bound `{}.{}` to `{model_path}::{method_name}`.",
            field_binding.object_name(),
            field_binding.name(),
        );
        field_binding.bound_method = Some(method_name);
        Ok(())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ObjectGraphBuildError {
    #[error("unable to build directive definition: @{directive_name}: {source}")]
    DirectiveDefinition {
        directive_name: String,
        source: ArgumentBindError,
    },

    #[error("unable to build input definition: {type_name}.{field_name}: {source}")]
    InputDefinition {
        type_name: String,
        field_name: String,
        source: ArgumentBindError,
    },

    #[error("unable to build object definition: {type_name}.{field_name}: {source}")]
    ObjectDefinition {
        type_name: String,
        field_name: String,
        source: ArgumentBindError,
    },

    #[error("unable to bind {type_name}.{field_name} to {method_name}: {source}")]
    SignatureBinding {
        type_name: String,
        field_name: String,
        method_name: String,
        source: ArgumentBindError,
    },
}
