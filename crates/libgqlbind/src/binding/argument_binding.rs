use crate::binding::BoundDirective;
use crate::binding::FieldId;
use crate::binding::ImplType;
use crate::binding::ObjectGraph;
use crate::binding::naming;
use crate::types::InputValueDef;
use crate::types::TypeAnnotation;
use crate::value::Value;

/// Pairs a schema type annotation with the implementation type that
/// represents it.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeReference {
    pub(crate) impl_type: ImplType,
    pub(crate) schema_type: TypeAnnotation,
}
impl TypeReference {
    pub fn impl_type(&self) -> &ImplType {
        &self.impl_type
    }

    pub fn new(schema_type: TypeAnnotation, impl_type: ImplType) -> Self {
        Self {
            impl_type,
            schema_type,
        }
    }

    /// Replaces the implementation type with the one a pre-existing method
    /// declares for this argument.
    pub(crate) fn override_impl_type(&mut self, impl_type: ImplType) {
        self.impl_type = impl_type;
    }

    pub fn schema_type(&self) -> &TypeAnnotation {
        &self.schema_type
    }
}

/// A schema argument (or input-object field) that has been validated and
/// unified with an implementation type.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentBinding {
    pub(crate) binding_name: String,
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<BoundDirective>,
    pub(crate) owner: Option<FieldId>,
    pub(crate) resolved_value: Option<Value>,
    pub(crate) schema_arg: InputValueDef,
    pub(crate) type_ref: TypeReference,
}
impl ArgumentBinding {
    /// The identifier generated code holds this argument's value in.
    pub fn binding_name(&self) -> &str {
        self.binding_name.as_str()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn directives(&self) -> &[BoundDirective] {
        self.directives.as_slice()
    }

    /// True iff this argument belongs to a field of a streaming (subscription)
    /// object.
    pub fn is_stream_argument(&self, graph: &ObjectGraph) -> bool {
        self.owner
            .and_then(|field_id| graph.object(field_id.object))
            .is_some_and(|object| object.is_stream())
    }

    /// Whether `param_name` spells the schema name, ignoring case.
    pub(crate) fn matches_schema_name(&self, param_name: &str) -> bool {
        naming::unraw(param_name).eq_ignore_ascii_case(self.name())
    }

    /// Whether `param_name` is exactly the generated binding name.
    pub(crate) fn matches_binding_name(&self, param_name: &str) -> bool {
        naming::unraw(param_name) == naming::unraw(&self.binding_name)
    }

    /// The argument's name as declared in the schema.
    pub fn name(&self) -> &str {
        self.schema_arg.name()
    }

    pub fn owner(&self) -> Option<FieldId> {
        self.owner
    }

    pub fn resolved_value(&self) -> Option<&Value> {
        self.resolved_value.as_ref()
    }

    pub fn schema_arg(&self) -> &InputValueDef {
        &self.schema_arg
    }

    pub fn set_resolved_value(&mut self, value: Value) {
        self.resolved_value = Some(value);
    }

    pub fn type_ref(&self) -> &TypeReference {
        &self.type_ref
    }
}
