use crate::binding::ArgumentBinding;
use crate::binding::argument_sets;
use crate::binding::naming;
use indexmap::IndexMap;

/// Index of an [`ObjectBinding`] within its [`ObjectGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

/// Addresses one field of one object in an [`ObjectGraph`]. Arguments point
/// back at their owning field with a `FieldId` rather than a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub(crate) field: usize,
    pub(crate) object: ObjectId,
}
impl FieldId {
    pub fn object(&self) -> ObjectId {
        self.object
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldBinding {
    pub(crate) args: Vec<ArgumentBinding>,
    pub(crate) bound_method: Option<String>,
    pub(crate) id: FieldId,
    pub(crate) name: String,
    pub(crate) object_name: String,
}
impl FieldBinding {
    pub fn args(&self) -> &[ArgumentBinding] {
        self.args.as_slice()
    }

    pub fn args_mut(&mut self) -> &mut Vec<ArgumentBinding> {
        &mut self.args
    }

    /// Name of the generated routine that decodes this field's arguments.
    pub fn args_accessor_key(&self) -> String {
        naming::field_args_accessor_key(&self.object_name, &self.name)
    }

    /// The pre-existing implementation method this field was bound to, if
    /// any.
    pub fn bound_method(&self) -> Option<&str> {
        self.bound_method.as_deref()
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn object_name(&self) -> &str {
        self.object_name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectBinding {
    pub(crate) fields: Vec<FieldBinding>,
    pub(crate) id: ObjectId,
    pub(crate) model: Option<String>,
    pub(crate) name: String,
    pub(crate) stream: bool,
}
impl ObjectBinding {
    pub fn fields(&self) -> &[FieldBinding] {
        self.fields.as_slice()
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Objects whose fields produce a stream of results (the subscription
    /// root).
    pub fn is_stream(&self) -> bool {
        self.stream
    }

    /// The Rust type path this object is bound to, if it was configured with
    /// one.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectBinding {
    pub(crate) fields: Vec<ArgumentBinding>,
    pub(crate) name: String,
}
impl InputObjectBinding {
    pub fn fields(&self) -> &[ArgumentBinding] {
        self.fields.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefBinding {
    pub(crate) args: Vec<ArgumentBinding>,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl DirectiveDefBinding {
    pub fn args(&self) -> &[ArgumentBinding] {
        self.args.as_slice()
    }

    pub fn args_mut(&mut self) -> &mut Vec<ArgumentBinding> {
        &mut self.args
    }

    pub fn args_accessor_key(&self) -> String {
        naming::directive_args_accessor_key(&self.name)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[String] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Everything a code generator needs to emit argument-handling code: bound
/// objects with their fields, input objects, and custom directive
/// definitions, all in schema declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectGraph {
    pub(crate) directives: IndexMap<String, DirectiveDefBinding>,
    pub(crate) inputs: Vec<InputObjectBinding>,
    pub(crate) objects: Vec<ObjectBinding>,
}
impl ObjectGraph {
    /// Every non-empty argument list in the graph, keyed by the name of the
    /// routine that decodes it. Computed fresh from the graph on every call.
    pub fn argument_sets(&self) -> IndexMap<String, &[ArgumentBinding]> {
        argument_sets::collect_argument_sets(&self.objects, &self.directives)
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefBinding> {
        self.directives.get(name)
    }

    pub fn directive_mut(&mut self, name: &str) -> Option<&mut DirectiveDefBinding> {
        self.directives.get_mut(name)
    }

    pub fn directives(&self) -> &IndexMap<String, DirectiveDefBinding> {
        &self.directives
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldBinding> {
        self.object(id.object)?.fields.get(id.field)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut FieldBinding> {
        self.objects.get_mut(id.object.0)?.fields.get_mut(id.field)
    }

    pub fn input(&self, name: &str) -> Option<&InputObjectBinding> {
        self.inputs.iter().find(|input| input.name == name)
    }

    pub fn inputs(&self) -> &[InputObjectBinding] {
        self.inputs.as_slice()
    }

    pub fn object(&self, id: ObjectId) -> Option<&ObjectBinding> {
        self.objects.get(id.0)
    }

    pub fn object_by_name(&self, name: &str) -> Option<&ObjectBinding> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn objects(&self) -> &[ObjectBinding] {
        self.objects.as_slice()
    }
}
