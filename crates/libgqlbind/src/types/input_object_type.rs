use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::InputValueDef;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, InputValueDef>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    /// The input fields of this type, in declaration order (fields added by
    /// a type extension follow the fields of the original definition).
    pub fn fields(&self) -> &IndexMap<String, InputValueDef> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
