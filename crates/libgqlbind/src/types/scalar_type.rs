use crate::loc;
use crate::types::DirectiveAnnotation;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars), either
/// one of the built-in scalars or a custom one declared with `scalar`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location.is_builtin()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
