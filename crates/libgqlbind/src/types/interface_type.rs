use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents an [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.0.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.0.directives
    }

    /// The fields of this type, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interfaces.iter().map(|name| name.as_str()).collect()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
