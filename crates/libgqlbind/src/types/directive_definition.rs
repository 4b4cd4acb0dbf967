use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::InputValueDef;
use indexmap::IndexMap;

/// A directive declared with `directive @name(..) on ..`, or one of the
/// directives built into GraphQL itself.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputValueDef>,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `@skip`, `@include`, `@deprecated` and `@specifiedBy`.
    pub fn is_builtin(&self) -> bool {
        self.def_location.is_builtin()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// The directive locations (e.g. `FIELD_DEFINITION`) this directive may be
    /// applied at.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, InputValueDef> {
        &self.parameters
    }
}
impl DerefByName for DirectiveDefinition {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.directive_defs.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
