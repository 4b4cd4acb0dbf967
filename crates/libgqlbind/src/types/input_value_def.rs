use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::TypeAnnotation;

/// The schema declaration of an input value: a field parameter, a directive
/// parameter, or an input-object field.
///
/// The default value is kept as the literal written in the schema. Whether it
/// actually evaluates to a value compatible with [`Self::type_annotation()`] is
/// decided later, when an
/// [`ArgumentBinding`](crate::binding::ArgumentBinding) is built from it.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDef {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<ast::operation::Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputValueDef {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::operation::Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub(crate) fn from_ast(
        parent_location: &loc::SourceLocation,
        input_value: &ast::schema::InputValue,
    ) -> Self {
        let def_location = parent_location.with_ast_position(&input_value.position);
        Self {
            default_value: input_value.default_value.to_owned(),
            description: input_value.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(
                &def_location,
                &input_value.directives,
            ),
            name: input_value.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &input_value.value_type,
            ),
            def_location,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
