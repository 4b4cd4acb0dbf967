use crate::ast;
use crate::loc;
use crate::types::NamedDirectiveRef;
use indexmap::IndexMap;

/// A directive applied to some schema element, e.g. `@deprecated(reason: "..")`.
///
/// Argument values are kept as written in the schema; they are evaluated and
/// checked against the directive's definition by a
/// [`DirectiveBinder`](crate::binding::DirectiveBinder).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, ast::operation::Value>,
    pub(crate) directive_ref: NamedDirectiveRef,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &IndexMap<String, ast::operation::Value> {
        &self.arguments
    }

    pub fn directive_name(&self) -> &str {
        self.directive_ref.name()
    }

    pub fn directive_ref(&self) -> &NamedDirectiveRef {
        &self.directive_ref
    }

    pub(crate) fn from_ast(
        annotated_item_srcloc: &loc::SourceLocation,
        directives: &[ast::operation::Directive],
    ) -> Vec<Self> {
        directives.iter().map(|ast_annot| {
            let annot_srcloc =
                annotated_item_srcloc.with_ast_position(&ast_annot.position);
            Self {
                arguments: ast_annot.arguments.iter()
                    .map(|(name, value)| (name.to_string(), value.to_owned()))
                    .collect(),
                directive_ref: NamedDirectiveRef::new(
                    &ast_annot.name,
                    annot_srcloc,
                ),
            }
        }).collect()
    }

    pub fn location(&self) -> &loc::SourceLocation {
        self.directive_ref.ref_location()
    }
}
