//! Binds schema arguments to implementation types.
//!
//! [`ObjectGraphBuilder`] drives the pipeline: an [`ArgumentBuilder`] turns
//! each schema argument into an [`ArgumentBinding`] (checking that its type is
//! a legal input type, resolving its implementation type through a
//! [`TypeResolver`], binding its directives and evaluating its default),
//! fields of objects backed by existing code are re-bound to those methods'
//! signatures, and [`ObjectGraph::argument_sets`] collects the resulting
//! argument lists for emission.

mod argument_bind_error;
mod argument_binding;
mod argument_builder;
mod argument_sets;
mod directive_binder;
mod impl_type;
pub mod naming;
mod object_graph;
mod object_graph_builder;
mod signature_matcher;
mod signature_provider;
mod type_resolver;

pub use argument_bind_error::ArgumentBindError;
pub use argument_binding::ArgumentBinding;
pub use argument_binding::TypeReference;
pub use argument_builder::ArgumentBuilder;
pub use argument_sets::collect_argument_sets;
pub use directive_binder::BoundDirective;
pub use directive_binder::DirectiveBindError;
pub use directive_binder::DirectiveBinder;
pub use directive_binder::SchemaDirectiveBinder;
pub use impl_type::ImplParameter;
pub use impl_type::ImplType;
pub use object_graph::DirectiveDefBinding;
pub use object_graph::FieldBinding;
pub use object_graph::FieldId;
pub use object_graph::InputObjectBinding;
pub use object_graph::ObjectBinding;
pub use object_graph::ObjectGraph;
pub use object_graph::ObjectId;
pub use object_graph_builder::ObjectGraphBuildError;
pub use object_graph_builder::ObjectGraphBuilder;
pub use signature_matcher::SignatureBindingMode;
pub use signature_matcher::bind_to_implementation_signature;
pub use signature_provider::RustSourceSignatureProvider;
pub use signature_provider::SignatureProvider;
pub use signature_provider::SignatureProviderError;
pub use signature_provider::StaticSignatureProvider;
pub use type_resolver::ModelTypeResolver;
pub use type_resolver::TypeResolutionError;
pub use type_resolver::TypeResolver;

#[cfg(test)]
mod tests;
