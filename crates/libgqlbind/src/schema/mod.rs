#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
pub(crate) mod schema_builder;

pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::RootOperationKind;
pub use schema_builder::SchemaBuilder;
