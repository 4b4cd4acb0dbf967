//! Argument binding and type unification for schema-driven GraphQL code
//! generation.
//!
//! Load a [`Schema`](schema::Schema), pick a
//! [`TypeResolver`](binding::TypeResolver), then build an
//! [`ObjectGraph`](binding::ObjectGraph) with an
//! [`ObjectGraphBuilder`](binding::ObjectGraphBuilder).

pub mod ast;
pub mod binding;
pub mod config;
mod file_reader;
pub mod loc;
mod named_ref;
pub mod schema;
pub mod types;
mod value;

pub use file_reader::ReadContentError;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Value;
pub use value::ValueError;
pub use value::Variables;
