use crate::binding::ImplParameter;
use crate::binding::ImplType;
use crate::file_reader;
use crate::file_reader::ReadContentError;
use indexmap::IndexMap;
use inherent::inherent;
use quote::ToTokens;
use std::path::Path;
use std::path::PathBuf;
use syn::ext::IdentExt;
use thiserror::Error;

type Result<T> = std::result::Result<T, SignatureProviderError>;

type MethodTable = IndexMap<(String, String), Vec<ImplParameter>>;

/// Looks up the parameter lists of pre-existing implementation methods.
pub trait SignatureProvider {
    /// The parameters `method_name` on the type at `impl_type_path` accepts,
    /// excluding any receiver or resolver-context parameter. `None` if no such
    /// method exists.
    fn method_parameters(
        &self,
        impl_type_path: &str,
        method_name: &str,
    ) -> Option<Vec<ImplParameter>>;
}

/// A [`SignatureProvider`] over an explicit table of methods.
#[derive(Clone, Debug, Default)]
pub struct StaticSignatureProvider {
    methods: MethodTable,
}
impl StaticSignatureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(
        mut self,
        type_name: impl Into<String>,
        method_name: impl Into<String>,
        params: Vec<ImplParameter>,
    ) -> Self {
        self.methods.insert((type_name.into(), method_name.into()), params);
        self
    }
}
#[inherent]
impl SignatureProvider for StaticSignatureProvider {
    pub fn method_parameters(
        &self,
        impl_type_path: &str,
        method_name: &str,
    ) -> Option<Vec<ImplParameter>> {
        lookup(&self.methods, impl_type_path, method_name)
    }
}

/// A [`SignatureProvider`] that reads methods out of `impl` blocks in Rust
/// source files.
///
/// Methods are keyed by the last path segment of the `impl` block's self type,
/// so a model configured as `crate::models::Todo` finds methods declared in
/// `impl Todo { .. }`. When two `impl` blocks (or two types sharing that last
/// segment) define the same method, the one loaded last is kept. A leading parameter whose type is (a reference to) a
/// type named `Context` is treated as resolver context and skipped.
#[derive(Clone, Debug, Default)]
pub struct RustSourceSignatureProvider {
    methods: MethodTable,
}
impl RustSourceSignatureProvider {
    pub fn from_files(file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        let mut provider = Self::new();
        for file_path in file_paths {
            provider = provider.load_file(file_path)?;
        }
        Ok(provider)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| SignatureProviderError::SourceFileReadError(Box::new(err)))?;
        self.load_str(Some(file_path), content.as_str())
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let file = syn::parse_file(content)
            .map_err(|err| SignatureProviderError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        let methods_before = self.methods.len();
        self.visit_items(&file.items);
        log::trace!(
            "Found {} methods in {file_path:?}.",
            self.methods.len() - methods_before,
        );
        Ok(self)
    }

    pub fn new() -> Self {
        Self::default()
    }

    fn visit_items(&mut self, items: &[syn::Item]) {
        for item in items {
            match item {
                syn::Item::Impl(item_impl) => self.visit_impl(item_impl),
                syn::Item::Mod(syn::ItemMod { content: Some((_, mod_items)), .. }) =>
                    self.visit_items(mod_items),
                _ => (),
            }
        }
    }

    fn visit_impl(&mut self, item_impl: &syn::ItemImpl) {
        let Some(type_name) = type_last_segment(&item_impl.self_ty) else {
            return;
        };

        for impl_item in &item_impl.items {
            let syn::ImplItem::Fn(method) = impl_item else {
                continue;
            };

            let mut params = method.sig.inputs.iter()
                .filter_map(|input| match input {
                    syn::FnArg::Receiver(_) => None,
                    syn::FnArg::Typed(pat_type) => Some(pat_type),
                })
                .peekable();
            if params.peek().is_some_and(|first| is_context_type(&first.ty)) {
                params.next();
            }

            let params = params.map(|pat_type| ImplParameter::new(
                pattern_name(&pat_type.pat),
                ImplType::from_syn_type(&pat_type.ty),
            )).collect();

            let method_name = method.sig.ident.unraw().to_string();
            if let Some(replaced) = self.methods.insert(
                (type_name.clone(), method_name.clone()),
                params,
            ) {
                log::debug!(
                    "Method `{type_name}::{method_name}` is defined more than once; \
                    replacing the earlier {}-parameter signature.",
                    replaced.len(),
                );
            }
        }
    }
}
#[inherent]
impl SignatureProvider for RustSourceSignatureProvider {
    pub fn method_parameters(
        &self,
        impl_type_path: &str,
        method_name: &str,
    ) -> Option<Vec<ImplParameter>> {
        lookup(&self.methods, impl_type_path, method_name)
    }
}

fn lookup(
    methods: &MethodTable,
    impl_type_path: &str,
    method_name: &str,
) -> Option<Vec<ImplParameter>> {
    let type_name = impl_type_path.rsplit("::").next().unwrap_or(impl_type_path);
    let method_name = method_name.strip_prefix("r#").unwrap_or(method_name);
    methods.get(&(type_name.to_string(), method_name.to_string())).cloned()
}

fn is_context_type(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Reference(type_ref) => is_context_type(&type_ref.elem),
        other => type_last_segment(other).is_some_and(|name| name == "Context"),
    }
}

fn pattern_name(pat: &syn::Pat) -> String {
    match pat {
        syn::Pat::Ident(pat_ident) => pat_ident.ident.unraw().to_string(),
        other => other.to_token_stream().to_string(),
    }
}

fn type_last_segment(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(type_path) => type_path.path.segments.last()
            .map(|segment| segment.ident.unraw().to_string()),
        _ => None,
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SignatureProviderError {
    #[error("failed to parse Rust source {}: {err}", file.as_ref().map_or(
        "<str>".to_string(),
        |path| format!("`{}`", path.display()),
    ))]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("{0}")]
    SourceFileReadError(Box<ReadContentError>),
}
