use quote::ToTokens;

/// Describes an implementation-language (Rust) type that a schema type is
/// bound to. `Option` and `Vec` wrappers are kept structured since they carry
/// the nullability and list-ness a schema type annotation expresses; anything
/// else is an opaque type path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImplType {
    Option(Box<ImplType>),
    Path(String),
    Vec(Box<ImplType>),
}
impl ImplType {
    pub fn list(inner: ImplType) -> Self {
        Self::Vec(Box::new(inner))
    }

    pub fn optional(inner: ImplType) -> Self {
        Self::Option(Box::new(inner))
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    pub(crate) fn from_syn_type(ty: &syn::Type) -> Self {
        match ty {
            syn::Type::Group(group) => Self::from_syn_type(&group.elem),
            syn::Type::Paren(paren) => Self::from_syn_type(&paren.elem),
            syn::Type::Path(type_path) if type_path.qself.is_none() => {
                if let Some(last_segment) = type_path.path.segments.last()
                    && let syn::PathArguments::AngleBracketed(generics) = &last_segment.arguments
                    && generics.args.len() == 1
                    && let Some(syn::GenericArgument::Type(inner)) = generics.args.first() {
                    match last_segment.ident.to_string().as_str() {
                        "Option" => return Self::optional(Self::from_syn_type(inner)),
                        "Vec" => return Self::list(Self::from_syn_type(inner)),
                        _ => (),
                    }
                }
                Self::Path(render_tokens(ty))
            },
            other => Self::Path(render_tokens(other)),
        }
    }
}
impl std::fmt::Display for ImplType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Option(inner) => write!(f, "Option<{inner}>"),
            Self::Path(path) => f.write_str(path),
            Self::Vec(inner) => write!(f, "Vec<{inner}>"),
        }
    }
}

/// One parameter of an existing implementation method.
#[derive(Clone, Debug, PartialEq)]
pub struct ImplParameter {
    pub(crate) impl_type: ImplType,
    pub(crate) name: String,
}
impl ImplParameter {
    pub fn new(name: impl Into<String>, impl_type: ImplType) -> Self {
        Self {
            impl_type,
            name: name.into(),
        }
    }

    pub fn impl_type(&self) -> &ImplType {
        &self.impl_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// `TokenStream`'s `Display` separates every token with a space
/// (`std :: string :: String`). Re-join tokens so only the spaces Rust needs
/// (between two word-like tokens, and after commas) remain.
fn render_tokens(ty: &syn::Type) -> String {
    let rendered = ty.to_token_stream().to_string();
    let mut out = String::with_capacity(rendered.len());
    let mut prev: Option<&str> = None;
    for token in rendered.split_whitespace() {
        if let Some(prev) = prev {
            let word_boundary = prev.ends_with(|c: char| c.is_alphanumeric() || c == '_')
                && token.starts_with(|c: char| c.is_alphanumeric() || c == '_' || c == '\'');
            if word_boundary || prev == "," {
                out.push(' ');
            }
        }
        out.push_str(token);
        prev = Some(token);
    }
    out
}
