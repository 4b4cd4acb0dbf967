//! Identifiers the emitter uses for bound arguments and for the routines that
//! decode them.

use heck::ToSnakeCase;

// `self`, `Self`, `super` and `crate` can't be raw identifiers.
const NON_RAW_KEYWORDS: [&str; 4] = ["Self", "crate", "self", "super"];

const RUST_KEYWORDS: [&str; 48] = [
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "do", "dyn", "else", "enum", "extern", "false", "final", "fn",
    "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod",
    "move", "mut", "override", "priv", "pub", "ref", "return", "static",
    "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// The identifier generated code uses to hold an argument's value: the
/// snake_case form of the schema name, escaped if it collides with a Rust
/// keyword (`type` becomes `r#type`).
pub fn binding_name(schema_name: &str) -> String {
    escape_keyword(schema_name.to_snake_case())
}

/// The name of the implementation method a field resolves through.
pub fn method_name(field_name: &str) -> String {
    escape_keyword(field_name.to_snake_case())
}

pub fn field_args_accessor_key(object_name: &str, field_name: &str) -> String {
    format!(
        "field_{}_{}_args",
        object_name.to_snake_case(),
        field_name.to_snake_case(),
    )
}

pub fn directive_args_accessor_key(directive_name: &str) -> String {
    format!("dir_{}_args", directive_name.to_snake_case())
}

/// Strips a leading `r#` so raw and plain spellings compare equal.
pub(crate) fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

fn escape_keyword(ident: String) -> String {
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}
