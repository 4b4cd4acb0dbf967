use crate::binding::ImplType;

fn from_source(ty: &str) -> ImplType {
    ImplType::from_syn_type(&syn::parse_str::<syn::Type>(ty).expect("type parses"))
}

#[test]
fn option_and_vec_stay_structured() {
    assert_eq!(
        from_source("Option<Vec<String>>"),
        ImplType::optional(ImplType::list(ImplType::path("String"))),
    );
    assert_eq!(
        from_source("std::option::Option<i32>"),
        ImplType::optional(ImplType::path("i32")),
    );
}

#[test]
fn other_types_render_compactly() {
    assert_eq!(from_source("std::string::String"), ImplType::path("std::string::String"));
    assert_eq!(
        from_source("HashMap<String, i32>"),
        ImplType::path("HashMap<String, i32>"),
    );
    assert_eq!(from_source("&'a str"), ImplType::path("&'a str"));
    assert_eq!(from_source("&mut Vec<u8>"), ImplType::path("&mut Vec<u8>"));
}

#[test]
fn display_matches_rust_syntax() {
    let ty = ImplType::optional(ImplType::list(ImplType::path("crate::Todo")));

    assert_eq!(ty.to_string(), "Option<Vec<crate::Todo>>");
    assert!(ty.is_optional());
}
