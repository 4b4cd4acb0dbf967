use crate::binding::ImplParameter;
use crate::binding::ImplType;
use crate::binding::RustSourceSignatureProvider;
use crate::binding::SignatureProviderError;
use crate::binding::StaticSignatureProvider;
use crate::binding::naming;

const RESOLVERS: &str = r#"
    pub struct Context;
    pub struct QueryRoot;

    impl QueryRoot {
        pub async fn user(&self, ctx: &Context, name: String, id: Option<String>) -> User {
            todo!()
        }

        pub fn r#type(&self, r#type: i32) -> bool {
            true
        }

        fn no_args(&self) -> i32 {
            0
        }
    }

    mod models {
        impl super::Todo {
            pub fn done(&self, at: chrono::DateTime<chrono::Utc>, tags: Vec<String>) -> bool {
                false
            }
        }
    }
"#;

#[test]
fn methods_are_read_from_impl_blocks() {
    let provider = RustSourceSignatureProvider::new()
        .load_str(None, RESOLVERS)
        .expect("source parses");

    assert_eq!(
        provider.method_parameters("crate::resolvers::QueryRoot", "user"),
        Some(vec![
            ImplParameter::new("name", ImplType::path("String")),
            ImplParameter::new("id", ImplType::optional(ImplType::path("String"))),
        ]),
    );
    assert_eq!(provider.method_parameters("QueryRoot", "no_args"), Some(vec![]));
}

#[test]
fn raw_identifiers_are_unescaped() {
    let provider = RustSourceSignatureProvider::new()
        .load_str(None, RESOLVERS)
        .expect("source parses");

    assert_eq!(
        provider.method_parameters("QueryRoot", naming::method_name("type").as_str()),
        Some(vec![ImplParameter::new("type", ImplType::path("i32"))]),
    );
}

#[test]
fn nested_module_impls_are_found() {
    let provider = RustSourceSignatureProvider::new()
        .load_str(None, RESOLVERS)
        .expect("source parses");

    assert_eq!(
        provider.method_parameters("models::Todo", "done"),
        Some(vec![
            ImplParameter::new("at", ImplType::path("chrono::DateTime<chrono::Utc>")),
            ImplParameter::new("tags", ImplType::list(ImplType::path("String"))),
        ]),
    );
}

#[test]
fn missing_methods_are_none() {
    let provider = RustSourceSignatureProvider::new()
        .load_str(None, RESOLVERS)
        .expect("source parses");

    assert_eq!(provider.method_parameters("QueryRoot", "nope"), None);
    assert_eq!(provider.method_parameters("Nope", "user"), None);
}

#[test]
fn unparseable_source_is_an_error() {
    let err = RustSourceSignatureProvider::new()
        .load_str(None, "impl {")
        .expect_err("not valid Rust");

    assert!(matches!(err, SignatureProviderError::ParseError { file: None, .. }));
}

#[test]
fn missing_source_file_is_an_error() {
    let err = RustSourceSignatureProvider::from_files(&["/definitely/not/here.rs"])
        .expect_err("file does not exist");

    assert!(matches!(err, SignatureProviderError::SourceFileReadError(_)));
}

#[test]
fn static_provider_keys_on_the_last_path_segment() {
    let provider = StaticSignatureProvider::new().with_method("Todo", "done", vec![
        ImplParameter::new("at", ImplType::path("i64")),
    ]);

    assert_eq!(
        provider.method_parameters("crate::models::Todo", "done")
            .map(|params| params.len()),
        Some(1),
    );
    assert_eq!(provider.method_parameters("Todo", "undone"), None);
}

#[test]
fn later_definition_of_a_method_replaces_earlier_one() {
    let provider = RustSourceSignatureProvider::new()
        .load_str(None, "
            mod a { impl Todo { fn done(&self, at: i64) -> bool { true } } }
            mod b { impl Todo { fn done(&self) -> bool { false } } }
        ")
        .expect("source parses");

    assert_eq!(provider.method_parameters("b::Todo", "done"), Some(vec![]));
    assert_eq!(provider.method_parameters("a::Todo", "done"), Some(vec![]));
}
