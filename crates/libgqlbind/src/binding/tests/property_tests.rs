use crate::binding::ArgumentBindError;
use crate::binding::FieldBinding;
use crate::binding::ImplParameter;
use crate::binding::ImplType;
use crate::binding::SignatureBindingMode;
use crate::binding::bind_to_implementation_signature;
use crate::binding::tests::test_utils;
use crate::types::TypeKind;
use proptest::prelude::*;

const ARG_NAMES: [&str; 5] = ["alpha", "beta", "gamma", "delta", "epsilon"];

fn kind_type_name(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Enum => "E",
        TypeKind::InputObject => "I",
        TypeKind::Interface => "F",
        TypeKind::Object => "O",
        TypeKind::Scalar => "S",
        TypeKind::Union => "U",
    }
}

fn greek_field() -> FieldBinding {
    let schema = test_utils::build_schema(
        format!(
            "type Query {{ f({}): Boolean }}",
            ARG_NAMES.iter()
                .map(|name| format!("{name}: String"))
                .collect::<Vec<_>>()
                .join(", "),
        ).as_str(),
    );
    FieldBinding {
        args: test_utils::build_field_args(&schema, "Query", "f").expect("args build"),
        bound_method: None,
        id: test_utils::placeholder_field_id(),
        name: "f".to_string(),
        object_name: "Query".to_string(),
    }
}

fn params_for(names: &[&str]) -> Vec<ImplParameter> {
    names.iter().enumerate()
        .map(|(idx, name)| ImplParameter::new(*name, ImplType::path(format!("Custom{idx}"))))
        .collect()
}

proptest! {
    #[test]
    fn only_input_kinds_are_accepted_as_arguments(
        kind in prop::sample::select(vec![
            TypeKind::Enum,
            TypeKind::InputObject,
            TypeKind::Interface,
            TypeKind::Object,
            TypeKind::Scalar,
            TypeKind::Union,
        ]),
        list_depth in 0usize..3,
        non_null in any::<bool>(),
    ) {
        let mut type_string = kind_type_name(kind).to_string();
        for _ in 0..list_depth {
            type_string = format!("[{type_string}]");
        }
        if non_null {
            type_string.push('!');
        }
        let schema = test_utils::build_schema(format!("
            type Query {{ f(a: {type_string}): Boolean }}
            scalar S
            enum E {{ A }}
            input I {{ x: Int }}
            type O {{ x: Int }}
            interface F {{ x: Int }}
            union U = O
        ").as_str());

        let result = test_utils::build_field_args(&schema, "Query", "f");

        if kind.is_input_kind() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result.expect_err("not an input kind"),
                ArgumentBindError::InvalidInputType {
                    argument_name: "a".to_string(),
                    type_name: kind_type_name(kind).to_string(),
                    type_string,
                    kind,
                },
            );
        }
    }

    #[test]
    fn rebinding_follows_parameter_order(
        shuffled in Just(ARG_NAMES.to_vec()).prop_shuffle(),
        take in 0usize..=ARG_NAMES.len(),
    ) {
        let mut field = greek_field();
        let params = params_for(&shuffled[..take]);

        bind_to_implementation_signature(&mut field, &params, SignatureBindingMode::Lenient)
            .expect("signature binds");

        prop_assert_eq!(field.args().len(), params.len());
        for (arg, param) in field.args().iter().zip(&params) {
            prop_assert_eq!(arg.name(), param.name());
            prop_assert_eq!(arg.type_ref().impl_type(), param.impl_type());
        }
    }

    #[test]
    fn failed_rebinding_leaves_arguments_unmodified(
        shuffled in Just(ARG_NAMES.to_vec()).prop_shuffle(),
        bogus_at in 0usize..=ARG_NAMES.len(),
        strict in any::<bool>(),
    ) {
        let mut field = greek_field();
        let before = field.clone();
        let mut names = shuffled;
        names.insert(bogus_at, "zeta");
        let mode = if strict {
            SignatureBindingMode::Strict
        } else {
            SignatureBindingMode::Lenient
        };

        let err = bind_to_implementation_signature(&mut field, &params_for(&names), mode)
            .expect_err("zeta is not a schema argument");

        prop_assert_eq!(err, ArgumentBindError::UnboundParameter {
            parameter_name: "zeta".to_string(),
        });
        prop_assert_eq!(field, before);
    }
}
