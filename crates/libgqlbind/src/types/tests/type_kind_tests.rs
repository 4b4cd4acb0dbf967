use crate::types::TypeKind;

#[test]
fn only_scalars_enums_and_input_objects_are_input_kinds() {
    assert!(TypeKind::Scalar.is_input_kind());
    assert!(TypeKind::Enum.is_input_kind());
    assert!(TypeKind::InputObject.is_input_kind());
    assert!(!TypeKind::Object.is_input_kind());
    assert!(!TypeKind::Interface.is_input_kind());
    assert!(!TypeKind::Union.is_input_kind());
}

#[test]
fn kinds_display_as_introspection_names() {
    assert_eq!(TypeKind::InputObject.to_string(), "INPUT_OBJECT");
    assert_eq!(TypeKind::Union.to_string(), "UNION");
    assert_eq!(TypeKind::Object.to_string(), "OBJECT");
}
