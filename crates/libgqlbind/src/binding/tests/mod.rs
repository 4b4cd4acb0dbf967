mod argument_sets_tests;
mod directive_binder_tests;
mod impl_type_tests;
mod naming_tests;
mod property_tests;
mod signature_matcher_tests;
mod signature_provider_tests;
pub(crate) mod test_utils;
mod type_resolver_tests;
