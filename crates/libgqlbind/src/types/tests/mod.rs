mod type_kind_tests;
