use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValueDef;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValueDef;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootOperationKind {
    Query,
    Mutation,
    Subscription,
}

#[derive(Clone, Debug, PartialEq)]
struct NamedTypeDefLocation {
    def_location: loc::SourceLocation,
    type_name: String,
}

/// Utility for building a [`Schema`] from one or more GraphQL SDL sources.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            self.merge_type_extension(file_path.as_deref(), ext)?;
        }

        let query_type = match self.query_type.take() {
            Some(def) => self.root_operation_type(RootOperationKind::Query, def)?,
            None => match self.types.get("Query") {
                Some(GraphQLType::Object(_)) => "Query".to_string(),
                _ => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
            },
        };
        let mutation_type = self.optional_root_operation_type(
            RootOperationKind::Mutation,
            "Mutation",
        )?;
        let subscription_type = self.optional_root_operation_type(
            RootOperationKind::Subscription,
            "Subscription",
        )?;

        log::debug!(
            "Built schema with {} types and {} directives.",
            self.types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn from_files(file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        let mut builder = Self::new();
        for file_path in file_paths {
            builder = builder.load_file(file_path)?;
        }
        Ok(builder)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| SchemaBuildError::SchemaFileReadError(Box::new(err)))?;
        self.load_str(Some(file_path), content.as_str())
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        log::trace!(
            "Visiting {} schema definitions from {file_path:?}.",
            ast_doc.definitions.len(),
        );
        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }
        Ok(self)
    }

    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for name in BUILTIN_SCALAR_NAMES {
            types.insert(name.to_string(), GraphQLType::Scalar(Box::new(ScalarType {
                def_location: loc::SourceLocation::GraphQLBuiltIn,
                description: None,
                directives: vec![],
                name: name.to_string(),
            })));
        }

        let directive_defs = builtin_directive_defs()
            .into_iter()
            .map(|def| (def.name.to_string(), def))
            .collect();

        Self {
            directive_defs,
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            subscription_type: None,
            types,
        }
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_string(), ext.position),
        };
        let ext_srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &position,
        );
        let Some(existing_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_location: ext_srcloc,
            });
        };

        log::trace!("Merging type extension of `{type_name}`.");
        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                enum_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                for value in &ext.values {
                    insert_enum_value(enum_type, &ext_srcloc, value)?;
                }
            },

            (GraphQLType::InputObject(input_type), TypeExtension::InputObject(ext)) => {
                input_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                for input_field in &ext.fields {
                    insert_input_field(input_type, &ext_srcloc, input_field)?;
                }
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                merge_fielded_type_extension(
                    &mut iface_type.0,
                    &ext_srcloc,
                    &ext.directives,
                    &ext.fields,
                    &[],
                )?;
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                merge_fielded_type_extension(
                    &mut obj_type.0,
                    &ext_srcloc,
                    &ext.directives,
                    &ext.fields,
                    &ext.implements_interfaces,
                )?;
            },

            (GraphQLType::Scalar(scalar_type), TypeExtension::Scalar(ext)) => {
                scalar_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
            },

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                union_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                union_type.members.extend(ext.types.iter().cloned());
            },

            (existing_type, _) => return Err(SchemaBuildError::InvalidExtensionType {
                type_kind: existing_type.kind(),
                type_name,
                extension_location: ext_srcloc,
            }),
        }

        Ok(())
    }

    fn optional_root_operation_type(
        &mut self,
        operation: RootOperationKind,
        default_type_name: &str,
    ) -> Result<Option<String>> {
        match self.taken_root_operation_def(operation) {
            Some(def) => self.root_operation_type(operation, def).map(Some),
            None => Ok(match self.types.get(default_type_name) {
                Some(GraphQLType::Object(_)) => Some(default_type_name.to_string()),
                _ => None,
            }),
        }
    }

    fn root_operation_type(
        &self,
        operation: RootOperationKind,
        def: NamedTypeDefLocation,
    ) -> Result<String> {
        match self.types.get(def.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(def.type_name),
            _ => Err(SchemaBuildError::UndefinedRootOperationType {
                operation,
                type_name: def.type_name,
            }),
        }
    }

    fn taken_root_operation_def(
        &mut self,
        operation: RootOperationKind,
    ) -> Option<NamedTypeDefLocation> {
        match operation {
            RootOperationKind::Query => self.query_type.take(),
            RootOperationKind::Mutation => self.mutation_type.take(),
            RootOperationKind::Subscription => self.subscription_type.take(),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                // Extensions may precede the definition they extend, so they
                // are merged once every definition has been visited.
                self.pending_extensions.push(
                    (file_path.map(|p| p.to_path_buf()), type_ext),
                );
                Ok(())
            },
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );

        if let Some(existing_def) = self.directive_defs.get(def.name.as_str()) {
            if existing_def.is_builtin() {
                return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                    directive_name: def.name,
                    location: def_location,
                });
            }
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
                location1: existing_def.def_location.to_owned(),
                location2: def_location,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location,
                directive_name: def.name,
            });
        }

        let parameters = parameters_from_ast(
            &def_location,
            format!("@{}", def.name).as_str(),
            &def.arguments,
        )?;
        self.directive_defs.insert(def.name.to_string(), DirectiveDefinition {
            description: def.description.to_owned(),
            locations: def.locations.iter()
                .map(|location| location.as_str().to_string())
                .collect(),
            name: def.name.to_string(),
            parameters,
            repeatable: def.repeatable,
            def_location,
        });
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &schema_def.position,
        );

        for (operation, type_name) in [
            (RootOperationKind::Query, schema_def.query),
            (RootOperationKind::Mutation, schema_def.mutation),
            (RootOperationKind::Subscription, schema_def.subscription),
        ] {
            let Some(type_name) = type_name else {
                continue
            };
            let slot = match operation {
                RootOperationKind::Query => &mut self.query_type,
                RootOperationKind::Mutation => &mut self.mutation_type,
                RootOperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_def) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_def.def_location.to_owned(),
                    location2: def_location,
                });
            }
            *slot = Some(NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                let mut enum_type = EnumType {
                    def_location: def_location.to_owned(),
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotation::from_ast(&def_location, &def.directives),
                    name: def.name.to_string(),
                    values: IndexMap::new(),
                };
                for value in &def.values {
                    insert_enum_value(&mut enum_type, &def_location, value)?;
                }
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Enum(Box::new(enum_type)),
                )
            },

            TypeDefinition::InputObject(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                let mut input_type = InputObjectType {
                    def_location: def_location.to_owned(),
                    description: def.description.to_owned(),
                    directives: DirectiveAnnotation::from_ast(&def_location, &def.directives),
                    fields: IndexMap::new(),
                    name: def.name.to_string(),
                };
                for input_field in &def.fields {
                    insert_input_field(&mut input_type, &def_location, input_field)?;
                }
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::InputObject(Box::new(input_type)),
                )
            },

            TypeDefinition::Interface(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                let mut data = empty_fielded_type_data(
                    &def_location,
                    def.name.as_str(),
                    def.description.to_owned(),
                );
                merge_fielded_type_extension(
                    &mut data,
                    &def_location,
                    &def.directives,
                    &def.fields,
                    &[],
                )?;
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Interface(Box::new(InterfaceType(data))),
                )
            },

            TypeDefinition::Object(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                let mut data = empty_fielded_type_data(
                    &def_location,
                    def.name.as_str(),
                    def.description.to_owned(),
                );
                merge_fielded_type_extension(
                    &mut data,
                    &def_location,
                    &def.directives,
                    &def.fields,
                    &def.implements_interfaces,
                )?;
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Object(Box::new(ObjectType(data))),
                )
            },

            TypeDefinition::Scalar(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Scalar(Box::new(ScalarType {
                        def_location: def_location.to_owned(),
                        description: def.description.to_owned(),
                        directives: DirectiveAnnotation::from_ast(&def_location, &def.directives),
                        name: def.name.to_string(),
                    })),
                )
            },

            TypeDefinition::Union(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Union(Box::new(UnionType {
                        def_location: def_location.to_owned(),
                        description: def.description.to_owned(),
                        directives: DirectiveAnnotation::from_ast(&def_location, &def.directives),
                        members: def.types.to_owned(),
                        name: def.name.to_string(),
                    })),
                )
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_directive_defs() -> Vec<DirectiveDefinition> {
    let builtin_param = |
        name: &str,
        type_name: &str,
        nullable: bool,
        default_value: Option<ast::operation::Value>,
    | (name.to_string(), InputValueDef {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        default_value,
        description: None,
        directives: vec![],
        name: name.to_string(),
        type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
            nullable,
            type_ref: NamedGraphQLTypeRef::new(
                type_name,
                loc::SourceLocation::GraphQLBuiltIn,
            ),
        }),
    });
    let builtin_def = |
        name: &str,
        parameters: Vec<(String, InputValueDef)>,
        locations: &[&str],
    | DirectiveDefinition {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        description: None,
        locations: locations.iter().map(|l| l.to_string()).collect(),
        name: name.to_string(),
        parameters: parameters.into_iter().collect(),
        repeatable: false,
    };

    vec![
        builtin_def(
            "skip",
            vec![builtin_param("if", "Boolean", false, None)],
            &["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
        ),
        builtin_def(
            "include",
            vec![builtin_param("if", "Boolean", false, None)],
            &["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
        ),
        builtin_def(
            "deprecated",
            vec![builtin_param(
                "reason",
                "String",
                true,
                Some(ast::operation::Value::String("No longer supported".to_string())),
            )],
            &[
                "FIELD_DEFINITION",
                "ARGUMENT_DEFINITION",
                "INPUT_FIELD_DEFINITION",
                "ENUM_VALUE",
            ],
        ),
        builtin_def(
            "specifiedBy",
            vec![builtin_param("url", "String", false, None)],
            &["SCALAR"],
        ),
    ]
}

fn empty_fielded_type_data(
    def_location: &loc::SourceLocation,
    type_name: &str,
    description: Option<String>,
) -> ObjectOrInterfaceTypeData {
    ObjectOrInterfaceTypeData {
        def_location: def_location.to_owned(),
        description,
        directives: vec![],
        fields: IndexMap::new(),
        interfaces: vec![],
        name: type_name.to_string(),
    }
}

fn insert_enum_value(
    enum_type: &mut EnumType,
    parent_location: &loc::SourceLocation,
    value: &ast::schema::EnumValue,
) -> Result<()> {
    let value_location = parent_location.with_ast_position(&value.position);
    if enum_type.values.contains_key(value.name.as_str()) {
        return Err(SchemaBuildError::DuplicateEnumValueDefinition {
            enum_name: enum_type.name.to_string(),
            value_name: value.name.to_string(),
            location: value_location,
        });
    }
    enum_type.values.insert(value.name.to_string(), EnumValueDef {
        description: value.description.to_owned(),
        directives: DirectiveAnnotation::from_ast(&value_location, &value.directives),
        name: value.name.to_string(),
        def_location: value_location,
    });
    Ok(())
}

fn insert_input_field(
    input_type: &mut InputObjectType,
    parent_location: &loc::SourceLocation,
    input_field: &ast::schema::InputValue,
) -> Result<()> {
    let input_field = InputValueDef::from_ast(parent_location, input_field);

    // https://spec.graphql.org/October2021/#sel-IAHhBXDDBDCAACCTx5b
    if input_field.name.starts_with("__") {
        return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
            def_location: input_field.def_location,
            field_name: input_field.name,
            type_name: input_type.name.to_string(),
        });
    }

    if input_type.fields.contains_key(input_field.name.as_str()) {
        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
            type_name: input_type.name.to_string(),
            field_name: input_field.name,
            location: input_field.def_location,
        });
    }

    input_type.fields.insert(input_field.name.to_string(), input_field);
    Ok(())
}

fn merge_fielded_type_extension(
    data: &mut ObjectOrInterfaceTypeData,
    def_location: &loc::SourceLocation,
    directives: &[ast::operation::Directive],
    fields: &[ast::schema::Field],
    interfaces: &[String],
) -> Result<()> {
    data.directives.append(&mut DirectiveAnnotation::from_ast(def_location, directives));
    data.interfaces.extend(interfaces.iter().cloned());

    for field in fields {
        let field_location = def_location.with_ast_position(&field.position);

        // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
        if field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: field_location,
                field_name: field.name.to_string(),
                type_name: data.name.to_string(),
            });
        }

        if data.fields.contains_key(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: data.name.to_string(),
                field_name: field.name.to_string(),
                location: field_location,
            });
        }

        let parameters = parameters_from_ast(
            &field_location,
            format!("{}.{}", data.name, field.name).as_str(),
            &field.arguments,
        )?;
        data.fields.insert(field.name.to_string(), Field {
            description: field.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(&field_location, &field.directives),
            name: field.name.to_string(),
            parameters,
            parent_type_name: data.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                // graphql_parser doesn't give us a location for the field's
                // type annotation itself.
                &field_location,
                &field.field_type,
            ),
            def_location: field_location,
        });
    }

    Ok(())
}

fn parameters_from_ast(
    owner_location: &loc::SourceLocation,
    owner_name: &str,
    params: &[ast::schema::InputValue],
) -> Result<IndexMap<String, InputValueDef>> {
    let mut param_map = IndexMap::new();
    for param in params {
        let param = InputValueDef::from_ast(owner_location, param);

        // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBBCAACCTlrG
        if param.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                def_location: param.def_location,
                owner_name: owner_name.to_string(),
                param_name: param.name,
            });
        }

        if param_map.contains_key(param.name.as_str()) {
            return Err(SchemaBuildError::DuplicateParameterDefinition {
                owner_name: owner_name.to_string(),
                param_name: param.name,
                location: param.def_location,
            });
        }

        param_map.insert(param.name.to_string(), param);
    }
    Ok(param_map)
}
