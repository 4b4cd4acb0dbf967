use anyhow::Context;
use libgqlbind::binding::ModelTypeResolver;
use libgqlbind::binding::ObjectGraph;
use libgqlbind::binding::ObjectGraphBuilder;
use libgqlbind::binding::RustSourceSignatureProvider;
use libgqlbind::binding::SchemaDirectiveBinder;
use libgqlbind::config::BindConfig;
use libgqlbind::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The arguments every command that binds a schema shares.
#[derive(Debug, clap::Args)]
pub(crate) struct BindingInputs {
    #[arg(
        help="Path to a gqlbind.toml config file. Schema paths and Rust \
             sources listed in it are loaded in addition to FILE_OR_DIR_PATHS.",
        long,
        short='c',
    )]
    config: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug)]
pub(crate) struct BoundSchema {
    pub graph: ObjectGraph,
    pub num_schema_files: usize,
    pub num_source_files: usize,
    pub num_schema_types: usize,
}

impl BindingInputs {
    pub(crate) fn bind(&self) -> anyhow::Result<BoundSchema> {
        let config = match &self.config {
            Some(config_path) => BindConfig::from_file(config_path)
                .with_context(|| format!("loading config {config_path:#?}"))?,
            None => BindConfig::default(),
        };

        let mut schema_roots = config.schema.to_owned();
        schema_roots.extend(self.file_or_dir_paths.iter().cloned());
        if schema_roots.is_empty() {
            anyhow::bail!("no schema paths were given on the command line or in a config file");
        }

        let graphql_file_exts = normalize_exts(self.graphql_file_exts.iter().map(String::as_str));
        let schema_files = collect_files(&schema_roots, &graphql_file_exts)?;
        log::debug!("Found {} GraphQL files to bind.", schema_files.len());
        let schema = SchemaBuilder::from_files(&schema_files)
            .and_then(|builder| builder.build())
            .context("building the schema")?;

        let source_files = collect_files(&config.sources, &normalize_exts(["rs"]))?;
        log::debug!("Found {} Rust source files to read signatures from.", source_files.len());
        let signature_provider = RustSourceSignatureProvider::from_files(&source_files)
            .context("reading Rust sources")?;

        let resolver = ModelTypeResolver::with_models(&schema, config.models.to_owned());
        let directive_binder = SchemaDirectiveBinder::new(&schema);
        let mut graph_builder = ObjectGraphBuilder::new(&schema, &resolver, &directive_binder)
            .binding_mode(config.binding_mode())
            .signature_provider(&signature_provider);
        for (type_name, rust_path) in &config.models {
            graph_builder = graph_builder.bind_model(type_name, rust_path);
        }
        let graph = graph_builder.build()?;

        Ok(BoundSchema {
            graph,
            num_schema_files: schema_files.len(),
            num_source_files: source_files.len(),
            num_schema_types: schema.defined_types().len(),
        })
    }
}

fn normalize_exts<'a>(exts: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    exts.into_iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

/// Finds every file at or under each of `roots` with one of `exts`. A root
/// that is itself a file is always included, whatever its extension.
pub(super) fn collect_files(roots: &[PathBuf], exts: &HashSet<String>) -> anyhow::Result<Vec<PathBuf>> {
    let mut file_paths = vec![];
    for root in roots {
        if root.is_file() {
            file_paths.push(canonicalize(root)?);
            continue;
        }

        for entry in WalkDir::new(root.as_path()).follow_links(true) {
            let entry = entry.with_context(|| format!("scanning {root:#?}"))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                && exts.contains(&*ext) {
                log::trace!("Found file at {path:#?}.");
                file_paths.push(canonicalize(path)?);
            }
        }
    }
    Ok(file_paths)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path).with_context(|| format!("resolving {path:#?}"))
}
