use libgraphql_tag_operations::CodegenConfig;
use libgraphql_tag_operations::SourceResolver;
use libgraphql_tag_operations::file_reader;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every command which reads GraphQL documents.
#[derive(Debug, clap::Args)]
pub(crate) struct DocumentArgs {
    #[arg(
        help="Path to a JSON codegen config file. Command-line flags take \
             precedence over values in this file.",
        long,
        short='c',
    )]
    pub config: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL document files or directories \
             containing GraphQL document files. Each file is one document \
             source.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub file_or_dir_paths: Vec<PathBuf>,
}

impl DocumentArgs {
    pub fn load_config(&self) -> anyhow::Result<CodegenConfig> {
        match &self.config {
            Some(config_path) => {
                log::debug!("Loading codegen config from {config_path:#?}.");
                let content = file_reader::read_content(config_path)?;
                Ok(CodegenConfig::from_json_str(content)?)
            },
            None => Ok(CodegenConfig::default()),
        }
    }

    /// Find every document file at or under each path argument, sorted by
    /// path so that generated output does not depend on directory listing
    /// order. Paths which can't be walked are pushed onto `errors` and the
    /// scan carries on with the remaining paths.
    pub fn find_document_files(&self, errors: &mut Vec<String>) -> Vec<PathBuf> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        errors.push(format!("  * {e}"));
                        continue;
                    },
                };
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }

                if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                    && graphql_file_exts.contains(&*ext) {
                    log::trace!("Found document file at {path:#?}.");
                    match std::fs::canonicalize(path) {
                        Ok(file_path) => file_paths.push(file_path),
                        Err(e) => errors.push(format!("  * {}: {e}", path.display())),
                    }
                }
            }
        }

        // A single explicitly-named file is loaded even if its extension
        // isn't one of --graphql-file-exts.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            match std::fs::canonicalize(first_arg_path) {
                Ok(canonicalized_first_arg_path) => {
                    log::warn!(
                        "Proceeding to load {canonicalized_first_arg_path:#?} \
                        even though it doesn't match any of the \
                        --graphql-file-exts ({}).",
                        graphql_file_exts.iter()
                            .map(|ext| format!("`.{ext}`"))
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    file_paths.push(canonicalized_first_arg_path);
                },
                Err(e) => errors.push(
                    format!("  * {}: {e}", first_arg_path.display()),
                ),
            }
        }

        file_paths.sort();
        file_paths.dedup();
        log::debug!("Found {} GraphQL document files.", file_paths.len());
        file_paths
    }

    /// Resolve every discovered file into a document source. Every per-file
    /// failure is reported, not just the first.
    pub fn resolve_sources(
        &self,
        config: &CodegenConfig,
    ) -> anyhow::Result<SourceResolver> {
        let mut resolver = SourceResolver::with_namer(config.naming.clone());
        let mut errors = vec![];
        for file_path in self.find_document_files(&mut errors) {
            if let Err(e) = resolver.add_from_file(&file_path) {
                errors.push(format!("  * {e}"));
            }
        }

        if !errors.is_empty() {
            anyhow::bail!("{} document errors:\n{}", errors.len(), errors.join("\n"));
        }
        Ok(resolver)
    }
}
