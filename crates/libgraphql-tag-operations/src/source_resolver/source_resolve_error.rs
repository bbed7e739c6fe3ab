use crate::file_reader::ReadContentError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceResolveError {
    #[error("Failed to read GraphQL document source: {0}")]
    FileRead(#[from] ReadContentError),

    #[error("Failed to parse GraphQL document source{}: {err}", format_file_path(.file_path))]
    Parse {
        file_path: Option<PathBuf>,
        err: graphql_parser::query::ParseError,
    },
}

fn format_file_path(file_path: &Option<PathBuf>) -> String {
    match file_path {
        Some(path) => format!(" at {path:?}"),
        None => String::new(),
    }
}
