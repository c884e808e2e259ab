use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("at JSON path {json_path} → {message}")]
    Parse { json_path: String, message: String },
}
