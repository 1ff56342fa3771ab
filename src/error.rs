use thiserror::Error;

/// The system clipboard refused a write.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Handing generated output to a file or download failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser download failed: {0}")]
    Browser(String),
}

/// A static catalog table could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse {table} catalog: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} catalog is empty")]
    Empty(&'static str),
}

/// Any failure surfaced by the application shell.
#[derive(Debug, Error)]
pub enum ToolboxError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err = ToolboxError::from(CatalogError::Empty("button"));
        assert_eq!(err.to_string(), "button catalog is empty");
        let err = ToolboxError::from(ClipboardError::Unavailable("no display".into()));
        assert_eq!(err.to_string(), "Clipboard unavailable: no display");
    }
}
