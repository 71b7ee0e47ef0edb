use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("No TIFF files found in {0}")]
    NoTiffFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] slide_inventory_common::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
