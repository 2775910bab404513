use thiserror::Error;

#[derive(Error, Debug)]
pub enum KochbuchError {
    #[error("Konfigurationsfehler: {0}")]
    Config(String),

    #[error("Datei nicht gefunden: {0}")]
    FileNotFound(String),

    #[error("Ordner nicht gefunden: {0}")]
    FolderNotFound(String),

    #[error("JSON-Fehler: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] kochbuch_common::Error),
}

pub type Result<T> = std::result::Result<T, KochbuchError>;
