#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Failed to read z database: {0}")]
    StoreRead(#[source] std::io::Error),
    #[error("Invalid query pattern: {0}")]
    Query(#[from] regex::Error),
    #[error("Failed to stage z database rewrite: {0}")]
    StoreStage(#[source] std::io::Error),
    #[error("Failed to replace z database: {0}")]
    StorePersist(#[source] std::io::Error),
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[source] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
