use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fs, io};

/// Hyperparameters of [`crate::layers::TokenEmbedding`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEmbeddingConfig {
    pub embed_size: usize,
}

/// Hyperparameters of [`crate::layers::TokenRnnEmbedding`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRnnEmbeddingConfig {
    pub embed_size: usize,
}

/// Hyperparameters of [`crate::layers::PositionalEncoding`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionalEncodingConfig {
    pub max_len: usize,
}

/// Hyperparameters of [`crate::layers::DataEmbedding`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEmbeddingConfig {
    pub embed_size: usize,
    pub max_len: usize,
    pub dropout: f32,
}

/// Save a layer configuration to `path` as JSON.
pub fn save_config<T: Serialize>(path: &str, cfg: &T) -> Result<(), io::Error> {
    let txt = serde_json::to_string(cfg).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, txt)?;
    Ok(())
}

/// Load a layer configuration saved with [`save_config`].  TOML files are
/// accepted as well, selected by the `.toml` extension.
pub fn load_config<T: DeserializeOwned>(path: &str) -> Result<T, io::Error> {
    let txt = fs::read_to_string(path)?;
    if path.ends_with(".toml") {
        toml::from_str(&txt).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    } else {
        serde_json::from_str(&txt).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
