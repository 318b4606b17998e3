pub mod data_embedding;
pub mod dropout;
pub mod embedding;
pub mod layer;
pub mod positional;
pub mod rnn;

pub use data_embedding::DataEmbedding;
pub use dropout::Dropout;
pub use embedding::TokenEmbedding;
pub use layer::Layer;
pub use positional::{PositionalEmbedding, PositionalEncoding};
pub use rnn::{GruCell, TokenRnnEmbedding};
