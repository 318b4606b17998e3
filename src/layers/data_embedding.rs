use super::dropout::Dropout;
use super::embedding::TokenEmbedding;
use super::layer::Layer;
use super::positional::PositionalEncoding;
use crate::config::DataEmbeddingConfig;
use crate::tensor::Tensor;

const DEFAULT_MAX_LEN: usize = 5000;
const DEFAULT_DROPOUT: f32 = 0.1;

/// Composite embedding: value projection plus positional signal, followed
/// by dropout regularisation.
///
/// `forward_train(x, true)` computes `dropout(ve + pe)` where
/// `ve = token(x)` and `pe = positional(ve)`; the positional signal is
/// masked on the projected values, so latent channels that project to
/// exactly zero stay zero.
pub struct DataEmbedding {
    pub token: TokenEmbedding,
    pub positional: PositionalEncoding,
    pub dropout_rate: f32,
    dropout: Dropout,
}

impl DataEmbedding {
    /// Create a new composite embedding.  `max_len` defaults to 5000 and
    /// `dropout` to 0.1 when `None`.
    pub fn new(embed_size: usize, max_len: Option<usize>, dropout: Option<f32>) -> Self {
        Self {
            token: TokenEmbedding::new(embed_size),
            positional: PositionalEncoding::new(max_len.unwrap_or(DEFAULT_MAX_LEN)),
            dropout_rate: dropout.unwrap_or(DEFAULT_DROPOUT),
            dropout: Dropout::new(),
        }
    }

    pub fn from_config(cfg: &DataEmbeddingConfig) -> Self {
        Self::new(cfg.embed_size, Some(cfg.max_len), Some(cfg.dropout))
    }

    pub fn config(&self) -> DataEmbeddingConfig {
        DataEmbeddingConfig {
            embed_size: self.token.embed_size,
            max_len: self.positional.max_len,
            dropout: self.dropout_rate,
        }
    }

    /// Forward pass with an explicit training flag controlling dropout.
    pub fn forward_train(&mut self, x: &Tensor, train: bool) -> Tensor {
        let ve = self.token.forward(x);
        let pe = self.positional.encode(&ve, true);
        self.dropout
            .forward(&Tensor::add(&ve, &pe), self.dropout_rate, train)
    }
}

impl Layer for DataEmbedding {
    fn build(&mut self, input_shape: &[usize]) {
        self.token.build(input_shape);
    }

    /// Inference forward; dropout is inactive.
    fn forward(&mut self, x: &Tensor) -> Tensor {
        self.forward_train(x, false)
    }
}
