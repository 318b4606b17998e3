use super::layer::Layer;
use crate::config::PositionalEncodingConfig;
use crate::positional::sinusoid_table;
use crate::tensor::Tensor;

/// Fixed sinusoidal positional encoding.
///
/// The layer holds no weights: it derives the `(max_len, embed)` table from
/// the closed-form formula on every invocation and emits rows `0..seq_len`
/// tiled across the batch.  The channel count is taken from the input, so
/// the same layer instance serves any embedding width.
pub struct PositionalEncoding {
    pub max_len: usize,
}

/// The upstream model exposes the sinusoidal layer under both names; they
/// are the same computation.
pub type PositionalEmbedding = PositionalEncoding;

impl PositionalEncoding {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn from_config(cfg: &PositionalEncodingConfig) -> Self {
        Self::new(cfg.max_len)
    }

    pub fn config(&self) -> PositionalEncodingConfig {
        PositionalEncodingConfig {
            max_len: self.max_len,
        }
    }

    /// Positional signal for `x`, shaped like `x`.
    ///
    /// With `masking` set, output elements are zeroed wherever the
    /// corresponding input element is exactly zero; zeros mark padding, so
    /// padded slots must not receive a position signal.
    pub fn encode(&self, x: &Tensor, masking: bool) -> Tensor {
        let (batch, seq_len, embed) = (x.batch(), x.seq_len(), x.features());
        assert!(
            seq_len <= self.max_len,
            "sequence length {} exceeds max_len {}",
            seq_len,
            self.max_len
        );
        let table = sinusoid_table(self.max_len, embed);
        let mut out = Tensor::zeros(x.shape.clone());
        for b in 0..batch {
            for t in 0..seq_len {
                for i in 0..embed {
                    if masking && x.get(&[b, t, i]) == 0.0 {
                        continue;
                    }
                    out.set(&[b, t, i], table.get(t, i));
                }
            }
        }
        out
    }
}

impl Default for PositionalEncoding {
    fn default() -> Self {
        Self::new(5000)
    }
}

impl Layer for PositionalEncoding {
    fn forward(&mut self, x: &Tensor) -> Tensor {
        self.encode(x, true)
    }
}
