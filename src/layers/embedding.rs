use super::layer::Layer;
use crate::config::TokenEmbeddingConfig;
use crate::math::Matrix;
use crate::rng::normal_matrix;
use crate::tensor::Tensor;

/// Value embedding: projects raw `(batch, time, feature)` inputs into the
/// latent space, giving `(batch, time, embed_size)`.
///
/// The weight matrix depends on the input feature size, which is only known
/// at call time, so it is allocated lazily by [`TokenEmbedding::build`] and
/// then owned by the layer for its whole lifetime.  Initialisation draws
/// from a zero-mean normal with stddev `embed_size^-0.5`.
pub struct TokenEmbedding {
    pub embed_size: usize,
    /// Weight matrix `(feature, embed_size)`; `None` until built.
    pub weights: Option<Matrix>,
}

impl TokenEmbedding {
    pub fn new(embed_size: usize) -> Self {
        Self {
            embed_size,
            weights: None,
        }
    }

    /// Restore a layer from its exported configuration.
    pub fn from_config(cfg: &TokenEmbeddingConfig) -> Self {
        Self::new(cfg.embed_size)
    }

    /// Export the hyperparameters for serialisation round-trips.
    pub fn config(&self) -> TokenEmbeddingConfig {
        TokenEmbeddingConfig {
            embed_size: self.embed_size,
        }
    }

    /// Contraction `bsf,fk->bsk`: each `(time, feature)` batch slice is
    /// multiplied with the weight matrix.
    pub fn project(&mut self, x: &Tensor) -> Tensor {
        self.build(&x.shape);
        if x.batch() == 0 {
            return Tensor::zeros(vec![0, x.seq_len(), self.embed_size]);
        }
        let w = self.weights.as_ref().unwrap();
        let mut outs = Vec::with_capacity(x.batch());
        for b in 0..x.batch() {
            outs.push(Matrix::matmul(&x.batch_matrix(b), w));
        }
        Tensor::from_batches(outs)
    }
}

impl Layer for TokenEmbedding {
    fn build(&mut self, input_shape: &[usize]) {
        let features = *input_shape.last().expect("input shape must be non-empty");
        match &self.weights {
            Some(w) => assert_eq!(w.rows, features, "feature size changed after build"),
            None => {
                let stddev = (self.embed_size as f32).powf(-0.5);
                self.weights = Some(normal_matrix(features, self.embed_size, stddev));
            }
        }
    }

    fn forward(&mut self, x: &Tensor) -> Tensor {
        self.project(x)
    }
}
