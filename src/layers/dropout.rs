use crate::rng::rng_from_env;
use crate::tensor::Tensor;
use rand::Rng;

/// Dropout layer that randomly zeros elements during training.
///
/// Each element is kept with probability `1 - p`; kept values are scaled by
/// `1/(1 - p)` to preserve the expected activation ("inverted" dropout).
/// When `train` is `false` the input passes through unchanged.
pub struct Dropout {
    rng: rand::rngs::StdRng,
}

impl Dropout {
    pub fn new() -> Self {
        Self {
            rng: rng_from_env(),
        }
    }

    /// Forward pass for dropout.
    ///
    /// * `x` - Input tensor.
    /// * `p` - Dropout probability (fraction of units to drop).
    /// * `train` - Whether the network is in training mode.
    pub fn forward(&mut self, x: &Tensor, p: f32, train: bool) -> Tensor {
        if !train || p <= 0.0 {
            return x.clone();
        }
        let scale = if p < 1.0 { 1.0 / (1.0 - p) } else { 0.0 };
        let mut out = Tensor::zeros(x.shape.clone());
        for i in 0..x.data.len() {
            if self.rng.gen::<f32>() >= p {
                out.data[i] = x.data[i] * scale;
            }
        }
        out
    }
}

impl Default for Dropout {
    fn default() -> Self {
        Self::new()
    }
}
