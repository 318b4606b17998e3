use super::layer::Layer;
use crate::config::TokenRnnEmbeddingConfig;
use crate::math::Matrix;
use crate::rng::normal_matrix;
use crate::tensor::Tensor;

fn sigmoid_inplace(m: &mut Matrix) {
    for v in m.data.iter_mut() {
        *v = 1.0 / (1.0 + (-*v).exp());
    }
}

fn tanh_inplace(m: &mut Matrix) {
    for v in m.data.iter_mut() {
        *v = v.tanh();
    }
}

fn elem_mul(a: &Matrix, b: &Matrix) -> Matrix {
    let mut v = vec![0.0; a.data.len()];
    for i in 0..v.len() {
        v[i] = a.data[i] * b.data[i];
    }
    Matrix::from_vec(a.rows, a.cols, v)
}

fn elem_sub_from_one(a: &Matrix) -> Matrix {
    let mut v = vec![0.0; a.data.len()];
    for i in 0..v.len() {
        v[i] = 1.0 - a.data[i];
    }
    Matrix::from_vec(a.rows, a.cols, v)
}

/// Gate weights for a single GRU step.
///
/// `w_i*` map the input `(feature, hidden)`, `w_h*` map the previous hidden
/// state `(hidden, hidden)`.
pub struct GruCell {
    pub w_ir: Matrix,
    pub w_iz: Matrix,
    pub w_in: Matrix,
    pub w_hr: Matrix,
    pub w_hz: Matrix,
    pub w_hn: Matrix,
}

impl GruCell {
    pub fn new(input_dim: usize, hidden_dim: usize) -> Self {
        let stddev = (hidden_dim as f32).powf(-0.5);
        Self {
            w_ir: normal_matrix(input_dim, hidden_dim, stddev),
            w_iz: normal_matrix(input_dim, hidden_dim, stddev),
            w_in: normal_matrix(input_dim, hidden_dim, stddev),
            w_hr: normal_matrix(hidden_dim, hidden_dim, stddev),
            w_hz: normal_matrix(hidden_dim, hidden_dim, stddev),
            w_hn: normal_matrix(hidden_dim, hidden_dim, stddev),
        }
    }

    /// One GRU step for a `(1, feature)` input row and `(1, hidden)` state.
    fn step(&self, x_t: &Matrix, h_prev: &Matrix) -> Matrix {
        let mut r =
            Matrix::matmul(x_t, &self.w_ir).add(&Matrix::matmul(h_prev, &self.w_hr));
        sigmoid_inplace(&mut r);
        let mut z =
            Matrix::matmul(x_t, &self.w_iz).add(&Matrix::matmul(h_prev, &self.w_hz));
        sigmoid_inplace(&mut z);
        let rh = elem_mul(&r, h_prev);
        let mut n = Matrix::matmul(x_t, &self.w_in).add(&Matrix::matmul(&rh, &self.w_hn));
        tanh_inplace(&mut n);
        let one_minus_z = elem_sub_from_one(&z);
        elem_mul(&z, h_prev).add(&elem_mul(&one_minus_z, &n))
    }
}

/// Recurrent value embedding: a single-layer GRU run over the time axis.
///
/// Unlike [`super::TokenEmbedding`] the mapping into the latent space is
/// learned with sequence context; the layer returns the full hidden-state
/// sequence, so output shape is `(batch, time, embed_size)`.
pub struct TokenRnnEmbedding {
    pub embed_size: usize,
    /// GRU weights; `None` until built against an input feature size.
    pub cell: Option<GruCell>,
}

impl TokenRnnEmbedding {
    pub fn new(embed_size: usize) -> Self {
        Self {
            embed_size,
            cell: None,
        }
    }

    pub fn from_config(cfg: &TokenRnnEmbeddingConfig) -> Self {
        Self::new(cfg.embed_size)
    }

    pub fn config(&self) -> TokenRnnEmbeddingConfig {
        TokenRnnEmbeddingConfig {
            embed_size: self.embed_size,
        }
    }
}

impl Layer for TokenRnnEmbedding {
    fn build(&mut self, input_shape: &[usize]) {
        let features = *input_shape.last().expect("input shape must be non-empty");
        match &self.cell {
            Some(cell) => assert_eq!(cell.w_ir.rows, features, "feature size changed after build"),
            None => self.cell = Some(GruCell::new(features, self.embed_size)),
        }
    }

    fn forward(&mut self, x: &Tensor) -> Tensor {
        self.build(&x.shape);
        if x.batch() == 0 {
            return Tensor::zeros(vec![0, x.seq_len(), self.embed_size]);
        }
        let cell = self.cell.as_ref().unwrap();
        let (seq_len, features) = (x.seq_len(), x.features());
        let mut outs = Vec::with_capacity(x.batch());
        for b in 0..x.batch() {
            let seq = x.batch_matrix(b);
            let mut h_prev = Matrix::zeros(1, self.embed_size);
            let mut hidden = Matrix::zeros(seq_len, self.embed_size);
            for t in 0..seq_len {
                let x_t = Matrix::from_vec(
                    1,
                    features,
                    seq.data[t * features..(t + 1) * features].to_vec(),
                );
                let h_t = cell.step(&x_t, &h_prev);
                for j in 0..self.embed_size {
                    hidden.set(t, j, h_t.get(0, j));
                }
                h_prev = h_t;
            }
            outs.push(hidden);
        }
        Tensor::from_batches(outs)
    }
}
