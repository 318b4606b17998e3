use crate::math::Matrix;

/// N-dimensional tensor backed by a flat `Vec<f32>`.
///
/// The embedding layers in this crate work on rank-3 data laid out as
/// `(batch, time, feature)`; the rank-3 helpers below assert that layout.
/// Weight tables and per-step slices use the 2-D [`Matrix`] type, so
/// conversion helpers are provided in both directions.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    /// Tensor elements in row-major order.
    pub data: Vec<f32>,
    /// Sizes for each dimension.
    pub shape: Vec<usize>,
}

impl Tensor {
    /// Create a new tensor from raw parts.  The number of elements in `data`
    /// must match the product of the requested `shape`.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Self {
        assert_eq!(data.len(), shape.iter().product::<usize>());
        Tensor { data, shape }
    }

    /// Create a tensor of zeros with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let len: usize = shape.iter().product();
        Tensor {
            data: vec![0.0; len],
            shape,
        }
    }

    /// Take ownership of a [`Matrix`], recording its two dimensional shape.
    pub fn from_matrix(m: Matrix) -> Self {
        Tensor {
            shape: vec![m.rows, m.cols],
            data: m.data,
        }
    }

    /// Compute the flat index for a multi-dimensional coordinate.
    fn offset(&self, idx: &[usize]) -> usize {
        assert_eq!(idx.len(), self.shape.len());
        let mut stride = 1;
        let mut off = 0usize;
        for (i, &dim) in self.shape.iter().rev().enumerate() {
            let id = idx[self.shape.len() - 1 - i];
            assert!(id < dim, "index out of bounds");
            off += id * stride;
            stride *= dim;
        }
        off
    }

    /// Basic immutable indexing.
    pub fn get(&self, idx: &[usize]) -> f32 {
        let off = self.offset(idx);
        self.data[off]
    }

    /// Mutable indexing support.
    pub fn set(&mut self, idx: &[usize], value: f32) {
        let off = self.offset(idx);
        self.data[off] = value;
    }

    /// Batch dimension of a rank-3 `(batch, time, feature)` tensor.
    pub fn batch(&self) -> usize {
        assert_eq!(self.shape.len(), 3, "expected (batch, time, feature)");
        self.shape[0]
    }

    /// Time dimension of a rank-3 `(batch, time, feature)` tensor.
    pub fn seq_len(&self) -> usize {
        assert_eq!(self.shape.len(), 3, "expected (batch, time, feature)");
        self.shape[1]
    }

    /// Feature dimension of a rank-3 `(batch, time, feature)` tensor.
    pub fn features(&self) -> usize {
        assert_eq!(self.shape.len(), 3, "expected (batch, time, feature)");
        self.shape[2]
    }

    /// Extract the `(time, feature)` matrix for batch element `b`.
    pub fn batch_matrix(&self, b: usize) -> Matrix {
        let (t, f) = (self.seq_len(), self.features());
        assert!(b < self.batch(), "batch index out of bounds");
        let start = b * t * f;
        Matrix::from_vec(t, f, self.data[start..start + t * f].to_vec())
    }

    /// Stack per-batch `(time, feature)` matrices back into a rank-3 tensor.
    /// All matrices must share the same shape.
    pub fn from_batches(batches: Vec<Matrix>) -> Tensor {
        assert!(!batches.is_empty());
        let rows = batches[0].rows;
        let cols = batches[0].cols;
        let mut data = Vec::with_capacity(batches.len() * rows * cols);
        for m in &batches {
            assert_eq!(m.rows, rows);
            assert_eq!(m.cols, cols);
            data.extend_from_slice(&m.data);
        }
        Tensor::new(data, vec![batches.len(), rows, cols])
    }

    /// Elementwise addition of two tensors with identical shapes.
    pub fn add(a: &Tensor, b: &Tensor) -> Tensor {
        assert_eq!(a.shape, b.shape);
        let mut v = vec![0.0; a.data.len()];
        for i in 0..v.len() {
            v[i] = a.data[i] + b.data[i];
        }
        Tensor::new(v, a.shape.clone())
    }
}
