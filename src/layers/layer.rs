use crate::tensor::Tensor;

/// Common interface for embedding layers.
///
/// Mirrors the host-framework lifecycle: `build` receives the input shape
/// and allocates any weights, `forward` computes the output.  Layers that
/// own no shape-dependent state keep the default no-op `build`.
pub trait Layer {
    /// Allocate shape-dependent parameters.  Called automatically on the
    /// first `forward` if not invoked explicitly; a repeated call with the
    /// same input shape is a no-op.
    fn build(&mut self, _input_shape: &[usize]) {}

    /// Forward pass.  Takes `&mut self` because building is lazy and
    /// dropout consumes RNG state.
    fn forward(&mut self, x: &Tensor) -> Tensor;
}
