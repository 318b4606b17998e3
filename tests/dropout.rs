use tsformer::layers::Dropout;
use tsformer::tensor::Tensor;

#[test]
fn zero_rate_is_identity_in_training() {
    let x = Tensor::new((0..2 * 3 * 4).map(|v| v as f32 * 0.5).collect(), vec![2, 3, 4]);
    let mut dropout = Dropout::new();
    let y = dropout.forward(&x, 0.0, true);
    assert_eq!(y, x);
}

#[test]
fn inference_mode_is_identity() {
    let x = Tensor::new(vec![1.0, -2.0, 3.0, -4.0], vec![1, 2, 2]);
    let mut dropout = Dropout::new();
    let y = dropout.forward(&x, 0.9, false);
    assert_eq!(y, x);
}
