use tsformer::layers::PositionalEncoding;
use tsformer::positional::sinusoid_table;
use tsformer::tensor::Tensor;

#[test]
fn position_zero_alternates_zero_one() {
    let table = sinusoid_table(8, 6);
    for i in 0..6 {
        let expected = if i % 2 == 0 { 0.0 } else { 1.0 };
        assert!((table.get(0, i) - expected).abs() < 1e-6);
    }
}

#[test]
fn table_matches_closed_form() {
    // angle(pos, i) = pos / 10000^((i - i % 2) / E), even -> sin, odd -> cos
    let table = sinusoid_table(5, 4);
    assert!((table.get(1, 0) - 1f32.sin()).abs() < 1e-6);
    assert!((table.get(1, 1) - 1f32.cos()).abs() < 1e-6);
    assert!((table.get(1, 2) - 0.01f32.sin()).abs() < 1e-6);
    assert!((table.get(1, 3) - 0.01f32.cos()).abs() < 1e-6);
    assert!((table.get(3, 0) - 3f32.sin()).abs() < 1e-6);
    assert!((table.get(3, 2) - 0.03f32.sin()).abs() < 1e-6);
    assert!((table.get(3, 3) - 0.03f32.cos()).abs() < 1e-6);
}

#[test]
fn table_is_deterministic() {
    assert_eq!(sinusoid_table(16, 8), sinusoid_table(16, 8));
}

#[test]
fn encoding_tiles_table_across_batch() {
    let x = Tensor::new(vec![1.0; 2 * 3 * 4], vec![2, 3, 4]);
    let layer = PositionalEncoding::new(10);
    let enc = layer.encode(&x, false);
    let table = sinusoid_table(10, 4);
    assert_eq!(enc.shape, vec![2, 3, 4]);
    for b in 0..2 {
        for t in 0..3 {
            for i in 0..4 {
                assert!((enc.get(&[b, t, i]) - table.get(t, i)).abs() < 1e-6);
            }
        }
    }
}

#[test]
fn masking_zeroes_padded_elements() {
    let mut x = Tensor::new(vec![1.0; 1 * 2 * 4], vec![1, 2, 4]);
    x.set(&[0, 1, 1], 0.0);
    let layer = PositionalEncoding::new(10);
    let enc = layer.encode(&x, true);
    // cos(1) is clearly non-zero, so a zero here can only come from the mask
    assert_eq!(enc.get(&[0, 1, 1]), 0.0);
    assert!((enc.get(&[0, 1, 3]) - 0.01f32.cos()).abs() < 1e-6);
}

#[test]
#[should_panic]
fn sequence_longer_than_max_len_panics() {
    let x = Tensor::zeros(vec![1, 6, 4]);
    let layer = PositionalEncoding::new(4);
    layer.encode(&x, false);
}
