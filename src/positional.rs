use crate::math::Matrix;

/// Generate the sinusoidal positional table as in Vaswani et al.
///
/// For position `pos` and channel `i` the angle is
/// `pos / 10000^((i - i % 2) / embed)`; even channels take the sine of the
/// angle, odd channels the cosine.  Position 0 therefore encodes as
/// `[0, 1, 0, 1, ...]`.
pub fn sinusoid_table(max_len: usize, embed: usize) -> Matrix {
    let mut enc = Matrix::zeros(max_len, embed);
    for pos in 0..max_len {
        for i in 0..embed {
            let angle = (pos as f32) / 10000f32.powf((i - i % 2) as f32 / embed as f32);
            let val = if i % 2 == 0 { angle.sin() } else { angle.cos() };
            enc.set(pos, i, val);
        }
    }
    enc
}
