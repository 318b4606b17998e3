use crate::layers::TokenEmbedding;
use crate::math::Matrix;
use serde::{Deserialize, Serialize};
use std::{fs, io};

#[derive(Serialize, Deserialize)]
pub struct EmbeddingJson {
    pub embed_size: usize,
    pub weights: Vec<Vec<f32>>,
}

/// Convert a [`Matrix`] into a 2-D `Vec` for serialisation.
pub fn matrix_to_vec2(m: &Matrix) -> Vec<Vec<f32>> {
    (0..m.rows)
        .map(|r| (0..m.cols).map(|c| m.get(r, c)).collect())
        .collect()
}

/// Convert a 2-D `Vec` into a [`Matrix`].
pub fn vec2_to_matrix(rows: &[Vec<f32>]) -> Matrix {
    if rows.is_empty() || rows[0].is_empty() {
        return Matrix::zeros(0, 0);
    }
    let r = rows.len();
    let c = rows[0].len();
    let mut mat = Matrix::zeros(r, c);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), c, "ragged weight rows");
        for (j, &val) in row.iter().enumerate() {
            mat.set(i, j, val);
        }
    }
    mat
}

/// Save a built [`TokenEmbedding`]'s weights to `path` as JSON.
pub fn save_embedding(path: &str, embedding: &TokenEmbedding) -> Result<(), io::Error> {
    let weights = embedding
        .weights
        .as_ref()
        .map(matrix_to_vec2)
        .unwrap_or_default();
    let json = EmbeddingJson {
        embed_size: embedding.embed_size,
        weights,
    };
    let txt = serde_json::to_string(&json).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, txt)?;
    Ok(())
}

/// Load a [`TokenEmbedding`] saved with [`save_embedding`].  An empty weight
/// table yields an unbuilt layer.
pub fn load_embedding(path: &str) -> Result<TokenEmbedding, io::Error> {
    let txt = fs::read_to_string(path)?;
    let json: EmbeddingJson =
        serde_json::from_str(&txt).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let mut embedding = TokenEmbedding::new(json.embed_size);
    if !json.weights.is_empty() {
        embedding.weights = Some(vec2_to_matrix(&json.weights));
    }
    Ok(embedding)
}
