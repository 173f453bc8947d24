//! Embedding files: JSON with coordinates plus either explicit rotations or
//! a plain edge list (rotations then follow the straight-line drawing).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use twoview::api::{Embedding, VertexId};
use twoview::Vec2;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbeddingFile {
    /// `coordinates[k]` belongs to vertex `k + 1`.
    pub coordinates: Vec<[f64; 2]>,
    #[serde(default)]
    pub rotation: Option<Vec<Vec<VertexId>>>,
    #[serde(default)]
    pub edges: Option<Vec<[VertexId; 2]>>,
}

impl EmbeddingFile {
    pub fn into_embedding(self) -> Result<Embedding> {
        let coords: Vec<Vec2<f64>> = self
            .coordinates
            .iter()
            .map(|&[x, y]| Vec2::new(x, y))
            .collect();
        let n = coords.len();
        let emb = match (self.rotation, self.edges) {
            (Some(_), Some(_)) => bail!("give either `rotation` or `edges`, not both"),
            (Some(rotation), None) => Embedding::new(coords, rotation)?,
            (None, Some(edges)) => {
                let pairs: Vec<_> = edges.iter().map(|&[a, b]| (a, b)).collect();
                Embedding::from_straight_line(coords, &pairs)?
            }
            (None, None) => Embedding::new(coords, vec![Vec::new(); n])?,
        };
        Ok(emb)
    }
}

pub fn parse(text: &str) -> Result<Embedding> {
    let file: EmbeddingFile = serde_json::from_str(text)?;
    file.into_embedding()
}

pub fn load(path: &Path) -> Result<Embedding> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing embedding {}", path.display()))
}
