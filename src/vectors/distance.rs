//! Precomputed distance vectors, keyed by syntactic distance.

use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use ndarray::{Array1, ArrayView1};
use serde::Deserialize;
use tracing::info;

use crate::errors::{Result, Role2VecError};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTable {
    Keyed(HashMap<String, Vec<f32>>),
    Positional(Vec<Vec<f32>>),
}

/// Mapping from a distance (as a decimal string) to a fixed-size vector.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    vectors: HashMap<String, Array1<f32>>,
    dim: usize,
}

impl DistanceTable {
    pub fn from_map(map: HashMap<String, Vec<f32>>) -> Result<Self> {
        let mut dim = None;
        let mut vectors = HashMap::with_capacity(map.len());
        for (key, vector) in map {
            match dim {
                None => dim = Some(vector.len()),
                Some(d) if d != vector.len() => {
                    return Err(Role2VecError::model_load(
                        "<distances>",
                        format!("distance {key} has {} values, expected {d}", vector.len()),
                    ));
                }
                _ => {}
            }
            vectors.insert(key, Array1::from(vector));
        }
        Ok(Self {
            vectors,
            dim: dim.unwrap_or(0),
        })
    }

    /// Parse either `{"0": [...], ...}` or `[[...], ...]` (entry i is distance i).
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let parsed = File::open(path)
            .map_err(Role2VecError::from)
            .and_then(|file| {
                serde_json::from_reader::<_, RawTable>(BufReader::new(file)).map_err(Into::into)
            })
            .and_then(Self::from_raw)
            .map_err(|err| err.at_path(path))?;
        info!(path = %path.display(), distances = parsed.len(), dim = parsed.dim, "loaded distance table");
        Ok(parsed)
    }

    fn from_raw(raw: RawTable) -> Result<Self> {
        let map = match raw {
            RawTable::Keyed(map) => map,
            RawTable::Positional(rows) => rows
                .into_iter()
                .enumerate()
                .map(|(distance, vector)| (distance.to_string(), vector))
                .collect(),
        };
        Self::from_map(map)
    }

    /// Vector for `distance`.
    pub fn get(&self, distance: usize) -> Result<ArrayView1<'_, f32>> {
        self.vectors
            .get(&distance.to_string())
            .map(|vector| vector.view())
            .ok_or(Role2VecError::MissingDistance(distance))
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }
}
