//! Keyed embedding vectors: loading, lookup and word2vec text output.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use indexmap::IndexMap;
use ndarray::{Array2, ArrayView1};
use tracing::info;

use crate::errors::{Result, Role2VecError};

/// Embedding table mapping keys (words or role labels) to rows of a matrix.
#[derive(Debug, Clone)]
pub struct KeyedVectors {
    index: IndexMap<String, usize>,
    vectors: Array2<f32>,
}

impl KeyedVectors {
    /// Wrap a matrix whose i-th row belongs to the i-th key.
    pub fn new(keys: Vec<String>, vectors: Array2<f32>) -> Result<Self> {
        if keys.len() != vectors.nrows() {
            return Err(Role2VecError::InvalidParameter(
                "key count must match the number of vector rows",
            ));
        }
        let index = keys
            .into_iter()
            .enumerate()
            .map(|(row, key)| (key, row))
            .collect();
        Ok(Self { index, vectors })
    }

    /// Build from `(key, vector)` pairs that share one dimensionality.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut keys = Vec::new();
        let mut flat = Vec::new();
        let mut dim = None;
        for (key, vector) in entries {
            match dim {
                None => dim = Some(vector.len()),
                Some(d) if d != vector.len() => {
                    return Err(Role2VecError::model_load(
                        "<vectors>",
                        format!("`{key}` has {} values, expected {d}", vector.len()),
                    ))
                }
                _ => {}
            }
            keys.push(key);
            flat.extend(vector);
        }
        let dim = dim.unwrap_or(0);
        let vectors = Array2::from_shape_vec((keys.len(), dim), flat)
            .map_err(|_| Role2VecError::InvalidParameter("ragged embedding rows"))?;
        Self::new(keys, vectors)
    }

    /// Load a model. `.json` files hold an object of key to vector; anything
    /// else is read as word2vec text format.
    pub fn load(path: &Path) -> Result<Self> {
        let model = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            Self::load_json(path)
        } else {
            Self::load_word2vec(path)
        }
        .map_err(|err| err.at_path(path))?;
        info!(path = %path.display(), keys = model.len(), dim = model.dim(), "loaded embeddings");
        Ok(model)
    }

    fn load_json(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let raw: BTreeMap<String, Vec<f32>> = serde_json::from_reader(BufReader::new(file))?;
        Self::from_entries(raw)
    }

    fn load_word2vec(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_word2vec(BufReader::new(file))
    }

    /// Parse word2vec text format.
    ///
    /// A leading `count dim` line is taken as a header only when both fields
    /// are integers matching the rows that follow; otherwise it is a row.
    pub fn read_word2vec<R: BufRead>(reader: R) -> Result<Self> {
        let mut header = None;
        let mut entries = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            let Some((key, rest)) = fields.split_first() else {
                continue;
            };
            let values = rest
                .iter()
                .map(|field| field.parse::<f32>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|err| {
                    Role2VecError::model_load("<word2vec>", format!("line {}: {err}", line_no + 1))
                })?;
            if line_no == 0 {
                if let ([dim], Ok(count)) = (rest, key.parse::<usize>()) {
                    let Ok(dim) = dim.parse::<usize>() else {
                        entries.push((key.to_string(), values));
                        continue;
                    };
                    header = Some(((count, dim), (key.to_string(), values)));
                    continue;
                }
            }
            entries.push((key.to_string(), values));
        }

        if let Some(((count, dim), row)) = header {
            let matches_rows =
                count == entries.len() && entries.iter().all(|(_, values)| values.len() == dim);
            if !matches_rows {
                entries.insert(0, row);
            }
        }
        Self::from_entries(entries)
    }

    /// Write word2vec text format with a `count dim` header.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "{} {}", self.len(), self.dim())?;
        for (key, &row) in &self.index {
            write!(out, "{key}")?;
            for value in self.vectors.row(row) {
                write!(out, " {value}")?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        info!(path = %path.display(), keys = self.len(), "wrote embeddings");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<ArrayView1<'_, f32>> {
        self.index.get(key).map(|&row| self.vectors.row(row))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }
}
