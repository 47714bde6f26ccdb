//! Skip-gram embedding training with negative sampling.

use std::path::Path;

use indexmap::IndexMap;
use ndarray::{Array1, Array2};
use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
    Rng, SeedableRng,
};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    errors::{Result, Role2VecError},
    nlp::embeddings::KeyedVectors,
};

const MAX_EXP: f32 = 6.0;
const NOISE_EXPONENT: f64 = 0.75;

/// Trainer hyper-parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingParams {
    pub vector_size: usize,
    /// Maximum context distance; shrunk at random per position.
    pub window: usize,
    /// Tokens seen fewer times are dropped from the vocabulary.
    pub min_count: usize,
    pub epochs: usize,
    /// Noise samples per positive pair.
    pub negative: usize,
    pub learning_rate: f32,
    pub min_learning_rate: f32,
    pub seed: u64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            vector_size: 300,
            window: 5,
            min_count: 5,
            epochs: 5,
            negative: 5,
            learning_rate: 0.025,
            min_learning_rate: 0.0001,
            seed: 1,
        }
    }
}

impl TrainingParams {
    fn validate(&self) -> Result<()> {
        if self.vector_size == 0 {
            return Err(Role2VecError::InvalidParameter("vector size must be positive"));
        }
        if self.window == 0 {
            return Err(Role2VecError::InvalidParameter("window must be positive"));
        }
        if self.epochs == 0 {
            return Err(Role2VecError::InvalidParameter("epochs must be positive"));
        }
        Ok(())
    }
}

/// Read every file below `dir`, one whitespace-tokenized sentence per line.
pub fn read_sentences(dir: &Path) -> Result<Vec<Vec<String>>> {
    let mut sentences = Vec::new();
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    for path in files {
        let text = std::fs::read_to_string(&path)?;
        let before = sentences.len();
        sentences.extend(
            text.lines()
                .map(|line| line.split_whitespace().map(str::to_string).collect::<Vec<_>>())
                .filter(|tokens| !tokens.is_empty()),
        );
        debug!(path = %path.display(), sentences = sentences.len() - before, "read training file");
    }
    Ok(sentences)
}

/// Train embeddings for every token of `sentences` that survives `min_count`.
pub fn train(sentences: &[Vec<String>], params: &TrainingParams) -> Result<KeyedVectors> {
    params.validate()?;

    let mut counts: IndexMap<&str, u64> = IndexMap::new();
    for token in sentences.iter().flatten() {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts.retain(|_, count| *count >= params.min_count as u64);
    counts.sort_by(|_, a, _, b| b.cmp(a));
    if counts.is_empty() {
        return Err(Role2VecError::EmptyVocabulary {
            min_count: params.min_count,
        });
    }

    let encoded: Vec<Vec<usize>> = sentences
        .iter()
        .map(|sentence| {
            sentence
                .iter()
                .filter_map(|token| counts.get_index_of(token.as_str()))
                .collect()
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(params.seed);
    let noise = WeightedIndex::new(
        counts
            .values()
            .map(|&count| (count as f64).powf(NOISE_EXPONENT)),
    )
    .map_err(|_| Role2VecError::InvalidParameter("noise distribution is empty"))?;

    let vocab = counts.len();
    let dim = params.vector_size;
    let mut input =
        Array2::from_shape_fn((vocab, dim), |_| (rng.gen::<f32>() - 0.5) / dim as f32);
    let mut output = Array2::<f32>::zeros((vocab, dim));
    let mut gradient = Array1::<f32>::zeros(dim);

    let total = (encoded.iter().map(Vec::len).sum::<usize>() * params.epochs).max(1);
    let mut processed = 0usize;

    for epoch in 0..params.epochs {
        let mut loss = 0.0f64;
        for sentence in &encoded {
            for (pos, &center) in sentence.iter().enumerate() {
                let progress = processed as f32 / total as f32;
                let lr = (params.learning_rate * (1.0 - progress)).max(params.min_learning_rate);
                processed += 1;

                let reach = params.window - rng.gen_range(0..params.window);
                let lo = pos.saturating_sub(reach);
                let hi = (pos + reach).min(sentence.len() - 1);
                for ctx_pos in lo..=hi {
                    if ctx_pos == pos {
                        continue;
                    }
                    let context = sentence[ctx_pos];
                    gradient.fill(0.0);
                    for sample in 0..=params.negative {
                        let (target, label) = if sample == 0 {
                            (center, 1.0)
                        } else {
                            let target = noise.sample(&mut rng);
                            if target == center {
                                continue;
                            }
                            (target, 0.0)
                        };
                        let score = input.row(context).dot(&output.row(target));
                        let prediction = sigmoid(score);
                        loss -= f64::from(if label > 0.5 {
                            prediction.max(1e-7).ln()
                        } else {
                            (1.0 - prediction).max(1e-7).ln()
                        });
                        let g = (label - prediction) * lr;
                        gradient.scaled_add(g, &output.row(target));
                        output.row_mut(target).scaled_add(g, &input.row(context));
                    }
                    input.row_mut(context).scaled_add(1.0, &gradient);
                }
            }
        }
        info!(epoch = epoch + 1, loss, "finished training epoch");
    }

    let keys = counts.keys().map(|key| key.to_string()).collect();
    KeyedVectors::new(keys, input)
}

fn sigmoid(x: f32) -> f32 {
    if x > MAX_EXP {
        1.0
    } else if x < -MAX_EXP {
        0.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}

/// Train one model per sub-directory of `input` (e.g. `merged`, `dep`, `tag`)
/// and save each as `<output>/<name>.vec`.
pub fn train_directory(input: &Path, output: &Path, params: &TrainingParams) -> Result<Vec<String>> {
    std::fs::create_dir_all(output)?;
    let mut dirs: Vec<_> = std::fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .collect();
    dirs.sort_by_key(|entry| entry.file_name());

    let mut trained = Vec::new();
    for dir in dirs {
        let name = dir.file_name().to_string_lossy().into_owned();
        let sentences = read_sentences(&dir.path())?;
        info!(model = %name, sentences = sentences.len(), "training role model");
        let model = train(&sentences, params)?;
        model.save(&output.join(format!("{name}.vec")))?;
        trained.push(name);
    }
    Ok(trained)
}
