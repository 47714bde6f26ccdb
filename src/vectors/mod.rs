//! Composite vector batch runner.

pub mod compose;
pub mod distance;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    errors::Role2VecError,
    nlp::{
        annotator::{ConlluAnnotator, RoleType},
        markup,
        tokenizer::Tokenizer,
    },
};

pub use compose::{BlendWeights, CompositeVector, VectorComposer, VectorModels};
pub use distance::DistanceTable;

/// Sentence text to the records of its marked tokens, in input order.
pub type ResultMap = IndexMap<String, Vec<CompositeVector>>;

/// Inputs and parameters of one batch run.
#[derive(Debug, Clone)]
pub struct VectorJob {
    pub text_path: PathBuf,
    pub w2v_path: PathBuf,
    pub r2v_path: PathBuf,
    pub parses_path: PathBuf,
    pub distance_path: PathBuf,
    pub output_path: PathBuf,
    pub role_type: RoleType,
    pub weights: BlendWeights,
}

/// Load everything once, process every line, then write the result map.
pub fn compute(job: &VectorJob, settings: &Settings) -> Result<ResultMap> {
    let text = std::fs::read_to_string(&job.text_path)
        .with_context(|| format!("reading {}", job.text_path.display()))?;
    let models = VectorModels::load(&job.w2v_path, &job.r2v_path, &job.distance_path)
        .context("loading vector models")?;
    let annotator = ConlluAnnotator::load(&job.parses_path).context("loading parses")?;
    let tokenizer = Tokenizer::new(&settings.tokenizer_exceptions);

    let composer = VectorComposer::new(&annotator, &tokenizer, &models, job.role_type, job.weights);
    let results = run_lines(&composer, text.lines())?;
    write_results(&job.output_path, &results)?;
    Ok(results)
}

/// Compose every line, keeping sentences that yield at least one record.
///
/// Lines with unpairable markers are skipped; any other failure aborts the run.
pub fn run_lines<'l, I>(composer: &VectorComposer<'_>, lines: I) -> Result<ResultMap>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut results = ResultMap::new();
    let mut skipped = 0usize;
    for (line_no, line) in lines.into_iter().enumerate() {
        if line.trim().is_empty() || !markup::has_spans(line) {
            continue;
        }
        match composer.compose_line(line) {
            Ok(composed) if composed.vectors.is_empty() => {
                debug!(line = line_no + 1, "no vectors composed");
            }
            Ok(composed) => {
                results.insert(composed.sentence, composed.vectors);
            }
            Err(err @ Role2VecError::MalformedMarkup { .. }) => {
                warn!(line = line_no + 1, %err, "skipping line");
                skipped += 1;
            }
            Err(err) => {
                return Err(anyhow::Error::new(err).context(format!("line {}", line_no + 1)));
            }
        }
    }
    info!(sentences = results.len(), skipped, "composed vectors");
    Ok(results)
}

/// Persist the result map as a single JSON document.
pub fn write_results(path: &Path, results: &ResultMap) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, results)?;
    writer.flush()?;
    info!(path = %path.display(), sentences = results.len(), "wrote vectors");
    Ok(())
}
