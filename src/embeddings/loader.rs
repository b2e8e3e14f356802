//! Embedding file loading
//!
//! Reads whitespace-separated text vectors through an [`EmbeddingFormat`].

use super::{EmbeddingError, EmbeddingFormat, Embeddings};
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Report progress every this many lines
const PROGRESS_INTERVAL: usize = 10_000;

/// Load embeddings from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, a line is malformed, vectors differ
/// in dimension, or no vectors were found.
///
/// # Examples
/// ```no_run
/// use codenames_solver::embeddings::{Glove, loader::load_from_file};
///
/// let embeddings = load_from_file("glove.6B.300d.txt", &Glove).unwrap();
/// println!("Loaded {} vectors", embeddings.len());
/// ```
pub fn load_from_file<P, F>(path: P, format: &F) -> Result<Embeddings, EmbeddingError>
where
    P: AsRef<Path>,
    F: EmbeddingFormat + ?Sized,
{
    load_from_file_with_progress(path, format, &ProgressBar::hidden())
}

/// Load embeddings from a file, ticking `progress` as lines are read
///
/// # Errors
///
/// See [`load_from_file`].
pub fn load_from_file_with_progress<P, F>(
    path: P,
    format: &F,
    progress: &ProgressBar,
) -> Result<Embeddings, EmbeddingError>
where
    P: AsRef<Path>,
    F: EmbeddingFormat + ?Sized,
{
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Loading embeddings");

    let file = File::open(path)?;
    read_embeddings(BufReader::new(file), format, progress)
}

/// Load embeddings from any buffered reader
///
/// # Errors
///
/// See [`load_from_file`].
pub fn load_from_reader<R, F>(reader: R, format: &F) -> Result<Embeddings, EmbeddingError>
where
    R: BufRead,
    F: EmbeddingFormat + ?Sized,
{
    read_embeddings(reader, format, &ProgressBar::hidden())
}

fn read_embeddings<R, F>(
    reader: R,
    format: &F,
    progress: &ProgressBar,
) -> Result<Embeddings, EmbeddingError>
where
    R: BufRead,
    F: EmbeddingFormat + ?Sized,
{
    let mut embeddings = Embeddings::default();
    let mut vector: Vec<f32> = Vec::new();
    let mut skipped = 0_usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if idx % PROGRESS_INTERVAL == 0 {
            progress.set_position(idx as u64);
        }

        if idx == 0 && format.has_header() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let Some(token) = fields.next() else {
            continue;
        };
        let Some(word) = format.token_to_word(token) else {
            skipped += 1;
            continue;
        };

        vector.clear();
        for field in fields {
            let value = field.parse::<f32>().map_err(|e| EmbeddingError::Parse {
                line: line_no,
                reason: format!("invalid component '{field}' for '{word}': {e}"),
            })?;
            vector.push(value);
        }

        if !embeddings.push(word, &vector, line_no)? {
            skipped += 1;
        }
    }

    if embeddings.is_empty() {
        return Err(EmbeddingError::Empty);
    }

    tracing::info!(
        words = embeddings.len(),
        dimension = embeddings.dimension(),
        skipped,
        "Embeddings loaded"
    );
    Ok(embeddings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::{Glove, PostSpec, Word2VecText};
    use std::io::{Cursor, Write};

    const GLOVE: &str = "the 0.1 0.2 0.3\nstadium 0.5 -0.1 0.9\n\nLondon 0.4 0.4 0.1\n";

    #[test]
    fn reads_glove_lines_in_order() {
        let embeddings = load_from_reader(Cursor::new(GLOVE), &Glove).unwrap();

        assert_eq!(embeddings.words(), ["the", "stadium", "london"]);
        assert_eq!(embeddings.dimension(), 3);
        assert_eq!(embeddings.get("stadium"), Some(&[0.5, -0.1, 0.9][..]));
    }

    #[test]
    fn postspec_keeps_only_english() {
        let input = "en_bow 1 0\nde_bogen 0 1\nen_arrow 0.9 0.1\n";
        let embeddings = load_from_reader(Cursor::new(input), &PostSpec::default()).unwrap();

        assert_eq!(embeddings.words(), ["bow", "arrow"]);
    }

    #[test]
    fn word2vec_skips_header() {
        let input = "2 2\nfire 1 0\nice 0 1\n";
        let embeddings = load_from_reader(Cursor::new(input), &Word2VecText).unwrap();

        assert_eq!(embeddings.len(), 2);
        assert!(!embeddings.contains("2"));
    }

    #[test]
    fn malformed_component_reports_line() {
        let input = "fire 1 0\nice 0 x\n";
        let result = load_from_reader(Cursor::new(input), &Glove);

        assert!(matches!(result, Err(EmbeddingError::Parse { line: 2, .. })));
    }

    #[test]
    fn dimension_mismatch_reports_line() {
        let input = "fire 1 0\nice 0 1 1\n";
        let result = load_from_reader(Cursor::new(input), &Glove);

        assert!(matches!(
            result,
            Err(EmbeddingError::DimensionMismatch { line: 2, .. })
        ));
    }

    #[test]
    fn empty_input_is_error() {
        let result = load_from_reader(Cursor::new("\n\n"), &Glove);
        assert!(matches!(result, Err(EmbeddingError::Empty)));
    }

    #[test]
    fn load_from_file_reads_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GLOVE.as_bytes()).unwrap();

        let embeddings = load_from_file(file.path(), &Glove).unwrap();
        assert_eq!(embeddings.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/vectors.txt", &Glove);
        assert!(matches!(result, Err(EmbeddingError::Io(_))));
    }
}
