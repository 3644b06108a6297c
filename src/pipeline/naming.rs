//! Base-name derivation and the file layout built on it
//!
//! Every path the converter and trainer hand to MALLET is derived from one
//! string: the input path with its last `.`-delimited segment removed.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Extension given to MALLET's serialized instance lists
pub const MALLET_EXTENSION: &str = "mallet";

/// File name of the Gibbs sampling state inside the training directory
pub const STATE_FILE: &str = "state.gz";

/// File name of the topic keyword table inside the training directory
pub const TOPIC_KEYS_FILE: &str = "keywords.tsv";

/// File name of the document composition table inside the training directory
pub const DOC_TOPICS_FILE: &str = "composition.tsv";

/// Strip the final `.`-delimited segment from `path`.
///
/// The split runs over the whole string, so dots in parent directories count
/// too. A string without any `.` is returned unchanged, and a leading dot is
/// treated like any other separator (`".corpus"` yields an empty base).
pub fn base_name(path: &str) -> String {
    base_name_os(OsStr::new(path)).to_string_lossy().into_owned()
}

/// Byte-preserving form of [`base_name`] for paths that may not be UTF-8.
pub fn base_name_os(path: &OsStr) -> OsString {
    let bytes = path.as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        // SAFETY: the slice is cut immediately before an ASCII `.`, which is
        // a valid split point for the platform's encoded bytes.
        Some(idx) => unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[..idx]) }.to_os_string(),
        None => path.to_os_string(),
    }
}

/// `base` with `suffix` appended verbatim
fn with_suffix(base: &OsStr, suffix: &str) -> PathBuf {
    let mut joined = base.to_os_string();
    joined.push(suffix);
    PathBuf::from(joined)
}

/// Paths involved in importing a corpus into MALLET's binary format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPaths {
    /// Corpus file handed to `import-file`
    pub input: PathBuf,
    /// Serialized instance list, `<base>.mallet`
    pub output: PathBuf,
}

impl ImportPaths {
    pub fn from_input(input: &Path) -> Self {
        let base = base_name_os(input.as_os_str());
        Self {
            input: input.to_path_buf(),
            output: with_suffix(&base, &format!(".{}", MALLET_EXTENSION)),
        }
    }
}

/// Paths involved in training a topic model from an imported corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainPaths {
    /// Instance list produced by the converter, `<base>.mallet`
    pub input: PathBuf,
    /// Directory holding every training output, `<base>`
    pub output_dir: PathBuf,
    pub state: PathBuf,
    pub topic_keys: PathBuf,
    pub doc_topics: PathBuf,
}

impl TrainPaths {
    /// Derive the training layout from the corpus path given on the command line.
    ///
    /// Outputs are joined with a literal `/` rather than [`Path::join`] so the
    /// rendered command reads the same on every platform.
    pub fn from_input(input: &Path) -> Self {
        let base = base_name_os(input.as_os_str());
        Self {
            input: with_suffix(&base, &format!(".{}", MALLET_EXTENSION)),
            output_dir: PathBuf::from(&base),
            state: with_suffix(&base, &format!("/{}", STATE_FILE)),
            topic_keys: with_suffix(&base, &format!("/{}", TOPIC_KEYS_FILE)),
            doc_topics: with_suffix(&base, &format!("/{}", DOC_TOPICS_FILE)),
        }
    }

    /// Output files in the order MALLET is asked to write them
    pub fn outputs(&self) -> [(&'static str, &Path); 3] {
        [
            ("State", self.state.as_path()),
            ("Topic keys", self.topic_keys.as_path()),
            ("Doc topics", self.doc_topics.as_path()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_drops_only_last_segment() {
        assert_eq!(base_name("a.b.csv"), "a.b");
        assert_eq!(base_name("data.csv"), "data");
    }

    #[test]
    fn test_base_name_without_extension_is_unchanged() {
        assert_eq!(base_name("data"), "data");
        assert_eq!(base_name("corpus/data"), "corpus/data");
    }

    #[test]
    fn test_base_name_dotfiles_split_literally() {
        assert_eq!(base_name(".corpus"), "");
        assert_eq!(base_name(".corpus.csv"), ".corpus");
    }

    #[test]
    fn test_base_name_splits_across_directories() {
        assert_eq!(base_name("v1.2/data"), "v1");
        assert_eq!(base_name("./data.csv"), "./data");
    }

    #[test]
    fn test_train_outputs_order() {
        let paths = TrainPaths::from_input(Path::new("data.csv"));
        let names: Vec<&str> = paths.outputs().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["State", "Topic keys", "Doc topics"]);
    }
}
