// Pipeline errors — conditions the user should see as a warning, not a crash.
//
// Infrastructure failures (I/O, sockets, JSON) stay in anyhow at the binary
// edge. These variants are the only ways a scoring run can refuse to produce
// a report.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// No non-blank document lines were supplied.
    #[error("Enter at least one document.")]
    EmptyInput,

    /// Every token in every document was a stop word or too short to keep.
    #[error(
        "None of the {documents} document(s) contain a usable word \
         (everything was a stop word or a single letter)."
    )]
    EmptyVocabulary { documents: usize },
}
