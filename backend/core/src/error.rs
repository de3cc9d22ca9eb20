use thiserror::Error;

/// Errors produced by the reply-analysis pipeline.
///
/// Both variants describe expected bad input, not program bugs: a malformed
/// model reply is data, and callers surface it as a generic failure instead
/// of letting a parser error escape to the UI. Upstream network and model
/// errors never reach this type; they belong to the vision collaborator.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("reply contains no parseable JSON payload")]
    MalformedReply,

    #[error("reply JSON does not match the expected shape: {0}")]
    SchemaMismatch(String),
}
