use crate::models::domain::source::SourceKind;

/// Raw completion text plus the source that produced the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct McqResult {
    pub source: SourceKind,
    pub mcqs: String,
}

impl McqResult {
    pub fn new(source: SourceKind, mcqs: impl Into<String>) -> Self {
        Self {
            source,
            mcqs: mcqs.into(),
        }
    }

    /// `Source Used: <label>`, a blank line, then the model output unchanged.
    pub fn compose(&self) -> String {
        format!("Source Used: {}\n\n{}", self.source.label(), self.mcqs)
    }
}
