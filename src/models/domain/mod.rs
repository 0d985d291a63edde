pub mod mcq;
pub mod source;
pub mod submission;
pub use mcq::McqResult;
pub use source::SourceKind;
pub use submission::{SelectedSource, Submission, UploadedFile};
