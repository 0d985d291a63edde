#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{SourceKind, Submission, UploadedFile};

    /// A well-formed model reply in the requested schema
    pub fn sample_mcqs() -> String {
        [
            "Q1) What colour is the sky on a clear day?",
            "A) Green",
            "B) Blue",
            "C) Red",
            "D) Yellow",
            "Answer: B",
            "Explanation: Rayleigh scattering favours short wavelengths.",
        ]
        .join("\n")
    }

    /// Submission with a text file and a topic, so either template can apply
    pub fn text_submission(contents: &str) -> Submission {
        Submission::new()
            .with_topic("Weather")
            .with_file(SourceKind::Text, UploadedFile::new("notes.txt", contents))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::SourceKind;

    #[test]
    fn test_fixtures_sample_mcqs_follow_schema() {
        let mcqs = sample_mcqs();
        assert!(mcqs.starts_with("Q1) "));
        assert!(mcqs.contains("\nAnswer: B\n"));
        assert_eq!(mcqs.lines().count(), 7);
    }

    #[test]
    fn test_fixtures_text_submission_selects_text() {
        let submission = text_submission("hello");
        assert_eq!(submission.select_source().kind(), SourceKind::Text);
        assert_eq!(submission.topic, "Weather");
    }
}
