use std::collections::HashMap;

use validator::Validate;

use crate::models::domain::source::SourceKind;

pub const DEFAULT_QUESTION_COUNT: i64 = 5;
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// One uploaded file as received from the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Lower-cased extension including the leading dot, if the name has one.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
    }
}

/// The source that wins selection for a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectedSource<'a> {
    File(SourceKind, &'a UploadedFile),
    Topic,
}

impl SelectedSource<'_> {
    pub fn kind(&self) -> SourceKind {
        match self {
            SelectedSource::File(kind, _) => *kind,
            SelectedSource::Topic => SourceKind::Topic,
        }
    }
}

/// One form submission. The `validate` limits apply to the JSON API only;
/// the HTML form accepts any difficulty and topic.
#[derive(Clone, Debug, Validate)]
pub struct Submission {
    #[validate(length(max = 100, message = "difficulty must be at most 100 characters"))]
    pub difficulty: String,

    pub count: i64,

    #[validate(length(max = 500, message = "topic must be at most 500 characters"))]
    pub topic: String,

    pub files: HashMap<SourceKind, UploadedFile>,
}

impl Submission {
    pub fn new() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            count: DEFAULT_QUESTION_COUNT,
            topic: String::new(),
            files: HashMap::new(),
        }
    }

    pub fn with_topic(mut self, topic: &str) -> Self {
        self.topic = topic.trim().to_string();
        self
    }

    pub fn with_difficulty(mut self, difficulty: &str) -> Self {
        self.difficulty = normalize_difficulty(Some(difficulty));
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_file(mut self, kind: SourceKind, file: UploadedFile) -> Self {
        self.files.insert(kind, file);
        self
    }

    /// True when no file was uploaded and the topic is blank.
    pub fn is_blank(&self) -> bool {
        self.topic.is_empty() && self.select_source() == SelectedSource::Topic
    }

    /// First non-empty file in priority order, falling back to the topic.
    pub fn select_source(&self) -> SelectedSource<'_> {
        SourceKind::FILE_PRIORITY
            .iter()
            .find_map(|kind| {
                self.files
                    .get(kind)
                    .filter(|file| !file.is_empty())
                    .map(|file| SelectedSource::File(*kind, file))
            })
            .unwrap_or(SelectedSource::Topic)
    }
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the `count` form field. Missing and non-numeric values fall back
/// to the default; any integer, zero included, is used as given.
pub fn parse_count(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_QUESTION_COUNT)
}

pub fn normalize_difficulty(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_DIFFICULTY.to_string(),
    }
}
