use serde::Serialize;

/// Where the text sent to the model came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SourceKind {
    Text,
    Pdf,
    Docx,
    Image,
    Audio,
    Video,
    Topic,
}

impl SourceKind {
    /// File sources in selection order. `Topic` is the fallback and is not listed.
    pub const FILE_PRIORITY: [SourceKind; 6] = [
        SourceKind::Text,
        SourceKind::Pdf,
        SourceKind::Docx,
        SourceKind::Image,
        SourceKind::Audio,
        SourceKind::Video,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            SourceKind::Text => "txt_file",
            SourceKind::Pdf => "pdf_file",
            SourceKind::Docx => "docx_file",
            SourceKind::Image => "image_file",
            SourceKind::Audio => "audio_file",
            SourceKind::Video => "video_file",
            SourceKind::Topic => "topic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Text => "TXT File",
            SourceKind::Pdf => "PDF File",
            SourceKind::Docx => "DOCX File",
            SourceKind::Image => "Image (OCR)",
            SourceKind::Audio => "Audio (Whisper)",
            SourceKind::Video => "Video (Whisper)",
            SourceKind::Topic => "Topic",
        }
    }

    /// Maps a multipart file field name back to its kind.
    pub fn from_file_field(name: &str) -> Option<Self> {
        Self::FILE_PRIORITY
            .into_iter()
            .find(|kind| kind.field_name() == name)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
