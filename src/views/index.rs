use maud::{html, Markup, DOCTYPE};

use crate::models::domain::SourceKind;

const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

/// What the index page shows below the form.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageState<'a> {
    pub mcqs: Option<&'a str>,
    pub error: Option<&'a str>,
}

fn accept_for(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Text => ".txt,text/plain",
        SourceKind::Pdf => ".pdf,application/pdf",
        SourceKind::Docx => ".docx",
        SourceKind::Image => "image/*",
        SourceKind::Audio => "audio/*",
        SourceKind::Video => "video/*",
        SourceKind::Topic => "",
    }
}

fn css() -> Markup {
    html! {
        style {
            "body{font-family:system-ui,sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}"
            "fieldset{margin-bottom:1rem}label{display:block;margin:.4rem 0}"
            "pre{white-space:pre-wrap;background:#f5f5f5;padding:1rem;border-radius:4px}"
            ".error{color:#b00020;font-weight:600}"
        }
    }
}

fn form() -> Markup {
    html! {
        form method="post" action="/" enctype="multipart/form-data" {
            fieldset {
                legend { "Settings" }
                label {
                    "Difficulty "
                    select name="difficulty" {
                        @for level in DIFFICULTIES {
                            option value=(level) selected[level == "medium"] { (level) }
                        }
                    }
                }
                label {
                    "Number of questions "
                    input type="number" name="count" value="5";
                }
                label {
                    "Topic (used when no file is uploaded) "
                    input type="text" name="topic" maxlength="500";
                }
            }
            fieldset {
                legend { "Source file (first one filled in is used)" }
                @for kind in SourceKind::FILE_PRIORITY {
                    label {
                        (kind.label()) " "
                        input type="file" name=(kind.field_name()) accept=(accept_for(kind));
                    }
                }
            }
            button type="submit" { "Generate MCQs" }
        }
    }
}

pub fn index_page(state: PageState<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "MCQ Generator" }
                (css())
            }
            body {
                h1 { "MCQ Generator" }
                (form())
                @if let Some(error) = state.error {
                    p.error role="alert" { (error) }
                }
                @if let Some(mcqs) = state.mcqs {
                    section {
                        h2 { "Generated questions" }
                        pre { (mcqs) }
                    }
                }
            }
        }
    }
}
