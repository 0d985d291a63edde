use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::constants::quiz_prompt::{MAX_EXTRACTED_CHARS, TEXT_GROUNDED_PROMPT, TOPIC_ONLY_PROMPT};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(count|difficulty|text|topic)\}").expect("PLACEHOLDER is a valid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    TextGrounded,
    TopicOnly,
}

/// Trims surrounding whitespace and keeps at most `MAX_EXTRACTED_CHARS` characters.
pub fn truncate_extracted(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(MAX_EXTRACTED_CHARS) {
        Some((byte_idx, _)) => trimmed[..byte_idx].to_string(),
        None => trimmed.to_string(),
    }
}

pub fn select_template(extracted: &str) -> PromptTemplate {
    if extracted.is_empty() {
        PromptTemplate::TopicOnly
    } else {
        PromptTemplate::TextGrounded
    }
}

/// Fills every placeholder in one pass; substituted values are never re-scanned.
pub fn build_prompt(difficulty: &str, count: i64, extracted: &str, topic: &str) -> String {
    let template = match select_template(extracted) {
        PromptTemplate::TextGrounded => TEXT_GROUNDED_PROMPT,
        PromptTemplate::TopicOnly => TOPIC_ONLY_PROMPT,
    };

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "count" => count.to_string(),
            "difficulty" => difficulty.to_string(),
            "text" => extracted.to_string(),
            "topic" => topic.to_string(),
            other => format!("{{{}}}", other),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_trims_whitespace() {
        assert_eq!(truncate_extracted("  hello \n\t"), "hello");
        assert_eq!(truncate_extracted("   "), "");
    }

    #[test]
    fn truncate_caps_at_max_chars() {
        let long = "a".repeat(MAX_EXTRACTED_CHARS + 500);
        assert_eq!(truncate_extracted(&long).chars().count(), MAX_EXTRACTED_CHARS);

        let exact = "b".repeat(MAX_EXTRACTED_CHARS);
        assert_eq!(truncate_extracted(&exact), exact);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let long = "é".repeat(MAX_EXTRACTED_CHARS + 10);
        let truncated = truncate_extracted(&long);
        assert_eq!(truncated.chars().count(), MAX_EXTRACTED_CHARS);
        assert_eq!(truncated.len(), MAX_EXTRACTED_CHARS * 'é'.len_utf8());
    }

    #[test]
    fn truncate_happens_after_trim() {
        let padded = format!("{}{}", " ".repeat(100), "c".repeat(MAX_EXTRACTED_CHARS));
        assert_eq!(truncate_extracted(&padded), "c".repeat(MAX_EXTRACTED_CHARS));
    }

    #[test]
    fn topic_prompt_used_when_no_text() {
        let prompt = build_prompt("easy", 3, "", "Photosynthesis");

        assert_eq!(select_template(""), PromptTemplate::TopicOnly);
        assert!(prompt.contains("Generate exactly 3 MCQs on this topic: Photosynthesis"));
        assert!(prompt.contains("Difficulty: easy"));
        assert!(!prompt.contains("TEXT:"));
    }

    #[test]
    fn text_prompt_embeds_extracted_text() {
        let prompt = build_prompt("hard", 5, "The sky is blue.", "ignored topic");

        assert_eq!(select_template("x"), PromptTemplate::TextGrounded);
        assert!(prompt.contains("Generate exactly 5 high-quality MCQs from the given text."));
        assert!(prompt.contains("Difficulty: hard"));
        assert!(prompt.trim_end().ends_with("TEXT:\nThe sky is blue."));
        assert!(!prompt.contains("ignored topic"));
    }

    #[test]
    fn placeholders_inside_user_text_are_left_alone() {
        let prompt = build_prompt("easy", 2, "literal {count} and {difficulty}", "");
        assert!(prompt.contains("literal {count} and {difficulty}"));
    }

    #[test]
    fn placeholders_inside_difficulty_and_topic_are_left_alone() {
        let prompt = build_prompt("{topic}", 3, "", "Photosynthesis");
        assert!(prompt.contains("Difficulty: {topic}\n"));
        assert!(prompt.contains("on this topic: Photosynthesis\n"));

        let prompt = build_prompt("{text}", 3, "SECRET TEXT", "");
        assert!(prompt.contains("Difficulty: {text}\n"));
        assert_eq!(prompt.matches("SECRET TEXT").count(), 1);

        let prompt = build_prompt("hard", 4, "", "{difficulty} {count}");
        assert!(prompt.contains("on this topic: {difficulty} {count}\n"));
        assert!(prompt.contains("Difficulty: hard\n"));
    }

    #[test]
    fn zero_and_negative_counts_are_embedded_as_given() {
        assert!(build_prompt("easy", 0, "", "Tides").contains("Generate exactly 0 MCQs"));
        assert!(build_prompt("easy", -2, "text", "").contains("Generate exactly -2 high-quality"));
    }

    #[test]
    fn both_templates_request_the_answer_schema() {
        for prompt in [build_prompt("easy", 1, "", "x"), build_prompt("easy", 1, "y", "")] {
            for line in ["Q1) ...", "A) ...", "B) ...", "C) ...", "D) ...", "Answer: <A/B/C/D>", "Explanation: <1 line>"] {
                assert!(prompt.contains(line), "missing {line}");
            }
        }
    }
}
