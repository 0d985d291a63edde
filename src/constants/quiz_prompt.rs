/// Upper bound on extracted characters embedded in a prompt.
pub const MAX_EXTRACTED_CHARS: usize = 6000;

/// Placeholders: `{count}`, `{difficulty}`, `{text}`.
pub const TEXT_GROUNDED_PROMPT: &str = "You are an expert exam question setter.

Task:
Generate exactly {count} high-quality MCQs from the given text.

Difficulty: {difficulty}

Rules:
1. Output format MUST be:
Q1) ...
A) ...
B) ...
C) ...
D) ...
Answer: <A/B/C/D>
Explanation: <1 line>

2. Questions must be from the text only.
3. Do not repeat questions.
4. Do not add extra commentary.

TEXT:
{text}
";

/// Placeholders: `{count}`, `{difficulty}`, `{topic}`.
pub const TOPIC_ONLY_PROMPT: &str = "You are an expert exam question setter.

Generate exactly {count} MCQs on this topic: {topic}
Difficulty: {difficulty}

Format:
Q1) ...
A) ...
B) ...
C) ...
D) ...
Answer: <A/B/C/D>
Explanation: <1 line>
";
