/// Maximum length of an extracted prompt, in characters.
const PROMPT_MAX_CHARS: usize = 500;

/// Minimum ratio of ASCII-alphabetic to all alphabetic characters for a line
/// to count as predominantly Latin. Applied at this single call site.
const LATIN_RATIO_THRESHOLD: f64 = 0.6;

/// Maximum length of the parameter hint, in characters.
const PARAMS_MAX_CHARS: usize = 100;

/// Lines containing any of these (lowercased) mark a parameter hint.
const PARAM_KEYWORDS: [&str; 4] = ["parameter", "tip", "参数", "建议"];

/// Fallback parameter hint when a document carries none.
const DEFAULT_PARAMS: &str = "可根据需要调整提示词中的风格、细节和质量参数";

/// Canonical prompt text and metadata extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub prompt: String,
    pub title: String,
    pub prompt_params: String,
}

/// Extract a prompt, title, and parameter hint from one document.
///
/// Returns `None` when no extraction rule matches; such documents are
/// skipped, never given a synthesized placeholder prompt.
pub fn parse_document(content: &str, rel_path: &str) -> Option<ParsedDocument> {
    let prompt = extract_prompt(content)?;
    Some(ParsedDocument {
        prompt: cap_chars(&prompt, PROMPT_MAX_CHARS),
        title: derive_title(rel_path),
        prompt_params: extract_params(content),
    })
}

/// Extraction policy, first success wins:
/// 1. first non-blank line inside a fenced code block;
/// 2. first non-blank, non-heading line longer than 20 chars that is
///    predominantly Latin-alphabetic;
/// 3. first non-blank, non-heading line longer than 10 chars.
fn extract_prompt(content: &str) -> Option<String> {
    let mut in_block = false;
    for line in content.lines() {
        let stripped = line.trim();
        if stripped.starts_with("```") {
            in_block = !in_block;
            continue;
        }
        if in_block && !stripped.is_empty() {
            return Some(stripped.to_string());
        }
    }

    for line in content.lines() {
        let stripped = line.trim();
        if !stripped.is_empty()
            && !stripped.starts_with('#')
            && stripped.chars().count() > 20
            && is_predominantly_latin(stripped)
        {
            return Some(stripped.to_string());
        }
    }

    for line in content.lines() {
        let stripped = line.trim();
        if !stripped.is_empty() && !stripped.starts_with('#') && stripped.chars().count() > 10 {
            return Some(stripped.to_string());
        }
    }

    None
}

fn is_predominantly_latin(text: &str) -> bool {
    let total = text.chars().filter(|c| c.is_alphabetic()).count();
    if total == 0 {
        return false;
    }
    let ascii = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    ascii as f64 / total as f64 > LATIN_RATIO_THRESHOLD
}

/// First line mentioning a parameter keyword, trimmed to a bounded length.
fn extract_params(content: &str) -> String {
    for line in content.lines() {
        let stripped = line.trim();
        let lowered = stripped.to_lowercase();
        if PARAM_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            return cap_chars(stripped, PARAMS_MAX_CHARS);
        }
    }
    DEFAULT_PARAMS.to_string()
}

/// Display name derived from the file's base name: separators become spaces,
/// words are rendered in title case.
fn derive_title(rel_path: &str) -> String {
    let base = rel_path.rsplit('/').next().unwrap_or(rel_path);
    let stem = base.strip_suffix(".md").unwrap_or(base);
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

fn cap_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
