//! Quality score parsing.
//!
//! Two entry points:
//!
//! | Function | Input | Use |
//! |----------|-------|-----|
//! | [`parse_score`] | Output of a score-extraction model call | Strict: one number |
//! | [`find_score`] | Free-form critique text | Pattern search, no model call |
//!
//! Both return `None` rather than a neutral default; callers treat a
//! missing score as "threshold not met".

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 10.0;

/// Parse the output of a score-extraction step.
///
/// Accepts a single number with optional surrounding whitespace, quotes,
/// trailing punctuation or a `/10` suffix (`"8"`, `"7.5"`, `"9/10"`, `"8."`).
/// Anything else, including NaN, infinities and values outside 0-10,
/// yields `None`.
pub fn parse_score(output: &str) -> Option<f64> {
    let trimmed = output
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .trim_end_matches(['.', '!', ','])
        .trim();
    let number = trimmed.strip_suffix("/10").unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|n| in_range(*n))
}

/// Search free-form critique text for a score.
///
/// Recognized, in priority order:
///
/// 1. JSON object with a numeric `score` field, starting at any `{`
/// 2. `N/10` fraction (`7/100` is not one)
/// 3. A number following the word "score" (`Score: 7`, `score of 8.5`)
///
/// Values outside 0-10 are ignored.
pub fn find_score(text: &str) -> Option<f64> {
    if let Some(score) = json_score(text) {
        return Some(score);
    }

    let words: Vec<&str> = text.split_whitespace().collect();

    for word in &words {
        if let Some(idx) = word.find("/10")
            && !word[idx + 3..].starts_with(|c: char| c.is_ascii_digit())
            && let Some(num) = leading_number(&word[..idx])
            && in_range(num)
        {
            return Some(num);
        }
    }

    for (i, word) in words.iter().enumerate() {
        let word = word.trim_start_matches(['"', '\'', '`', '*']);
        if !word.to_lowercase().starts_with("score") {
            continue;
        }
        for candidate in words.iter().skip(i + 1).take(3) {
            if let Some(num) = leading_number(candidate)
                && in_range(num)
            {
                return Some(num);
            }
        }
    }

    None
}

/// First JSON object in `text` carrying an in-range numeric `score`.
fn json_score(text: &str) -> Option<f64> {
    text.match_indices('{').find_map(|(start, _)| {
        let mut values =
            serde_json::Deserializer::from_str(&text[start..]).into_iter::<serde_json::Value>();
        let value = values.next()?.ok()?;
        value
            .get("score")
            .and_then(|v| v.as_f64())
            .filter(|s| in_range(*s))
    })
}

fn in_range(score: f64) -> bool {
    score.is_finite() && (0.0..=MAX_SCORE).contains(&score)
}

/// Parse the numeric part of a token such as `8`, `(7.5)`, `**9**,`
fn leading_number(token: &str) -> Option<f64> {
    let cleaned = token.trim_matches(|c: char| !c.is_ascii_digit() && c != '.');
    let cleaned = cleaned.trim_end_matches('.');
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== parse_score Tests ====================

    #[test]
    fn test_parse_score_plain_numbers() {
        assert_eq!(parse_score("8"), Some(8.0));
        assert_eq!(parse_score(" 7.5\n"), Some(7.5));
        assert_eq!(parse_score("9/10"), Some(9.0));
        assert_eq!(parse_score("\"6\""), Some(6.0));
        assert_eq!(parse_score("8."), Some(8.0));
    }

    #[test]
    fn test_parse_score_rejects_prose() {
        assert_eq!(parse_score("Great work, no score given."), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("The score is 8"), None);
        assert_eq!(parse_score("NaN"), None);
        assert_eq!(parse_score("inf"), None);
    }

    #[test]
    fn test_parse_score_rejects_out_of_scale() {
        assert_eq!(parse_score("85"), None);
        assert_eq!(parse_score("11"), None);
        assert_eq!(parse_score("-3"), None);
        assert_eq!(parse_score("10"), Some(10.0));
        assert_eq!(parse_score("0"), Some(0.0));
    }

    #[test]
    fn test_parse_score_is_deterministic() {
        let output = "8.5";
        assert_eq!(parse_score(output), parse_score(output));
    }

    // ==================== find_score Tests ====================

    #[test]
    fn test_find_score_json() {
        let critique = r#"Review: {"score": 8, "feedback": "tight prose"}"#;
        assert_eq!(find_score(critique), Some(8.0));
    }

    #[test]
    fn test_find_score_json_after_other_braces() {
        assert_eq!(find_score(r#"Use {x} here. {"score": 9}"#), Some(9.0));
        assert_eq!(
            find_score(r#"{"note": "draft"} then {"score": 7, "feedback": "ok"}"#),
            Some(7.0)
        );
    }

    #[test]
    fn test_find_score_keyword_in_quotes() {
        assert_eq!(find_score(r#"The field "score": 6 was set"#), Some(6.0));
    }

    #[test]
    fn test_find_score_ignores_other_denominators() {
        assert_eq!(find_score("Coverage 7/100 items. Score: 9"), Some(9.0));
        assert_eq!(find_score("Passed 3/105 checks."), None);
    }

    #[test]
    fn test_find_score_fraction() {
        assert_eq!(find_score("Solid draft. I rate this 6/10 overall."), Some(6.0));
        assert_eq!(find_score("Evaluation score: **9/10**"), Some(9.0));
    }

    #[test]
    fn test_find_score_keyword() {
        assert_eq!(find_score("Score: 7. Needs a stronger ending."), Some(7.0));
        assert_eq!(find_score("I'd give it a score of 8.5"), Some(8.5));
    }

    #[test]
    fn test_find_score_none() {
        assert_eq!(find_score("Great work, no score given."), None);
        assert_eq!(find_score("Score: 42"), None);
        assert_eq!(find_score(""), None);
    }
}
