use once_cell::sync::Lazy;
use regex::Regex;

/// FPrime comment marker.
const FPRIME_COMMENT: char = ';';
/// SeqN comment marker.
const SEQN_COMMENT: char = '#';

static NAMESPACE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-zA-Z])").expect("namespace pattern is valid"));

/// Rewrite FPrime text as SeqN, line by line.
///
/// Before the first `;` commas become spaces and a period followed by a
/// letter becomes `_`. Whatever follows the `;` becomes a `#` comment. Line
/// count and blank lines are preserved.
pub fn rewrite(fprime: &str) -> String {
    fprime
        .split('\n')
        .map(rewrite_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Asynchronous host entry point for [`rewrite`].
pub async fn convert_fprime_to_sequence(fprime: &str) -> String {
    rewrite(fprime)
}

fn rewrite_line(line: &str) -> String {
    let (body, comment) = match line.find(FPRIME_COMMENT) {
        Some(index) => line.split_at(index),
        None => (line, ""),
    };

    let mut rewritten = NAMESPACE_SEPARATOR
        .replace_all(&body.replace(',', " "), "_${1}")
        .into_owned();

    if let Some(comment) = comment.strip_prefix(FPRIME_COMMENT) {
        rewritten.push(SEQN_COMMENT);
        rewritten.push_str(comment);
    }
    rewritten
}
