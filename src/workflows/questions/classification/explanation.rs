use crate::workflows::questions::domain::primary_citation;

/// Splits text after `.`, `!` or `?` when whitespace follows. The
/// punctuation stays with its sentence; blank pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((position, current)) = chars.next() {
        if !matches!(current, '.' | '!' | '?') {
            continue;
        }
        let Some(&(_, next)) = chars.peek() else {
            continue;
        };
        if next.is_whitespace() {
            sentences.push(&text[start..position + current.len_utf8()]);
            while let Some(&(_, ws)) = chars.peek() {
                if !ws.is_whitespace() {
                    break;
                }
                chars.next();
            }
            start = chars.peek().map_or(text.len(), |&(index, _)| index);
        }
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Builds the explanation shown next to the model answer.
///
/// A one-sentence answer only points at the rule reference. Longer answers
/// keep everything after the verdict sentence and cite the primary rule.
pub fn synthesize_explanation(answer: &str, rule_reference: &str) -> String {
    let sentences = split_sentences(answer);
    if sentences.len() <= 1 {
        return format!("Siehe {rule_reference}.");
    }

    let reasoning = sentences[1..].join(" ");
    annotate_with_reference(&reasoning, primary_citation(rule_reference))
}

/// Appends ` (Vgl. <reference>)` unless the text already cites it.
pub fn annotate_with_reference(text: &str, reference: &str) -> String {
    if reference.is_empty() || text.contains(reference) {
        return text.to_string();
    }
    format!("{text} (Vgl. {reference})")
}
