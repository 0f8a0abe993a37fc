//! Splits story text into page-sized, sentence-aligned chunks.

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Sentences are maximal runs of non-terminators followed by one or more
/// terminators. Trailing text with no terminator is dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_terminators = false;

    for (idx, ch) in text.char_indices() {
        let is_terminator = TERMINATORS.contains(&ch);
        if in_terminators && !is_terminator {
            push_trimmed(&mut out, &text[start..idx]);
            start = idx;
        }
        in_terminators = is_terminator;
    }
    if in_terminators {
        push_trimmed(&mut out, &text[start..]);
    }

    out
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, raw: &'a str) {
    // A run of terminators with nothing before it is not a sentence.
    if raw.chars().any(|c| !TERMINATORS.contains(&c)) {
        out.push(raw.trim());
    }
}

/// Distributes sentences over `page_count` pages, `ceil(n / page_count)`
/// consecutive sentences per page. With fewer sentences than pages each
/// sentence becomes its own page. Empty pages are dropped, never refilled.
pub fn split_story(text: &str, page_count: usize) -> Vec<String> {
    let page_count = page_count.max(1);
    let sentences = sentences(text);

    if sentences.len() < page_count {
        return sentences.into_iter().map(str::to_string).collect();
    }

    let per_page = sentences.len().div_ceil(page_count);
    (0..page_count)
        .map(|page| {
            let start = (page * per_page).min(sentences.len());
            let end = (start + per_page).min(sentences.len());
            sentences[start..end].join(" ")
        })
        .filter(|chunk| !chunk.is_empty())
        .collect()
}
