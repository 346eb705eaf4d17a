//! FAQ parser: alternating `Q:` / `A:` lines → question/answer pairs.
//!
//! Infallible by design: lines that fit no rule are appended to the open
//! answer (if any) or dropped, and an item only counts once both halves
//! are present.

/// One parsed question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Parse `Q:`/`A:` formatted text into a list of FAQ items.
///
/// A lone `faq` heading line is skipped. A new `Q:` flushes the previous
/// pair; continuation lines extend the current answer with a space.
pub fn parse(raw: &str) -> Vec<FaqItem> {
    let mut items = Vec::new();
    let mut question: Option<String> = None;
    let mut answer: Option<String> = None;

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.eq_ignore_ascii_case("faq") {
            continue;
        }
        if let Some(rest) = line.strip_prefix("Q:") {
            flush(&mut items, &mut question, &mut answer);
            question = Some(rest.trim().to_string());
            continue;
        }
        if let Some(rest) = line.strip_prefix("A:") {
            answer = Some(rest.trim().to_string());
            continue;
        }
        if let Some(a) = answer.as_mut() {
            a.push(' ');
            a.push_str(line);
        }
    }
    flush(&mut items, &mut question, &mut answer);
    items
}

fn flush(items: &mut Vec<FaqItem>, question: &mut Option<String>, answer: &mut Option<String>) {
    if let (Some(q), Some(a)) = (question.take(), answer.take()) {
        items.push(FaqItem {
            question: q,
            answer: a,
        });
    }
    *question = None;
    *answer = None;
}
