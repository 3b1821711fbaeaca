//! Candidate-name censoring for anonymized exports.
//!
//! Words longer than two characters keep their first letter; the remaining
//! characters become `*`. Whitespace and hyphens are separators and are kept
//! verbatim, so `"MÁRIO ROQUE - SHOPPING"` becomes `"M**** R**** - S*******"`.

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

pub fn censor_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word = String::new();
    for c in name.chars() {
        if is_separator(c) {
            push_censored(&mut out, &word);
            word.clear();
            out.push(c);
        } else {
            word.push(c);
        }
    }
    push_censored(&mut out, &word);
    out
}

fn push_censored(out: &mut String, word: &str) {
    let mut chars = word.chars();
    let count = word.chars().count();
    if count <= 2 {
        out.push_str(word);
        return;
    }
    if let Some(first) = chars.next() {
        out.push(first);
        out.extend(std::iter::repeat('*').take(count - 1));
    }
}
