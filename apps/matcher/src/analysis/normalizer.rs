/// Canonicalizes text for keyword and similarity analysis.
///
/// Lower-cases, replaces everything except `a-z`, `0-9`, whitespace, `+` and `#`
/// with a space, then collapses whitespace. `+` and `#` survive so that skill
/// tokens such as `c++` and `c#` stay intact.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| if is_kept(c) || c.is_whitespace() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+' || c == '#'
}
