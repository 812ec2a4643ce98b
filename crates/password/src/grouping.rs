/// Group characters for entry on mobile keyboards.
///
/// Characters are ordered upper-case first, then lower-case,
/// numeric and everything else; the relative order within each
/// group is preserved.
pub fn group_for_mobile(value: &str) -> String {
    let mut upper = String::new();
    let mut lower = String::new();
    let mut numeric = String::new();
    let mut other = String::new();
    for c in value.chars() {
        if c.is_uppercase() {
            upper.push(c);
        } else if c.is_lowercase() {
            lower.push(c);
        } else if c.is_numeric() {
            numeric.push(c);
        } else {
            other.push(c);
        }
    }
    upper + &lower + &numeric + &other
}
