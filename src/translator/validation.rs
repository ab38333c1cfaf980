/// A definition name: non-empty, starts with a letter, then letters, digits
/// or `_`. Letters and digits are Unicode-aware.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
