/// Split a full given-name string into (first, second).
///
/// The first whitespace-separated token becomes the first name; the second
/// token, when present, becomes the second name. Further tokens are ignored.
pub fn split_name(full: &str) -> (String, String) {
    let mut tokens = full.split_whitespace();
    let first = tokens.next().unwrap_or("").to_string();
    let second = tokens.next().unwrap_or("").to_string();
    (first, second)
}
