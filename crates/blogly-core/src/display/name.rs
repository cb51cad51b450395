/// Join name parts for display. An empty middle name is treated as absent.
pub fn compose_full_name(first: &str, middle: Option<&str>, last: &str) -> String {
    match middle.filter(|m| !m.is_empty()) {
        Some(middle) => format!("{first} {middle} {last}"),
        None => format!("{first} {last}"),
    }
}
