//! String utilities for the domain layer.

/// Cap a string at `max_chars` characters, appending `…` when cut.
///
/// Counts Unicode scalar values, not bytes, so Spanish accents and
/// emoji never split.
pub fn cap(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}…", &s[..end]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_short_text_unchanged() {
        assert_eq!(cap("hola", 10), "hola");
        assert_eq!(cap("hola", 4), "hola");
    }

    #[test]
    fn test_cap_ascii() {
        assert_eq!(cap("hello world", 5), "hello…");
    }

    #[test]
    fn test_cap_multibyte() {
        assert_eq!(cap("métricas clave", 3), "mét…");
        assert_eq!(cap("👋🌍🎉", 2), "👋🌍…");
    }

    #[test]
    fn test_cap_empty() {
        assert_eq!(cap("", 3), "");
    }
}
