// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Collapse whitespace; an empty result becomes `None`.
pub fn non_empty(s: &str) -> Option<String> {
    let t = normalize_ws(s);
    if t.is_empty() { None } else { Some(t) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  New Listing\n Nike   Air "), "New Listing Nike Air");
    }

    #[test]
    fn non_empty_drops_blank() {
        assert_eq!(non_empty(" \n\t"), None);
        assert_eq!(non_empty(" $5.99 ").as_deref(), Some("$5.99"));
    }
}
