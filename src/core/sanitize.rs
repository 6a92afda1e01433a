// src/core/sanitize.rs

/// Collapse whitespace runs to single spaces and trim.
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

/// Digit-strip parse: drop everything but digits and '-', then convert.
/// "AC 17" → 17, "+4" → 4, "30 ft." → 30.
pub fn parse_int_opt(s: &str) -> Option<i32> {
    let t: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect();
    t.parse().ok()
}

/// Same, with a default instead of an error. Field extractors never fail.
pub fn parse_int(s: &str, default: i32) -> i32 {
    parse_int_opt(s).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  Wood \n\t Elf  "), "Wood Elf");
        assert_eq!(normalize_ws("already clean"), "already clean");
    }

    #[test]
    fn parse_int_strips_non_digits() {
        assert_eq!(parse_int("AC 17", 10), 17);
        assert_eq!(parse_int("+4", 2), 4);
        assert_eq!(parse_int("30 ft.", 0), 30);
        assert_eq!(parse_int("-2", 0), -2);
    }

    #[test]
    fn parse_int_defaults_on_garbage() {
        assert_eq!(parse_int("", 10), 10);
        assert_eq!(parse_int("—", 2), 2);
        assert_eq!(parse_int_opt("-"), None);
    }
}
