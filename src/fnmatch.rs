// Shell-style matching for host patterns: `*` and `?` only, no character
// classes. Host names compare ASCII case-insensitively. Iterative with
// single-star backtracking, so long patterns cannot blow the stack.
pub fn fnmatch(pattern: &str, text: &str) -> bool {
    let pat = pattern.as_bytes();
    let txt = text.as_bytes();

    let mut p = 0;
    let mut t = 0;
    let mut star: Option<(usize, usize)> = None;

    while t < txt.len() {
        if p < pat.len() && (pat[p] == b'?' || pat[p].eq_ignore_ascii_case(&txt[t])) {
            p += 1;
            t += 1;
        } else if p < pat.len() && pat[p] == b'*' {
            // Tentatively match zero characters; remember where to retry.
            star = Some((p, t));
            p += 1;
        } else if let Some((star_p, star_t)) = star {
            // Backtrack: let the last `*` swallow one more character.
            p = star_p + 1;
            t = star_t + 1;
            star = Some((star_p, star_t + 1));
        } else {
            return false;
        }
    }

    while p < pat.len() && pat[p] == b'*' {
        p += 1;
    }
    p == pat.len()
}

#[cfg(test)]
mod tests {
    use super::fnmatch;

    #[test]
    fn literal_patterns_match_exactly() {
        assert!(fnmatch("example.com", "example.com"));
        assert!(!fnmatch("example.com", "example.org"));
        assert!(!fnmatch("example.com", "www.example.com"));
    }

    #[test]
    fn matching_ignores_ascii_case() {
        assert!(fnmatch("Example.COM", "example.com"));
        assert!(fnmatch("*.Example.com", "www.EXAMPLE.com"));
    }

    #[test]
    fn star_matches_any_run() {
        assert!(fnmatch("*", "anything.at.all"));
        assert!(fnmatch("*.example.com", "www.example.com"));
        assert!(fnmatch("*.example.com", "a.b.example.com"));
        assert!(!fnmatch("*.example.com", "example.com"));
        assert!(fnmatch("10.0.*", "10.0.1.25"));
    }

    #[test]
    fn question_mark_matches_one_character() {
        assert!(fnmatch("host-?", "host-1"));
        assert!(!fnmatch("host-?", "host-12"));
        assert!(!fnmatch("host-?", "host-"));
    }

    #[test]
    fn empty_pattern_only_matches_empty_text() {
        assert!(fnmatch("", ""));
        assert!(!fnmatch("", "x"));
        assert!(fnmatch("***", ""));
    }

    #[test]
    fn star_backtracks_past_false_starts() {
        assert!(fnmatch("*.com", "a.com.b.com"));
        assert!(fnmatch("a*b*c", "a-x-b-y-b-z-c"));
        assert!(!fnmatch("a*b*c", "a-x-b-y"));
    }
}
