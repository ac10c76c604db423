/// Canonicalizes raw essay text: CRLF line endings become LF and
/// leading/trailing whitespace is stripped.
///
/// The canonical form is what gets embedded into the prompt and is the
/// universe against which key-sentence exact matches are judged. The
/// function is idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    // Rewriting a CRLF pair can expose a new one (`\r\r\n` becomes `\r\n`),
    // so replace to a fixed point.
    let mut out = raw.to_string();
    while out.contains("\r\n") {
        out = out.replace("\r\n", "\n");
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_crlf_and_trims() {
        assert_eq!(normalize("  a\r\nb\r\n"), "a\nb");
    }

    #[test]
    fn idempotent() {
        for s in [
            "",
            "   ",
            "plain",
            "\r\n원자력은 안전하다.\r\n",
            "mixed\nendings\r\nhere  ",
            "\t tab edges \t",
            "a\r\r\nb",
            "\r\r\r\n\n",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn stacked_cr_before_crlf_collapses_fully() {
        // "a\r\r\nb" → rewriting the trailing pair exposes "a\r\nb"; the
        // canonical form must already be the fully collapsed "a\nb".
        assert_eq!(normalize("a\r\r\nb"), "a\nb");
    }

    #[test]
    fn lone_cr_is_preserved() {
        // Only the CRLF pair is rewritten; a bare CR is essay content.
        assert_eq!(normalize("a\rb"), "a\rb");
    }
}
