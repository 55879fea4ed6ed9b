//! Quoting of caller text for embedding in generated scripts
//!
//! Both functions are total and pure. Input that contains none of the
//! escaped characters is returned unchanged.

/// Escape for a double-quoted AppleScript string literal.
///
/// `\` becomes `\\` and `"` becomes `\"`.
pub fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape for an expanding (double-quoted or here-string) PowerShell string.
///
/// `` ` `` becomes ``` `` ```, `"` becomes `` `" `` and `$` becomes `` `$ ``
/// so no variable or subexpression is expanded. XML-significant characters
/// (`<`, `&`) pass through untouched; see `render_toast_script`.
pub fn escape_powershell(s: &str) -> String {
    s.replace('`', "``").replace('"', "`\"").replace('$', "`$")
}

/// Quote a value as a single-quoted PowerShell literal (`'` doubled).
pub(crate) fn quote_powershell_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverse of AppleScript's own escape handling inside `"..."`
    fn unescape_applescript(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Reverse of PowerShell's backtick escapes inside `"..."`
    fn unescape_powershell(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '`' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    const SAMPLES: &[&str] = &[
        "",
        "hello",
        r#"say "hi""#,
        r"C:\path\to\file",
        r#"\""#,
        "tick ` tock",
        "``\"\"",
        "multi\nline",
        "cost $total",
        "$(Remove-Item C:\\x)",
        "`$env:PATH",
        "ünïcødé ✓",
    ];

    #[test]
    fn applescript_escapes_backslash_and_quote() {
        assert_eq!(escape_applescript(r#"a\b"c"#), r#"a\\b\"c"#);
    }

    #[test]
    fn powershell_escapes_backtick_and_quote() {
        assert_eq!(escape_powershell("a`b\"c"), "a``b`\"c");
    }

    #[test]
    fn powershell_escapes_dollar() {
        assert_eq!(escape_powershell("cost $total"), "cost `$total");
        assert_eq!(escape_powershell("$(whoami)"), "`$(whoami)");
        assert_eq!(escape_powershell("`$x"), "```$x");
    }

    #[test]
    fn powershell_output_has_no_bare_dollar() {
        for s in SAMPLES {
            let escaped = escape_powershell(s);
            let bytes = escaped.as_bytes();
            for (i, b) in bytes.iter().enumerate() {
                if *b == b'$' {
                    let ticks = bytes[..i].iter().rev().take_while(|c| **c == b'`').count();
                    assert_eq!(ticks % 2, 1, "bare dollar in {escaped}");
                }
            }
        }
    }

    #[test]
    fn clean_input_is_unchanged() {
        for s in ["hello", "GO APP", "bingmaps:?q=x", "100%"] {
            assert_eq!(escape_applescript(s), s);
            assert_eq!(escape_powershell(s), s);
        }
    }

    #[test]
    fn applescript_unescape_restores_input() {
        for s in SAMPLES {
            assert_eq!(unescape_applescript(&escape_applescript(s)), *s);
        }
    }

    #[test]
    fn powershell_unescape_restores_input() {
        for s in SAMPLES {
            assert_eq!(unescape_powershell(&escape_powershell(s)), *s);
        }
    }

    #[test]
    fn escaped_output_has_no_bare_quote() {
        for s in SAMPLES {
            let escaped = escape_applescript(s);
            let bytes = escaped.as_bytes();
            for (i, b) in bytes.iter().enumerate() {
                if *b == b'"' {
                    let backslashes = bytes[..i].iter().rev().take_while(|c| **c == b'\\').count();
                    assert_eq!(backslashes % 2, 1, "bare quote in {escaped}");
                }
            }
        }
    }

    #[test]
    fn xml_characters_pass_through() {
        assert_eq!(escape_powershell("a & <b>"), "a & <b>");
    }

    #[test]
    fn single_quote_literal() {
        assert_eq!(quote_powershell_literal(r"C:\Temp\x.ps1"), r"'C:\Temp\x.ps1'");
        assert_eq!(quote_powershell_literal("it's"), "'it''s'");
    }
}
