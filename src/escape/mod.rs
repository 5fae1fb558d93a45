//! Context-specific escaping.
//!
//! # Responsibilities
//! - Escape values for embedding in JSON, HTML, YAML, and POSIX shell output
//! - Percent-encode variable names for use in URLs
//! - Decide when a YAML scalar must be quoted
//!
//! # Design Decisions
//! - Every function is pure and total: any input string yields an output,
//!   no error paths
//! - Escaping is byte-oriented; non-ASCII passes through untouched (no
//!   `\uXXXX` escapes in JSON output)
//! - Renderers rely on these functions for all injection safety; nothing
//!   else in the crate touches untrusted bytes

/// Escape a string for embedding inside a JSON string literal.
///
/// Backslash, double quote, and the control characters `\b \f \n \r \t`
/// become their two-character JSON escapes. Everything else is unchanged.
pub fn escape_json(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape the five HTML-significant characters as entities.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a scalar in double quotes, backslash-escaping `"`, `\` and newlines.
///
/// Only called when [`needs_yaml_quoting`] returns true; unquoted scalars
/// are emitted verbatim by the YAML renderer.
pub fn escape_yaml(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');
    for c in input.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Characters that force a YAML scalar into quoted form.
const YAML_SPECIAL: &str = ":{}[],&*#?|-<>=!%@\\\"'";

/// YAML reserved scalars that would be parsed as booleans or null.
const YAML_RESERVED: [&str; 7] = ["true", "false", "null", "yes", "no", "on", "off"];

/// Whether a scalar must be double-quoted to survive a YAML parser intact.
///
/// True for empty strings, strings containing YAML indicator characters or
/// newlines, and case-insensitive matches of the reserved scalars.
pub fn needs_yaml_quoting(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    if value.chars().any(|c| c == '\n' || YAML_SPECIAL.contains(c)) {
        return true;
    }
    YAML_RESERVED
        .iter()
        .any(|r| value.eq_ignore_ascii_case(r))
}

/// Escape a value for use inside a double-quoted POSIX shell string.
///
/// `\`, `"` and newlines get a preceding backslash; the shell renderer
/// supplies the surrounding quotes.
pub fn escape_shell_double(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '\\' || c == '"' || c == '\n' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Percent-encode everything except ASCII alphanumerics and `- _ . ~`.
///
/// Uses uppercase hex digits, one `%XX` per byte of the UTF-8 encoding.
pub fn escape_url_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", b));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_escape_round_trip() {
        let escaped = escape_json("a\"b\\c\n");
        assert_eq!(escaped, "a\\\"b\\\\c\\n");

        // The escaped form must decode back through a real JSON parser.
        let decoded: String =
            serde_json::from_str(&format!("\"{}\"", escaped)).unwrap();
        assert_eq!(decoded, "a\"b\\c\n");
    }

    #[test]
    fn test_json_escape_controls() {
        assert_eq!(escape_json("\u{8}\u{c}\r\t"), "\\b\\f\\r\\t");
        assert_eq!(escape_json(""), "");
        assert_eq!(escape_json("héllo"), "héllo"); // non-ASCII untouched
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(escape_html("<a>&'\""), "&lt;a&gt;&amp;&#39;&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_yaml_escape() {
        assert_eq!(escape_yaml("a\"b"), "\"a\\\"b\"");
        assert_eq!(escape_yaml("a\\b"), "\"a\\\\b\"");
        assert_eq!(escape_yaml("a\nb"), "\"a\\nb\"");
        assert_eq!(escape_yaml(""), "\"\"");
    }

    #[test]
    fn test_yaml_quoting_decision() {
        assert!(needs_yaml_quoting("true"));
        assert!(needs_yaml_quoting("TRUE"));
        assert!(needs_yaml_quoting("No"));
        assert!(needs_yaml_quoting(""));
        assert!(needs_yaml_quoting("a:b"));
        assert!(needs_yaml_quoting("-dash"));
        assert!(needs_yaml_quoting("line\nbreak"));
        assert!(needs_yaml_quoting("100%"));
        assert!(!needs_yaml_quoting("hello"));
        assert!(!needs_yaml_quoting("/usr/bin"));
        assert!(!needs_yaml_quoting("truthy")); // prefix of reserved word is fine
    }

    #[test]
    fn test_shell_escape() {
        assert_eq!(escape_shell_double("a\"b"), "a\\\"b");
        assert_eq!(escape_shell_double("a\\b"), "a\\\\b");
        assert_eq!(escape_shell_double("a\nb"), "a\\\nb");
        assert_eq!(escape_shell_double("$HOME"), "$HOME");
    }

    #[test]
    fn test_url_escape() {
        assert_eq!(escape_url_component("a b/c"), "a%20b%2Fc");
        assert_eq!(escape_url_component("A-z_0.~"), "A-z_0.~");
        assert_eq!(escape_url_component("é"), "%C3%A9"); // per UTF-8 byte
    }
}
