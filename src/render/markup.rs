//! Small helpers shared by the markup generators.

/// Format a coordinate the way a browser stringifies numbers: integers without a
/// fractional part, shortest round-trip otherwise, and never `-0`.
pub fn num(v: f64) -> String {
    // Adding +0.0 folds -0.0 into 0.0.
    format!("{}", v + 0.0)
}

/// `<text>` element anchored at (x, y).
pub fn text(x: impl std::fmt::Display, y: impl std::fmt::Display, body: &str) -> String {
    format!(r#"<text x="{x}" y="{y}">{}</text>"#, escape(body))
}

/// Escape the five XML-significant characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
