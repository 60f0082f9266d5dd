//! Page shell and text escaping for server-rendered HTML.

pub const NAV_HTML: &str = include_str!("../templates/nav.html");

/// Escape text for element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Wrap `body` in the shared document shell. `title` is escaped.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>GOAT Rank | {}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{}
<main class="main-content">
{}
</main>
</body>
</html>"#,
        escape(title),
        NAV_HTML,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>"O'Neal" & co</b>"#), "&lt;b&gt;&quot;O&#39;Neal&quot; &amp; co&lt;/b&gt;");
        assert_eq!(escape("Tim Duncan"), "Tim Duncan");
    }

    #[test]
    fn test_page_includes_nav() {
        let html = page("Home", "<p>hi</p>");
        assert!(html.contains("/questions"));
        assert!(html.contains("<p>hi</p>"));
    }
}
