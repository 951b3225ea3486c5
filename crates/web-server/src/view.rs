//! Server-side rendering of the index page.

use database::TextRecord;
use std::fmt::Write;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Texts</title>
</head>
<body>
    <h1>Texts</h1>
    <form action="/add" method="post">
        <input type="text" name="content" placeholder="New text" required>
        <button type="submit">Add</button>
    </form>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Renders every record with its edit and delete forms.
pub fn render_index(records: &[TextRecord]) -> String {
    let mut page = String::from(PAGE_HEAD);

    if records.is_empty() {
        page.push_str("    <p>No texts yet.</p>\n");
    } else {
        page.push_str("    <ul>\n");
        for record in records {
            let content = escape_html(&record.content);
            let _ = write!(
                page,
                r#"        <li>
            <span class="id">{id}</span>
            <span class="content">{content}</span>
            <form action="/edit/{id}" method="post">
                <input type="text" name="content" value="{content}">
                <button type="submit">Edit</button>
            </form>
            <form action="/delete/{id}" method="post">
                <button type="submit">Delete</button>
            </form>
        </li>
"#,
                id = record.id,
                content = content,
            );
        }
        page.push_str("    </ul>\n");
    }

    page.push_str(PAGE_TAIL);
    page
}

/// Escapes text for use in element content and double-quoted attributes.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
