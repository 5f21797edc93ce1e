use std::borrow::Cow;
use std::fmt::Write;

use axum::http::StatusCode;

use crate::store::Record;

const STYLE: &str = r#"
    body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
    table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
    th, td { border: 1px solid #999; padding: 0.4rem 0.6rem; text-align: left; }
    th { background: #2346b0; color: #f5f5f5; }
    tr:nth-child(even) td { background: #f0f0f0; }
    form label { display: block; margin-top: 0.5rem; }
"#;

/// Escape text for HTML element content and double-quoted attribute values.
pub fn html_escape(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn drama_form(action: &str, name: &str, genre: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
  <label>Drama name <input type="text" name="drama_name" value="{name}" required></label>
  <label>Genre <input type="text" name="genre" value="{genre}" required></label>
  <button type="submit">{submit}</button>
</form>"#,
        action = html_escape(action),
        name = html_escape(name),
        genre = html_escape(genre),
    )
}

/// GET / — table of every record plus the add form.
pub fn index_page(records: &[Record]) -> String {
    let mut body = String::from("<h1>My K-Dramas</h1>\n");

    if records.is_empty() {
        body.push_str("<p>No dramas saved yet.</p>\n");
    } else {
        body.push_str("<table>\n  <tr><th>Drama Name</th><th>Genre</th><th></th></tr>\n");
        for (index, record) in records.iter().enumerate() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                body,
                r#"  <tr><td>{name}</td><td>{genre}</td><td><a href="/edit/{index}">Edit</a> <a href="/delete/{index}">Delete</a></td></tr>"#,
                name = html_escape(&record.name),
                genre = html_escape(&record.genre),
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h2>Add a drama</h2>\n");
    body.push_str(&drama_form("/", "", "", "Add"));
    body.push_str("\n<p><a href=\"/download_pdf\">Download PDF</a></p>");

    page("My K-Dramas", &body)
}

/// GET /edit/{index} — form pre-filled with the record's current values.
pub fn edit_page(index: usize, record: &Record) -> String {
    let body = format!(
        "<h1>Edit drama</h1>\n{form}\n<p><a href=\"/\">Back</a></p>",
        form = drama_form(
            &format!("/edit/{index}"),
            &record.name,
            &record.genre,
            "Save"
        ),
    );
    page("Edit drama", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{status}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to list</a></p>",
        status = status,
        message = html_escape(message),
    );
    page(status.canonical_reason().unwrap_or("Error"), &body)
}
