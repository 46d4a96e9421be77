//! Visit Notes Markdown
//!
//! Renders clinician notes with pulldown-cmark. Raw HTML inside notes is
//! shown as text, never injected into the page.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

/// Render notes to HTML
pub fn render_notes(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// First line of the notes, used as a preview
pub fn notes_preview(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
}
