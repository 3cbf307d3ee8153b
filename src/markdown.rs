//! Markdown view of a report for the page.
//!
//! Raw HTML in the model output is turned into text events so it is escaped
//! rather than injected. The report text itself is never modified.

use pulldown_cmark::{html, Event, Options, Parser};

pub fn render_report_html(report: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(report, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(report.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
