//! Markdown rendering
//!
//! Renders cleaned recipe markdown to display HTML and pulls the document
//! title out of the first level-1 heading. Recipes without such a heading
//! get no title and are rejected by the builder.

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Rendered recipe content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    /// Text of the first non-empty `#`-Überschrift, if any.
    pub title: Option<String>,
}

pub fn render(markdown: &str) -> Rendered {
    let mut events = Vec::new();
    let mut title: Option<String> = None;
    let mut in_title = false;
    let mut buffer = String::new();

    for event in Parser::new_ext(markdown, Options::empty()) {
        match &event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if title.is_none() => {
                in_title = true;
                buffer.clear();
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if in_title => {
                in_title = false;
                let text = buffer.trim();
                if !text.is_empty() {
                    title = Some(text.to_string());
                }
            }
            Event::Text(text) if in_title => buffer.push_str(text),
            Event::Code(text) if in_title => buffer.push_str(text),
            _ => {}
        }
        events.push(event);
    }

    let mut html_out = String::new();
    html::push_html(&mut html_out, events.into_iter());

    Rendered {
        html: html_out,
        title,
    }
}
