//! Nested list HTML for rendered menus.
//!
//! ```html
//! <ul class="nav">
//!   <li class="selected-path" id="nav-about"><a href="/about">About</a>
//!     <ul><li class="selected selected-path" id="nav-team"><a href="/about/team">Team</a></li></ul>
//!   </li>
//! </ul>
//! ```
//!
//! Output has no whitespace between tags.

use crate::item::{Menu, RenderItem};

impl Menu {
    /// Serialize as nested `<ul>`/`<li>` markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<ul");
        if let Some(class) = &self.css_class {
            push_attr(&mut out, "class", class);
        }
        out.push('>');
        for item in &self.items {
            push_item(&mut out, item);
        }
        out.push_str("</ul>");
        out
    }
}

fn push_item(out: &mut String, item: &RenderItem) {
    out.push_str("<li");
    if !item.markers.is_empty() {
        push_attr(out, "class", &item.markers.join(" "));
    }
    if let Some(id) = &item.dom_id {
        push_attr(out, "id", id);
    }
    out.push('>');

    out.push_str("<a");
    push_attr(out, "href", &item.href);
    out.push('>');
    out.push_str(&escape_html(&item.label));
    out.push_str("</a>");

    if !item.children.is_empty() {
        out.push_str("<ul>");
        for child in &item.children {
            push_item(out, child);
        }
        out.push_str("</ul>");
    }
    out.push_str("</li>");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Escape text for HTML content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
