//! Small HTML building blocks shared by the page renderers.
//!
//! Helpers take markup, not text: pass strings through `escape_html` (or
//! `RenderContext::text`) before handing them over.

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// A full-width page section with a centered container.
pub fn section(class: &str, inner: &str) -> String {
    format!(
        r#"<section class="{}"><div class="container">{}</div></section>"#,
        class, inner
    )
}

/// Centered section heading with an optional lead paragraph.
pub fn section_header(title: &str, description: Option<&str>) -> String {
    match description {
        Some(description) => format!(
            r#"<header class="section-header"><h2>{}</h2><p class="lead">{}</p></header>"#,
            title, description
        ),
        None => format!(r#"<header class="section-header"><h2>{}</h2></header>"#, title),
    }
}

/// Page hero banner.
pub fn hero(badge: Option<&str>, title: &str, description: &str, action: Option<&str>) -> String {
    let badge = badge
        .map(|badge| format!(r#"<span class="badge">{}</span>"#, badge))
        .unwrap_or_default();

    section(
        "hero",
        &format!(
            r#"{}<h1>{}</h1><p class="lead">{}</p>{}"#,
            badge,
            title,
            description,
            action.unwrap_or_default()
        ),
    )
}

pub fn card(title: &str, body: &str) -> String {
    format!(r#"<article class="card"><h3>{}</h3>{}</article>"#, title, body)
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", text)
}

/// A link styled as a button. `class` selects the variant ("primary", "secondary", "outline").
pub fn link_button(href: &str, label: &str, class: &str) -> String {
    format!(
        r#"<a class="button {}" href="{}">{}</a>"#,
        class,
        escape_html(href),
        label
    )
}

pub fn bullet_list(items: &[String]) -> String {
    let items: String = items.iter().map(|item| format!("<li>{}</li>", item)).collect();
    format!("<ul>{}</ul>", items)
}

/// Lay cards out in a responsive grid.
pub fn grid(columns: usize, cards: &[String]) -> String {
    format!(r#"<div class="grid cols-{}">{}</div>"#, columns, cards.concat())
}

/// Closing call-to-action band with one or two buttons.
pub fn call_to_action(title: &str, description: &str, buttons: &[String]) -> String {
    section(
        "cta",
        &format!(
            r#"<h2>{}</h2><p class="lead">{}</p><div class="actions">{}</div>"#,
            title,
            description,
            buttons.concat()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passes_through_plain_and_persian_text() {
        assert_eq!(escape_html("Hedging Solutions"), "Hedging Solutions");
        assert_eq!(escape_html("راهکارهای پوشش ریسک"), "راهکارهای پوشش ریسک");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_is_not_idempotent_on_entities() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_section_header_with_and_without_description() {
        assert_eq!(
            section_header("Title", None),
            r#"<header class="section-header"><h2>Title</h2></header>"#
        );
        assert!(section_header("Title", Some("Lead")).contains(r#"<p class="lead">Lead</p>"#));
    }

    #[test]
    fn test_hero_optional_parts() {
        let plain = hero(None, "T", "D", None);
        assert!(!plain.contains("badge"));
        assert!(plain.contains("<h1>T</h1>"));

        let full = hero(Some("B"), "T", "D", Some("<a>go</a>"));
        assert!(full.contains(r#"<span class="badge">B</span>"#));
        assert!(full.contains("<a>go</a>"));
    }

    #[test]
    fn test_link_button_escapes_href() {
        assert_eq!(
            link_button("/a?b=1&c=2", "Go", "primary"),
            r#"<a class="button primary" href="/a?b=1&amp;c=2">Go</a>"#
        );
    }

    #[test]
    fn test_bullet_list_and_grid() {
        assert_eq!(
            bullet_list(&["a".to_string(), "b".to_string()]),
            "<ul><li>a</li><li>b</li></ul>"
        );
        assert_eq!(
            grid(2, &["x".to_string(), "y".to_string()]),
            r#"<div class="grid cols-2">xy</div>"#
        );
    }
}
