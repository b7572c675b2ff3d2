//! Market insights page: a fixed list of article teasers.

use super::html::{call_to_action, grid, hero, link_button, paragraph, section, section_header};
use super::RenderContext;
use crate::router::PageId;

pub fn render(cx: &RenderContext<'_>) -> String {
    let read_more = cx.text("insightsPage.latest.readMore");
    let articles: Vec<String> = cx
        .items("insightsPage.items")
        .map(|i| {
            let key = format!("insightsPage.items.{}", i);
            format!(
                concat!(
                    r#"<article class="card insight">"#,
                    r#"<p class="meta"><span class="tag">{}</span> <span>{}</span></p>"#,
                    "<h3>{}</h3>{}",
                    r#"<p class="byline">{} · <time>{}</time></p>"#,
                    r#"<span class="read-more">{}</span>"#,
                    "</article>"
                ),
                cx.text(&format!("{}.category", key)),
                cx.digits(&format!("{}.readTime", key)),
                cx.text(&format!("{}.title", key)),
                paragraph(&cx.text(&format!("{}.excerpt", key))),
                cx.text(&format!("{}.author", key)),
                cx.digits(&format!("{}.date", key)),
                read_more
            )
        })
        .collect();

    [
        hero(
            Some(&cx.text("insightsPage.badge")),
            &cx.text("insightsPage.hero.title"),
            &cx.text("insightsPage.hero.description"),
            None,
        ),
        section(
            "latest",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("insightsPage.latest.title"),
                    Some(&cx.text("insightsPage.latest.description"))
                ),
                grid(3, &articles)
            ),
        ),
        call_to_action(
            &cx.text("insightsPage.comingSoon.title"),
            &cx.text("insightsPage.comingSoon.description"),
            &[link_button(
                &cx.href(PageId::Contact),
                &cx.text("insightsPage.comingSoon.button"),
                "primary",
            )],
        ),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, LanguageContext, ResolutionMetrics, TranslationTable};
    use crate::pages::navigate_href;
    use std::sync::Arc;

    #[test]
    fn test_renders_three_articles() {
        let language = LanguageContext::new(
            Arc::new(TranslationTable::embedded().unwrap()),
            Arc::new(ResolutionMetrics::new()),
            Language::ENGLISH,
        );
        let html = render(&RenderContext::new(&language, PageId::Insights, &navigate_href));

        assert_eq!(html.matches(r#"<article class="card insight">"#).count(), 3);
        assert!(html.contains("ESG Investing: Beyond the Hype"));
    }
}
