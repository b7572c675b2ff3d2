//! Landing page.

use super::html::{card, grid, hero, link_button, paragraph, section, section_header};
use super::RenderContext;
use crate::router::PageId;

const HIGHLIGHTS: [&str; 4] = ["licensed", "team", "transparency", "technology"];
const INSIGHTS: [&str; 3] = ["energy", "forex", "hedging"];

pub fn render(cx: &RenderContext<'_>) -> String {
    let cta = link_button(&cx.href(PageId::Contact), &cx.text("home.heroCta"), "primary");

    let services: Vec<String> = PageId::SERVICES
        .iter()
        .map(|page| {
            let key = format!("quick.{}", page);
            card(
                &cx.text(&format!("{}.title", key)),
                &format!(
                    "{}{}",
                    paragraph(&cx.text(&format!("{}.desc", key))),
                    link_button(&cx.href(*page), &cx.text("common.learnMore"), "outline")
                ),
            )
        })
        .collect();

    let highlights: Vec<String> = HIGHLIGHTS
        .iter()
        .map(|name| {
            format!(
                r#"<div class="highlight">{}</div>"#,
                paragraph(&cx.text(&format!("trust.highlights.{}", name)))
            )
        })
        .collect();

    let insights: String = INSIGHTS
        .iter()
        .map(|name| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                cx.href(PageId::Insights),
                cx.text(&format!("insights.{}", name))
            )
        })
        .collect();

    [
        hero(None, &cx.text("home.heroTitle"), &cx.text("home.heroSubtitle"), Some(&cta)),
        section(
            "services",
            &format!("{}{}", section_header(&cx.text("quick.title"), None), grid(3, &services)),
        ),
        section(
            "trust",
            &format!("{}{}", section_header(&cx.text("trust.title"), None), grid(2, &highlights)),
        ),
        section(
            "about",
            &format!(
                "{}{}{}",
                section_header(&cx.text("about.title"), None),
                paragraph(&cx.text("about.description")),
                link_button(&cx.href(PageId::About), &cx.text("common.learnMore"), "secondary")
            ),
        ),
        section(
            "insights",
            &format!(
                r#"{}<ul class="insight-list">{}</ul>{}"#,
                section_header(&cx.text("insights.title"), None),
                insights,
                link_button(&cx.href(PageId::Insights), &cx.text("insights.viewAll"), "outline")
            ),
        ),
    ]
    .concat()
}
