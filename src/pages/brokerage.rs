use super::html::{call_to_action, card, grid, hero, link_button, paragraph, section, section_header};
use super::RenderContext;
use crate::router::PageId;

/// Cards for a list of `{title, description}` items under `key`.
fn item_cards(cx: &RenderContext<'_>, key: &str) -> Vec<String> {
    cx.items(&format!("{}.items", key))
        .map(|i| {
            card(
                &cx.text(&format!("{}.items.{}.title", key, i)),
                &paragraph(&cx.text(&format!("{}.items.{}.description", key, i))),
            )
        })
        .collect()
}

pub fn render(cx: &RenderContext<'_>) -> String {
    let start = link_button(&cx.href(PageId::Contact), &cx.text("brokeragePage.hero.button"), "primary");

    let stats: Vec<String> = cx
        .items("brokeragePage.overview.stats")
        .map(|i| {
            let key = format!("brokeragePage.overview.stats.{}", i);
            format!(
                r#"<div class="stat"><strong dir="ltr">{}</strong><span>{}</span></div>"#,
                cx.digits(&format!("{}.value", key)),
                cx.text(&format!("{}.label", key))
            )
        })
        .collect();

    [
        hero(
            Some(&cx.text("nav.brokerage")),
            &cx.text("brokeragePage.hero.title"),
            &cx.text("brokeragePage.hero.description"),
            Some(&start),
        ),
        section(
            "overview",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("brokeragePage.overview.title"),
                    Some(&cx.text("brokeragePage.overview.description"))
                ),
                grid(4, &stats)
            ),
        ),
        section(
            "services",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("brokeragePage.services.title"),
                    Some(&cx.text("brokeragePage.services.description"))
                ),
                grid(2, &item_cards(cx, "brokeragePage.services"))
            ),
        ),
        section(
            "support",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("brokeragePage.support.title"),
                    Some(&cx.text("brokeragePage.support.description"))
                ),
                grid(2, &item_cards(cx, "brokeragePage.support"))
            ),
        ),
        call_to_action(
            &cx.text("brokeragePage.cta.title"),
            &cx.text("brokeragePage.cta.description"),
            &[
                link_button(&cx.href(PageId::Contact), &cx.text("brokeragePage.cta.primaryBtn"), "primary"),
                link_button(&cx.href(PageId::Contact), &cx.text("brokeragePage.cta.secondaryBtn"), "secondary"),
            ],
        ),
    ]
    .concat()
}
