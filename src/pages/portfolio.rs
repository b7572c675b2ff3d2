//! Portfolio management page.

use super::html::{call_to_action, card, grid, hero, link_button, paragraph, section, section_header};
use super::RenderContext;
use crate::router::PageId;

pub fn render(cx: &RenderContext<'_>) -> String {
    let start = link_button(&cx.href(PageId::Contact), &cx.text("portfolioPage.hero.button"), "primary");

    let pillars = grid(
        2,
        &["philosophy", "approach"].map(|name| {
            card(
                &cx.text(&format!("portfolioPage.overview.{}.title", name)),
                &paragraph(&cx.text(&format!("portfolioPage.overview.{}.description", name))),
            )
        }),
    );

    // Risk and return labels are shared; the values come from each strategy.
    let risk_label = cx.text("portfolioPage.strategies.riskLevel");
    let return_label = cx.text("portfolioPage.strategies.targetReturn");
    let strategies: Vec<String> = cx
        .items("portfolioPage.strategies.items")
        .map(|i| {
            let key = format!("portfolioPage.strategies.items.{}", i);
            card(
                &cx.text(&format!("{}.title", key)),
                &format!(
                    r#"{}<dl><dt>{}</dt><dd>{}</dd><dt>{}</dt><dd dir="ltr">{}</dd></dl>"#,
                    paragraph(&cx.text(&format!("{}.description", key))),
                    risk_label,
                    cx.text(&format!("{}.riskLevel", key)),
                    return_label,
                    cx.digits(&format!("{}.targetReturn", key))
                ),
            )
        })
        .collect();

    let steps: Vec<String> = cx
        .items("portfolioPage.process.steps")
        .map(|i| {
            let key = format!("portfolioPage.process.steps.{}", i);
            format!(
                r#"<div class="step"><span class="step-number">{}</span>{}</div>"#,
                cx.digits(&format!("{}.step", key)),
                card(
                    &cx.text(&format!("{}.title", key)),
                    &paragraph(&cx.text(&format!("{}.description", key)))
                )
            )
        })
        .collect();

    [
        hero(
            Some(&cx.text("portfolioPage.badge")),
            &cx.text("portfolioPage.hero.title"),
            &cx.text("portfolioPage.hero.description"),
            Some(&start),
        ),
        section(
            "overview",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("portfolioPage.overview.title"),
                    Some(&cx.text("portfolioPage.overview.description"))
                ),
                pillars
            ),
        ),
        section(
            "strategies",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("portfolioPage.strategies.title"),
                    Some(&cx.text("portfolioPage.strategies.description"))
                ),
                grid(3, &strategies)
            ),
        ),
        section(
            "process",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("portfolioPage.process.title"),
                    Some(&cx.text("portfolioPage.process.description"))
                ),
                grid(4, &steps)
            ),
        ),
        call_to_action(
            &cx.text("portfolioPage.cta.title"),
            &cx.text("portfolioPage.cta.description"),
            &[
                link_button(&cx.href(PageId::Contact), &cx.text("portfolioPage.cta.primaryBtn"), "primary"),
                link_button(&cx.href(PageId::Contact), &cx.text("portfolioPage.cta.secondaryBtn"), "secondary"),
            ],
        ),
    ]
    .concat()
}
