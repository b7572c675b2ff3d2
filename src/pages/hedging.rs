//! Hedging solutions page.

use super::html::{bullet_list, call_to_action, card, grid, hero, link_button, paragraph, section, section_header};
use super::RenderContext;
use crate::router::PageId;

const COMMODITIES: [&str; 3] = ["energy", "metals", "agriculture"];

/// Major currency pairs, collapsed behind the forex card's link text.
fn currency_list(cx: &RenderContext<'_>) -> String {
    let pairs: String = cx
        .items("hedging.products.markets.forex.currencies")
        .map(|i| {
            format!(
                "<li>{}</li>",
                cx.text(&format!("hedging.products.markets.forex.currencies.{}", i))
            )
        })
        .collect();

    format!(
        r#"<details class="currency-list"><summary>{}</summary><ul class="grid cols-2">{}</ul></details>"#,
        cx.text("hedging.products.markets.forex.linkText"),
        pairs
    )
}

pub fn render(cx: &RenderContext<'_>) -> String {
    let cta = link_button(&cx.href(PageId::Contact), &cx.text("hedging.cta.primaryBtn"), "primary");

    let clients: Vec<String> = cx
        .items("hedging.whoWeServe.clients")
        .map(|i| cx.text(&format!("hedging.whoWeServe.clients.{}", i)))
        .collect();

    let commodities: Vec<String> = COMMODITIES
        .iter()
        .map(|name| cx.text(&format!("hedging.products.markets.commodities.{}", name)))
        .collect();

    let markets = grid(
        3,
        &[
            card(
                &cx.text("hedging.products.exchanges.title"),
                &paragraph(&cx.text("hedging.products.exchanges.description")),
            ),
            card(
                &cx.text("hedging.products.markets.commodities.title"),
                &bullet_list(&commodities),
            ),
            card(
                &cx.text("hedging.products.markets.forex.title"),
                &format!(
                    "{}{}",
                    paragraph(&cx.text("hedging.products.markets.forex.description")),
                    currency_list(cx)
                ),
            ),
        ],
    );

    let steps: Vec<String> = cx
        .items("hedging.process.steps")
        .map(|i| {
            let key = format!("hedging.process.steps.{}", i);
            format!(
                r#"<div class="step"><span class="step-number">{}</span>{}</div>"#,
                cx.digits(&format!("{}.number", key)),
                card(
                    &cx.text(&format!("{}.title", key)),
                    &paragraph(&cx.text(&format!("{}.description", key)))
                )
            )
        })
        .collect();

    let benefits: Vec<String> = cx
        .items("hedging.benefits.list")
        .map(|i| cx.text(&format!("hedging.benefits.list.{}", i)))
        .collect();

    [
        hero(
            Some(&cx.text("nav.hedging")),
            &cx.text("hedging.overview.title"),
            &cx.text("hedging.overview.description"),
            Some(&cta),
        ),
        section("overview", &paragraph(&cx.text("hedging.overview.solution"))),
        section(
            "who-we-serve",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("hedging.whoWeServe.title"),
                    Some(&cx.text("hedging.whoWeServe.description"))
                ),
                bullet_list(&clients)
            ),
        ),
        section(
            "products",
            &format!(
                "{}<h3>{}</h3>{}",
                section_header(&cx.text("hedging.products.title"), None),
                cx.text("hedging.products.markets.title"),
                markets
            ),
        ),
        section(
            "process",
            &format!("{}{}", section_header(&cx.text("hedging.process.title"), None), grid(4, &steps)),
        ),
        section(
            "benefits",
            &format!(
                "{}{}",
                section_header(&cx.text("hedging.benefits.title"), None),
                bullet_list(&benefits)
            ),
        ),
        call_to_action(
            &cx.text("hedging.cta.title"),
            &cx.text("hedging.cta.description"),
            &[
                link_button(&cx.href(PageId::Contact), &cx.text("hedging.cta.primaryBtn"), "primary"),
                link_button(&cx.href(PageId::Contact), &cx.text("hedging.cta.secondaryBtn"), "secondary"),
            ],
        ),
    ]
    .concat()
}
