use super::html::{call_to_action, card, grid, hero, link_button, paragraph, section, section_header};
use super::RenderContext;
use crate::router::PageId;

pub fn render(cx: &RenderContext<'_>) -> String {
    let access = cx.text("educationPage.resources.access");
    let resources: Vec<String> = cx
        .items("educationPage.resources.items")
        .map(|i| {
            let key = format!("educationPage.resources.items.{}", i);
            card(
                &cx.text(&format!("{}.title", key)),
                &format!(
                    r#"<p class="meta"><span class="tag">{}</span> <span>{}</span></p>{}<span class="button outline disabled">{}</span>"#,
                    cx.text(&format!("{}.type", key)),
                    cx.digits(&format!("{}.duration", key)),
                    paragraph(&cx.text(&format!("{}.description", key))),
                    access
                ),
            )
        })
        .collect();

    [
        hero(
            Some(&cx.text("educationPage.badge")),
            &cx.text("educationPage.hero.title"),
            &cx.text("educationPage.hero.description"),
            None,
        ),
        section(
            "resources",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("educationPage.resources.title"),
                    Some(&cx.text("educationPage.resources.description"))
                ),
                grid(3, &resources)
            ),
        ),
        call_to_action(
            &cx.text("educationPage.comingSoon.title"),
            &cx.text("educationPage.comingSoon.description"),
            &[link_button(
                &cx.href(PageId::Contact),
                &cx.text("educationPage.comingSoon.button"),
                "primary",
            )],
        ),
    ]
    .concat()
}
