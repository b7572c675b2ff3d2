use super::html::{paragraph, section};
use super::RenderContext;

pub fn render(cx: &RenderContext<'_>) -> String {
    let paragraphs: String = cx
        .items("aboutPage.paragraphs")
        .map(|i| paragraph(&cx.text(&format!("aboutPage.paragraphs.{}", i))))
        .collect();

    format!(
        "{}{}",
        section("hero", &format!("<h1>{}</h1>", cx.text("aboutPage.title"))),
        section("about-body", &format!(r#"<div class="prose">{}</div>"#, paragraphs))
    )
}
