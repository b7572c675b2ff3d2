//! Site shell: document head, navigation bar, language switcher and footer.

use super::html::escape_html;
use super::{language_href, RenderContext};
use crate::i18n::{Language, LanguageRegistry};
use crate::router::PageId;

const LINKEDIN_URL: &str = "https://www.linkedin.com/company/sib-capital-management/";
const WHATSAPP_URL: &str = "https://whatsapp.com/channel/0029Vb6IAKR1XqueF62y3C11";
const TELEGRAM_URL: &str = "https://t.me/hedgingsolution";
const PHONE_HREF: &str = "tel:+982188689785";
const INFO_EMAIL: &str = "info@sib-m.ir";

/// Wrap a rendered page body in the full HTML document.
pub fn document(cx: &RenderContext<'_>, body: &str) -> String {
    let language = cx.language();
    let body_class = if language.is_rtl() { "persian" } else { "latin" };

    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="{lang}" dir="{dir}">"#,
            r#"<head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title></head>",
            r#"<body class="{class}" data-page="{page}">"#,
            "{nav}<main>{body}</main>{footer}",
            "</body></html>"
        ),
        lang = language.code(),
        dir = language.direction().as_str(),
        title = cx.text("site.title"),
        class = body_class,
        page = cx.active_page(),
        nav = navigation(cx),
        body = body,
        footer = footer(cx),
    )
}

fn nav_link(cx: &RenderContext<'_>, page: PageId) -> String {
    let current = if cx.active_page() == page {
        r#" class="active" aria-current="page""#
    } else {
        ""
    };

    format!(
        r#"<li><a href="{}"{}>{}</a></li>"#,
        escape_html(&cx.href(page)),
        current,
        cx.text(&page.nav_key())
    )
}

fn navigation(cx: &RenderContext<'_>) -> String {
    let services: String = PageId::SERVICES.iter().map(|page| nav_link(cx, *page)).collect();
    let services_class = if cx.active_page().is_service() {
        r#" class="active""#
    } else {
        ""
    };

    // Home first, then the services dropdown, then the remaining pages.
    let (home, rest) = PageId::MAIN.split_at(1);
    let home: String = home.iter().map(|page| nav_link(cx, *page)).collect();
    let rest: String = rest.iter().map(|page| nav_link(cx, *page)).collect();

    format!(
        concat!(
            r#"<header class="site-header"><nav aria-label="{menu_description}">"#,
            r#"<a class="brand" href="{home_href}">{name}</a>"#,
            "<ul class=\"nav-links\">{home}",
            "<li><details{services_class}><summary>{services_label}</summary><ul>{services}</ul></details></li>",
            "{rest}</ul>",
            "{switcher}",
            "</nav></header>"
        ),
        menu_description = cx.text("nav.menuDescription"),
        home_href = escape_html(&cx.href(PageId::Home)),
        name = cx.text("site.name"),
        home = home,
        services_class = services_class,
        services_label = cx.text("nav.services"),
        services = services,
        rest = rest,
        switcher = language_switcher(cx),
    )
}

fn language_switcher(cx: &RenderContext<'_>) -> String {
    let active = cx.language();
    let buttons: String = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .filter_map(|config| Language::from_code(config.code).ok())
        .map(|language| {
            let current = if language == active {
                r#" class="active" aria-current="true""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}" lang="{}" title="{}"{}>{}</a>"#,
                language_href(language),
                language.code(),
                escape_html(language.native_name()),
                current,
                escape_html(language.short_label())
            )
        })
        .collect();

    format!(
        r#"<div class="language-switcher" role="group" aria-label="{}">{}</div>"#,
        cx.text("nav.language"),
        buttons
    )
}

fn footer(cx: &RenderContext<'_>) -> String {
    let links: String = PageId::ALL.iter().map(|page| nav_link(cx, *page)).collect();

    format!(
        concat!(
            r#"<footer class="site-footer"><div class="container">"#,
            r#"<section><h4>{name}</h4><p>{availability}</p></section>"#,
            r#"<section><h4>{services}</h4><ul>{links}</ul></section>"#,
            r#"<section><h4>{contact_info}</h4>"#,
            "<address>{address}<br>",
            r#"<a href="{phone_href}" dir="ltr">{phone}</a><br>"#,
            r#"<a href="mailto:{email}">{email}</a></address></section>"#,
            r#"<section><h4>{follow}</h4><ul class="social">"#,
            r#"<li><a href="{linkedin_url}" rel="noopener">{linkedin}</a></li>"#,
            r#"<li><a href="{whatsapp_url}" rel="noopener">{whatsapp}</a></li>"#,
            r#"<li><a href="{telegram_url}" rel="noopener">{telegram}</a></li>"#,
            "</ul></section>",
            r#"<p class="copyright">{copyright}</p>"#,
            "</div></footer>"
        ),
        name = cx.text("site.name"),
        availability = cx.text("footer.availability"),
        services = cx.text("nav.services"),
        links = links,
        contact_info = cx.text("footer.contactInfo"),
        address = cx.text("footer.address"),
        phone_href = PHONE_HREF,
        phone = cx.digits("footer.phone"),
        email = INFO_EMAIL,
        follow = cx.text("footer.followUs"),
        linkedin_url = LINKEDIN_URL,
        linkedin = cx.text("footer.linkedin"),
        whatsapp_url = WHATSAPP_URL,
        whatsapp = cx.text("footer.whatsapp"),
        telegram_url = TELEGRAM_URL,
        telegram = cx.text("footer.telegram"),
        copyright = cx.text("footer.copyright"),
    )
}
