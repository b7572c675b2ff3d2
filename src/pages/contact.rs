//! Contact page with the inquiry form.

use super::html::{call_to_action, card, escape_html, grid, hero, link_button, section, section_header};
use super::RenderContext;
use crate::contact::{ContactView, ServiceInterest};
use crate::router::PageId;

pub const FORM_ACTION: &str = "/contact";

fn field_error(cx: &RenderContext<'_>, view: Option<&ContactView>, field: &str) -> String {
    match view.and_then(|view| view.error_for(field)) {
        Some(error) => format!(
            r#"<p class="field-error" id="{}-error" role="alert">{}</p>"#,
            field,
            cx.text(error.message_key())
        ),
        None => String::new(),
    }
}

fn input(cx: &RenderContext<'_>, view: Option<&ContactView>, field: &str, kind: &str, value: &str, required: bool) -> String {
    format!(
        r#"<label for="{field}">{label}</label><input id="{field}" name="{field}" type="{kind}" value="{value}" placeholder="{placeholder}"{required}>{error}"#,
        field = field,
        label = cx.text(&format!("contactPage.form.{}", field)),
        kind = kind,
        value = escape_html(value),
        placeholder = cx.text(&format!("contactPage.form.{}Placeholder", field)),
        required = if required { " required" } else { "" },
        error = field_error(cx, view, field),
    )
}

fn service_select(cx: &RenderContext<'_>, view: Option<&ContactView>, selected: &str) -> String {
    let options: String = ServiceInterest::ALL
        .iter()
        .map(|service| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                service.as_str(),
                if service.as_str() == selected { " selected" } else { "" },
                cx.text(&service.label_key())
            )
        })
        .collect();

    format!(
        r#"<label for="service">{}</label><select id="service" name="service"><option value="">{}</option>{}</select>{}"#,
        cx.text("contactPage.form.service"),
        cx.text("contactPage.form.servicePlaceholder"),
        options,
        field_error(cx, view, "service")
    )
}

fn form(cx: &RenderContext<'_>) -> String {
    let view = cx.contact();
    if view.is_some_and(|view| view.acknowledged) {
        return format!(
            r#"<div class="form-success" role="status">{}</div>"#,
            cx.text("contactPage.form.thanks")
        );
    }

    let values = view.map(|view| view.values.clone()).unwrap_or_default();

    format!(
        concat!(
            r#"<form class="contact-form" method="post" action="{action}">"#,
            "{name}{email}{company}{phone}{service}",
            r#"<label for="message">{message_label}</label>"#,
            r#"<textarea id="message" name="message" rows="5" placeholder="{message_placeholder}" required>{message}</textarea>"#,
            "{message_error}",
            r#"<button type="submit" class="button primary">{submit}</button>"#,
            "</form>"
        ),
        action = FORM_ACTION,
        name = input(cx, view, "name", "text", &values.name, true),
        email = input(cx, view, "email", "email", &values.email, true),
        company = input(cx, view, "company", "text", &values.company, false),
        phone = input(cx, view, "phone", "tel", &values.phone, false),
        service = service_select(cx, view, &values.service),
        message_label = cx.text("contactPage.form.message"),
        message_placeholder = cx.text("contactPage.form.messagePlaceholder"),
        message = escape_html(&values.message),
        message_error = field_error(cx, view, "message"),
        submit = cx.text("contactPage.form.submit"),
    )
}

fn channels(cx: &RenderContext<'_>) -> String {
    let phone_label = cx.text("contactPage.channels.phoneLabel");
    let email_label = cx.text("contactPage.channels.emailLabel");

    let methods: Vec<String> = cx
        .items("contactPage.channels.methods")
        .map(|i| {
            let key = format!("contactPage.channels.methods.{}", i);
            let phone = cx.digits(&format!("{}.phone", key));
            let email = cx.text(&format!("{}.email", key));

            let mut body = String::new();
            if !phone.is_empty() {
                body.push_str(&format!(r#"<p>{}: <span dir="ltr">{}</span></p>"#, phone_label, phone));
            }
            body.push_str(&format!(r#"<p>{}: <a href="mailto:{}">{}</a></p>"#, email_label, email, email));

            card(&cx.text(&format!("{}.title", key)), &body)
        })
        .collect();

    format!(
        "{}{}",
        section_header(&cx.text("contactPage.channels.title"), None),
        grid(3, &methods)
    )
}

fn office(cx: &RenderContext<'_>) -> String {
    format!(
        "{}{}",
        section_header(&cx.text("contactPage.office.title"), None),
        card(
            &cx.text("contactPage.office.infoTitle"),
            &format!(
                "<dl><dt>{}</dt><dd>{}</dd><dt>{}</dt><dd>{}</dd></dl>",
                cx.text("contactPage.office.addressLabel"),
                cx.text("contactPage.office.address"),
                cx.text("contactPage.office.hoursLabel"),
                cx.digits("contactPage.office.hours")
            )
        )
    )
}

pub fn render(cx: &RenderContext<'_>) -> String {
    [
        hero(
            None,
            &cx.text("contactPage.hero.title"),
            &cx.text("contactPage.hero.description"),
            None,
        ),
        section(
            "contact-form",
            &format!(
                "{}{}",
                section_header(
                    &cx.text("contactPage.form.title"),
                    Some(&cx.text("contactPage.form.description"))
                ),
                form(cx)
            ),
        ),
        section("channels", &channels(cx)),
        section("office", &office(cx)),
        call_to_action(
            &cx.text("contactPage.cta.title"),
            &cx.text("contactPage.cta.description"),
            &[link_button(
                &cx.href(PageId::Hedging),
                &cx.text("contactPage.cta.primaryBtn"),
                "primary",
            )],
        ),
    ]
    .concat()
}
