use design_tokens::{colors, radius, shadows, spacing, typography};

use super::*;

/// Inline style for a [`Card`] surface.
pub fn card_style(size: ControlSize, elevated: bool, interactive: bool) -> StyleMap {
    let padding = match size {
        ControlSize::Sm => spacing::MD,
        ControlSize::Md => spacing::LG,
        ControlSize::Lg => "24px",
    };
    StyleMap::new()
        .set("background-color", colors::background::PRIMARY)
        .set("border-radius", radius::MD)
        .set("font-family", typography::font_family::BODY)
        .set("overflow", "hidden")
        .set("transition", "all 0.2s ease-in-out")
        .merge(StyleMap::new().set("padding", padding))
        .merge(StyleMap::new().set_if(elevated, "box-shadow", shadows::XS))
        .set("cursor", if interactive { "pointer" } else { "default" })
}

fn card_title_style(has_subtitle: bool) -> StyleMap {
    StyleMap::new()
        .set("font-size", typography::font_size::LG)
        .set("font-weight", typography::font_weight::MEDIUM)
        .set("color", colors::text::PRIMARY)
        .set(
            "margin-bottom",
            if has_subtitle { spacing::XXS } else { spacing::MD },
        )
        .set("line-height", typography::line_height::TEXT_MD)
}

fn card_subtitle_style() -> StyleMap {
    StyleMap::new()
        .set("font-size", typography::font_size::SM)
        .set("font-weight", typography::font_weight::LIGHT)
        .set("color", colors::text::SECONDARY)
        .set("margin-bottom", spacing::MD)
        .set("line-height", typography::line_height::TEXT_SM)
}

fn card_content_style() -> StyleMap {
    StyleMap::new()
        .set("color", colors::text::PRIMARY)
        .set("font-size", typography::font_size::BASE)
        .set("line-height", typography::line_height::TEXT_MD)
}

#[component]
/// Content card with optional title and subtitle.
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(default = true)] elevated: bool,
    #[prop(optional)] interactive: bool,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let base_class = if interactive {
        "card card-interactive"
    } else {
        "card"
    };
    let has_subtitle = subtitle.is_some();

    view! {
        <div
            {..attributes}
            class=merge_layout_class(base_class, layout_class)
            style=card_style(size, elevated, interactive).to_inline()
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-size=size.token()
            data-ui-elevated=bool_token(elevated)
            data-ui-interactive=bool_token(interactive)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {title.map(|title| view! { <h3 style=card_title_style(has_subtitle).to_inline()>{title}</h3> })}
            {subtitle.map(|subtitle| view! { <p style=card_subtitle_style().to_inline()>{subtitle}</p> })}
            <div data-ui-slot="content" style=card_content_style().to_inline()>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_card_is_elevated_with_md_padding() {
        let style = card_style(ControlSize::Md, true, false);
        assert_eq!(style.get("padding"), Some("12px"));
        assert_eq!(
            style.get("box-shadow"),
            Some("0px 1px 2px 0px rgba(10, 13, 18, 0.05)")
        );
        assert_eq!(style.get("cursor"), Some("default"));
    }

    #[test]
    fn flat_interactive_card_has_pointer_and_no_shadow() {
        let style = card_style(ControlSize::Lg, false, true);
        assert_eq!(style.get("padding"), Some("24px"));
        assert_eq!(style.get("box-shadow"), None);
        assert_eq!(style.get("cursor"), Some("pointer"));
    }

    #[test]
    fn title_spacing_tightens_above_subtitle() {
        assert_eq!(card_title_style(true).get("margin-bottom"), Some("2px"));
        assert_eq!(card_title_style(false).get("margin-bottom"), Some("8px"));
        assert_eq!(card_style(ControlSize::Sm, true, false).get("padding"), Some("8px"));
    }
}
