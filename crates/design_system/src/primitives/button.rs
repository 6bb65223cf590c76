use design_tokens::{colors, radius, spacing, typography};

use super::*;

fn button_base_style(full_width: bool) -> StyleMap {
    StyleMap::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("border", "none")
        .set("border-radius", radius::MD)
        .set("font-weight", typography::font_weight::MEDIUM)
        .set("cursor", "pointer")
        .set("transition", "all 0.2s ease-in-out")
        .set("position", "relative")
        .set("text-decoration", "none")
        .set("font-family", typography::font_family::BODY)
        .set("width", if full_width { "100%" } else { "auto" })
        .set("gap", spacing::MD)
}

fn button_size_style(size: ControlSize) -> StyleMap {
    let (padding, font_size, min_height) = match size {
        ControlSize::Sm => (
            format!("{} {}", spacing::MD, spacing::LG),
            typography::font_size::SM,
            32.0,
        ),
        ControlSize::Md => (
            format!("{} {}", spacing::LG, spacing::LG),
            typography::font_size::BASE,
            40.0,
        ),
        ControlSize::Lg => (
            format!("{} {}", spacing::LG, spacing::LG),
            typography::font_size::LG,
            48.0,
        ),
    };
    StyleMap::new()
        .set("padding", padding)
        .set("font-size", font_size)
        .set("min-height", px(min_height))
}

fn button_variant_style(variant: ButtonVariant) -> StyleMap {
    let style = StyleMap::new();
    match variant {
        ButtonVariant::Primary => style
            .set("background-color", colors::text::brand::TERTIARY)
            .set("color", colors::background::PRIMARY),
        ButtonVariant::Secondary => style
            .set("background-color", colors::background::PRIMARY)
            .set("color", colors::text::PRIMARY)
            .set("border", format!("1px solid {}", colors::border::PRIMARY)),
        ButtonVariant::Outline => style
            .set("background-color", "transparent")
            .set("color", colors::text::brand::TERTIARY)
            .set(
                "border",
                format!("1px solid {}", colors::text::brand::TERTIARY),
            ),
        ButtonVariant::Ghost => style
            .set("background-color", "transparent")
            .set("color", colors::text::PRIMARY),
        ButtonVariant::Destructive => style
            .set("background-color", colors::danger::SOLID)
            .set("color", colors::background::PRIMARY),
    }
}

/// Inline style for a [`Button`] with the given configuration.
pub fn button_style(
    variant: ButtonVariant,
    size: ControlSize,
    full_width: bool,
    disabled: bool,
) -> StyleMap {
    button_base_style(full_width)
        .merge(button_size_style(size))
        .merge(button_variant_style(variant))
        .merge(
            StyleMap::new()
                .set_if(disabled, "cursor", "not-allowed")
                .set_if(disabled, "opacity", "0.6"),
        )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ButtonPresentation {
    disabled: bool,
    spinner: bool,
    icons: bool,
}

impl ButtonPresentation {
    fn resolve(disabled: bool, loading: bool) -> Self {
        Self {
            disabled: disabled || loading,
            spinner: loading,
            icons: !loading,
        }
    }
}

fn spinner() -> impl IntoView {
    view! {
        <svg
            class="animate-spin h-4 w-4"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            aria-hidden="true"
            data-ui-slot="spinner"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

#[component]
/// Shared button primitive.
///
/// `loading` disables the button and swaps both icon slots for a spinner.
/// Extra attributes are forwarded to the `<button>` element.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] left_icon: Option<ViewFn>,
    #[prop(optional, into)] right_icon: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let presentation =
        Signal::derive(move || ButtonPresentation::resolve(disabled.get(), loading.get()));
    let is_disabled = Signal::derive(move || presentation.get().disabled);
    let class = merge_layout_class(&format!("btn-{}", variant.token()), layout_class);

    view! {
        <button
            {..attributes}
            type="button"
            class=class
            style=move || button_style(variant, size, full_width, is_disabled.get()).to_inline()
            aria-label=move || aria_label.get()
            aria-busy=move || bool_token(loading.get())
            disabled=move || is_disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-full-width=bool_token(full_width)
            data-ui-loading=move || bool_token(loading.get())
            data-ui-disabled=move || bool_token(is_disabled.get())
            on:click=move |ev| {
                if is_disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || presentation.get().spinner.then(spinner)}
            {move || {
                presentation
                    .get()
                    .icons
                    .then(|| left_icon.as_ref().map(|icon| view! { <span class="btn-icon">{icon.run()}</span> }))
                    .flatten()
            }}
            <span class="btn-content">{children()}</span>
            {move || {
                presentation
                    .get()
                    .icons
                    .then(|| right_icon.as_ref().map(|icon| view! { <span class="btn-icon">{icon.run()}</span> }))
                    .flatten()
            }}
        </button>
    }
}
