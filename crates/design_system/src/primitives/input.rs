use std::sync::atomic::{AtomicUsize, Ordering};

use design_tokens::{colors, radius, shadows, spacing, typography};

use super::*;

static NEXT_INPUT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a fresh `input-{n}` id for label association.
pub fn next_input_id() -> String {
    format!("input-{}", NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed))
}

fn input_wrapper_style(full_width: bool) -> StyleMap {
    StyleMap::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", spacing::SM)
        .set("width", if full_width { "100%" } else { "auto" })
}

fn input_label_row_style() -> StyleMap {
    StyleMap::new()
        .set("display", "flex")
        .set("flex-direction", "row")
        .set("gap", spacing::XXS)
        .set("align-items", "flex-start")
        .set("justify-content", "flex-start")
        .set("font-family", typography::font_family::BODY)
        .set("font-size", typography::font_size::SM)
        .set("font-weight", typography::font_weight::NORMAL)
        .set("line-height", typography::line_height::TEXT_SM)
        .set("color", colors::text::PRIMARY)
}

/// Inline style for the row that frames the `<input>` and its icons.
pub fn input_container_style(variant: InputVariant, size: ControlSize) -> StyleMap {
    let padding = match size {
        ControlSize::Sm => format!("{} {}", spacing::SM, spacing::MD),
        ControlSize::Md => format!("{} {}", spacing::MD, spacing::LG),
        ControlSize::Lg => format!("{} {}", spacing::LG, spacing::LG),
    };
    let base = StyleMap::new()
        .set("display", "flex")
        .set("flex-direction", "row")
        .set("gap", spacing::MD)
        .set("align-items", "center")
        .set("justify-content", "flex-start")
        .set("padding", padding)
        .set("background-color", colors::background::PRIMARY)
        .set("border-radius", radius::MD)
        .set("position", "relative")
        .set("width", "100%")
        .set("transition", "all 0.2s ease-in-out");
    let variant_layer = match variant {
        InputVariant::Outline => StyleMap::new(),
        InputVariant::Filled => StyleMap::new().set("background-color", colors::background::QUATERNARY),
        InputVariant::Unstyled => StyleMap::new()
            .set("background-color", "transparent")
            .set("padding", "0"),
    };
    base.merge(variant_layer)
}

fn input_border_style(variant: InputVariant, focused: bool) -> StyleMap {
    let border_color = if focused {
        colors::text::brand::TERTIARY
    } else {
        colors::border::PRIMARY
    };
    let shadow = if focused {
        shadows::FOCUS_RING.to_string()
    } else {
        format!("0px 1px 2px 0px {}", colors::effects::shadow::XS)
    };
    StyleMap::new()
        .set("position", "absolute")
        .set("border", format!("1px solid {border_color}"))
        .set("border-radius", radius::MD)
        .set("box-shadow", shadow)
        .set("inset", "0")
        .set("pointer-events", "none")
        .set_if(variant == InputVariant::Unstyled, "display", "none")
}

fn input_field_style(size: ControlSize, disabled: bool) -> StyleMap {
    let font_size = match size {
        ControlSize::Sm => typography::font_size::SM,
        ControlSize::Md => typography::font_size::BASE,
        ControlSize::Lg => typography::font_size::LG,
    };
    StyleMap::new()
        .set("flex", "1 0 0")
        .set("border", "none")
        .set("outline", "none")
        .set("background-color", "transparent")
        .set("font-family", typography::font_family::BODY)
        .set("font-size", font_size)
        .set("font-weight", typography::font_weight::LIGHT)
        .set("line-height", typography::line_height::TEXT_MD)
        .set("color", colors::text::PRIMARY)
        .set("min-height", "1px")
        .set("min-width", "1px")
        .set_if(disabled, "cursor", "not-allowed")
        .set_if(disabled, "opacity", "0.6")
}

fn input_icon_style(edge_px: f64) -> StyleMap {
    StyleMap::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("color", colors::foreground::QUATERNARY)
        .set("flex-shrink", "0")
        .set("width", px(edge_px))
        .set("height", px(edge_px))
}

/// Inline style for the helper line. An error recolors it with the brand accent.
pub fn input_helper_style(has_error: bool) -> StyleMap {
    StyleMap::new()
        .set("font-family", typography::font_family::BODY)
        .set("font-size", typography::font_size::SM)
        .set("font-weight", typography::font_weight::LIGHT)
        .set("line-height", typography::line_height::TEXT_SM)
        .set(
            "color",
            if has_error {
                colors::text::brand::TERTIARY
            } else {
                colors::text::SECONDARY
            },
        )
}

/// A loading field is never editable.
fn field_disabled(disabled: bool, loading: bool) -> bool {
    disabled || loading
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HelperLine {
    text: String,
    is_error: bool,
}

fn helper_line(error: Option<String>, helper_text: Option<String>) -> Option<HelperLine> {
    match error.filter(|error| !error.is_empty()) {
        Some(text) => Some(HelperLine {
            text,
            is_error: true,
        }),
        None => helper_text
            .filter(|helper| !helper.is_empty())
            .map(|text| HelperLine {
                text,
                is_error: false,
            }),
    }
}

#[component]
/// Labeled text input with helper/error copy and icon slots.
///
/// When `id` is omitted a unique id is generated so the label stays associated
/// with the field. Extra attributes are forwarded to the `<input>` element.
pub fn TextInput(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] helper_text: MaybeSignal<Option<String>>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = InputVariant::Outline)] variant: InputVariant,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] left_icon: Option<ViewFn>,
    #[prop(optional, into)] right_icon: Option<ViewFn>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(next_input_id);
    let is_disabled = Signal::derive(move || field_disabled(disabled.get(), loading.get()));
    let helper = Signal::derive(move || helper_line(error.get(), helper_text.get()));
    let has_error = Signal::derive(move || {
        helper.with(|line| line.as_ref().is_some_and(|line| line.is_error))
    });
    let focused = create_rw_signal(false);
    let helper_id = format!("{input_id}-helper");

    view! {
        <div
            class=merge_layout_class("input-wrapper", layout_class)
            style=input_wrapper_style(full_width).to_inline()
            data-ui-primitive="true"
            data-ui-kind="text-input"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(is_disabled.get())
            data-ui-loading=move || bool_token(loading.get())
            data-ui-state={move || if has_error.get() { "error" } else { "idle" }}
        >
            {label.map(|label| {
                let label_for = input_id.clone();
                view! {
                    <label class="input-label-wrapper" for=label_for style=input_label_row_style().to_inline()>
                        <span class="input-label">{label}</span>
                        {required.then(|| view! {
                            <span
                                class="input-required"
                                aria-hidden="true"
                                style=format!("color:{};", colors::text::brand::TERTIARY)
                            >
                                "*"
                            </span>
                        })}
                    </label>
                }
            })}
            <div class="input-container" style=input_container_style(variant, size).to_inline()>
                <div
                    aria-hidden="true"
                    class="input-border-overlay"
                    style=move || input_border_style(variant, focused.get()).to_inline()
                ></div>
                {left_icon.map(|icon| view! {
                    <div class="input-left-icon" style=input_icon_style(20.0).to_inline()>
                        {icon.run()}
                    </div>
                })}
                <input
                    {..attributes}
                    class="input-field"
                    id=input_id.clone()
                    type=input_type.unwrap_or("text")
                    placeholder=placeholder
                    node_ref=node_ref
                    required=required
                    style=move || input_field_style(size, is_disabled.get()).to_inline()
                    prop:value=move || value.get()
                    disabled=move || is_disabled.get()
                    aria-invalid=move || bool_token(has_error.get())
                    aria-describedby={
                        let helper_id = helper_id.clone();
                        move || helper.with(|line| line.as_ref().map(|_| helper_id.clone()))
                    }
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(ev);
                        }
                    }
                />
                {right_icon.map(|icon| view! {
                    <div class="input-right-icon" style=input_icon_style(16.0).to_inline()>
                        {icon.run()}
                    </div>
                })}
            </div>
            {move || {
                helper.get().map(|line| {
                    view! {
                        <div
                            class="input-helper-text"
                            id=helper_id.clone()
                            role=line.is_error.then_some("alert")
                            style=input_helper_style(line.is_error).to_inline()
                        >
                            {line.text}
                        </div>
                    }
                })
            }}
        </div>
    }
}
