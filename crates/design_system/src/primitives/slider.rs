use design_tokens::{colors, radius, shadows, spacing, typography};

use leptos::leptos_dom::helpers::WindowListenerHandle;

use super::*;
use crate::slider_model::{track_click, SliderChange, SliderDrag, SliderHandle, SliderState, TrackRect};

/// Gap between the control box and a value label, in px.
const LABEL_OFFSET_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Pixel geometry for one slider size.
pub struct SliderSizeSpec {
    /// Track thickness.
    pub track_height: f64,
    /// Handle diameter.
    pub handle_size: f64,
    /// Height of the outer control box.
    pub container_height: f64,
    /// Value label font size.
    pub label_font_size: &'static str,
    /// Value label line height.
    pub label_line_height: &'static str,
}

impl SliderSizeSpec {
    /// Geometry for `size`.
    pub const fn for_size(size: ControlSize) -> Self {
        match size {
            ControlSize::Sm => Self {
                track_height: 6.0,
                handle_size: 20.0,
                container_height: 32.0,
                label_font_size: typography::font_size::XS,
                label_line_height: typography::line_height::TEXT_XS,
            },
            ControlSize::Md => Self {
                track_height: 8.0,
                handle_size: 24.0,
                container_height: 40.0,
                label_font_size: typography::font_size::SM,
                label_line_height: typography::line_height::TEXT_SM,
            },
            ControlSize::Lg => Self {
                track_height: 10.0,
                handle_size: 28.0,
                container_height: 48.0,
                label_font_size: typography::font_size::BASE,
                label_line_height: typography::line_height::TEXT_MD,
            },
        }
    }

    /// Vertical offset that centers the handle on the track.
    fn handle_top(self) -> f64 {
        -(self.handle_size - self.track_height) / 2.0
    }

    fn label_distance(self) -> f64 {
        self.container_height + LABEL_OFFSET_PX
    }
}

fn dimmed(disabled: bool) -> &'static str {
    if disabled {
        "0.5"
    } else {
        "1"
    }
}

fn slider_container_style(spec: SliderSizeSpec) -> StyleMap {
    StyleMap::new()
        .set("position", "relative")
        .set("width", "100%")
        .set("height", px(spec.container_height))
        .set("display", "flex")
        .set("align-items", "center")
}

fn slider_track_style(spec: SliderSizeSpec, disabled: bool) -> StyleMap {
    StyleMap::new()
        .set("position", "relative")
        .set("width", "100%")
        .set("height", px(spec.track_height))
        .set("background-color", colors::background::QUATERNARY)
        .set("border-radius", radius::FULL)
        .set("cursor", if disabled { "not-allowed" } else { "pointer" })
        .set("opacity", dimmed(disabled))
}

/// Filled segment: from the min handle to the max handle in range mode,
/// otherwise from the track start to the single handle.
fn slider_progress_style(spec: SliderSizeSpec, state: &SliderState) -> StyleMap {
    let (left, right) = if state.range {
        (
            state.handle_percent(state.value),
            100.0 - state.handle_percent(state.value2.unwrap_or(state.value)),
        )
    } else {
        (0.0, 100.0 - state.handle_percent(state.value))
    };
    StyleMap::new()
        .set("position", "absolute")
        .set("height", px(spec.track_height))
        .set("background-color", colors::background::BRAND_SOLID)
        .set("border-radius", radius::FULL)
        .set("top", "0")
        .set("left", percent(left))
        .set("right", percent(right))
        .set("opacity", dimmed(state.disabled))
}

fn slider_handle_style(spec: SliderSizeSpec, position: f64, disabled: bool, active: bool) -> StyleMap {
    let resting = StyleMap::new()
        .set("position", "absolute")
        .set("width", px(spec.handle_size))
        .set("height", px(spec.handle_size))
        .set("background-color", colors::components::slider::HANDLE_BG)
        .set(
            "border",
            format!("1.5px solid {}", colors::components::slider::HANDLE_BORDER),
        )
        .set("border-radius", radius::FULL)
        .set("top", px(spec.handle_top()))
        .set("cursor", if disabled { "not-allowed" } else { "grab" })
        .set("box-shadow", shadows::MD_01)
        .set("transform", "translateX(-50%)")
        .set("z-index", "1")
        .set("opacity", dimmed(disabled))
        .set("transition", "box-shadow 0.2s ease, transform 0.2s ease")
        .set("touch-action", "none");
    let grabbed = StyleMap::new()
        .set_if(active, "cursor", "grabbing")
        .set_if(active, "box-shadow", shadows::LG_01)
        .set_if(active, "transform", "translateX(-50%) scale(1.1)");
    resting
        .merge(grabbed)
        .merge(StyleMap::new().set("left", percent(position)))
}

fn slider_label_style(spec: SliderSizeSpec, label_position: LabelPosition, disabled: bool) -> StyleMap {
    let top = if label_position == LabelPosition::Bottom {
        spec.label_distance()
    } else {
        -spec.label_distance()
    };
    StyleMap::new()
        .set("position", "absolute")
        .set("font-family", typography::font_family::BODY)
        .set("font-size", spec.label_font_size)
        .set("font-weight", typography::font_weight::MEDIUM)
        .set("line-height", spec.label_line_height)
        .set("color", colors::text::PRIMARY_900)
        .set("text-align", "center")
        .set("white-space", "nowrap")
        .set("top", px(top))
        .set("left", "50%")
        .set("transform", "translateX(-50%)")
        .set("opacity", dimmed(disabled))
}

fn slider_tooltip_style(spec: SliderSizeSpec, disabled: bool) -> StyleMap {
    StyleMap::new()
        .set("position", "absolute")
        .set("background-color", colors::background::PRIMARY)
        .set("padding", format!("{} {}", spacing::SM, spacing::MD))
        .set("border-radius", radius::MD)
        .set("box-shadow", shadows::LG_01)
        .set("border", format!("1px solid {}", colors::border::SECONDARY_ALT))
        .set("top", px(-spec.label_distance()))
        .set("left", "50%")
        .set("transform", "translateX(-50%)")
        .set("z-index", "2")
        .set("opacity", dimmed(disabled))
}

fn slider_tooltip_label_style() -> StyleMap {
    StyleMap::new()
        .set("font-family", typography::font_family::BODY)
        .set("font-size", typography::font_size::XS)
        .set("font-weight", typography::font_weight::MEDIUM)
        .set("line-height", typography::line_height::TEXT_XS)
        .set("color", colors::text::PRIMARY)
        .set("text-align", "center")
        .set("white-space", "nowrap")
}

fn value_label(value: f64) -> String {
    format!("{value}%")
}

/// A listener that can be detached from the window.
trait ListenerRelease {
    fn release(self);
}

impl ListenerRelease for WindowListenerHandle {
    fn release(self) {
        self.remove();
    }
}

/// Window listeners held for the duration of one drag gesture.
///
/// Dropping the guard detaches every listener it holds.
struct DragListeners<L: ListenerRelease = WindowListenerHandle> {
    handles: Vec<L>,
}

impl<L: ListenerRelease> DragListeners<L> {
    /// Installs the listeners of a new gesture, releasing any still held.
    fn attach(slot: &mut Option<Self>, handles: Vec<L>) {
        *slot = Some(Self { handles });
    }

    fn release(slot: &mut Option<Self>) {
        slot.take();
    }
}

impl<L: ListenerRelease> Drop for DragListeners<L> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.release();
        }
    }
}

/// Whether the max handle is mounted.
///
/// Memoized on presence only so that moving the handle never remounts it.
fn max_handle_mounted(range: bool, value2: MaybeSignal<Option<f64>>) -> Memo<bool> {
    create_memo(move |_| range && value2.with(Option::is_some))
}

#[component]
/// Horizontal slider with an optional second handle for range selection.
///
/// Values are owned by the caller: every pointer interaction reports the new
/// `(value, value2)` pair through `on_change` and the caller feeds it back in.
/// `min < max` and `step > 0` are required and not checked.
pub fn Slider(
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(optional, into)] value2: MaybeSignal<Option<f64>>,
    /// Fixed for the lifetime of the component.
    #[prop(optional)]
    range: bool,
    #[prop(default = 1.0)] step: f64,
    #[prop(default = true)] show_labels: bool,
    #[prop(default = LabelPosition::Bottom)] label_position: LabelPosition,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<SliderChange>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let spec = SliderSizeSpec::for_size(size);
    let track_ref = create_node_ref::<html::Div>();
    let drag = create_rw_signal(SliderDrag::default());
    let listeners = store_value(None::<DragListeners>);

    let has_max = max_handle_mounted(range, value2);

    let state = Signal::derive(move || SliderState {
        min,
        max,
        value: value.get(),
        value2: value2.get(),
        step,
        range,
        disabled: disabled.get(),
    });

    let track_rect = move || -> Option<TrackRect> {
        let Some(track) = track_ref.get_untracked() else {
            logging::warn!("slider track is not mounted; ignoring pointer input");
            return None;
        };
        let rect = track.get_bounding_client_rect();
        Some(TrackRect {
            left: rect.left(),
            width: rect.width(),
        })
    };

    let emit = move |change: Option<SliderChange>| {
        if let (Some(change), Some(on_change)) = (change, on_change.as_ref()) {
            on_change.call(change);
        }
    };

    let end_drag = move || {
        drag.update(SliderDrag::end);
        listeners.update_value(DragListeners::release);
    };

    let begin_drag = move |handle: SliderHandle, event: web_sys::PointerEvent| {
        event.stop_propagation();
        if event.pointer_type() == "mouse" && event.button() != 0 {
            return;
        }
        let mut started = false;
        drag.update(|drag| started = drag.begin(&state.get_untracked(), handle));
        if !started {
            return;
        }
        event.prevent_default();

        let on_move = window_event_listener(ev::pointermove, move |ev| {
            let Some(track) = track_rect() else {
                return;
            };
            let change = drag
                .get_untracked()
                .update(&state.get_untracked(), f64::from(ev.client_x()), track);
            emit(change);
        });
        let on_up = window_event_listener(ev::pointerup, move |_| end_drag());
        let on_cancel = window_event_listener(ev::pointercancel, move |_| end_drag());
        listeners.update_value(|slot| {
            DragListeners::attach(slot, vec![on_move, on_up, on_cancel]);
        });
    };

    on_cleanup(move || {
        listeners.try_update_value(DragListeners::release);
    });

    let on_track_click = move |ev: MouseEvent| {
        let Some(track) = track_rect() else {
            return;
        };
        emit(track_click(
            &state.get_untracked(),
            f64::from(ev.client_x()),
            track,
        ));
    };

    let render_handle = move |handle: SliderHandle| {
        let handle_value = move || {
            let state = state.get();
            match handle {
                SliderHandle::Min => state.value,
                SliderHandle::Max => state.value2.unwrap_or(state.value),
            }
        };
        let active = move || drag.get().active() == Some(handle);

        view! {
            <div
                data-ui-slot="handle"
                data-ui-handle=handle.token()
                data-ui-state={move || if active() { "dragging" } else { "idle" }}
                role="slider"
                aria-valuemin=min
                aria-valuemax=max
                aria-valuenow=handle_value
                aria-disabled=move || bool_token(disabled.get())
                style=move || {
                    let state = state.get();
                    slider_handle_style(
                        spec,
                        state.handle_percent(handle_value()),
                        state.disabled,
                        active(),
                    )
                    .to_inline()
                }
                on:pointerdown=move |ev| begin_drag(handle, ev)
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                {(show_labels && label_position == LabelPosition::Bottom).then(|| view! {
                    <div
                        data-ui-slot="label"
                        style=move || {
                            slider_label_style(spec, label_position, disabled.get()).to_inline()
                        }
                    >
                        {move || value_label(handle_value())}
                    </div>
                })}
                {(show_labels && label_position == LabelPosition::TopFloating).then(|| view! {
                    <div
                        data-ui-slot="tooltip"
                        style=move || slider_tooltip_style(spec, disabled.get()).to_inline()
                    >
                        <div style=slider_tooltip_label_style().to_inline()>
                            {move || value_label(handle_value())}
                        </div>
                    </div>
                })}
            </div>
        }
    };

    view! {
        <div
            {..attributes}
            class=merge_layout_class(&format!("slider slider--{}", size.token()), layout_class)
            style=slider_container_style(spec).to_inline()
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="slider"
            data-ui-size=size.token()
            data-ui-range=bool_token(range)
            data-ui-label-position=label_position.token()
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-state={move || if drag.get().is_dragging() { "dragging" } else { "idle" }}
        >
            <div
                data-ui-slot="track"
                node_ref=track_ref
                style=move || slider_track_style(spec, disabled.get()).to_inline()
                on:click=on_track_click
            >
                <div
                    data-ui-slot="progress"
                    style=move || slider_progress_style(spec, &state.get()).to_inline()
                ></div>
                {render_handle(SliderHandle::Min)}
                {move || has_max.get().then(|| render_handle(SliderHandle::Max))}
            </div>
        </div>
    }
}
