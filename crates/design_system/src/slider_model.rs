//! Headless slider interaction engine.
//!
//! The [`Slider`](crate::Slider) primitive feeds pointer coordinates and the
//! track's bounding box into these helpers; nothing here touches the DOM.
//!
//! # Preconditions
//!
//! Callers must supply `min < max` and `step > 0`. Neither is validated and the
//! results for other inputs are unspecified.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Slider handle identity.
pub enum SliderHandle {
    /// Primary handle (`value`).
    Min,
    /// Secondary handle (`value2`), present only in range mode.
    Max,
}

impl SliderHandle {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Horizontal extent of the slider track in client coordinates.
pub struct TrackRect {
    /// Left edge (`DOMRect.left`).
    pub left: f64,
    /// Track width (`DOMRect.width`).
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Caller-owned slider state snapshot.
pub struct SliderState {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Primary handle value.
    pub value: f64,
    /// Secondary handle value in range mode.
    #[serde(default)]
    pub value2: Option<f64>,
    /// Quantization unit.
    pub step: f64,
    /// Two-handle mode.
    #[serde(default)]
    pub range: bool,
    /// Blocks every interaction.
    #[serde(default)]
    pub disabled: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            value: 0.0,
            value2: None,
            step: 1.0,
            range: false,
            disabled: false,
        }
    }
}

impl SliderState {
    /// Applies a change notification, as an embedding caller would.
    pub fn apply(&mut self, change: SliderChange) {
        self.value = change.value;
        self.value2 = change.value2;
    }

    /// Position of `value` along the track, in percent.
    pub fn handle_percent(&self, value: f64) -> f64 {
        (value - self.min) * 100.0 / (self.max - self.min)
    }

    /// Value the max handle is bounded by when the min handle moves.
    fn upper_bound_for_min(&self) -> f64 {
        if self.range {
            self.value2.unwrap_or(self.value)
        } else {
            self.max
        }
    }

    /// Value the min handle bounds when the max handle moves.
    fn lower_bound_for_max(&self) -> f64 {
        if self.range {
            self.value
        } else {
            self.min
        }
    }

    fn move_handle(&self, handle: SliderHandle, target: f64) -> SliderChange {
        match handle {
            SliderHandle::Min => SliderChange {
                value: target.min(self.upper_bound_for_min()),
                value2: self.value2,
            },
            SliderHandle::Max => SliderChange {
                value: self.value,
                value2: Some(target.max(self.lower_bound_for_max())),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Change notification payload: `(value, value2?)`.
pub struct SliderChange {
    /// New primary value.
    pub value: f64,
    /// New secondary value, when the slider has one.
    pub value2: Option<f64>,
}

/// Maps a pointer x-coordinate to a quantized slider value.
///
/// The pointer fraction is clamped to the track before it is scaled onto
/// `[min, max]`, then snapped to the nearest `step` counted from `min`. The
/// snapped value never exceeds `max` even when the span is not a whole number
/// of steps. A track with no width maps every pointer to `min`.
pub fn value_from_position(client_x: f64, track: TrackRect, min: f64, max: f64, step: f64) -> f64 {
    let fraction = if track.width > 0.0 {
        ((client_x - track.left) / track.width).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let raw = min + fraction * (max - min);
    let snapped = min + ((raw - min) / step).round() * step;
    snapped.min(max)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Transient drag tracking for one slider instance.
pub struct SliderDrag {
    active: Option<SliderHandle>,
}

impl SliderDrag {
    /// Handle currently being dragged.
    pub fn active(&self) -> Option<SliderHandle> {
        self.active
    }

    /// Returns `true` while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Starts dragging `handle`. Returns `false` and stays idle when disabled.
    pub fn begin(&mut self, state: &SliderState, handle: SliderHandle) -> bool {
        if state.disabled {
            return false;
        }
        self.active = Some(handle);
        true
    }

    /// Recomputes the active handle from the pointer position.
    ///
    /// Returns `None` when no drag is active or the slider is disabled.
    pub fn update(&self, state: &SliderState, client_x: f64, track: TrackRect) -> Option<SliderChange> {
        let handle = self.active?;
        if state.disabled {
            return None;
        }
        let target = value_from_position(client_x, track, state.min, state.max, state.step);
        Some(state.move_handle(handle, target))
    }

    /// Ends the gesture. The last change emitted by [`SliderDrag::update`] stands.
    pub fn end(&mut self) {
        self.active = None;
    }
}

/// Resolves a click on the bare track.
///
/// In range mode the handle numerically closer to the click moves; an exact
/// tie moves the min handle. Single mode reports only the primary value.
pub fn track_click(state: &SliderState, client_x: f64, track: TrackRect) -> Option<SliderChange> {
    if state.disabled {
        return None;
    }
    let target = value_from_position(client_x, track, state.min, state.max, state.step);
    if !state.range {
        return Some(SliderChange {
            value: target,
            value2: None,
        });
    }

    let to_min = (target - state.value).abs();
    let to_max = (target - state.value2.unwrap_or(state.value)).abs();
    let handle = if to_min <= to_max {
        SliderHandle::Min
    } else {
        SliderHandle::Max
    };
    Some(state.move_handle(handle, target))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    const TRACK: TrackRect = TrackRect {
        left: 100.0,
        width: 400.0,
    };

    fn x_at(fraction: f64) -> f64 {
        TRACK.left + TRACK.width * fraction
    }

    fn range_state(value: f64, value2: f64) -> SliderState {
        SliderState {
            value,
            value2: Some(value2),
            range: true,
            ..SliderState::default()
        }
    }

    #[test]
    fn click_at_quarter_track_yields_twenty_five() {
        let state = SliderState::default();
        let change = track_click(&state, x_at(0.25), TRACK).expect("click");
        assert_eq!(
            change,
            SliderChange {
                value: 25.0,
                value2: None
            }
        );
    }

    #[test]
    fn pointer_outside_track_clamps_before_scaling() {
        assert_eq!(value_from_position(-500.0, TRACK, 0.0, 100.0, 1.0), 0.0);
        assert_eq!(value_from_position(10_000.0, TRACK, 0.0, 100.0, 1.0), 100.0);
        assert_eq!(value_from_position(x_at(0.5), TRACK, -50.0, 50.0, 1.0), 0.0);
    }

    #[test]
    fn step_snapping_counts_from_min() {
        assert_eq!(value_from_position(x_at(0.26), TRACK, 0.0, 100.0, 10.0), 30.0);
        assert_eq!(value_from_position(x_at(0.24), TRACK, 0.0, 100.0, 10.0), 20.0);
        assert_eq!(value_from_position(x_at(0.0), TRACK, 5.0, 25.0, 10.0), 5.0);
        assert_eq!(value_from_position(x_at(0.4), TRACK, 5.0, 25.0, 10.0), 15.0);
    }

    #[test]
    fn uneven_span_never_snaps_past_max() {
        assert_eq!(value_from_position(x_at(1.0), TRACK, 0.0, 95.0, 10.0), 95.0);
        assert_eq!(value_from_position(x_at(0.98), TRACK, 0.0, 95.0, 10.0), 90.0);
    }

    #[test]
    fn zero_width_track_maps_to_min() {
        let collapsed = TrackRect {
            left: 0.0,
            width: 0.0,
        };
        assert_eq!(value_from_position(50.0, collapsed, 10.0, 20.0, 1.0), 10.0);
    }

    #[test]
    fn dragging_min_handle_past_max_stops_at_max() {
        let mut state = range_state(20.0, 80.0);
        let mut drag = SliderDrag::default();
        assert!(drag.begin(&state, SliderHandle::Min));

        for fraction in [0.5, 0.79, 0.9, 1.0] {
            let change = drag.update(&state, x_at(fraction), TRACK).expect("move");
            state.apply(change);
        }

        assert_eq!(state.value, 80.0);
        assert_eq!(state.value2, Some(80.0));
        drag.end();
        assert_eq!(drag.active(), None);
    }

    #[test]
    fn dragging_max_handle_below_min_stops_at_min() {
        let mut state = range_state(40.0, 60.0);
        let mut drag = SliderDrag::default();
        drag.begin(&state, SliderHandle::Max);

        let change = drag.update(&state, x_at(0.1), TRACK).expect("move");
        state.apply(change);

        assert_eq!((state.value, state.value2), (40.0, Some(40.0)));
    }

    #[test]
    fn single_mode_drag_is_bounded_by_track_range() {
        let mut state = SliderState::default();
        let mut drag = SliderDrag::default();
        drag.begin(&state, SliderHandle::Min);

        state.apply(drag.update(&state, x_at(2.0), TRACK).expect("move"));
        assert_eq!(state.value, 100.0);
        state.apply(drag.update(&state, x_at(0.3), TRACK).expect("move"));
        assert_eq!(state.value, 30.0);
        assert_eq!(state.value2, None);
    }

    #[test]
    fn every_move_reports_latest_position() {
        let state = SliderState::default();
        let mut drag = SliderDrag::default();
        drag.begin(&state, SliderHandle::Min);

        let reported: Vec<f64> = [0.1, 0.6, 0.2]
            .into_iter()
            .filter_map(|fraction| drag.update(&state, x_at(fraction), TRACK))
            .map(|change| change.value)
            .collect();

        assert_eq!(reported, vec![10.0, 60.0, 20.0]);
    }

    #[test]
    fn track_click_moves_closer_handle() {
        let state = range_state(20.0, 80.0);

        let low = track_click(&state, x_at(0.3), TRACK).expect("click");
        assert_eq!((low.value, low.value2), (30.0, Some(80.0)));

        let high = track_click(&state, x_at(0.7), TRACK).expect("click");
        assert_eq!((high.value, high.value2), (20.0, Some(70.0)));
    }

    #[test]
    fn track_click_tie_moves_min_handle() {
        let state = range_state(40.0, 60.0);
        let change = track_click(&state, x_at(0.5), TRACK).expect("click");
        assert_eq!((change.value, change.value2), (50.0, Some(60.0)));
    }

    #[test]
    fn track_click_on_stacked_handles_below_moves_min() {
        let state = range_state(50.0, 50.0);
        let below = track_click(&state, x_at(0.2), TRACK).expect("click");
        assert_eq!((below.value, below.value2), (20.0, Some(50.0)));
    }

    #[test]
    fn disabled_slider_ignores_everything() {
        let state = SliderState {
            disabled: true,
            ..range_state(20.0, 80.0)
        };
        let mut drag = SliderDrag::default();

        assert!(!drag.begin(&state, SliderHandle::Min));
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(&state, x_at(0.5), TRACK), None);
        assert_eq!(track_click(&state, x_at(0.5), TRACK), None);
    }

    #[test]
    fn disabling_mid_drag_suppresses_moves() {
        let mut state = SliderState::default();
        let mut drag = SliderDrag::default();
        drag.begin(&state, SliderHandle::Min);
        state.disabled = true;
        assert_eq!(drag.update(&state, x_at(0.5), TRACK), None);
    }

    #[test]
    fn idle_drag_reports_nothing() {
        let drag = SliderDrag::default();
        assert_eq!(drag.update(&SliderState::default(), x_at(0.5), TRACK), None);
    }

    #[test]
    fn handle_percent_maps_bounds() {
        let state = SliderState {
            min: 20.0,
            max: 220.0,
            ..SliderState::default()
        };
        assert_eq!(state.handle_percent(20.0), 0.0);
        assert_eq!(state.handle_percent(70.0), 25.0);
        assert_eq!(state.handle_percent(220.0), 100.0);
    }

    #[test]
    fn state_loads_from_partial_json() {
        let state: SliderState =
            serde_json::from_str(r#"{"min":0,"max":10,"value":3,"step":0.5}"#).expect("parse");
        assert_eq!(state.value2, None);
        assert!(!state.range);
        assert!(!state.disabled);
        assert_eq!(
            serde_json::to_value(SliderHandle::Max).expect("encode"),
            serde_json::json!("max")
        );
    }

    fn slider_bounds() -> impl Strategy<Value = (f64, f64, f64)> {
        (-500i32..500, 1i32..400, 1i32..50).prop_map(|(min, span, step)| {
            let min = f64::from(min);
            (min, min + f64::from(span), f64::from(step))
        })
    }

    proptest! {
        #[test]
        fn values_stay_in_bounds_on_step_grid(
            (min, max, step) in slider_bounds(),
            fraction in 0.0f64..=1.0,
        ) {
            let value = value_from_position(x_at(fraction), TRACK, min, max, step);
            prop_assert!(value >= min && value <= max);
            let steps = (value - min) / step;
            prop_assert!(value == max || (steps - steps.round()).abs() < 1e-9);
        }

        #[test]
        fn range_drags_preserve_handle_order(
            start in (0u8..=100, 0u8..=100),
            gestures in prop::collection::vec(
                (any::<bool>(), prop::collection::vec(-0.5f64..1.5, 1..12)),
                1..8,
            ),
        ) {
            let (a, b) = (f64::from(start.0.min(start.1)), f64::from(start.0.max(start.1)));
            let mut state = range_state(a, b);
            let mut drag = SliderDrag::default();

            for (use_max, moves) in gestures {
                let handle = if use_max { SliderHandle::Max } else { SliderHandle::Min };
                drag.begin(&state, handle);
                for fraction in moves {
                    if let Some(change) = drag.update(&state, x_at(fraction), TRACK) {
                        state.apply(change);
                    }
                    let upper = state.value2.expect("range value2");
                    prop_assert!(state.value <= upper);
                }
                drag.end();
            }
        }

        #[test]
        fn range_clicks_preserve_handle_order(
            start in (0u8..=100, 0u8..=100),
            clicks in prop::collection::vec(-0.2f64..1.2, 1..16),
        ) {
            let (a, b) = (f64::from(start.0.min(start.1)), f64::from(start.0.max(start.1)));
            let mut state = range_state(a, b);
            for fraction in clicks {
                if let Some(change) = track_click(&state, x_at(fraction), TRACK) {
                    state.apply(change);
                }
                prop_assert!(state.value <= state.value2.expect("range value2"));
            }
        }
    }
}
