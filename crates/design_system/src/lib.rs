//! Presentational component library built on the `design_tokens` crate.
//!
//! The crate owns four Leptos primitives (button, card, text input, and slider)
//! together with the stable `data-ui-*` DOM contract they emit. Every primitive
//! computes its inline style from layered [`StyleMap`]s so the same values can
//! be asserted in plain unit tests. The slider's pointer math lives in the
//! DOM-free [`slider_model`] module.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
pub mod slider_model;
pub mod style;

pub use primitives::{
    button_style, card_style, input_container_style, input_helper_style, next_input_id, Button,
    ButtonVariant, Card, ControlSize, InputVariant, LabelPosition, Slider, SliderSizeSpec,
    TextInput, TokenParseError,
};
pub use slider_model::{SliderChange, SliderDrag, SliderHandle, SliderState, TrackRect};
pub use style::StyleMap;

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, Card, ControlSize, InputVariant, LabelPosition, Slider,
        SliderChange, TextInput,
    };
}
