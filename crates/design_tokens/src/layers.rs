//! Responsive breakpoints and stacking layers.

/// Minimum viewport widths.
#[allow(missing_docs)]
pub mod breakpoints {
    pub const SM: &str = "640px";
    pub const MD: &str = "768px";
    pub const LG: &str = "1024px";
    pub const XL: &str = "1280px";
    pub const XL2: &str = "1536px";
}

/// `z-index` layers, lowest first.
#[allow(missing_docs)]
pub mod z_index {
    pub const HIDE: i32 = -1;
    pub const BASE: i32 = 0;
    pub const DOCKED: i32 = 10;
    pub const DROPDOWN: i32 = 1000;
    pub const STICKY: i32 = 1100;
    pub const BANNER: i32 = 1200;
    pub const OVERLAY: i32 = 1300;
    pub const MODAL: i32 = 1400;
    pub const POPOVER: i32 = 1500;
    pub const SKIP_LINK: i32 = 1600;
    pub const TOAST: i32 = 1700;
    pub const TOOLTIP: i32 = 1800;
}
