//! Corner radii.

#[allow(missing_docs)]
pub const NONE: &str = "0";
/// 2px.
pub const SM: &str = "0.125rem";
/// 4px.
pub const BASE: &str = "0.25rem";
/// 8px, the default control radius.
pub const MD: &str = "0.5rem";
/// 12px.
pub const LG: &str = "0.75rem";
/// 16px.
pub const XL: &str = "1rem";
/// 24px.
pub const XL2: &str = "1.5rem";
/// 24px.
pub const XL3: &str = "1.5rem";
/// Pill/circle.
pub const FULL: &str = "9999px";
