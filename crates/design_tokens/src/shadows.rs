//! Box-shadow definitions.

/// Hairline card shadow.
pub const XS: &str = "0px 1px 2px 0px rgba(10, 13, 18, 0.05)";
#[allow(missing_docs)]
pub const SM: &str = "0 1px 2px 0 rgb(0 0 0 / 0.05)";
#[allow(missing_docs)]
pub const BASE: &str = "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)";
#[allow(missing_docs)]
pub const MD: &str = "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)";
#[allow(missing_docs)]
pub const LG: &str = "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)";
#[allow(missing_docs)]
pub const XL: &str = "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)";
#[allow(missing_docs)]
pub const XL2: &str = "0 25px 50px -12px rgb(0 0 0 / 0.25)";
/// Inset shadow.
pub const INNER: &str = "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)";
/// Explicitly no shadow.
pub const NONE: &str = "0 0 #0000";

/// Resting slider handle.
pub const MD_01: &str =
    "0px 4px 6px -1px rgba(10, 13, 18, 0.1), 0px 2px 4px -2px rgba(10, 13, 18, 0.06)";
#[allow(missing_docs)]
pub const MD_02: &str =
    "0px 4px 6px -1px rgba(10, 13, 18, 0.06), 0px 2px 4px -2px rgba(10, 13, 18, 0.04)";
/// Grabbed slider handle and floating tooltips.
pub const LG_01: &str = "0px 12px 16px -4px rgba(10, 13, 18, 0.08), 0px 4px 6px -2px rgba(10, 13, 18, 0.03), 0px 2px 2px -1px rgba(10, 13, 18, 0.04)";
#[allow(missing_docs)]
pub const LG_02: &str = "0px 12px 16px -4px rgba(10, 13, 18, 0.03), 0px 4px 6px -2px rgba(10, 13, 18, 0.01), 0px 2px 2px -1px rgba(10, 13, 18, 0.02)";
#[allow(missing_docs)]
pub const LG_03: &str = "0px 12px 16px -4px rgba(10, 13, 18, 0.04), 0px 4px 6px -2px rgba(10, 13, 18, 0.02), 0px 2px 2px -1px rgba(10, 13, 18, 0.03)";

/// Focus ring drawn around a focused input container.
pub const FOCUS_RING: &str = "0 0 0 3px rgba(181, 84, 25, 0.1)";
