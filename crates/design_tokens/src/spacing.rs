//! Spacing scale.
//!
//! The numeric scale follows a 4px rhythm. The named `XXS`..`LG` steps are the
//! tighter values the primitives actually use for gaps and padding.

/// No spacing.
pub const S0: &str = "0";
/// 4px.
pub const S1: &str = "0.25rem";
/// 8px.
pub const S2: &str = "0.5rem";
/// 12px.
pub const S3: &str = "0.75rem";
/// 16px.
pub const S4: &str = "1rem";
/// 20px.
pub const S5: &str = "1.25rem";
/// 24px.
pub const S6: &str = "1.5rem";
/// 32px.
pub const S8: &str = "2rem";
/// 40px.
pub const S10: &str = "2.5rem";
/// 48px.
pub const S12: &str = "3rem";
/// 64px.
pub const S16: &str = "4rem";
/// 80px.
pub const S20: &str = "5rem";
/// 96px.
pub const S24: &str = "6rem";
/// 128px.
pub const S32: &str = "8rem";

/// 2px.
pub const XXS: &str = "2px";
/// 6px.
pub const SM: &str = "6px";
/// 8px.
pub const MD: &str = "8px";
/// 12px.
pub const LG: &str = "12px";
