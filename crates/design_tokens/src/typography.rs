//! Font families, sizes, weights, and line heights.

/// Font families.
pub mod font_family {
    /// Body copy family.
    pub const BODY: &str = "Inter";
    /// Sans-serif stack.
    pub const SANS: &str = "Inter, system-ui, sans-serif";
    /// Monospace stack.
    pub const MONO: &str = "'JetBrains Mono', Consolas, monospace";
}

/// Font sizes.
pub mod font_size {
    /// 12px.
    pub const XS: &str = "0.75rem";
    /// 14px.
    pub const SM: &str = "0.875rem";
    /// 16px.
    pub const BASE: &str = "1rem";
    /// 18px.
    pub const LG: &str = "1.125rem";
    /// 20px.
    pub const XL: &str = "1.25rem";
    /// 24px.
    pub const XL2: &str = "1.5rem";
    /// 30px.
    pub const XL3: &str = "1.875rem";
    /// 36px.
    pub const XL4: &str = "2.25rem";
    /// 48px.
    pub const XL5: &str = "3rem";
    /// 60px.
    pub const XL6: &str = "3.75rem";
}

/// Font weights.
#[allow(missing_docs)]
pub mod font_weight {
    pub const LIGHT: &str = "300";
    pub const NORMAL: &str = "400";
    pub const MEDIUM: &str = "500";
    pub const SEMIBOLD: &str = "600";
    pub const BOLD: &str = "700";
    pub const EXTRABOLD: &str = "800";
}

/// Line heights.
pub mod line_height {
    #[allow(missing_docs)]
    pub const NONE: &str = "1";
    #[allow(missing_docs)]
    pub const TIGHT: &str = "1.25";
    #[allow(missing_docs)]
    pub const SNUG: &str = "1.375";
    #[allow(missing_docs)]
    pub const NORMAL: &str = "1.5";
    #[allow(missing_docs)]
    pub const RELAXED: &str = "1.625";
    #[allow(missing_docs)]
    pub const LOOSE: &str = "2";
    /// Fixed line height paired with `font_size::XS`.
    pub const TEXT_XS: &str = "18px";
    /// Fixed line height paired with `font_size::SM`.
    pub const TEXT_SM: &str = "20px";
    /// Fixed line height paired with `font_size::BASE`.
    pub const TEXT_MD: &str = "24px";
}
