//! Color palette.

/// Text colors.
pub mod text {
    /// Default body text.
    pub const PRIMARY: &str = "#414651";
    /// Muted/supporting text.
    pub const SECONDARY: &str = "#535862";
    /// Input placeholder text.
    pub const PLACEHOLDER: &str = "#717680";
    /// Darkest text, used for slider value labels.
    pub const PRIMARY_900: &str = "#181d27";

    /// Brand text colors.
    pub mod brand {
        /// Brand accent text (also the primary action fill).
        pub const TERTIARY: &str = "#b55419";
    }
}

/// Surface colors.
pub mod background {
    /// Default surface.
    pub const PRIMARY: &str = "#ffffff";
    /// Alternate default surface.
    pub const PRIMARY_ALT: &str = "#ffffff";
    /// Recessed surface such as an empty slider track.
    pub const QUATERNARY: &str = "#e9eaeb";
    /// Solid brand fill.
    pub const BRAND_SOLID: &str = "#b55419";
}

/// Border colors.
pub mod border {
    /// Default control border.
    pub const PRIMARY: &str = "#d5d7da";
    /// Translucent hairline border.
    pub const SECONDARY_ALT: &str = "#00000014";
}

/// Foreground (icon) colors.
pub mod foreground {
    /// Muted icon color.
    pub const QUATERNARY: &str = "#a4a7ae";
    /// Brand icon color.
    pub const BRAND_PRIMARY: &str = "#b55419";
}

/// Colors used inside shadow definitions.
pub mod effects {
    /// Shadow tint colors.
    pub mod shadow {
        /// Extra-small shadow tint.
        pub const XS: &str = "#0a0d120d";
        #[allow(missing_docs)]
        pub const MD_01: &str = "#0a0d121a";
        #[allow(missing_docs)]
        pub const MD_02: &str = "#0a0d120f";
        #[allow(missing_docs)]
        pub const LG_01: &str = "#0a0d1214";
        #[allow(missing_docs)]
        pub const LG_02: &str = "#0a0d1208";
        #[allow(missing_docs)]
        pub const LG_03: &str = "#0a0d120a";
    }
}

/// Destructive action colors.
pub mod danger {
    /// Resting fill.
    pub const SOLID: &str = "#dc2626";
    /// Hover fill.
    pub const HOVER: &str = "#b91c1c";
    /// Active fill.
    pub const ACTIVE: &str = "#991b1b";
}

/// Component-specific colors.
pub mod components {
    /// Slider colors.
    pub mod slider {
        /// Handle fill.
        pub const HANDLE_BG: &str = "#ffffff";
        /// Handle ring.
        pub const HANDLE_BORDER: &str = "#b55419";
    }
}
