//! Shared UI crate for the Purpeon site: the i18n core, components and views.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    use dioxus::prelude::*;

    /// Shared stylesheet for every component below.
    pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

    pub mod button;
    pub use button::{ButtonVariant, SectionButton};

    pub mod image;
    pub use image::{AnimationDirection, FilterPreset, ImageAlignment, Reveal, SectionImage};

    pub mod features;
    pub use features::{Feature, Features};

    pub mod hero;
    pub use hero::Hero;

    pub mod services;
    pub use services::Services;

    // Brand + locale switcher (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::SiteNavbar;
}

#[cfg(test)]
mod tests;
