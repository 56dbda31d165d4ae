//! Section illustration with optional scroll-triggered reveal.
//!
//! Class contract (styled in `assets/theme/main.css`):
//! - `section-image section-image--{start|center|end} section-image--{preset}`
//! - `section-image--animate section-image--from-{left|right}` while animating
//! - `is-visible` once revealed

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageAlignment {
    #[default]
    Start,
    Center,
    End,
}

impl ImageAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageAlignment::Start => "start",
            ImageAlignment::Center => "center",
            ImageAlignment::End => "end",
        }
    }
}

/// Colour-filter preset, one per page section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterPreset {
    #[default]
    Services,
    Hero,
    About,
    Contact,
}

impl FilterPreset {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterPreset::Services => "services",
            FilterPreset::Hero => "hero",
            FilterPreset::About => "about",
            FilterPreset::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationDirection {
    #[default]
    Left,
    Right,
}

impl AnimationDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationDirection::Left => "left",
            AnimationDirection::Right => "right",
        }
    }
}

/// Visibility of an image that may wait for the viewport.
///
/// Without animation it starts visible. With animation it waits for the first
/// intersecting notification and then stays visible; later notifications are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    animate: bool,
    visible: bool,
}

impl Reveal {
    pub fn new(animate_on_scroll: bool) -> Self {
        Self {
            animate: animate_on_scroll,
            visible: !animate_on_scroll,
        }
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn is_animated(self) -> bool {
        self.animate
    }

    /// Still waiting for the element to enter the viewport.
    pub fn is_observing(self) -> bool {
        self.animate && !self.visible
    }

    /// Feed a visibility notification. Returns `true` if this revealed the image.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && self.is_observing() {
            self.visible = true;
            true
        } else {
            false
        }
    }
}

pub fn section_image_class(
    alignment: ImageAlignment,
    preset: FilterPreset,
    direction: AnimationDirection,
    reveal: Reveal,
) -> String {
    let mut classes = vec![
        "section-image".to_string(),
        format!("section-image--{}", alignment.as_str()),
        format!("section-image--{}", preset.as_str()),
    ];
    if reveal.is_animated() {
        classes.push("section-image--animate".to_string());
        classes.push(format!("section-image--from-{}", direction.as_str()));
    }
    if reveal.is_visible() {
        classes.push("is-visible".to_string());
    }
    classes.join(" ")
}

/// Inline style for the `<img>`; `None` when neither override is set.
pub fn section_image_style(max_width: Option<&str>, border_radius: Option<&str>) -> Option<String> {
    let rules: Vec<String> = [("max-width", max_width), ("border-radius", border_radius)]
        .into_iter()
        .filter_map(|(property, value)| value.map(|v| format!("{property}: {v}")))
        .collect();
    (!rules.is_empty()).then(|| rules.join("; "))
}

#[component]
pub fn SectionImage(
    src: String,
    alt: String,
    width: Option<String>,
    height: Option<String>,
    max_width: Option<String>,
    border_radius: Option<String>,
    #[props(default)] alignment: ImageAlignment,
    #[props(default)] filter_preset: FilterPreset,
    #[props(default)] animate_on_scroll: bool,
    #[props(default)] animation_direction: AnimationDirection,
    badge: Option<Element>,
) -> Element {
    let mut reveal = use_signal(|| Reveal::new(animate_on_scroll));

    let class = section_image_class(alignment, filter_preset, animation_direction, reveal());
    let style = section_image_style(max_width.as_deref(), border_radius.as_deref());

    rsx! {
        div {
            class: "{class}",
            onvisible: move |evt| {
                if !reveal.peek().is_observing() {
                    return;
                }
                let intersecting = evt.is_intersecting().unwrap_or(false);
                if reveal.with_mut(|state| state.observe(intersecting)) {
                    tracing::trace!("section image revealed");
                }
            },
            img {
                src: "{src}",
                alt: "{alt}",
                width: width,
                height: height,
                style: style,
                "loading": "lazy",
                "decoding": "async",
            }
            if let Some(badge) = badge {
                div { class: "section-image__badge", {badge} }
            }
        }
    }
}
