use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

/// Call-to-action button. Renders a link when `href` is set, a `<button>` otherwise.
#[component]
pub fn SectionButton(
    #[props(default)] variant: ButtonVariant,
    href: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = variant.class();

    rsx! {
        if let Some(href) = href {
            a { class: "{class}", href: "{href}", {children} }
        } else {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |evt| {
                    if let Some(handler) = onclick {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
