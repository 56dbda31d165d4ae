//! Platform detection helpers and the few browser globals the site touches.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }

    pub fn is_browser(self) -> bool {
        matches!(self, Self::Web)
    }
}

/// `navigator.language`, when running in a browser that reports one.
#[cfg(target_arch = "wasm32")]
pub fn navigator_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigator_language() -> Option<String> {
    None
}

/// Set an attribute on the root `<html>` element. Returns `false` when there is no document.
#[cfg(target_arch = "wasm32")]
pub fn set_root_attribute(name: &str, value: &str) -> bool {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return false;
    };
    root.set_attribute(name, value).is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_root_attribute(_name: &str, _value: &str) -> bool {
    false
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_has_no_browser_globals() {
        assert_eq!(Platform::current(), Platform::Native);
        assert!(!Platform::current().is_browser());
        assert_eq!(navigator_language(), None);
        assert!(!set_root_attribute("lang", "en"));
    }
}
