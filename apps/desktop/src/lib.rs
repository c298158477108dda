mod routes;

pub use crate::routes::{App, Route};

use cp3::domain::config::WindowConfig;
use cp3::store::Store;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

const STYLE: &str = include_str!("style.css");

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        let WindowConfig { title, width, height } = WindowConfig::default();
        Self { title, width, height }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Takes title and size from the `[window]` config section.
    #[must_use]
    pub fn with_config(self, config: &WindowConfig) -> Self {
        self.with_title(&config.title).with_size(config.width, config.height)
    }

    /// The entry point for launching the app. `store` is provided as context to every view.
    pub fn launch(self, store: Store, root: fn() -> Element) {
        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>{STYLE}</style>"#
        ));

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(store.clone()))
            .launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_config() {
        let config = WindowConfig { title: "Cp3".to_owned(), width: 640.0, height: 480.0 };
        let app = DesktopApp::new().with_config(&config);
        assert_eq!(app.title, "Cp3");
        assert!((app.width - 640.0).abs() < f64::EPSILON);
        assert!((app.height - 480.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_window_is_the_register_page() {
        let app = DesktopApp::default();
        assert_eq!(app.title, "Registrarse");
    }
}
