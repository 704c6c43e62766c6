//! Where the native content view sits inside the window.
//!
//! The shell page covers the whole window; the web engine's content view is
//! a separate native child placed over the detail pane. Native children draw
//! above page content, so the content view is hidden whenever the shell page
//! must show something in its place (placeholder, add-platform modal).

use super::Shell;
use crate::managers::platform_store::PlatformStoreTrait;
use crate::types::settings::WindowSettings;

/// Logical-pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentLayout {
    pub bounds: Bounds,
    pub visible: bool,
}

/// Computes the content view placement for a window of `width` x `height`
/// logical pixels.
pub fn content_layout<S: PlatformStoreTrait>(
    shell: &Shell<S>,
    window: &WindowSettings,
    width: f64,
    height: f64,
) -> ContentLayout {
    // Fullscreen gives the content the sidebar's space too.
    let sidebar = if shell.is_sidebar_visible() && !shell.is_fullscreen() {
        f64::from(window.sidebar_width).min(width)
    } else {
        0.0
    };
    let navbar = f64::from(window.navbar_height).min(height);

    ContentLayout {
        bounds: Bounds {
            x: sidebar,
            y: navbar,
            width: (width - sidebar).max(0.0),
            height: (height - navbar).max(0.0),
        },
        visible: shell.selected().is_some() && shell.add_form().is_none(),
    }
}
