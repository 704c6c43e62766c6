//! Window and web views using `wry` + `tao`.
//!
//! Architecture:
//! - The shell web view covers the whole window and draws the sidebar,
//!   navigation bar, placeholder and add-platform modal from a pushed
//!   view model.
//! - The content web view is a native child placed over the detail pane.
//!   It is hidden while there is nothing to show or the modal is open.
//! - IPC from both pages and page-load notifications from the content view
//!   are forwarded to the event loop as user events, so all state changes
//!   happen on the loop. Content-view IPC is kept apart and limited to key
//!   chords.
//! - The debounce deadline drives `ControlFlow::WaitUntil`.

use std::time::Instant;

use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::{Fullscreen, Theme, Window, WindowBuilder};
use wry::dpi::{LogicalPosition, LogicalSize, Position, Size};
use wry::{PageLoadEvent, Rect, WebContext, WebView, WebViewBuilder};

use crate::app::App;
use crate::logging;
use crate::managers::platform_store::PlatformStore;
use crate::platform;
use crate::runtime::ShellRuntime;
use crate::shell::layout::{content_layout, Bounds};
use crate::shell::{Effect, Msg};
use crate::types::navigation::BrowserEvent;
use crate::types::settings::WindowSettings;
use crate::ui::pages;
use crate::ui::wry_browser::WryBrowser;

#[derive(Debug)]
enum UserEvent {
    Ipc(String),
    ContentIpc(String),
    PageLoad(BrowserEvent),
}

type Runtime = ShellRuntime<PlatformStore, WryBrowser>;

fn rect(bounds: Bounds) -> Rect {
    Rect {
        position: Position::Logical(LogicalPosition::new(bounds.x, bounds.y)),
        size: Size::Logical(LogicalSize::new(bounds.width, bounds.height)),
    }
}

fn logical_size(window: &Window) -> (f64, f64) {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    (size.width, size.height)
}

fn full_window(window: &Window) -> Bounds {
    let (width, height) = logical_size(window);
    Bounds {
        x: 0.0,
        y: 0.0,
        width,
        height,
    }
}

fn apply_effects(window: &Window, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::SetFullscreen(on) => {
                tracing::debug!(fullscreen = on, "switching fullscreen");
                window.set_fullscreen(on.then_some(Fullscreen::Borderless(None)));
            }
            other => tracing::debug!(?other, "effect left unhandled by runtime"),
        }
    }
}

/// Pushes the view model to the shell page and repositions both web views.
fn sync(runtime: &Runtime, shell_view: &WebView, window: &Window, geometry: &WindowSettings) {
    if let Err(e) = shell_view.evaluate_script(&runtime.view().render_script()) {
        tracing::warn!(error = %e, "failed to render shell");
    }

    let (width, height) = logical_size(window);
    let layout = content_layout(runtime.shell(), geometry, width, height);
    let _ = shell_view.set_bounds(rect(full_window(window)));

    let browser = runtime.browser();
    let content = browser.webview();
    if let Err(e) = content.set_bounds(rect(layout.bounds)) {
        tracing::warn!(error = %e, "failed to position content view");
    }
    let _ = content.set_visible(layout.visible);
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let app = App::new(&platform::database_path(), None)?;
    let settings = app.settings().clone();
    logging::init(&settings.logging.filter);
    app.startup();

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let geometry = settings.window.clone();
    let window = WindowBuilder::new()
        .with_title("StreamHub")
        .with_inner_size(tao::dpi::LogicalSize::new(geometry.width, geometry.height))
        .with_min_inner_size(tao::dpi::LogicalSize::new(geometry.min_width, geometry.min_height))
        .with_theme(settings.general.dark_mode.then_some(Theme::Dark))
        .build(&event_loop)?;

    let shortcuts = app.shortcut_manager();
    let shortcuts_js = pages::shortcuts_script(&shortcuts);

    let shell_proxy = proxy.clone();
    let shell_view = WebViewBuilder::new()
        .with_html(pages::shell_html(&geometry, &shortcuts_js))
        .with_bounds(rect(full_window(&window)))
        .with_devtools(settings.navigation.devtools)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = shell_proxy.send_event(UserEvent::Ipc(msg.body().clone()));
        })
        .build_as_child(&window)?;

    // Persistent cookies and storage, so streaming sign-ins survive restarts.
    let mut web_context = WebContext::new(Some(platform::webview_data_dir()));

    let load_proxy = proxy.clone();
    let content_proxy = proxy.clone();
    let content_view = WebViewBuilder::new_with_web_context(&mut web_context)
        .with_bounds(rect(Bounds {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }))
        .with_visible(false)
        .with_user_agent(settings.general.user_agent.as_str())
        .with_autoplay(settings.navigation.autoplay)
        .with_back_forward_navigation_gestures(settings.navigation.back_forward_gestures)
        .with_devtools(settings.navigation.devtools)
        // Runs on http/https pages. Key chords are captured here too so
        // shortcuts keep working while the content view has focus.
        .with_initialization_script(&shortcuts_js)
        .with_on_page_load_handler(move |event, url| {
            let event = match event {
                PageLoadEvent::Started => BrowserEvent::Started { url },
                PageLoadEvent::Finished => BrowserEvent::Finished { url },
            };
            let _ = load_proxy.send_event(UserEvent::PageLoad(event));
        })
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = content_proxy.send_event(UserEvent::ContentIpc(msg.body().clone()));
        })
        .with_new_window_req_handler(|url, _features| {
            tracing::debug!(%url, "popup blocked");
            wry::NewWindowResponse::Deny
        })
        .build_as_child(&window)?;

    let mut runtime: Runtime = ShellRuntime::new(
        app.build_shell(),
        WryBrowser::new(content_view),
        shortcuts,
    );
    sync(&runtime, &shell_view, &window, &geometry);

    event_loop.run(move |event, _, control_flow| {
        // Keeps the content view's data directory alive for the loop.
        let _ = &web_context;
        let now = Instant::now();

        let effects = match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => runtime.tick(now),

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                tracing::info!("shutting down");
                *control_flow = ControlFlow::Exit;
                return;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                // The OS can leave fullscreen on its own (Esc, window controls).
                let fullscreen = window.fullscreen().is_some();
                if fullscreen != runtime.shell().is_fullscreen() {
                    runtime.dispatch(Msg::FullscreenChanged(fullscreen), now)
                } else {
                    Vec::new()
                }
            }

            Event::UserEvent(UserEvent::Ipc(body)) => {
                tracing::trace!(%body, "ipc");
                runtime.handle_ipc(&body, now)
            }

            Event::UserEvent(UserEvent::ContentIpc(body)) => {
                tracing::trace!(%body, "content ipc");
                runtime.handle_content_ipc(&body, now)
            }

            Event::UserEvent(UserEvent::PageLoad(event)) => runtime.browser_event(event, now),

            _ => return,
        };

        apply_effects(&window, effects);
        sync(&runtime, &shell_view, &window, &geometry);

        *control_flow = match runtime.next_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
    });
}
