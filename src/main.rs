//! StreamHub: a desktop shell for streaming services.
//!
//! Entry point: opens the main window with the sidebar and embedded browser.
//! When built without the `gui` feature, runs a console demo instead.

#[cfg(feature = "gui")]
fn main() {
    if let Err(e) = streamhub::ui::webview_app::run() {
        eprintln!("StreamHub failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use std::time::{Duration, Instant};

    use streamhub::app::App;
    use streamhub::logging;
    use streamhub::managers::platform_store::PlatformStoreTrait;
    use streamhub::managers::shortcut_manager::ShortcutManagerTrait;
    use streamhub::shell::{Effect, Msg};

    logging::init("streamhub=info,warn");

    let app = match App::in_memory(Some("demo_settings.json".to_string())) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("StreamHub failed to start: {}", e);
            std::process::exit(1);
        }
    };
    app.startup();

    println!();
    println!("StreamHub v{} (demo mode, built without `gui`)", env!("CARGO_PKG_VERSION"));
    println!();

    let mut shell = app.build_shell();

    println!("Streaming Platforms");
    for entry in shell.platforms() {
        println!("  {:<18} {}", entry.name, entry.url);
    }
    println!();

    shell.update(
        Msg::AddPlatform {
            name: "Example".to_string(),
            url: "example.com".to_string(),
        },
        Instant::now(),
    );
    if let Some(entry) = shell.store().custom_platforms().last() {
        println!("Added custom platform: {} -> {}", entry.name, entry.url);
    }

    // Two quick selections: only the second one loads.
    let start = Instant::now();
    let first = shell.platforms()[0].id.clone();
    let second = shell.platforms()[1].id.clone();
    shell.update(Msg::SelectPlatform(first), start);
    shell.update(Msg::SelectPlatform(second), start + Duration::from_millis(100));
    let later = start + Duration::from_millis(100) + shell.scheduler().delay();
    for effect in shell.update(Msg::Tick, later) {
        if let Effect::Load(url) = effect {
            println!("Debounced load: {}", url);
        }
    }
    println!();

    println!("Shortcuts");
    let shortcuts = app.shortcut_manager();
    let mut bindings: Vec<_> = shortcuts.list_shortcuts().iter().collect();
    bindings.sort();
    for (action, keys) in bindings {
        println!("  {:<16} {}", action, keys);
    }
}
