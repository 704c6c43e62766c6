use serde::Serialize;

use super::Shell;
use crate::managers::platform_store::PlatformStoreTrait;

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformRow {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Only custom rows get a remove button.
    pub removable: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddFormView {
    pub name: String,
    pub url: String,
    pub can_submit: bool,
}

/// Everything the shell page needs to draw itself, pushed after each update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub platforms: Vec<PlatformRow>,
    pub title: Option<String>,
    pub loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub fullscreen: bool,
    pub sidebar_visible: bool,
    pub add_form: Option<AddFormView>,
}

impl ViewModel {
    pub fn from_shell<S: PlatformStoreTrait>(shell: &Shell<S>) -> Self {
        let selected_id = shell.selected().map(|p| p.id.as_str());
        let platforms = shell
            .platforms()
            .iter()
            .map(|p| PlatformRow {
                id: p.id.clone(),
                name: p.name.clone(),
                icon: p.icon.clone(),
                removable: p.is_custom,
                selected: Some(p.id.as_str()) == selected_id,
            })
            .collect();

        let history = shell.history();
        Self {
            platforms,
            title: shell.title().map(str::to_string),
            loading: shell.is_loading(),
            can_go_back: history.can_go_back,
            can_go_forward: history.can_go_forward,
            fullscreen: shell.is_fullscreen(),
            sidebar_visible: shell.is_sidebar_visible(),
            add_form: shell.add_form().map(|f| AddFormView {
                name: f.name.clone(),
                url: f.url.clone(),
                can_submit: f.can_submit(),
            }),
        }
    }

    /// Script that hands this model to the shell page's renderer.
    pub fn render_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "null".to_string());
        format!("if(window.__sh_render)__sh_render({})", json)
    }
}
