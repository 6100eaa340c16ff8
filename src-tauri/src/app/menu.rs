//! Usage: Application menu (File → Exit, Help → About), built once at startup.

pub(crate) const MENU_FILE_LABEL: &str = "File";
pub(crate) const MENU_HELP_LABEL: &str = "Help";
const MENU_EXIT_ID: &str = "file.exit";
const MENU_ABOUT_ID: &str = "help.about";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Exit,
    About,
}

impl MenuAction {
    pub(crate) fn id(self) -> &'static str {
        match self {
            Self::Exit => MENU_EXIT_ID,
            Self::About => MENU_ABOUT_ID,
        }
    }

    pub(crate) fn from_id(id: &str) -> Option<Self> {
        match id {
            MENU_EXIT_ID => Some(Self::Exit),
            MENU_ABOUT_ID => Some(Self::About),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuEntry {
    pub(crate) label: String,
    pub(crate) action: MenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuSection {
    pub(crate) label: String,
    pub(crate) items: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuTemplate {
    pub(crate) sections: Vec<MenuSection>,
}

impl MenuTemplate {
    pub(crate) fn for_product(product_name: &str) -> Self {
        Self {
            sections: vec![
                MenuSection {
                    label: MENU_FILE_LABEL.to_string(),
                    items: vec![MenuEntry {
                        label: "Exit".to_string(),
                        action: MenuAction::Exit,
                    }],
                },
                MenuSection {
                    label: MENU_HELP_LABEL.to_string(),
                    items: vec![MenuEntry {
                        label: format!("About {product_name}"),
                        action: MenuAction::About,
                    }],
                },
            ],
        }
    }
}

#[cfg(desktop)]
use crate::error::LifecycleError;
#[cfg(desktop)]
use tauri::menu::{Menu, MenuItem, Submenu};

#[cfg(desktop)]
pub(crate) fn build<R: tauri::Runtime, M: tauri::Manager<R>>(
    manager: &M,
    template: &MenuTemplate,
) -> Result<Menu<R>, LifecycleError> {
    let menu = Menu::new(manager)
        .map_err(|e| LifecycleError::Menu(format!("failed to create menu: {e}")))?;

    for section in &template.sections {
        let submenu = Submenu::new(manager, &section.label, true).map_err(|e| {
            LifecycleError::Menu(format!("failed to create submenu {}: {e}", section.label))
        })?;
        for entry in &section.items {
            let item = MenuItem::with_id(
                manager,
                entry.action.id(),
                &entry.label,
                true,
                None::<&str>,
            )
            .map_err(|e| {
                LifecycleError::Menu(format!("failed to create menu item {}: {e}", entry.label))
            })?;
            submenu.append(&item).map_err(|e| {
                LifecycleError::Menu(format!("failed to append menu item {}: {e}", entry.label))
            })?;
        }
        menu.append(&submenu).map_err(|e| {
            LifecycleError::Menu(format!("failed to append submenu {}: {e}", section.label))
        })?;
    }

    Ok(menu)
}
