//! Static application registry and window-content mounting.

use desktop_app_contract::{AppHost, AppModule, AppMountContext};
use leptos::View;
use system_ui::IconName;

use crate::model::{AppId, LaunchParams, LaunchParamsShape};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title: &'static str,
    pub icon: IconName,
    /// Colour token for dock tiles (`data-ui-accent`).
    pub accent: &'static str,
    pub show_in_dock: bool,
    pub params: LaunchParamsShape,
}

// Ordered like `AppId::ALL`; `app_descriptor` indexes by discriminant.
const APP_REGISTRY: [AppDescriptor; 7] = [
    AppDescriptor {
        app_id: AppId::About,
        title: "Sobre mí",
        icon: IconName::User,
        accent: "blue",
        show_in_dock: true,
        params: LaunchParamsShape::Empty,
    },
    AppDescriptor {
        app_id: AppId::Projects,
        title: "Proyectos",
        icon: IconName::Folder,
        accent: "purple",
        show_in_dock: true,
        params: LaunchParamsShape::Empty,
    },
    AppDescriptor {
        app_id: AppId::Experience,
        title: "Experiencia",
        icon: IconName::Briefcase,
        accent: "green",
        show_in_dock: true,
        params: LaunchParamsShape::Empty,
    },
    AppDescriptor {
        app_id: AppId::Skills,
        title: "Habilidades",
        icon: IconName::Cpu,
        accent: "orange",
        show_in_dock: true,
        params: LaunchParamsShape::Empty,
    },
    AppDescriptor {
        app_id: AppId::Contact,
        title: "Contacto",
        icon: IconName::Mail,
        accent: "red",
        show_in_dock: true,
        params: LaunchParamsShape::Empty,
    },
    AppDescriptor {
        app_id: AppId::Terminal,
        title: "Terminal",
        icon: IconName::Terminal,
        accent: "gray",
        show_in_dock: true,
        params: LaunchParamsShape::Empty,
    },
    AppDescriptor {
        app_id: AppId::Browser,
        title: "Navegador",
        icon: IconName::Globe,
        accent: "sky",
        show_in_dock: false,
        params: LaunchParamsShape::Browser,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    &APP_REGISTRY[app_id as usize]
}

pub fn app_descriptor_by_key(key: &str) -> Option<&'static AppDescriptor> {
    AppId::parse(key).map(app_descriptor)
}

/// Apps with a dock tile. The browser is only reachable from other apps.
pub fn dock_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_dock)
        .collect()
}

fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::About
        | AppId::Projects
        | AppId::Experience
        | AppId::Skills
        | AppId::Contact => AppModule::new(desktop_app_portfolio::mount),
        AppId::Terminal => AppModule::new(desktop_app_terminal::mount),
        AppId::Browser => AppModule::new(desktop_app_browser::mount),
    }
}

/// Mounts the content view of `app_id`'s window.
pub fn render_window_contents(
    app_id: AppId,
    launch_params: Option<LaunchParams>,
    host: AppHost,
) -> View {
    app_module(app_id).mount(AppMountContext {
        app_id,
        launch_params,
        host,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    #[test]
    fn registry_is_ordered_by_app_id() {
        for (idx, id) in AppId::ALL.into_iter().enumerate() {
            assert_eq!(app_registry()[idx].app_id, id);
            assert_eq!(app_descriptor(id).app_id, id);
        }
    }

    #[test]
    fn dock_excludes_browser() {
        let dock = dock_apps()
            .into_iter()
            .map(|entry| entry.app_id)
            .collect::<Vec<_>>();
        assert_eq!(
            dock,
            vec![
                AppId::About,
                AppId::Projects,
                AppId::Experience,
                AppId::Skills,
                AppId::Contact,
                AppId::Terminal,
            ]
        );
    }

    #[test]
    fn unknown_keys_have_no_descriptor() {
        assert_eq!(
            app_descriptor_by_key("browser").map(|entry| entry.title),
            Some("Navegador")
        );
        assert!(app_descriptor_by_key("finder").is_none());
    }

    #[test]
    fn registry_matches_generated_manifest_catalog() {
        let catalog: Vec<Value> =
            serde_json::from_str(APP_MANIFEST_CATALOG_JSON).expect("catalog json");
        assert_eq!(catalog.len(), app_registry().len());

        for manifest in catalog {
            let key = manifest["app_id"].as_str().expect("app_id");
            let entry = app_descriptor_by_key(key).expect("manifest app is registered");
            assert_eq!(manifest["title"], entry.title);
            assert_eq!(manifest["icon"], entry.icon.token());
            assert_eq!(manifest["accent"], entry.accent);
            assert_eq!(manifest["show_in_dock"], entry.show_in_dock);
            let shape = match entry.params {
                LaunchParamsShape::Empty => "empty",
                LaunchParamsShape::Browser => "browser",
            };
            assert_eq!(manifest["launch_params"], shape);
        }
    }
}
