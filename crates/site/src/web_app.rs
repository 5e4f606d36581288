use desktop_runtime::{DeepLinkState, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="es" />
        <Title text="Azul Estudio" />
        <Meta name="description" content="Portafolio de Azul Estudio con forma de escritorio." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// `?open=about,terminal` opens those apps once the visitor first logs in.
fn deep_link_from_query(query: &ParamsMap) -> Option<DeepLinkState> {
    query
        .get("open")
        .map(|raw| DeepLinkState::parse(raw))
        .filter(|deep_link| !deep_link.is_empty())
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let deep_link = use_query_map().with_untracked(deep_link_from_query);

    view! {
        <DesktopProvider host_services=platform_host_web::build_host_services() deep_link>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[cfg(test)]
mod tests {
    use desktop_runtime::AppId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ParamsMap {
        let mut map = ParamsMap::new();
        for (key, value) in pairs {
            map.insert(key.to_string(), value.to_string());
        }
        map
    }

    #[test]
    fn open_parameter_becomes_a_deep_link() {
        let deep_link = deep_link_from_query(&query(&[("open", "projects,browser")]));
        assert_eq!(
            deep_link.map(|deep_link| deep_link.open),
            Some(vec![AppId::Projects, AppId::Browser])
        );
    }

    #[test]
    fn missing_or_unknown_apps_produce_no_deep_link() {
        assert_eq!(deep_link_from_query(&query(&[])), None);
        assert_eq!(deep_link_from_query(&query(&[("open", "finder")])), None);
    }
}
