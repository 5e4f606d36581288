//! Portfolio panels: about, projects, experience, skills and contact.
//!
//! Each panel is a separate desktop app sharing this crate; [`mount`] picks the panel from the
//! mounted app id.

pub mod content;

use std::time::Duration;

use desktop_app_contract::{AppHost, AppId, AppMountContext, BrowserLaunchParams, LaunchParams};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use system_ui::{Badge, Button, Card, Heading, HeadingLevel, Icon, IconName, IconSize, ProgressBar};

use crate::content::{
    Project, SocialNetwork, ABOUT_PARAGRAPHS, CONTACT_EMAIL, CONTACT_PITCH, COPIED_FEEDBACK_MS,
    JOBS, PROFILE_NAME, PROFILE_PHOTO_URL, PROFILE_ROLE, PROJECTS, SKILLS, SOCIAL_LINKS,
    TECH_TAGS,
};

/// Launch request that shows `project` in the browser window.
fn project_launch(project: &Project) -> (AppId, Option<LaunchParams>) {
    (
        AppId::Browser,
        Some(LaunchParams::Browser(BrowserLaunchParams::new(project.url))),
    )
}

fn social_icon(network: SocialNetwork) -> IconName {
    match network {
        SocialNetwork::Github => IconName::Github,
        SocialNetwork::Linkedin => IconName::Linkedin,
    }
}

#[component]
/// Profile photo, name and bio.
pub fn AboutPanel() -> impl IntoView {
    view! {
        <div class="portfolio-panel portfolio-about">
            <div class="portfolio-profile">
                <img class="portfolio-photo" src=PROFILE_PHOTO_URL alt="Perfil" />
                <Heading>{PROFILE_NAME}</Heading>
                <p class="portfolio-muted">{PROFILE_ROLE}</p>
            </div>
            {ABOUT_PARAGRAPHS
                .into_iter()
                .map(|text| view! { <p class="portfolio-copy">{text}</p> })
                .collect_view()}
        </div>
    }
}

#[component]
/// Project cards; clicking one opens the project in the browser window.
pub fn ProjectsPanel(
    /// Shell handle used to open the browser.
    host: AppHost,
) -> impl IntoView {
    view! {
        <div class="portfolio-panel portfolio-projects">
            {PROJECTS
                .into_iter()
                .map(|project| {
                    let open = Callback::new(move |_| {
                        let (app_id, params) = project_launch(&project);
                        host.open_app(app_id, params);
                    });
                    view! {
                        <Card layout_class="portfolio-project" interactive=true on_click=open>
                            <div class="portfolio-project-thumb">
                                <img src=project.thumbnail_url() alt="Proyecto" />
                                <span class="portfolio-project-hover">
                                    <Icon icon=IconName::ExternalLink />
                                </span>
                            </div>
                            <Heading level=HeadingLevel::H3>{project.title}</Heading>
                            <p class="portfolio-muted">{project.summary}</p>
                            <Badge>{project.tech}</Badge>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// Work history timeline.
pub fn ExperiencePanel() -> impl IntoView {
    view! {
        <ol class="portfolio-panel portfolio-timeline">
            {JOBS
                .into_iter()
                .map(|job| {
                    view! {
                        <li class="portfolio-job">
                            <span class="portfolio-job-dot" aria-hidden="true"></span>
                            <Heading level=HeadingLevel::H3>{job.role}</Heading>
                            <div class="portfolio-job-meta">
                                {format!("{} • {}", job.company, job.period)}
                            </div>
                            <p class="portfolio-copy">{job.summary}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
/// Skill meters and technology tags.
pub fn SkillsPanel() -> impl IntoView {
    view! {
        <div class="portfolio-panel portfolio-skills">
            <div class="portfolio-skill-grid">
                {SKILLS
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <div class="portfolio-skill">
                                <div class="portfolio-skill-head">
                                    <span>{skill.name}</span>
                                    <span class="portfolio-muted">{format!("{}%", skill.level)}</span>
                                </div>
                                <ProgressBar accent=skill.accent value=f64::from(skill.level) />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <Heading level=HeadingLevel::H3 icon=IconName::Code>"Tecnologías"</Heading>
            <div class="portfolio-tags">
                {TECH_TAGS.into_iter().map(|tag| view! { <Badge>{tag}</Badge> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
/// E-mail copy row and social links.
pub fn ContactPanel(
    /// Shell handle used for the clipboard and external links.
    host: AppHost,
) -> impl IntoView {
    let copied = create_rw_signal(false);
    let reset_timer = store_value(None::<TimeoutHandle>);

    let clear_reset = move || {
        if let Some(handle) = reset_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };
    on_cleanup(clear_reset);

    let copy_email = Callback::new(move |_| {
        host.copy_text(CONTACT_EMAIL);
        copied.set(true);
        clear_reset();
        match set_timeout_with_handle(
            move || copied.set(false),
            Duration::from_millis(COPIED_FEEDBACK_MS),
        ) {
            Ok(handle) => reset_timer.set_value(Some(handle)),
            Err(err) => logging::warn!("copied feedback timer failed: {err:?}"),
        }
    });

    view! {
        <div class="portfolio-panel portfolio-contact">
            <div class="portfolio-contact-badge">
                <Icon icon=IconName::Mail size=IconSize::Xl />
            </div>
            <Heading>"Contáctame"</Heading>
            <p class="portfolio-muted">{CONTACT_PITCH}</p>
            <div class="portfolio-contact-links">
                <Button layout_class="portfolio-contact-link" on_click=copy_email>
                    <Icon icon=IconName::Mail size=IconSize::Sm />
                    <span>{CONTACT_EMAIL}</span>
                    {move || {
                        let icon = if copied.get() { IconName::Check } else { IconName::Copy };
                        view! { <Icon icon size=IconSize::Sm layout_class="portfolio-copy-state" /> }
                    }}
                </Button>
                {SOCIAL_LINKS
                    .into_iter()
                    .map(|link| {
                        let url = link.url;
                        view! {
                            <Button
                                layout_class="portfolio-contact-link"
                                leading_icon=social_icon(link.network)
                                on_click=Callback::new(move |_| host.open_external_url(url))
                            >
                                {link.label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Mounts the panel registered under `context.app_id`.
pub fn mount(context: AppMountContext) -> View {
    let host = context.host;
    match context.app_id {
        AppId::About => view! { <AboutPanel /> }.into_view(),
        AppId::Projects => view! { <ProjectsPanel host /> }.into_view(),
        AppId::Experience => view! { <ExperiencePanel /> }.into_view(),
        AppId::Skills => view! { <SkillsPanel /> }.into_view(),
        AppId::Contact => view! { <ContactPanel host /> }.into_view(),
        other => {
            logging::warn!("portfolio has no panel for `{other}`");
            ().into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::LaunchParamsShape;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn project_cards_launch_the_browser_at_the_project_url() {
        let (app_id, params) = project_launch(&PROJECTS[2]);
        assert_eq!(app_id, AppId::Browser);
        assert_eq!(
            params
                .as_ref()
                .and_then(LaunchParams::as_browser)
                .map(|params| params.initial_url.as_str()),
            Some("https://css-tricks.com/")
        );
        assert!(LaunchParamsShape::Browser.accepts(params.as_ref()));
    }

    #[test]
    fn social_links_use_brand_icons() {
        assert_eq!(social_icon(SocialNetwork::Github), IconName::Github);
        assert_eq!(social_icon(SocialNetwork::Linkedin), IconName::Linkedin);
    }
}
