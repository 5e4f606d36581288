//! Static portfolio copy rendered by the panels.

pub const PROFILE_NAME: &str = "Azul Estudio";
pub const PROFILE_ROLE: &str = "Desarrollador Creativo Full Stack";
pub const PROFILE_PHOTO_URL: &str = "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?q=80&w=200&auto=format&fit=crop";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "¡Hola! Soy un desarrollador apasionado por crear experiencias web interactivas. \
     Me especializo en React, TypeScript y diseño UI/UX moderno. \
     ¡Todo este portafolio es una simulación de sistema operativo construida con tecnologías web!",
    "Creo en el código limpio, el diseño pixel-perfect y la creación de interfaces \
     intuitivas que los usuarios disfruten utilizar.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub url: &'static str,
    pub summary: &'static str,
    pub tech: &'static str,
}

impl Project {
    pub fn thumbnail_url(&self) -> String {
        format!("https://picsum.photos/400/200?random={}", self.id)
    }
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Wikipedia Clone",
        url: "https://es.m.wikipedia.org/wiki/React",
        summary: "Una réplica funcional usando Wikipedia como fuente.",
        tech: "React",
    },
    Project {
        id: 2,
        title: "Three.js Demo",
        url: "https://threejs.org/",
        summary: "Experimentos 3D en el navegador.",
        tech: "WebGL",
    },
    Project {
        id: 3,
        title: "CSS Tricks",
        url: "https://css-tricks.com/",
        summary: "Blog de recursos para desarrolladores frontend.",
        tech: "CSS",
    },
    Project {
        id: 4,
        title: "Vite JS",
        url: "https://vitejs.dev/",
        summary: "Documentación oficial de la herramienta de build.",
        tech: "Vite",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

/// Newest first.
pub const JOBS: [Job; 3] = [
    Job {
        role: "Ingeniero Frontend Senior",
        company: "Tech Giants Inc.",
        period: "2022 - Presente",
        summary: "Liderando el equipo frontend en la reconstrucción de la plataforma principal \
                  usando React 18 y Next.js.",
    },
    Job {
        role: "Desarrollador UI/UX",
        company: "Agencia Creativa",
        period: "2020 - 2022",
        summary: "Diseño e implementación de sitios web interactivos galardonados para clientes \
                  internacionales.",
    },
    Job {
        role: "Desarrollador Web Junior",
        company: "StartUp Hub",
        period: "2018 - 2020",
        summary: "Desarrollo Full Stack usando el stack MERN. Integración de pasarelas de pago y \
                  funciones en tiempo real.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, `0..=100`.
    pub level: u8,
    /// `data-ui-accent` token for the bar.
    pub accent: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill { name: "React", level: 95, accent: "blue" },
    Skill { name: "TypeScript", level: 90, accent: "indigo" },
    Skill { name: "Tailwind CSS", level: 92, accent: "cyan" },
    Skill { name: "Node.js", level: 85, accent: "green" },
    Skill { name: "Framer Motion", level: 88, accent: "purple" },
    Skill { name: "UI Design", level: 80, accent: "pink" },
];

pub const TECH_TAGS: [&str; 10] = [
    "Next.js", "GraphQL", "Docker", "AWS", "Figma", "Git", "Redux", "Vite", "Webpack", "Jest",
];

pub const CONTACT_EMAIL: &str = "contacto@azulestudio.com";
pub const CONTACT_PITCH: &str = "Actualmente estoy disponible para trabajos freelance y \
                                 oportunidades a tiempo completo. Si tienes un proyecto que \
                                 necesita un toque creativo, hablemos.";

/// How long the e-mail row shows its "copied" check, in milliseconds.
pub const COPIED_FEEDBACK_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: &'static str,
    pub label: &'static str,
}

/// Opened outside the desktop: both hosts refuse to be framed.
pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        network: SocialNetwork::Github,
        url: "https://github.com",
        label: "github.com/azulestudio",
    },
    SocialLink {
        network: SocialNetwork::Linkedin,
        url: "https://linkedin.com",
        label: "linkedin.com/in/azulestudio",
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn project_ids_are_unique_and_feed_thumbnails() {
        let mut ids = PROJECTS.iter().map(|project| project.id).collect::<Vec<_>>();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(
            PROJECTS[1].thumbnail_url(),
            "https://picsum.photos/400/200?random=2"
        );
    }

    #[test]
    fn project_urls_are_absolute() {
        for project in PROJECTS {
            assert!(project.url.starts_with("https://"), "{}", project.title);
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|skill| skill.level <= 100));
        assert_eq!(SKILLS.iter().map(|skill| skill.level).max(), Some(95));
    }

    #[test]
    fn social_links_cover_each_network_once() {
        assert_eq!(
            SOCIAL_LINKS.map(|link| link.network),
            [SocialNetwork::Github, SocialNetwork::Linkedin]
        );
    }
}
