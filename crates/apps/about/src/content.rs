//! Sub-view routing and static portfolio content.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Page rendered inside the About window.
pub enum SubView {
    /// Landing page with navigation buttons.
    Home,
    /// Biography.
    About,
    /// Roles and activities.
    Experience,
    /// Project list.
    Projects,
    /// Hand-over target; never rendered in place.
    Contact,
}

impl SubView {
    /// Navigation order.
    pub const NAVIGATION: [SubView; 5] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Reads the initial sub-view from launch args such as `{ "view": "projects" }`.
    ///
    /// `contact` is not a renderable sub-view and falls back to `home`.
    pub fn from_args(args: &Value) -> Self {
        args.get("view")
            .cloned()
            .and_then(|raw| serde_json::from_value::<SubView>(raw).ok())
            .filter(|view| *view != Self::Contact)
            .unwrap_or(Self::Home)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of choosing a navigation target.
pub enum Navigation {
    /// Render this sub-view in place.
    Show(SubView),
    /// Leave the About window and hand over to the Contact application.
    OpenContact,
}

pub fn navigate(target: SubView) -> Navigation {
    match target {
        SubView::Contact => Navigation::OpenContact,
        other => Navigation::Show(other),
    }
}

pub const OWNER_NAME: &str = "Abeih Hamani";
pub const OWNER_TAGLINE: &str = "Computer science student";
pub const CONTACT_EMAIL: &str = "abeihhamani24@gmail.com";
pub const CV_ICON: &str = "/icons/printer.png";
pub const PORTRAIT_SRC: &str = "/images/pfp.jpg";

pub const ABOUT_PARAGRAPHS: [&str; 4] = [
    "You've just logged into my little corner of the internet. I'm an undergraduate Computer \
     Science student at The City College of New York (CCNY) who likes turning ideas into real \
     projects with code, especially on the web and in AI.",
    "I started coding in my freshman year of college with the basics: HTML, CSS, and JavaScript. \
     From there I picked up React, and eventually moved into full-stack work with Node.js, \
     Express, MongoDB, Next.js, Supabase, and Tailwind CSS.",
    "I also like experimenting with 3D and interactive experiences for the web. I'm still \
     learning, but I enjoy slowly leveling up and seeing what's possible.",
    "When I'm not in front of a screen, you'll usually find me at the gym, playing soccer, or \
     having fun with friends and family.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: [ExperienceEntry; 4] = [
    ExperienceEntry {
        role: "ColorStack Member",
        period: "Nov 2025 – Present",
        highlights: &["Community supporting Black and Latinx computer science students."],
    },
    ExperienceEntry {
        role: "CodePath – Applied AI Engineering",
        period: "Feb 2025 – Present",
        highlights: &["Industry-backed coursework on practical AI engineering."],
    },
    ExperienceEntry {
        role: "Secretary, Institute of Electrical Engineers Club | CCNY",
        period: "September 2024 – May 2025",
        highlights: &[
            "Organized meetings, took minutes, and distributed updates to members.",
            "Managed event promotions through email and social media.",
            "Maintained records of chapter activities and participation.",
        ],
    },
    ExperienceEntry {
        role: "Founder & Coach | Bensonhurst FC",
        period: "Jan 2025 – Present",
        highlights: &[
            "Founded a community soccer club offering affordable training for neighborhood youth.",
            "Designed and led weekly training sessions for players aged 8-14.",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub stack: &'static str,
    pub highlights: &'static [&'static str],
    pub website: Option<&'static str>,
    pub source: &'static str,
}

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        name: "FinancePal",
        stack: "MERN Stack | MongoDB | Express.js | React | Node.js",
        highlights: &[
            "Full-stack expense tracker with categorized logging and interactive charts.",
            "JWT authentication, responsive dashboards, and PDF report export.",
        ],
        website: Some("https://financepal-mern.vercel.app/login"),
        source: "https://github.com/SuperAbeih99/FinancePal",
    },
    ProjectEntry {
        name: "3D Portfolio Room",
        stack: "Next.js | React | TypeScript | Three.js | Blender",
        highlights: &[
            "Interactive 3D bedroom scene with a retro computer as the portfolio entry point.",
            "Custom Blender assets, optimized glTF loading, and animated camera controls.",
        ],
        website: None,
        source: "https://github.com/SuperAbeih99/PortfolioWebsite",
    },
    ProjectEntry {
        name: "MediGuard AI",
        stack: "Next.js | React | TypeScript | Supabase | OpenAI API",
        highlights: &[
            "AI assistant that explains hospital bills, coverage, and red flags in plain language.",
            "Mobile-friendly interface with guest sessions and saved analyses.",
        ],
        website: Some("https://mediguardai.vercel.app/"),
        source: "https://github.com/SuperAbeih99/mediguard-ai",
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn contact_navigation_hands_over_instead_of_rendering() {
        assert_eq!(navigate(SubView::Contact), Navigation::OpenContact);
        assert_eq!(
            navigate(SubView::Projects),
            Navigation::Show(SubView::Projects)
        );
    }

    #[test]
    fn launch_args_select_initial_sub_view() {
        assert_eq!(
            SubView::from_args(&json!({ "view": "experience" })),
            SubView::Experience
        );
        assert_eq!(SubView::from_args(&json!({ "view": "contact" })), SubView::Home);
        assert_eq!(SubView::from_args(&json!({ "view": 3 })), SubView::Home);
        assert_eq!(SubView::from_args(&Value::Null), SubView::Home);
    }
}
