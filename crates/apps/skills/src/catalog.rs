#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One skill with its icon.
pub struct Skill {
    /// Display name, also used as the icon's alt text.
    pub name: &'static str,
    /// Icon source.
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Titled group of skills.
pub struct SkillCategory {
    /// Section heading.
    pub heading: &'static str,
    /// Skills in display order.
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, icon: &'static str) -> Skill {
    Skill { name, icon }
}

/// Skill sections in display order.
pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        heading: "Programming Languages",
        skills: &[
            skill("TypeScript", "/icons/skills/typescript.svg"),
            skill("JavaScript", "/icons/skills/javascript.svg"),
            skill("C++", "/icons/skills/cpp.svg"),
            skill("Python", "/icons/skills/python.svg"),
            skill("HTML", "/icons/skills/html.svg"),
            skill("CSS", "/icons/skills/css3.svg"),
        ],
    },
    SkillCategory {
        heading: "Frameworks",
        skills: &[
            skill("React", "/icons/skills/react.svg"),
            skill("Next.js", "/icons/skills/nextjs-icon.svg"),
            skill("Node.js", "/icons/skills/nodejs.svg"),
            skill("Express", "/icons/skills/expressjs.svg"),
            skill("Tailwind CSS", "/icons/skills/tailwindcss.svg"),
            skill("Three.js", "/icons/skills/threejs.svg"),
        ],
    },
    SkillCategory {
        heading: "Databases",
        skills: &[
            skill("MongoDB", "/icons/skills/mongodb.svg"),
            skill("Supabase", "/icons/skills/supabase.svg"),
        ],
    },
    SkillCategory {
        heading: "Tools",
        skills: &[
            skill("Git", "/icons/skills/git.svg"),
            skill("GitHub", "/icons/github-icon.svg"),
        ],
    },
];

/// Returns the section whose heading matches `heading`, ignoring ASCII case.
pub fn category(heading: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES
        .iter()
        .find(|category| category.heading.eq_ignore_ascii_case(heading))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_has_unique_names_and_svg_icons() {
        let mut seen = HashSet::new();
        for skill in SKILL_CATEGORIES.iter().flat_map(|category| category.skills) {
            assert!(seen.insert(skill.name), "duplicate skill {}", skill.name);
            assert!(skill.icon.starts_with("/icons/") && skill.icon.ends_with(".svg"));
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn category_lookup_ignores_case() {
        assert_eq!(category("databases").map(|c| c.skills.len()), Some(2));
        assert_eq!(category("hobbies"), None);
    }
}
