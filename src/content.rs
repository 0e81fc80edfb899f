//! Hardcoded portfolio content.

pub const NAME: &str = "Muhammad Muddassir";
pub const SHORT_NAME: &str = "M. Muddassir";
pub const RESUME_HREF: &str = "/M.MUDDASSIR-Resume.pdf";
pub const PROFILE_IMAGE: &str = "/profile.svg";
pub const FAVICON: &str = "/favicon.svg";
pub const DEVICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css";

pub const ROLES: &[&str] = &[
    "Software Engineer",
    "Full Stack Developer",
    ".NET Specialist",
    "React Developer",
];

pub const SUMMARY: &str = "Software Engineering graduate from NED University with 1.5+ years of hands-on experience in full-stack development, specializing in .NET and React. Building responsive web applications and delivering clean, maintainable code.";

pub const ABOUT: &str = "I'm a passionate full-stack developer with a strong foundation in both frontend and backend technologies. My journey in software engineering has equipped me with the skills to build responsive web applications, integrate RESTful APIs, and deliver clean, maintainable code. I'm committed to continuous learning and collaborating with teams to create quality solutions that make a difference.";

pub const CONTACT_BLURB: &str = "I'm currently looking for new opportunities and collaborations. Whether you have a question or just want to say hi, feel free to reach out!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        anchor(self.id)
    }
}

pub const ABOUT_ID: &str = "about";
pub const EXPERIENCE_ID: &str = "experience";
pub const PROJECTS_ID: &str = "projects";
pub const SKILLS_ID: &str = "skills";
pub const EDUCATION_ID: &str = "education";
pub const CONTACT_ID: &str = "contact";

/// Ids of every section rendered on the page, top to bottom.
pub const SECTION_IDS: &[&str] = &[
    ABOUT_ID,
    EXPERIENCE_ID,
    PROJECTS_ID,
    SKILLS_ID,
    EDUCATION_ID,
    CONTACT_ID,
];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", id: ABOUT_ID },
    NavItem { label: "Experience", id: EXPERIENCE_ID },
    NavItem { label: "Projects", id: PROJECTS_ID },
    NavItem { label: "Skills", id: SKILLS_ID },
    NavItem { label: "Contact", id: CONTACT_ID },
];

/// In-page anchor for a section id.
pub fn anchor(id: &str) -> String {
    format!("#{id}")
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "1.5+", label: "Years Experience" },
    Stat { number: "3", label: "Major Projects" },
    Stat { number: "Full Stack", label: "Expertise" },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Code N Consult",
        role: "Software Engineer",
        period: "Aug 2025 – Present",
        location: "Karachi",
        description: "Work on Business Central automations and customizations using AL. Develop and maintain backend workflows and API integrations for enterprise solutions.",
        achievements: &[
            "Collaborate with team members to understand business requirements and implement technical solutions",
            "Participate in code reviews and follow best practices for code quality and documentation",
            "Quickly adapt to new tools and frameworks as project requirements evolve",
        ],
    },
    Experience {
        company: "Andev Matrix",
        role: "Full Stack Software Engineer",
        period: "Aug 2024 – Aug 2025 (1 year)",
        location: "UAE (Remote)",
        description: "Developed web applications using React.js for frontend and .NET for backend API development.",
        achievements: &[
            "Built responsive user interfaces with React, TypeScript, and JavaScript",
            "Integrated RESTful APIs between React frontend and .NET backend services",
            "Worked with SQL databases to implement data-driven features",
            "Collaborated in Agile teams to deliver features on schedule",
        ],
    },
    Experience {
        company: "Infosys Tech",
        role: "Frontend Development Intern",
        period: "6 months",
        location: "Remote",
        description: "Developed frontend components using React and JavaScript.",
        achievements: &[
            "Assisted in REST API integration for web applications",
            "Participated in Agile sprint planning and code reviews",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub highlight: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Study Connect",
        description: "Built a web platform using React and TypeScript with responsive interfaces and integrated RESTful APIs.",
        technologies: &["React", "TypeScript", "REST API", "Responsive Design"],
        highlight: false,
    },
    Project {
        title: "Asaan Campus",
        description: "Developed mobile application with React Native frontend and .NET backend for academic data management.",
        technologies: &["React Native", ".NET", "SQL", "Real-time Updates"],
        highlight: true,
    },
    Project {
        title: "Language Access",
        description: "Created React Native mobile app with responsive UI using TypeScript and JavaScript with RESTful API integration.",
        technologies: &["React Native", "TypeScript", "REST API", "SQL"],
        highlight: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            Skill { name: "React.js", level: 90 },
            Skill { name: "JavaScript (ES6+)", level: 88 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "HTML5 & CSS3", level: 92 },
            Skill { name: "Responsive Design", level: 90 },
        ],
    },
    SkillCategory {
        title: ".NET & Backend",
        skills: &[
            Skill { name: ".NET Framework", level: 85 },
            Skill { name: "C#", level: 82 },
            Skill { name: "RESTful API", level: 88 },
            Skill { name: "SQL", level: 80 },
            Skill { name: "API Development", level: 85 },
        ],
    },
    SkillCategory {
        title: "Tools & Practices",
        skills: &[
            Skill { name: "Git & Version Control", level: 90 },
            Skill { name: "Agile Methodology", level: 85 },
            Skill { name: "API Testing", level: 82 },
            Skill { name: "Code Reviews", level: 88 },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub major: &'static str,
    pub school: &'static str,
    pub details: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Engineering",
    major: "Software Engineering",
    school: "NED University of Engineering and Technology",
    details: "Karachi • 2021 – 2025",
};

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Google Advanced Data Analytics & Machine Learning",
        issuer: "Google",
        year: "2024",
    },
    Certification {
        title: "Web Development with HTML, CSS, and JavaScript",
        issuer: "IBM",
        year: "2023",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Award {
    pub title: &'static str,
    pub organization: &'static str,
    pub details: &'static str,
}

pub const AWARD: Award = Award {
    title: "Winner - Web Development Competition",
    organization: "Sentec Society, NED University • July 2023",
    details: "1st place in university-wide web application development competition",
};

/// How a contact icon is drawn: a devicon font class (see
/// [`DEVICON_STYLESHEET`]) or a plain text glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Devicon(&'static str),
    Glyph(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    GitHub,
    LinkedIn,
}

impl ContactKind {
    pub fn icon(self) -> Icon {
        match self {
            ContactKind::Email => Icon::Glyph("✉"),
            ContactKind::Phone => Icon::Glyph("☎"),
            ContactKind::GitHub => Icon::Devicon("devicon-github-plain"),
            ContactKind::LinkedIn => Icon::Devicon("devicon-linkedin-plain"),
        }
    }

    /// Whether the link leaves the site.
    pub fn is_external(self) -> bool {
        matches!(self, ContactKind::GitHub | ContactKind::LinkedIn)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub kind: ContactKind,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        kind: ContactKind::Email,
        label: "Email",
        value: "muddassir@example.com",
        href: "mailto:muddassir@example.com",
    },
    Contact {
        kind: ContactKind::Phone,
        label: "Phone",
        value: "+92 3130111878",
        href: "tel:+923130111878",
    },
    Contact {
        kind: ContactKind::GitHub,
        label: "GitHub",
        value: "github.com/muddassir",
        href: "https://github.com/muddassir",
    },
    Contact {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        value: "linkedin.com/in/muddassir",
        href: "https://linkedin.com/in/muddassir",
    },
];

/// Lowercase, dash-separated form of a label, used for element ids.
pub fn slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycler::RoleCycler;

    #[test]
    fn test_roles_build_a_cycler() {
        let cycler = RoleCycler::new(ROLES.iter().copied()).unwrap();
        assert_eq!(cycler.roles().len(), ROLES.len());
        assert_eq!(cycler.current_label(), "Software Engineer");
    }

    #[test]
    fn test_nav_items_point_at_sections() {
        for item in NAV_ITEMS {
            assert!(SECTION_IDS.contains(&item.id), "{} has no section", item.id);
            assert_eq!(item.href(), format!("#{}", item.id));
        }
    }

    #[test]
    fn test_section_ids_are_unique_anchors() {
        for (i, id) in SECTION_IDS.iter().enumerate() {
            assert!(!SECTION_IDS[i + 1..].contains(id), "duplicate section id {id}");
            assert_eq!(*id, slug(id), "{id} is not a valid anchor");
        }
        assert_eq!(anchor(PROJECTS_ID), "#projects");
    }

    #[test]
    fn test_linked_assets_exist() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for href in [RESUME_HREF, PROFILE_IMAGE, FAVICON] {
            let path = public.join(href.trim_start_matches('/'));
            assert!(path.is_file(), "{} missing from public/", href);
        }
    }

    #[test]
    fn test_contact_icons_render() {
        for contact in CONTACTS {
            match contact.kind.icon() {
                Icon::Devicon(class) => assert!(class.starts_with("devicon-"), "{class}"),
                Icon::Glyph(glyph) => assert!(!glyph.trim().is_empty(), "{}", contact.label),
            }
        }
        assert!(DEVICON_STYLESHEET.ends_with("devicon.min.css"));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILLS {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_stats_match_content() {
        let projects = STATS
            .iter()
            .find(|s| s.label == "Major Projects")
            .unwrap();
        assert_eq!(projects.number, PROJECTS.len().to_string());
    }

    #[test]
    fn test_contacts_links() {
        for contact in CONTACTS {
            let external = contact.href.starts_with("https://");
            assert_eq!(contact.kind.is_external(), external, "{}", contact.label);
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Years Experience"), "years-experience");
        assert_eq!(slug("Code N  Consult"), "code-n-consult");
        assert_eq!(slug(".NET"), ".net");
    }
}
