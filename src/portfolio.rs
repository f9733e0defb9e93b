use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Metric keys that can headline a project card, in order of preference.
const HEADLINE_KEYS: [&str; 2] = ["users", "students"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub picture: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub about: &'static str,
}

impl Profile {
    /// The part of the title before the first `|`.
    pub fn short_title(&self) -> &'static str {
        self.title.split('|').next().unwrap_or_default().trim()
    }

    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Footer copyright for the given calendar year.
    pub fn copyright(&self, year: u32) -> String {
        format!("© {year} {}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

/// Ordered `(label, value)` pairs. Each project exposes its own set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics(pub &'static [(&'static str, &'static str)]);

impl Metrics {
    pub fn get(&self, label: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find_map(|(l, v)| if *l == label { Some(*v) } else { None })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().copied()
    }

    /// Two-space indented JSON object for the detail view.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in self.iter() {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub tech: &'static [&'static str],
    pub description: &'static str,
    pub link: &'static str,
    pub image: &'static str,
    pub metrics: Metrics,
}

impl Project {
    /// DOM id for this project's detail heading.
    pub fn heading_id(&self) -> String {
        format!("project_title_{}", self.id.0)
    }

    pub fn tech_list(&self) -> String {
        self.tech.join(", ")
    }

    /// First headline metric present on this project, or empty.
    pub fn headline_metric(&self) -> &'static str {
        HEADLINE_KEYS
            .iter()
            .find_map(|key| self.metrics.get(key))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    React,
    JavaScript,
    Firebase,
    CPlusPlus,
}

impl SkillIcon {
    pub fn devicon_class(&self) -> &'static str {
        match self {
            SkillIcon::React => "devicon-react-original",
            SkillIcon::JavaScript => "devicon-javascript-plain",
            SkillIcon::Firebase => "devicon-firebase-plain",
            SkillIcon::CPlusPlus => "devicon-cplusplus-plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// The contact form posts straight to a third-party collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactForm {
    pub endpoint: &'static str,
    pub method: &'static str,
    pub subject: &'static str,
    pub fields: &'static [FormField],
}

pub static PROFILE: Profile = Profile {
    name: "Aubrey [Your Surname]",
    title: "Full-Stack Developer (Volunteer) | IT Student",
    location: "South Africa",
    picture: "https://placekitten.com/300/300",
    email: "youremail@example.com",
    github: "https://github.com/yourhandle",
    linkedin: "https://linkedin.com/in/yourhandle",
    about: "Second-year Information Technology student at Richfield and volunteer Full-Stack Developer at Design Pie Creative Agency. I build responsive, accessible web apps using React and Firebase. I love solving problems, learning new tech, and shipping products that users enjoy.",
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: ProjectId(1),
        title: "QuickTask — Job Board Web App",
        tech: &["React", "Firebase", "Google Maps API"],
        description: "Mini Uber-like platform for quick local jobs. Implemented real-time listings, authentication and geolocation.",
        link: "#",
        image: "https://placehold.co/600x400?text=QuickTask",
        metrics: Metrics(&[("users", "500+"), ("tasks", "1.2k"), ("rating", "4.8")]),
    },
    Project {
        id: ProjectId(2),
        title: "GradeMate — Student Grading System",
        tech: &["C++", "CLI"],
        description: "Console application for managing student marks and generating grade reports.",
        link: "#",
        image: "https://placehold.co/600x400?text=GradeMate",
        metrics: Metrics(&[("students", "200"), ("reports", "200+")]),
    },
    Project {
        id: ProjectId(3),
        title: "TaskVault — To-Do App",
        tech: &["C++", "File I/O", "OOP"],
        description: "Task management with persistent local storage and OOP design.",
        link: "#",
        image: "https://placehold.co/600x400?text=TaskVault",
        metrics: Metrics(&[("tasks", "3k+")]),
    },
];

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        level: 85,
        icon: SkillIcon::React,
    },
    Skill {
        name: "JavaScript",
        level: 80,
        icon: SkillIcon::JavaScript,
    },
    Skill {
        name: "Firebase",
        level: 70,
        icon: SkillIcon::Firebase,
    },
    Skill {
        name: "C++",
        level: 65,
        icon: SkillIcon::CPlusPlus,
    },
];

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Design Pie Creative Agency",
        role: "Full-Stack Developer (Volunteer)",
        period: "Jan 2024 – Present",
        details: &[
            "Built responsive web apps with React and Firebase",
            "Participated in Agile sprints",
            "Implemented unit tests and bug fixes",
        ],
    },
    Experience {
        company: "Richfield Graduate Institute",
        role: "IT Student",
        period: "2024 – Present",
        details: &[
            "Coursework: Software Development, Databases",
            "Group projects and hackathons",
        ],
    },
];

/// Heading and body pairs shown under the about blurb.
pub static ABOUT_NOTES: &[(&str, &str)] = &[
    (
        "Currently",
        "Volunteering as Full-Stack Developer at Design Pie Creative Agency — building web apps, collaborating in Agile teams, and practicing TDD.",
    ),
    (
        "Interests",
        "Product development, accessible UX, serverless platforms, and mentorship programs for upcoming developers in South Africa.",
    ),
];

pub static CAREER_STATS: &[&str] = &[
    "Volunteer Full-Stack Developer • 1+ year practical experience",
    "3+ finished projects (React, Firebase, C++)",
    "Active contributor to team sprints and TDD workflows",
];

pub static CONTACT_FORM: ContactForm = ContactForm {
    endpoint: "https://formspree.io/f/your-form-id",
    method: "POST",
    subject: "Portfolio Contact",
    fields: &[
        FormField {
            name: "name",
            label: "Name",
            kind: FieldKind::Text,
            required: true,
        },
        FormField {
            name: "email",
            label: "Email",
            kind: FieldKind::Email,
            required: true,
        },
        FormField {
            name: "message",
            label: "Message",
            kind: FieldKind::TextArea { rows: 4 },
            required: true,
        },
    ],
};

pub fn project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    fn bare_project(metrics: Metrics) -> Project {
        Project {
            id: ProjectId(99),
            title: "Scratch",
            tech: &["Rust", "Leptos"],
            description: "Scratch project",
            link: "#",
            image: "https://placehold.co/600x400",
            metrics,
        }
    }

    #[test]
    fn test_project_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_heading_ids_unique() {
        let ids = PROJECTS.iter().map(Project::heading_id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
        assert_eq!(PROJECTS[1].heading_id(), "project_title_2");
    }

    #[test]
    fn test_project_lookup() {
        for p in PROJECTS {
            assert_eq!(project(p.id), Some(p));
        }
        assert!(project(ProjectId(0)).is_none());
        assert!(project(ProjectId(42)).is_none());
    }

    #[test]
    fn test_table_order_preserved() {
        let titles = PROJECTS.iter().map(|p| p.id.0).collect::<Vec<_>>();
        assert_eq!(titles, vec![1, 2, 3]);
        let skills = SKILLS.iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(skills, vec!["React", "JavaScript", "Firebase", "C++"]);
        assert_eq!(EXPERIENCE[0].company, "Design Pie Creative Agency");
        assert_eq!(EXPERIENCE[1].company, "Richfield Graduate Institute");
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_tech_list_keeps_order() {
        assert_eq!(PROJECTS[0].tech_list(), "React, Firebase, Google Maps API");
        assert_eq!(PROJECTS[2].tech_list(), "C++, File I/O, OOP");
    }

    #[test]
    fn test_headline_metric_falls_back() {
        assert_eq!(PROJECTS[0].headline_metric(), "500+");
        assert_eq!(PROJECTS[1].headline_metric(), "200");
        // no users or students
        assert_eq!(PROJECTS[2].headline_metric(), "");
    }

    #[test]
    fn test_metrics_missing_key() {
        let metrics = PROJECTS[1].metrics;
        assert_eq!(metrics.get("students"), Some("200"));
        assert_eq!(metrics.get("users"), None);
    }

    #[test]
    fn test_metrics_pretty_json_keeps_insertion_order() {
        let json = PROJECTS[0]
            .metrics
            .to_pretty_json()
            .expect("metrics should serialize");
        assert_eq!(
            json,
            "{\n  \"users\": \"500+\",\n  \"tasks\": \"1.2k\",\n  \"rating\": \"4.8\"\n}"
        );
    }

    #[test]
    fn test_empty_metrics_render_empty_object() {
        let p = bare_project(Metrics(&[]));
        assert!(p.metrics.is_empty());
        assert_eq!(p.metrics.to_pretty_json().unwrap(), "{}");
        assert_eq!(p.headline_metric(), "");
    }

    #[test]
    fn test_profile_helpers() {
        assert_eq!(PROFILE.short_title(), "Full-Stack Developer (Volunteer)");
        assert_eq!(PROFILE.initial(), 'A');
    }

    #[test]
    fn test_copyright_follows_year() {
        assert_eq!(PROFILE.copyright(2025), "© 2025 Aubrey [Your Surname]");
        assert_eq!(PROFILE.copyright(2031), "© 2031 Aubrey [Your Surname]");
    }

    #[test]
    fn test_contact_form_shape() {
        let names = CONTACT_FORM
            .fields
            .iter()
            .map(|f| f.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert!(CONTACT_FORM.fields.iter().all(|f| f.required));
        assert_eq!(CONTACT_FORM.fields[1].kind, FieldKind::Email);
        assert_eq!(CONTACT_FORM.method, "POST");
        assert_eq!(CONTACT_FORM.subject, "Portfolio Contact");
    }
}
