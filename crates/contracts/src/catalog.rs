//! Category catalog: the fixed mapping from record category to its allowed
//! sub-languages and display icon.
//!
//! This is process-wide static data, represented as an immutable constant
//! table. The first category and its first language are the defaults for a
//! fresh draft.

/// One entry of the category catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Allowed sub-languages, in display order. Never empty.
    pub languages: &'static [&'static str],
    pub icon: &'static str,
}

/// The full catalog, in dashboard display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Front-End",
        languages: &[
            "HTML",
            "CSS",
            "JQuery",
            "JavaScript",
            "Ajax",
            "Bootstrap",
            "ReactJS",
        ],
        icon: "\u{269b}\u{fe0f}",
    },
    Category {
        name: "Back-End",
        languages: &[
            "CoreJava",
            "Servlet",
            "Spring Boot",
            "Hibernate",
            "Spring Security",
            "RESTful Web Services",
        ],
        icon: "\u{2615}\u{fe0f}",
    },
    Category {
        name: "Database",
        languages: &["SQL", "MySQL", "PostgreSQL", "MongoDB", "Oracle"],
        icon: "\u{1f5c4}\u{fe0f}",
    },
    Category {
        name: "Architecture",
        languages: &["Monolithic", "Microservices"],
        icon: "\u{1f3d7}\u{fe0f}",
    },
    Category {
        name: "Unit Testing",
        languages: &["JUnit", "Mockito"],
        icon: "\u{2705}",
    },
    Category {
        name: "Automation Testing Frameworks",
        languages: &["Selenium", "TestNG", "Cucumber", "JUnit"],
        icon: "\u{1f916}",
    },
    Category {
        name: "API Testing",
        languages: &["Postman", "WSO2"],
        icon: "\u{1f4e1}",
    },
    Category {
        name: "Load Testing",
        languages: &["JMeter"],
        icon: "\u{1f4c8}",
    },
    Category {
        name: "CI/CD",
        languages: &["Jenkins", "Bamboo"],
        icon: "\u{1f501}",
    },
    Category {
        name: "Version Control",
        languages: &["Git", "GitHub", "GitLab", "BitBucket"],
        icon: "\u{1f527}",
    },
    Category {
        name: "Artifact Management",
        languages: &["JFrog"],
        icon: "\u{1f4e6}",
    },
    Category {
        name: "IDE",
        languages: &["Eclipse", "IntelliJ", "VS Code", "STS"],
        icon: "\u{1f4bb}",
    },
    Category {
        name: "Operating Systems",
        languages: &["Windows", "Linux (CentOS)"],
        icon: "\u{1f5a5}\u{fe0f}",
    },
    Category {
        name: "PMTools",
        languages: &["JIRA", "Azure Boards"],
        icon: "\u{1f4cb}",
    },
    Category {
        name: "Cloud",
        languages: &["AWS", "Microsoft Azure", "VMware ESXi"],
        icon: "\u{2601}\u{fe0f}",
    },
];

/// Icon shown for a category name that is not in the catalog.
pub const UNKNOWN_ICON: &str = "\u{2753}";

/// Look up a catalog entry by category name.
pub fn category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Allowed sub-languages for a category; empty slice for an unknown name.
pub fn languages_for(name: &str) -> &'static [&'static str] {
    category(name).map(|c| c.languages).unwrap_or(&[])
}

/// Display icon for a category name.
pub fn icon_for(name: &str) -> &'static str {
    category(name).map(|c| c.icon).unwrap_or(UNKNOWN_ICON)
}

/// The default category for a fresh draft (first catalog entry).
pub fn default_category() -> &'static Category {
    &CATEGORIES[0]
}
