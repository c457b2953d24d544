//! Board templates: named, ordered column sets used when creating projects
//! and boards.

/// One column produced by a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateColumn {
    pub name: &'static str,
    pub position: i64,
    pub color: &'static str,
}

const fn col(name: &'static str, position: i64, color: &'static str) -> TemplateColumn {
    TemplateColumn {
        name,
        position,
        color,
    }
}

const SIMPLE: &[TemplateColumn] = &[
    col("To Do", 0, "#e2e8f0"),
    col("In Progress", 1, "#90cdf4"),
    col("Done", 2, "#9ae6b4"),
];

const PROJECT_MANAGEMENT: &[TemplateColumn] = &[
    col("Backlog", 0, "#e2e8f0"),
    col("To Do", 1, "#feb2b2"),
    col("In Progress", 2, "#90cdf4"),
    col("Review", 3, "#d6bcfa"),
    col("Done", 4, "#9ae6b4"),
];

const SOFTWARE_DEVELOPMENT: &[TemplateColumn] = &[
    col("Backlog", 0, "#e2e8f0"),
    col("To Do", 1, "#feb2b2"),
    col("Development", 2, "#90cdf4"),
    col("Testing", 3, "#fbd38d"),
    col("Code Review", 4, "#d6bcfa"),
    col("Ready for Deploy", 5, "#9ae6b4"),
    col("Done", 6, "#68d391"),
];

const MARKETING: &[TemplateColumn] = &[
    col("Ideas", 0, "#e2e8f0"),
    col("Planning", 1, "#feb2b2"),
    col("Content Creation", 2, "#90cdf4"),
    col("Review", 3, "#fbd38d"),
    col("Pending Approval", 4, "#d6bcfa"),
    col("Published", 5, "#9ae6b4"),
    col("Analysis", 6, "#68d391"),
];

const DESIGN: &[TemplateColumn] = &[
    col("Requests", 0, "#e2e8f0"),
    col("Research", 1, "#feb2b2"),
    col("Draft", 2, "#90cdf4"),
    col("Design", 3, "#fbd38d"),
    col("Feedback", 4, "#d6bcfa"),
    col("Revision", 5, "#bee3f8"),
    col("Approved", 6, "#9ae6b4"),
];

const PRODUCT_DEVELOPMENT: &[TemplateColumn] = &[
    col("Idea Pool", 0, "#e2e8f0"),
    col("Research", 1, "#feb2b2"),
    col("MVP", 2, "#90cdf4"),
    col("Testing", 3, "#fbd38d"),
    col("Development", 4, "#d6bcfa"),
    col("Market Launch", 5, "#9ae6b4"),
    col("Feedback", 6, "#68d391"),
];

const CUSTOMER_SERVICE: &[TemplateColumn] = &[
    col("New Requests", 0, "#e2e8f0"),
    col("Evaluation", 1, "#feb2b2"),
    col("Processing", 2, "#90cdf4"),
    col("On Hold", 3, "#fbd38d"),
    col("Resolved", 4, "#9ae6b4"),
    col("Closed", 5, "#68d391"),
];

const EVENT_PLANNING: &[TemplateColumn] = &[
    col("Ideas", 0, "#e2e8f0"),
    col("Planning", 1, "#feb2b2"),
    col("Budget Approval", 2, "#90cdf4"),
    col("Vendor Communication", 3, "#fbd38d"),
    col("Logistics", 4, "#d6bcfa"),
    col("Marketing", 5, "#bee3f8"),
    col("Event Day", 6, "#9ae6b4"),
    col("Post Evaluation", 7, "#68d391"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardTemplate {
    #[default]
    Simple,
    ProjectManagement,
    SoftwareDevelopment,
    Marketing,
    Design,
    ProductDevelopment,
    CustomerService,
    EventPlanning,
}

impl BoardTemplate {
    pub const ALL: [Self; 8] = [
        Self::Simple,
        Self::ProjectManagement,
        Self::SoftwareDevelopment,
        Self::Marketing,
        Self::Design,
        Self::ProductDevelopment,
        Self::CustomerService,
        Self::EventPlanning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::ProjectManagement => "project_management",
            Self::SoftwareDevelopment => "software_development",
            Self::Marketing => "marketing",
            Self::Design => "design",
            Self::ProductDevelopment => "product_development",
            Self::CustomerService => "customer_service",
            Self::EventPlanning => "event_planning",
        }
    }

    /// Unknown or missing keys fall back to [`BoardTemplate::Simple`].
    pub fn from_key(key: Option<&str>) -> Self {
        key.and_then(|key| Self::ALL.into_iter().find(|t| t.as_str() == key))
            .unwrap_or_default()
    }

    pub fn columns(&self) -> &'static [TemplateColumn] {
        match self {
            Self::Simple => SIMPLE,
            Self::ProjectManagement => PROJECT_MANAGEMENT,
            Self::SoftwareDevelopment => SOFTWARE_DEVELOPMENT,
            Self::Marketing => MARKETING,
            Self::Design => DESIGN,
            Self::ProductDevelopment => PRODUCT_DEVELOPMENT,
            Self::CustomerService => CUSTOMER_SERVICE,
            Self::EventPlanning => EVENT_PLANNING,
        }
    }
}

impl std::fmt::Display for BoardTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column set for a template key.
pub fn expand(template_key: Option<&str>) -> &'static [TemplateColumn] {
    BoardTemplate::from_key(template_key).columns()
}
