// ABOUTME: Static project template catalog grouped by category
// ABOUTME: Process-wide constant data, loaded once and never mutated

use crate::types::ProjectCategory;

/// A fixed, author-written project outline from which concrete ideas are synthesized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub features: &'static [&'static str],
    pub tags: &'static [&'static str],
}

static WEB_TEMPLATES: [ProjectTemplate; 3] = [
    ProjectTemplate {
        title: "Interactive Dashboard Builder",
        description: "Create a drag-and-drop dashboard builder where users can create custom analytics dashboards with real-time data visualization. Include widgets for charts, tables, and KPI metrics.",
        category: ProjectCategory::Web,
        features: &[
            "Drag-and-drop interface for dashboard creation",
            "Real-time data visualization with charts and graphs",
            "Customizable widgets and layouts",
            "Data source integration (APIs, databases)",
            "Export and sharing capabilities",
            "User authentication and saved dashboards",
        ],
        tags: &["dashboard", "analytics", "visualization", "real-time"],
    },
    ProjectTemplate {
        title: "Recipe Recommendation Engine",
        description: "Build a smart recipe platform that learns user preferences and dietary restrictions to recommend personalized recipes. Include meal planning and grocery list generation.",
        category: ProjectCategory::Web,
        features: &[
            "User preference learning algorithm",
            "Dietary restriction filtering",
            "Meal planning calendar",
            "Automated grocery list generation",
            "Recipe rating and review system",
            "Social sharing and recipe collections",
        ],
        tags: &["food", "recommendation", "ai", "social"],
    },
    ProjectTemplate {
        title: "Collaborative Code Review Platform",
        description: "Create a platform for teams to conduct code reviews with real-time collaboration, commenting, and approval workflows. Include integration with popular version control systems.",
        category: ProjectCategory::Web,
        features: &[
            "Real-time collaborative code reviewing",
            "Inline commenting and suggestions",
            "Approval workflows and permissions",
            "Git integration and branch management",
            "Code quality metrics and analytics",
            "Team management and notifications",
        ],
        tags: &["collaboration", "code-review", "git", "team"],
    },
];

static MOBILE_TEMPLATES: [ProjectTemplate; 2] = [
    ProjectTemplate {
        title: "Habit Tracker with AI Insights",
        description: "Develop a mobile app that tracks daily habits and uses AI to provide personalized insights and recommendations for building better routines.",
        category: ProjectCategory::Mobile,
        features: &[
            "Daily habit tracking with streaks",
            "AI-powered insights and recommendations",
            "Customizable habit categories",
            "Progress visualization and analytics",
            "Reminder notifications",
            "Social challenges and accountability",
        ],
        tags: &["habits", "ai", "productivity", "analytics"],
    },
    ProjectTemplate {
        title: "Local Business Discovery App",
        description: "Create a location-based app that helps users discover local businesses, events, and services with personalized recommendations and social features.",
        category: ProjectCategory::Mobile,
        features: &[
            "Location-based business discovery",
            "Personalized recommendations",
            "Event and service listings",
            "User reviews and ratings",
            "Social check-ins and sharing",
            "Business owner dashboard",
        ],
        tags: &["location", "discovery", "social", "business"],
    },
];

static GAME_TEMPLATES: [ProjectTemplate; 1] = [ProjectTemplate {
    title: "Multiplayer Strategy Game",
    description: "Build a turn-based strategy game with real-time multiplayer capabilities, featuring resource management, tactical combat, and empire building.",
    category: ProjectCategory::Game,
    features: &[
        "Turn-based strategy gameplay",
        "Real-time multiplayer sessions",
        "Resource management system",
        "Tactical combat mechanics",
        "Empire building and progression",
        "Leaderboards and achievements",
    ],
    tags: &["strategy", "multiplayer", "real-time", "combat"],
}];

static API_TEMPLATES: [ProjectTemplate; 1] = [ProjectTemplate {
    title: "Content Aggregation API",
    description: "Build a RESTful API that aggregates content from multiple sources, provides intelligent filtering, and offers real-time updates with webhook support.",
    category: ProjectCategory::Api,
    features: &[
        "Multi-source content aggregation",
        "Intelligent filtering and categorization",
        "Real-time updates with webhooks",
        "Rate limiting and API key management",
        "Caching and performance optimization",
        "Comprehensive documentation and SDKs",
    ],
    tags: &["api", "aggregation", "webhooks", "performance"],
}];

static TOOL_TEMPLATES: [ProjectTemplate; 1] = [ProjectTemplate {
    title: "Code Quality Analyzer",
    description: "Create a developer tool that analyzes code quality, suggests improvements, and tracks technical debt across different programming languages.",
    category: ProjectCategory::Tool,
    features: &[
        "Multi-language code analysis",
        "Quality metrics and scoring",
        "Technical debt tracking",
        "Improvement suggestions",
        "CI/CD pipeline integration",
        "Team collaboration features",
    ],
    tags: &["code-quality", "analysis", "developer-tools", "ci-cd"],
}];

/// Templates for a category, ordered and non-empty
pub fn templates(category: ProjectCategory) -> &'static [ProjectTemplate] {
    match category {
        ProjectCategory::Web => &WEB_TEMPLATES,
        ProjectCategory::Mobile => &MOBILE_TEMPLATES,
        ProjectCategory::Game => &GAME_TEMPLATES,
        ProjectCategory::Api => &API_TEMPLATES,
        ProjectCategory::Tool => &TOOL_TEMPLATES,
    }
}

/// Templates for a category key; unknown keys fall back to the `web` list
pub fn templates_for(key: &str) -> &'static [ProjectTemplate] {
    templates(ProjectCategory::parse(key).unwrap_or(ProjectCategory::Web))
}
