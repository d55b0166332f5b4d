//! Fixed vocabularies that define the heuristics. Read-only process-wide data.

/// Technical skill terms, matched as lower-case substrings.
pub const TECH_SKILLS: &[&str] = &[
    // languages
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust",
    "php", "swift", "kotlin", "scala", "r", "matlab",
    // frameworks
    "react", "angular", "vue", "node.js", "express", "django", "flask", "spring",
    "laravel", "rails", "asp.net", "flutter", "react native",
    // cloud / infra
    "docker", "kubernetes", "aws", "azure", "gcp", "heroku", "jenkins",
    "git", "github", "gitlab", "bitbucket", "ci/cd", "devops",
    // data
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "cassandra",
    "sql", "nosql", "graphql", "rest", "api", "microservices",
    // ml
    "machine learning", "deep learning", "ai", "nlp", "computer vision",
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy",
    // web
    "html", "css", "sass", "less", "bootstrap", "tailwind",
    // process
    "agile", "scrum", "kanban", "jira", "confluence",
    // platforms
    "linux", "unix", "windows", "macos", "bash", "powershell",
    // quality / security
    "testing", "unit testing", "integration testing", "tdd", "bdd",
    "security", "oauth", "jwt", "ssl", "encryption",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "analytical",
    "creative",
    "adaptable",
    "organized",
    "detail-oriented",
    "time management",
    "project management",
    "critical thinking",
    "collaboration",
    "mentoring",
    "presentation",
    "negotiation",
];

/// Action verbs counted by the ATS keyword-density heuristic.
pub const ACTION_VERBS: &[&str] = &[
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "led",
    "coordinated",
    "achieved",
    "improved",
    "increased",
    "reduced",
    "analyzed",
    "collaborated",
    "delivered",
    "executed",
];

/// Weak phrase → suggested replacement. Order is the emission order.
pub const WEAK_VERBS: &[(&str, &str)] = &[
    ("did", "executed"),
    ("made", "created"),
    ("worked on", "developed"),
    ("was responsible for", "managed"),
    ("helped", "assisted"),
    ("got", "achieved"),
];

/// Bracketed placeholders some converters leave where images used to be.
pub const GRAPHIC_MARKERS: &[&str] = &["[image]", "[graphic]", "[chart]", "[logo]"];

pub const BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// Words that mark a line as a section header when entries are sliced out.
pub const HEADER_WORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "certifications",
    "awards",
    "projects",
    "publications",
];
