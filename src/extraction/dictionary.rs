use lazy_static::lazy_static;
use regex::Regex;

/// Known skill tokens checked by case-insensitive substring containment.
/// Entries are already lowercase canonical names; what is listed here is
/// what the dictionary pass emits verbatim.
pub const SKILL_DICTIONARY: &[&str] = &[
    // Languages
    "javascript",
    "typescript",
    "python",
    "java",
    "c#",
    "c++",
    "php",
    "ruby",
    "golang",
    "rust",
    "kotlin",
    "swift",
    "scala",
    "html",
    "css",
    "sql",
    // Frontend
    "react",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "tailwind",
    "bootstrap",
    // Backend
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "laravel",
    "rails",
    "fastapi",
    "graphql",
    // Datastores
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "sqlite",
    // DevOps & platforms
    "docker",
    "kubernetes",
    "jenkins",
    "terraform",
    "ansible",
    "git",
    "linux",
    "aws",
    "azure",
    "gcp",
    "firebase",
    // Data & ML
    "machine learning",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "spark",
    "kafka",
];

lazy_static! {
    // Frontend frameworks, with the usual ".js"/" js" suffix variants
    static ref FRONTEND_RE: Regex =
        Regex::new(r"(?i)\b(?:react|angular|vue|svelte|ember)(?:[\s._-]?js)?\b").unwrap();
    // Backend frameworks and runtimes
    static ref BACKEND_RE: Regex = Regex::new(
        r"(?i)\b(?:node|express|django|flask|spring|rails|laravel|fastapi)(?:[\s._-]?js)?\b"
    )
    .unwrap();
    // Datastores
    static ref DATASTORE_RE: Regex = Regex::new(
        r"(?i)\b(?:mysql|postgres(?:ql)?|mongo(?:[\s._-]?db)?|redis|elasticsearch|sqlite|cassandra|dynamodb)\b"
    )
    .unwrap();
    // CI/CD and container tooling
    static ref CICD_RE: Regex = Regex::new(
        r"(?i)\b(?:docker|kubernetes|k8s|jenkins|terraform|ansible|github[\s._-]?actions|gitlab[\s._-]?ci|circleci)\b"
    )
    .unwrap();
    // Cloud platforms
    static ref CLOUD_RE: Regex = Regex::new(
        r"(?i)\b(?:aws|amazon[\s._-]?web[\s._-]?services|azure|gcp|google[\s._-]?cloud|heroku|digitalocean)\b"
    )
    .unwrap();
}

/// The five pattern families applied by the second extraction pass, in
/// application order.
pub fn pattern_families() -> [&'static Regex; 5] {
    [
        &FRONTEND_RE,
        &BACKEND_RE,
        &DATASTORE_RE,
        &CICD_RE,
        &CLOUD_RE,
    ]
}
