//! Fixed lookup tables behind the portfolio commands.
//!
//! Everything here is static data: skills, projects, downloadable files,
//! social links and the code samples used by `analyze`.

// =============================================================================
// Skills
// =============================================================================

#[derive(Debug)]
pub struct SkillCategory {
    /// Lowercase key accepted by `skills <category>`
    pub key: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        key: "security",
        title: "Security",
        skills: &[
            "Web application pentesting",
            "Threat modeling",
            "Static analysis tooling",
            "Incident response",
            "Cloud security (AWS, GCP)",
        ],
    },
    SkillCategory {
        key: "development",
        title: "Development",
        skills: &[
            "Rust",
            "TypeScript / React",
            "Python",
            "PostgreSQL",
            "Distributed systems",
        ],
    },
    SkillCategory {
        key: "ai",
        title: "AI / ML",
        skills: &[
            "Anomaly detection",
            "PyTorch",
            "Feature engineering on telemetry",
            "LLM application security",
        ],
    },
];

pub fn find_skill_category(key: &str) -> Option<&'static SkillCategory> {
    SKILLS.iter().find(|c| c.key.eq_ignore_ascii_case(key))
}

// =============================================================================
// Projects
// =============================================================================

#[derive(Debug)]
pub struct Project {
    /// Lookup key for `project <name>`
    pub key: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub details: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        key: "sentinel",
        name: "Sentinel",
        summary: "Network anomaly detection on streaming flow logs",
        tags: &["security", "ai", "rust"],
        details: &[
            "Streaming detector that scores VPC flow logs in real time.",
            "Isolation-forest model retrained nightly; scoring path in Rust.",
            "Cut mean time to detect lateral movement from hours to minutes.",
        ],
    },
    Project {
        key: "vaultline",
        name: "Vaultline",
        summary: "Secrets scanner for CI pipelines",
        tags: &["security", "devops", "rust"],
        details: &[
            "Pre-commit and CI scanner for leaked credentials.",
            "Entropy checks plus provider-specific token patterns.",
            "Runs on 1,200 repositories with a 0.3% false-positive rate.",
        ],
    },
    Project {
        key: "portfolio",
        name: "Portfolio Terminal",
        summary: "This site: a simulated terminal in the browser",
        tags: &["web", "rust", "wasm"],
        details: &[
            "Command registry with a scripted autoplay demo.",
            "Compiled to WebAssembly and rendered with Leptos.",
        ],
    },
    Project {
        key: "promptguard",
        name: "PromptGuard",
        summary: "Prompt-injection detection for LLM applications",
        tags: &["ai", "security", "python"],
        details: &[
            "Classifier and heuristic layer in front of LLM tool calls.",
            "Red-team corpus of 8,000 labelled injection attempts.",
        ],
    },
];

/// Projects whose tag set contains `tag` as a case-insensitive substring.
pub fn projects_by_tag(tag: &str) -> Vec<&'static Project> {
    let needle = tag.to_lowercase();
    PROJECTS
        .iter()
        .filter(|p| p.tags.iter().any(|t| t.to_lowercase().contains(&needle)))
        .collect()
}

/// First project whose key contains `query` (case-insensitive).
pub fn find_project(query: &str) -> Option<&'static Project> {
    let needle = query.to_lowercase();
    PROJECTS.iter().find(|p| p.key.contains(&needle))
}

// =============================================================================
// Downloads
// =============================================================================

#[derive(Debug)]
pub struct Download {
    pub name: &'static str,
    pub size_kb: u32,
    pub description: &'static str,
}

pub const DOWNLOADS: &[Download] = &[
    Download {
        name: "resume.pdf",
        size_kb: 248,
        description: "Full resume",
    },
    Download {
        name: "portfolio.pdf",
        size_kb: 1830,
        description: "Project portfolio with case studies",
    },
    Download {
        name: "pgp-key.asc",
        size_kb: 4,
        description: "Public PGP key",
    },
];

pub fn find_download(name: &str) -> Option<&'static Download> {
    DOWNLOADS.iter().find(|d| d.name == name)
}

// =============================================================================
// Social
// =============================================================================

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/samrivera"),
    ("LinkedIn", "https://linkedin.com/in/samrivera"),
    ("Mastodon", "https://infosec.exchange/@samrivera"),
    ("Blog", "https://samrivera.dev/blog"),
];

// =============================================================================
// Vulnerability Samples
// =============================================================================

/// Severity of an analysis finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
        }
    }
}

/// A pattern rule applied line by line to a sample.
#[derive(Debug)]
pub struct Rule {
    pub pattern: &'static str,
    pub severity: Severity,
    pub finding: &'static str,
    pub cwe: u32,
}

#[derive(Debug)]
pub struct VulnSample {
    pub name: &'static str,
    pub language: &'static str,
    pub code: &'static str,
    pub rules: &'static [Rule],
    pub fix: &'static str,
}

pub const VULN_SAMPLES: &[VulnSample] = &[
    VulnSample {
        name: "sql-injection",
        language: "python",
        code: "def get_user(db, name):\n    query = \"SELECT * FROM users WHERE name = '\" + name + \"'\"\n    return db.execute(query)",
        rules: &[Rule {
            pattern: r#"(SELECT|INSERT|UPDATE|DELETE) .*["'] *\+"#,
            severity: Severity::Critical,
            finding: "SQL query built by string concatenation",
            cwe: 89,
        }],
        fix: "Use parameterized queries: db.execute(\"... WHERE name = ?\", (name,))",
    },
    VulnSample {
        name: "xss",
        language: "javascript",
        code: "const params = new URLSearchParams(location.search);\nconst name = params.get('name');\ndocument.getElementById('greeting').innerHTML = 'Hello ' + name;",
        rules: &[Rule {
            pattern: r"\.innerHTML *=",
            severity: Severity::High,
            finding: "Untrusted input written to innerHTML",
            cwe: 79,
        }],
        fix: "Assign to textContent or sanitize the value before rendering",
    },
    VulnSample {
        name: "command-injection",
        language: "python",
        code: "import os\n\ndef ping(host):\n    os.system(\"ping -c 1 \" + host)",
        rules: &[Rule {
            pattern: r"os\.system\(.*\+",
            severity: Severity::Critical,
            finding: "Shell command built from user input",
            cwe: 78,
        }],
        fix: "Call subprocess.run([\"ping\", \"-c\", \"1\", host]) without a shell",
    },
    VulnSample {
        name: "hardcoded-secret",
        language: "rust",
        code: "const API_KEY: &str = \"sk_live_51HxQ2eKc9\";\nconst DB_PASSWORD: &str = \"hunter2\";\n\nfn client() -> Client {\n    Client::new(API_KEY)\n}",
        rules: &[
            Rule {
                pattern: r#"(KEY|TOKEN|SECRET)[A-Z_]* *: *&str *= *""#,
                severity: Severity::High,
                finding: "Hardcoded API credential",
                cwe: 798,
            },
            Rule {
                pattern: r#"PASSWORD[A-Z_]* *: *&str *= *""#,
                severity: Severity::Medium,
                finding: "Hardcoded password",
                cwe: 259,
            },
        ],
        fix: "Load secrets from the environment or a secrets manager at startup",
    },
];

pub fn find_sample(name: &str) -> Option<&'static VulnSample> {
    VULN_SAMPLES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}
