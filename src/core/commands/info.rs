//! Portfolio commands: help, usage, biography, skills, projects and contact.

use super::{Output, Registry};
use crate::config::{ABOUT_TEXT, CONTACT_TEXT, RESUME_TEXT, USERNAME};
use crate::core::content::{self, SKILLS, SOCIAL_LINKS};
use crate::utils::format::format_date;

pub(super) fn help(registry: &Registry) -> Output {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        registry
            .iter()
            .map(|c| format!("  {:<10} {}", c.name(), c.description())),
    );
    lines.push(String::new());
    lines.push("Type 'usage <command>' for detailed usage.".to_string());
    Output::Lines(lines)
}

pub(super) fn usage(args: &[String], registry: &Registry) -> Output {
    let Some(name) = args.first() else {
        return Output::text("Usage: usage <command>");
    };

    match registry.lookup(name) {
        Some(cmd) => Output::lines([
            format!("Command:     {}", cmd.name()),
            format!("Description: {}", cmd.description()),
            format!("Usage:       {}", cmd.usage()),
        ]),
        None => Output::text(format!(
            "usage: command '{}' not found. Type 'help' for available commands.",
            name
        )),
    }
}

pub(super) fn about() -> Output {
    Output::block(ABOUT_TEXT)
}

pub(super) fn contact() -> Output {
    Output::block(CONTACT_TEXT)
}

pub(super) fn resume() -> Output {
    Output::block(RESUME_TEXT)
}

pub(super) fn whoami() -> Output {
    Output::text(USERNAME)
}

pub(super) fn date(now_millis: u64) -> Output {
    Output::text(format_date(now_millis))
}

fn push_category(lines: &mut Vec<String>, category: &content::SkillCategory) {
    lines.push(format!("{}:", category.title));
    lines.extend(category.skills.iter().map(|s| format!("  - {}", s)));
}

pub(super) fn skills(args: &[String]) -> Output {
    match args.first().map(String::as_str) {
        None | Some("all") => {
            let mut lines = Vec::new();
            for (i, category) in SKILLS.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                push_category(&mut lines, category);
            }
            Output::Lines(lines)
        }
        Some(key) => match content::find_skill_category(key) {
            Some(category) => {
                let mut lines = Vec::new();
                push_category(&mut lines, category);
                Output::Lines(lines)
            }
            None => {
                let valid: Vec<&str> = SKILLS.iter().map(|c| c.key).collect();
                Output::text(format!(
                    "Unknown category: {}. Available categories: all, {}",
                    key,
                    valid.join(", ")
                ))
            }
        },
    }
}

fn project_line(project: &content::Project) -> String {
    format!(
        "  {:<12} {} - {} [{}]",
        project.key,
        project.name,
        project.summary,
        project.tags.join(", ")
    )
}

pub(super) fn projects(args: &[String]) -> Output {
    let Some(tag) = args.first() else {
        let mut lines = vec!["Projects:".to_string()];
        lines.extend(content::PROJECTS.iter().map(project_line));
        lines.push(String::new());
        lines.push(
            "Use 'projects <tag>' to filter or 'project <name>' for details.".to_string(),
        );
        return Output::Lines(lines);
    };

    let matches = content::projects_by_tag(tag);
    if matches.is_empty() {
        return Output::text(format!("No projects found with tag '{}'", tag));
    }

    let mut lines = vec![format!("Projects tagged '{}':", tag)];
    lines.extend(matches.into_iter().map(project_line));
    Output::Lines(lines)
}

pub(super) fn project(args: &[String]) -> Output {
    let query = args.join(" ");
    if query.is_empty() {
        return Output::text("Usage: project <name>");
    }

    let Some(project) = content::find_project(&query) else {
        return Output::text(format!(
            "Project '{}' not found. Run 'projects' to see all projects.",
            query
        ));
    };

    let mut lines = vec![
        project.name.to_string(),
        "=".repeat(project.name.len()),
        project.summary.to_string(),
        String::new(),
    ];
    lines.extend(project.details.iter().map(|d| format!("  {}", d)));
    lines.push(String::new());
    lines.push(format!("Tags: {}", project.tags.join(", ")));
    Output::Lines(lines)
}

pub(super) fn social() -> Output {
    let mut lines = vec!["Find me online:".to_string()];
    lines.extend(
        SOCIAL_LINKS
            .iter()
            .map(|(site, url)| format!("  {:<10} {}", site, url)),
    );
    Output::Lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    fn lines(output: Output) -> Vec<String> {
        match output {
            Output::Lines(lines) => lines,
            Output::Text(line) => vec![line],
            Output::Clear => panic!("Expected text output"),
        }
    }

    #[test]
    fn test_help_lists_every_command() {
        let registry = Registry::with_defaults();
        let out = lines(help(&registry));
        for name in registry.names() {
            assert!(
                out.iter().any(|l| l.trim_start().starts_with(name)),
                "help is missing {}",
                name
            );
        }
        assert!(out.last().unwrap().contains("usage <command>"));
    }

    #[test]
    fn test_usage_variants() {
        let registry = Registry::with_defaults();
        assert_eq!(
            usage(&[], &registry),
            Output::text("Usage: usage <command>")
        );

        let out = lines(usage(&args(&["nosuch"]), &registry));
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("not found"));

        let out = lines(usage(&args(&["ls"]), &registry));
        assert_eq!(out.len(), 3);
        assert!(out[0].ends_with("ls"));
        assert!(out[2].ends_with("ls [path]"));
    }

    #[test]
    fn test_skills_all_and_default_match() {
        assert_eq!(skills(&[]), skills(&args(&["all"])));
        let out = lines(skills(&[]));
        assert!(out.contains(&"Security:".to_string()));
        assert!(out.contains(&"Development:".to_string()));
        assert!(out.contains(&"AI / ML:".to_string()));
    }

    #[test]
    fn test_skills_single_category() {
        let out = lines(skills(&args(&["security"])));
        assert_eq!(out[0], "Security:");
        let security = content::find_skill_category("security").unwrap();
        assert_eq!(out.len(), security.skills.len() + 1);
        for line in &out[1..] {
            let skill = line.trim_start_matches("  - ");
            assert!(security.skills.contains(&skill));
        }
    }

    #[test]
    fn test_skills_unknown_category() {
        let out = lines(skills(&args(&["cooking"])));
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("Unknown category: cooking"));
        assert!(out[0].contains("security, development, ai"));
    }

    #[test]
    fn test_projects_listing_and_filter() {
        let all = lines(projects(&[]));
        assert_eq!(all[0], "Projects:");
        assert!(all.last().unwrap().contains("projects <tag>"));

        let ai = lines(projects(&args(&["AI"])));
        assert_eq!(ai[0], "Projects tagged 'AI':");
        assert!(ai.iter().any(|l| l.contains("Sentinel")));
        assert!(!ai.iter().any(|l| l.contains("Vaultline")));
    }

    #[test]
    fn test_projects_no_match() {
        assert_eq!(
            projects(&args(&["nonexistenttag"])),
            Output::text("No projects found with tag 'nonexistenttag'")
        );
    }

    #[test]
    fn test_project_lookup() {
        let out = lines(project(&args(&["Vault"])));
        assert_eq!(out[0], "Vaultline");
        assert_eq!(out[1], "=========");

        let out = lines(project(&args(&["no", "such"])));
        assert!(out[0].contains("'no such' not found"));
        assert!(out[0].contains("'projects'"));

        assert_eq!(project(&[]), Output::text("Usage: project <name>"));
    }

    #[test]
    fn test_fixed_text_commands() {
        assert_eq!(whoami(), Output::text("visitor"));
        assert!(lines(about())[0].contains("Sam Rivera"));
        assert!(lines(contact()).iter().any(|l| l.contains("Email")));
        assert!(lines(resume()).iter().any(|l| l == "EXPERIENCE"));
        assert_eq!(lines(social()).len(), SOCIAL_LINKS.len() + 1);
    }

    #[test]
    fn test_date_uses_given_time() {
        assert_eq!(date(0), Output::text("Thu Jan 01 1970 00:00:00 UTC"));
    }
}
