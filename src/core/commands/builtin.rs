//! The built-in command set.

use super::{files, info, security, CommandContext, CommandResult, Output};

/// Every command available in a fresh registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    Usage,
    About,
    Skills,
    Projects,
    Project,
    Contact,
    Resume,
    Download,
    Social,
    Clear,
    Whoami,
    Date,
    Pwd,
    Echo,
    Ls,
    Cat,
    Cd,
    Nmap,
    Ping,
    Scan,
    Crypto,
    Analyze,
}

impl Builtin {
    /// Registration (and `help` listing) order.
    pub const ALL: &'static [Builtin] = &[
        Self::Help,
        Self::Usage,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Project,
        Self::Contact,
        Self::Resume,
        Self::Download,
        Self::Social,
        Self::Clear,
        Self::Whoami,
        Self::Date,
        Self::Pwd,
        Self::Echo,
        Self::Ls,
        Self::Cat,
        Self::Cd,
        Self::Nmap,
        Self::Ping,
        Self::Scan,
        Self::Crypto,
        Self::Analyze,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Usage => "usage",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Project => "project",
            Self::Contact => "contact",
            Self::Resume => "resume",
            Self::Download => "download",
            Self::Social => "social",
            Self::Clear => "clear",
            Self::Whoami => "whoami",
            Self::Date => "date",
            Self::Pwd => "pwd",
            Self::Echo => "echo",
            Self::Ls => "ls",
            Self::Cat => "cat",
            Self::Cd => "cd",
            Self::Nmap => "nmap",
            Self::Ping => "ping",
            Self::Scan => "scan",
            Self::Crypto => "crypto",
            Self::Analyze => "analyze",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "List available commands",
            Self::Usage => "Show detailed usage for a command",
            Self::About => "Who I am",
            Self::Skills => "Technical skills by category",
            Self::Projects => "List projects, optionally filtered by tag",
            Self::Project => "Details for a single project",
            Self::Contact => "How to reach me",
            Self::Resume => "Work history and education",
            Self::Download => "Download documents",
            Self::Social => "Social media links",
            Self::Clear => "Clear the terminal",
            Self::Whoami => "Print the current user",
            Self::Date => "Print the current date and time",
            Self::Pwd => "Print the working directory",
            Self::Echo => "Print arguments",
            Self::Ls => "List directory contents",
            Self::Cat => "Print file contents",
            Self::Cd => "Change directory",
            Self::Nmap => "Simulated port scan",
            Self::Ping => "Simulated ICMP echo",
            Self::Scan => "Simulated vulnerability scan",
            Self::Crypto => "Base64 encode/decode demo (not encryption)",
            Self::Analyze => "Static analysis of a vulnerable code sample",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Usage => "usage <command>",
            Self::About => "about",
            Self::Skills => "skills [all|security|development|ai]",
            Self::Projects => "projects [tag]",
            Self::Project => "project <name>",
            Self::Contact => "contact",
            Self::Resume => "resume",
            Self::Download => "download <filename>",
            Self::Social => "social",
            Self::Clear => "clear",
            Self::Whoami => "whoami",
            Self::Date => "date",
            Self::Pwd => "pwd",
            Self::Echo => "echo [text...]",
            Self::Ls => "ls [path]",
            Self::Cat => "cat <file>",
            Self::Cd => "cd [directory]",
            Self::Nmap => "nmap <target>",
            Self::Ping => "ping <host>",
            Self::Scan => "scan <target>",
            Self::Crypto => "crypto <encrypt|decrypt|hash> <text>",
            Self::Analyze => "analyze <sample>",
        }
    }

    pub(super) fn run(self, args: &[String], ctx: &CommandContext<'_>) -> CommandResult {
        match self {
            Self::Help => Ok(info::help(ctx.registry)),
            Self::Usage => Ok(info::usage(args, ctx.registry)),
            Self::About => Ok(info::about()),
            Self::Skills => Ok(info::skills(args)),
            Self::Projects => Ok(info::projects(args)),
            Self::Project => Ok(info::project(args)),
            Self::Contact => Ok(info::contact()),
            Self::Resume => Ok(info::resume()),
            Self::Download => Ok(files::download(args)),
            Self::Social => Ok(info::social()),
            Self::Clear => Ok(Output::Clear),
            Self::Whoami => Ok(info::whoami()),
            Self::Date => Ok(info::date(ctx.now_millis)),
            Self::Pwd => Ok(files::pwd()),
            Self::Echo => Ok(Output::text(args.join(" "))),
            Self::Ls => Ok(files::ls(args)),
            Self::Cat => Ok(files::cat(args)),
            Self::Cd => Ok(files::cd(args)),
            Self::Nmap => Ok(security::nmap(args)),
            Self::Ping => Ok(security::ping(args)),
            Self::Scan => Ok(security::scan(args)),
            Self::Crypto => security::crypto(args),
            Self::Analyze => security::analyze(args),
        }
    }
}
