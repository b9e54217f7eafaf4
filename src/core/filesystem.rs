//! Read-only virtual filesystem behind `ls` and `cat`.
//!
//! # Path Convention
//!
//! - Every path is absolute and normalized: `"/"`, `"/etc"`, `"/etc/motd"`
//! - No trailing slashes (except root itself)
//! - Relative input is resolved against `/`; `~` expands to the home directory

use crate::config::{ABOUT_TEXT, CONTACT_TEXT, HOME_DIR, RESUME_TEXT};

/// A file in the virtual filesystem.
#[derive(Clone, Copy, Debug)]
pub struct VirtualFile {
    pub path: &'static str,
    pub content: &'static str,
}

/// Directory entry returned by [`VirtualFs::list_dir`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

const DIRECTORIES: &[&str] = &[
    "/",
    "/etc",
    "/home",
    "/home/visitor",
    "/home/visitor/projects",
    "/var",
    "/var/log",
];

const FILES: &[VirtualFile] = &[
    VirtualFile {
        path: "/readme.txt",
        content: "This is a simulated filesystem.\nTry 'cat /home/visitor/about.txt' or 'projects'.",
    },
    VirtualFile {
        path: "/etc/hostname",
        content: "folio",
    },
    VirtualFile {
        path: "/etc/motd",
        content: "Authorized visitors only. All activity is imaginary.\nHave a look around.",
    },
    VirtualFile {
        path: "/home/visitor/about.txt",
        content: ABOUT_TEXT,
    },
    VirtualFile {
        path: "/home/visitor/contact.txt",
        content: CONTACT_TEXT,
    },
    VirtualFile {
        path: "/home/visitor/resume.txt",
        content: RESUME_TEXT,
    },
    VirtualFile {
        path: "/home/visitor/projects/README.md",
        content: "# Projects\n\nRun 'projects' for the full list or 'project <name>' for details.",
    },
    VirtualFile {
        path: "/var/log/auth.log",
        content: "Oct 19 09:12:01 folio sshd[812]: Accepted publickey for sam\n\
                  Oct 19 09:40:17 folio sshd[977]: Invalid user admin from 203.0.113.7\n\
                  Oct 19 09:40:19 folio sshd[977]: Connection closed by 203.0.113.7",
    },
];

/// Fixed in-memory filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct VirtualFs;

impl VirtualFs {
    /// Normalize user input into an absolute path.
    ///
    /// - Empty input and `.` resolve to `/`
    /// - `~` and `~/...` resolve under the home directory
    /// - `.` components are dropped and `..` pops (never above root)
    pub fn normalize_path(path: &str) -> String {
        let expanded = if path == "~" {
            HOME_DIR.to_string()
        } else if let Some(rest) = path.strip_prefix("~/") {
            format!("{}/{}", HOME_DIR, rest)
        } else {
            path.to_string()
        };

        let mut parts: Vec<&str> = Vec::new();
        for part in expanded.split('/').filter(|s| !s.is_empty()) {
            match part {
                ".." => {
                    parts.pop();
                }
                "." => {}
                _ => parts.push(part),
            }
        }

        format!("/{}", parts.join("/"))
    }

    /// Get the parent directory of a normalized path. Root is its own parent.
    pub fn parent_path(path: &str) -> &str {
        match path.rsplit_once('/') {
            Some(("", _)) | None => "/",
            Some((parent, _)) => parent,
        }
    }

    pub fn is_directory(&self, path: &str) -> bool {
        DIRECTORIES.contains(&path)
    }

    pub fn get_file(&self, path: &str) -> Option<&'static VirtualFile> {
        FILES.iter().find(|f| f.path == path)
    }

    /// List a directory: subdirectories first, then files, each sorted by name.
    ///
    /// Returns `None` if `path` is not a directory.
    pub fn list_dir(&self, path: &str) -> Option<Vec<DirEntry>> {
        if !self.is_directory(path) {
            return None;
        }

        let mut dirs: Vec<DirEntry> = DIRECTORIES
            .iter()
            .filter(|d| **d != "/" && Self::parent_path(d) == path)
            .map(|d| DirEntry {
                name: Self::file_name(d).to_string(),
                is_dir: true,
            })
            .collect();
        let mut files: Vec<DirEntry> = FILES
            .iter()
            .filter(|f| Self::parent_path(f.path) == path)
            .map(|f| DirEntry {
                name: Self::file_name(f.path).to_string(),
                is_dir: false,
            })
            .collect();

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        dirs.extend(files);
        Some(dirs)
    }

    fn file_name(path: &str) -> &str {
        path.rsplit('/').next().unwrap_or(path)
    }
}
