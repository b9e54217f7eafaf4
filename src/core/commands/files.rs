//! Filesystem commands backed by [`VirtualFs`], plus the simulated `download`.

use super::Output;
use crate::config::HOME_DIR;
use crate::core::content::{self, DOWNLOADS};
use crate::core::filesystem::VirtualFs;
use crate::utils::format::format_size_kb;

pub(super) fn pwd() -> Output {
    Output::text(HOME_DIR)
}

pub(super) fn ls(args: &[String]) -> Output {
    let target = args.first().map(String::as_str).unwrap_or("/");
    let path = VirtualFs::normalize_path(target);
    let fs = VirtualFs;

    match fs.list_dir(&path) {
        Some(entries) => Output::lines(entries.into_iter().map(|entry| {
            if entry.is_dir {
                format!("{}/", entry.name)
            } else {
                entry.name
            }
        })),
        None if fs.get_file(&path).is_some() => Output::text(path),
        None => Output::text(format!(
            "ls: cannot access '{}': No such file or directory",
            target
        )),
    }
}

pub(super) fn cat(args: &[String]) -> Output {
    let Some(target) = args.first() else {
        return Output::text("Usage: cat <file>");
    };
    let path = VirtualFs::normalize_path(target);
    let fs = VirtualFs;

    if fs.is_directory(&path) {
        return Output::text(format!("cat: {}: Is a directory", target));
    }
    match fs.get_file(&path) {
        Some(file) => Output::block(file.content),
        None => Output::text(format!("cat: {}: No such file or directory", target)),
    }
}

pub(super) fn cd(args: &[String]) -> Output {
    let target = args.first().map(String::as_str).unwrap_or("home");
    Output::text(format!("Changed directory to {}", target))
}

pub(super) fn download(args: &[String]) -> Output {
    let available = || {
        DOWNLOADS
            .iter()
            .map(|d| d.name)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let Some(name) = args.first() else {
        let mut lines = vec!["Usage: download <filename>".to_string(), "Available files:".to_string()];
        lines.extend(DOWNLOADS.iter().map(|d| {
            format!(
                "  {:<14} {:>8}  {}",
                d.name,
                format_size_kb(d.size_kb),
                d.description
            )
        }));
        return Output::Lines(lines);
    };

    let Some(file) = content::find_download(name) else {
        return Output::text(format!(
            "download: file '{}' not found. Available files: {}",
            name,
            available()
        ));
    };

    Output::lines([
        "Connecting to files.folio.dev...".to_string(),
        format!("Downloading {} ({})...", file.name, format_size_kb(file.size_kb)),
        "[########################################] 100%".to_string(),
        format!("Download complete: {}", file.name),
        "(simulated: no file was transferred)".to_string(),
    ])
}
