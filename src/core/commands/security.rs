//! Simulated security tooling.
//!
//! Nothing here touches the network. `nmap`, `ping` and `scan` render
//! templated output whose numbers are derived from a hash of the target, so
//! the same target always produces the same transcript. `crypto` is a Base64
//! demo and `analyze` runs fixed pattern rules over bundled code samples.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use sha2::{Digest, Sha256};

use super::{CommandResult, Output};
use crate::core::content::{self, VULN_SAMPLES};
use crate::core::error::CommandError;

/// FNV-1a hash of the target, used to vary simulated numbers.
fn seed(target: &str) -> u64 {
    target.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

pub(super) fn nmap(args: &[String]) -> Output {
    let Some(target) = args.first() else {
        return Output::text("Usage: nmap <target>");
    };
    let seed = seed(target);

    let mut lines = vec![
        format!("Starting Nmap 7.94 ( https://nmap.org ) against {}", target),
        format!("Nmap scan report for {}", target),
        format!("Host is up (0.{:03}s latency).", 5 + seed % 90),
        "PORT     STATE    SERVICE".to_string(),
        "22/tcp   open     ssh".to_string(),
        "80/tcp   open     http".to_string(),
        "443/tcp  open     https".to_string(),
    ];
    if seed % 3 == 0 {
        lines.push("3306/tcp filtered mysql".to_string());
    }
    if seed % 4 == 1 {
        lines.push("8080/tcp open     http-proxy".to_string());
    }
    lines.push(format!(
        "Nmap done: 1 IP address (1 host up) scanned in {}.{:02} seconds",
        1 + seed % 4,
        seed % 100
    ));
    lines.push("(simulated scan: no packets were sent)".to_string());
    Output::Lines(lines)
}

pub(super) fn ping(args: &[String]) -> Output {
    let Some(host) = args.first() else {
        return Output::text("Usage: ping <host>");
    };
    let seed = seed(host);
    let base = 10 + seed % 40;
    let times: Vec<u64> = (0..4u64).map(|i| base + (seed >> (i * 8)) % 7).collect();

    let mut lines = vec![format!("PING {} 56(84) bytes of data.", host)];
    lines.extend(times.iter().enumerate().map(|(i, t)| {
        format!("64 bytes from {}: icmp_seq={} ttl=56 time={} ms", host, i + 1, t)
    }));
    let min = times.iter().min().copied().unwrap_or(0);
    let max = times.iter().max().copied().unwrap_or(0);
    let avg = times.iter().sum::<u64>() / times.len() as u64;
    lines.push(String::new());
    lines.push(format!("--- {} ping statistics ---", host));
    lines.push("4 packets transmitted, 4 received, 0% packet loss".to_string());
    lines.push(format!("rtt min/avg/max = {}/{}/{} ms", min, avg, max));
    Output::Lines(lines)
}

const SCAN_CHECKS: &[(&str, &str)] = &[
    ("TLS configuration", "TLS 1.0 still enabled"),
    ("Security headers", "Missing Content-Security-Policy"),
    ("Cookie flags", "Session cookie without SameSite"),
    ("Directory listing", "Index of /backup exposed"),
    ("Server banner", "Version disclosed in Server header"),
];

pub(super) fn scan(args: &[String]) -> Output {
    let Some(target) = args.first() else {
        return Output::text("Usage: scan <target>");
    };
    let seed = seed(target);

    let mut lines = vec![format!("Scanning {} for vulnerabilities...", target)];
    let mut issues = 0;
    for (i, (check, finding)) in SCAN_CHECKS.iter().enumerate() {
        if (seed >> i) & 1 == 1 {
            issues += 1;
            lines.push(format!("[!] {}: {}", check, finding));
        } else {
            lines.push(format!("[+] {}: OK", check));
        }
    }
    lines.push(format!("Scan complete: {} issue(s) found on {}", issues, target));
    lines.push("(simulated scan: no requests were made)".to_string());
    Output::Lines(lines)
}

fn crypto_usage() -> Output {
    Output::lines([
        "Usage: crypto <encrypt|decrypt|hash> <text>",
        "Note: encrypt/decrypt use Base64, which is an encoding, not encryption.",
    ])
}

pub(super) fn crypto(args: &[String]) -> CommandResult {
    let (Some(op), Some(_)) = (args.first(), args.get(1)) else {
        return Ok(crypto_usage());
    };
    let text = args[1..].join(" ");

    match op.as_str() {
        "encrypt" => Ok(Output::lines([
            format!("Original:  {}", text),
            format!("Encrypted: {}", STANDARD.encode(text.as_bytes())),
            "Note: Base64 is an encoding, not encryption.".to_string(),
        ])),
        "decrypt" => {
            let bytes = STANDARD.decode(text.as_bytes())?;
            let decoded = String::from_utf8(bytes)?;
            Ok(Output::lines([
                format!("Encrypted: {}", text),
                format!("Decrypted: {}", decoded),
            ]))
        }
        "hash" => Ok(Output::lines([
            format!("Input:   {}", text),
            format!("SHA-256: {}", hex::encode(Sha256::digest(text.as_bytes()))),
        ])),
        _ => Ok(crypto_usage()),
    }
}

pub(super) fn analyze(args: &[String]) -> CommandResult {
    let names = || {
        VULN_SAMPLES
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let Some(name) = args.first() else {
        return Ok(Output::lines([
            "Usage: analyze <sample>".to_string(),
            format!("Available samples: {}", names()),
        ]));
    };
    let Some(sample) = content::find_sample(name) else {
        return Ok(Output::text(format!(
            "Sample '{}' not found. Available samples: {}",
            name,
            names()
        )));
    };

    let rules = sample
        .rules
        .iter()
        .map(|rule| Ok((Regex::new(rule.pattern)?, rule)))
        .collect::<Result<Vec<_>, CommandError>>()?;

    let mut lines = vec![format!("Analyzing {} ({})...", sample.name, sample.language)];
    lines.extend(
        sample
            .code
            .lines()
            .enumerate()
            .map(|(i, line)| format!("{:>3} | {}", i + 1, line)),
    );
    lines.push(String::new());
    lines.push("Findings:".to_string());

    let mut found = 0;
    for (number, line) in sample.code.lines().enumerate() {
        for (regex, rule) in &rules {
            if regex.is_match(line) {
                found += 1;
                lines.push(format!(
                    "  [{}] line {}: {} (CWE-{})",
                    rule.severity.label(),
                    number + 1,
                    rule.finding,
                    rule.cwe
                ));
            }
        }
    }
    if found == 0 {
        lines.push("  none".to_string());
    }
    lines.push(format!("Recommendation: {}", sample.fix));
    Ok(Output::Lines(lines))
}
