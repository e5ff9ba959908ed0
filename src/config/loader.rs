//! Configuration parsing

use tracing::warn;

use crate::error::{PickerError, PickerResult};

pub use crate::domain::value_objects::ConfigWarning;

use super::types::PickerConfig;

/// Every key the picker understands, for typo suggestions
const KNOWN_KEYS: &[&str] = &[
    "search",
    "auto_expand",
    "match_description",
    "display",
    "path_separator",
    "selection",
    "prune_stale_on_refresh",
];

/// Parse configuration text and collect non-fatal warnings (e.g. unknown keys).
pub fn parse_with_warnings(content: &str) -> PickerResult<(PickerConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: PickerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PickerError::InvalidConfig {
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path| {
            let leaf = path.rsplit('.').next().unwrap_or(path.as_str());
            ConfigWarning {
                line: find_line_number(content, leaf),
                suggestion: suggest_key(leaf),
                key: path,
            }
        })
        .collect();

    for warning in &warnings {
        warn!(key = %warning.key, line = ?warning.line, "unknown picker config key");
    }

    Ok((config, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in KNOWN_KEYS {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
