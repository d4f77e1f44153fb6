// Copyright 2026 the Rasterique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Rasterique Dev
//!
//! This crate provides utilities for developing Rasterique. Tests that need
//! a real font use it to borrow one from the host system and skip when none
//! is available.

use std::path::{Path, PathBuf};

/// The directories searched for host font files.
pub fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
    }
    dirs
}

/// Returns the path of some TrueType or OpenType font on the host, if any.
pub fn system_font() -> Option<PathBuf> {
    system_fonts(1).pop()
}

/// Returns up to `limit` host font paths.
///
/// The scan is deterministic: directories are visited in [`font_dirs`]
/// order and entries in sorted order, so repeated runs pick the same files.
pub fn system_fonts(limit: usize) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for dir in font_dirs() {
        collect_fonts(&dir, limit, &mut found);
        if found.len() >= limit {
            break;
        }
    }
    found
}

fn collect_fonts(dir: &Path, limit: usize, found: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    let mut entries: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    entries.sort();
    for path in entries {
        if found.len() >= limit {
            return;
        }
        if path.is_dir() {
            collect_fonts(&path, limit, found);
        } else if is_font_file(&path) {
            found.push(path);
        }
    }
}

fn is_font_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("ttf" | "otf" | "ttc")
    )
}
