//! Test utilities for building small Wikipedia-style archives

use assert_fs::TempDir;
use assert_fs::prelude::*;

#[allow(dead_code)]
pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wraps `body` in the page skeleton a Wikipedia export uses
#[allow(dead_code)]
pub fn wiki_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title} - Wikipedia</title>
    <script>var wgPageName = "{title}";</script>
</head>
<body>
<div id="content">
    <h1 class="firstHeading">{title}</h1>
    <div id="bodyContent">
        <div id="siteSub">From Wikipedia, the free encyclopedia</div>
        {body}
        <div id="catlinks">Categories: Test pages</div>
    </div>
</div>
</body>
</html>"#
    )
}

/// Creates an archive directory holding `files` (relative path, contents)
#[allow(dead_code)]
pub fn create_archive(files: &[(&str, &str)]) -> Result<TempDir, Box<dyn std::error::Error>> {
    let archive = TempDir::new()?;
    for (path, contents) in files {
        let child = archive.child(path);
        if let Some(parent) = std::path::Path::new(path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            archive.child(parent).create_dir_all()?;
        }
        child.write_str(contents)?;
    }
    Ok(archive)
}
