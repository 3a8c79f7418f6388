use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::Config;
use crate::document::{extract_title, markdown_to_html};
use crate::error::{Error, SiteError};
use crate::template::Template;

/// Render one markdown document into a full page.
///
/// The title is the first level-1 heading, or `fallback_title` when the
/// document has none.
pub fn render_page(
    markdown: &str,
    template: &Template,
    config: &Config,
    fallback_title: &str,
) -> Result<String, Error> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown).unwrap_or_else(|| {
        warn!("no level-1 heading found, using {fallback_title:?} as title");
        fallback_title.to_string()
    });
    let page = template.fill(&title, &content);
    Ok(rebase_links(&page, &config.site.base_path))
}

/// Convert one markdown file into an HTML file.
pub fn generate_page(
    source: &Path,
    dest: &Path,
    template: &Template,
    config: &Config,
) -> Result<(), SiteError> {
    debug!("Generating {} -> {}", source.display(), dest.display());
    let markdown = fs::read_to_string(source).map_err(|e| SiteError::io(source, e))?;
    let fallback = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let page = render_page(&markdown, template, config, &fallback).map_err(|source_err| {
        SiteError::Convert {
            path: source.to_path_buf(),
            source: source_err,
        }
    })?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(dest, page).map_err(|e| SiteError::io(dest, e))
}

/// Convert every `.md` file under `source_dir` into `output_dir`, keeping
/// the directory layout. Returns the written paths in sorted order.
pub fn generate_site(
    source_dir: &Path,
    output_dir: &Path,
    template: &Template,
    config: &Config,
) -> Result<Vec<PathBuf>, SiteError> {
    let sources = collect_markdown_files(source_dir)?;
    info!(
        "Converting {} markdown files from {}",
        sources.len(),
        source_dir.display()
    );

    // Documents are independent, so convert them in parallel. Every page is
    // attempted; the reported error is the first failure in sorted order.
    let results: Vec<Result<PathBuf, SiteError>> = sources
        .par_iter()
        .map(|source| -> Result<PathBuf, SiteError> {
            let relative = source.strip_prefix(source_dir).unwrap_or(source);
            let dest = output_dir.join(relative).with_extension("html");
            generate_page(source, &dest, template, config)?;
            Ok(dest)
        })
        .collect();
    results.into_iter().collect()
}

/// All markdown files below `dir`, in sorted order.
pub fn collect_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut files = Vec::new();
    walk(dir, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| SiteError::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SiteError::io(dir, e))?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    Ok(())
}

fn rebase_links(page: &str, base_path: &str) -> String {
    if base_path == "/" || base_path.is_empty() {
        return page.to_string();
    }
    page
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bare() -> Template {
        Template::new("[{{ Title }}]{{ Content }}", "{{ Title }}", "{{ Content }}")
    }

    #[test]
    fn page_uses_first_heading_as_title() {
        let config = Config::compiled_default();
        let page = render_page("# Hello\n\nWorld", &bare(), &config, "x").unwrap();
        assert_eq!(page, "[Hello]<div><h1>Hello</h1><p>World</p></div>");
    }

    #[test]
    fn page_without_heading_uses_fallback() {
        let config = Config::compiled_default();
        let page = render_page("Just text", &bare(), &config, "notes").unwrap();
        assert_eq!(page, "[notes]<div><p>Just text</p></div>");
    }

    #[test]
    fn title_containing_content_placeholder_stays_in_title() {
        let config = Config::compiled_default();
        let page = render_page(
            "# About {{ Content }}\n\nbody",
            &Template::builtin(),
            &config,
            "x",
        )
        .unwrap();
        assert!(page.contains("<title>About {{ Content }}</title>"));
        assert_eq!(page.matches("<p>body</p>").count(), 1);
    }

    #[test]
    fn root_relative_links_follow_base_path() {
        let mut config = Config::compiled_default();
        config.site.base_path = "/blog/".into();
        let page = render_page(
            "[home](/index.html) ![pic](/a.png) [ext](https://x.org)",
            &bare(),
            &config,
            "t",
        )
        .unwrap();
        assert_eq!(
            page,
            "[t]<div><p><a href=\"/blog/index.html\">home</a> <img src=\"/blog/a.png\" alt=\"pic\"></img> <a href=\"https://x.org\">ext</a></p></div>"
        );
    }

    #[test]
    fn malformed_page_is_an_error() {
        let result = render_page("odd _marker", &bare(), &Config::compiled_default(), "t");
        assert!(matches!(result, Err(Error::MalformedMarkup { .. })));
    }
}
