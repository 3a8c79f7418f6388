use std::fs;
use std::path::Path;

use crate::config::TemplateConfig;
use crate::error::SiteError;

const BUILTIN_TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ Title }}</title>
</head>
<body>
    <article>
        {{ Content }}
    </article>
</body>
</html>
"#;

/// An HTML page with title and content placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    title_placeholder: String,
    content_placeholder: String,
}

impl Template {
    pub fn new(
        source: impl Into<String>,
        title_placeholder: impl Into<String>,
        content_placeholder: impl Into<String>,
    ) -> Self {
        Template {
            source: source.into(),
            title_placeholder: title_placeholder.into(),
            content_placeholder: content_placeholder.into(),
        }
    }

    /// The built-in minimal HTML5 page.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATE, "{{ Title }}", "{{ Content }}")
    }

    /// Resolve the template named by `config`, falling back to the built-in page.
    pub fn from_config(config: &TemplateConfig) -> Result<Self, SiteError> {
        match &config.path {
            Some(path) => Self::load(path, config),
            None => {
                let source = BUILTIN_TEMPLATE
                    .replace("{{ Title }}", &config.title_placeholder)
                    .replace("{{ Content }}", &config.content_placeholder);
                Ok(Self::new(
                    source,
                    config.title_placeholder.as_str(),
                    config.content_placeholder.as_str(),
                ))
            }
        }
    }

    /// Read a template file; it must contain the content placeholder.
    pub fn load(path: &Path, config: &TemplateConfig) -> Result<Self, SiteError> {
        let source = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        if !source.contains(&config.content_placeholder) {
            return Err(SiteError::Template {
                path: path.to_path_buf(),
                placeholder: config.content_placeholder.clone(),
            });
        }
        Ok(Self::new(
            source,
            config.title_placeholder.as_str(),
            config.content_placeholder.as_str(),
        ))
    }

    /// Substitute every occurrence of both placeholders.
    ///
    /// Only the template text is searched, never the substituted values.
    pub fn fill(&self, title: &str, content: &str) -> String {
        self.source
            .split(self.content_placeholder.as_str())
            .map(|piece| piece.replace(&self.title_placeholder, title))
            .collect::<Vec<_>>()
            .join(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    #[test]
    fn fills_every_placeholder() {
        let template = Template::new(
            "<h1>{{ Title }}</h1>{{ Content }}<p>{{ Title }}</p>",
            "{{ Title }}",
            "{{ Content }}",
        );
        assert_eq!(
            template.fill("Hi", "<p>body</p>"),
            "<h1>Hi</h1><p>body</p><p>Hi</p>"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template = Template::new(
            "<title>{{ Title }}</title>{{ Content }}",
            "{{ Title }}",
            "{{ Content }}",
        );
        assert_eq!(
            template.fill("About {{ Content }}", "<p>{{ Title }}</p>"),
            "<title>About {{ Content }}</title><p>{{ Title }}</p>"
        );
    }

    #[test]
    fn builtin_has_title_and_content() {
        let page = Template::builtin().fill("Home", "<div>x</div>");
        assert!(page.contains("<title>Home</title>"));
        assert!(page.contains("<div>x</div>"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn custom_placeholders_apply_to_builtin() {
        let mut config = Config::compiled_default().template;
        config.title_placeholder = "%title%".into();
        config.content_placeholder = "%body%".into();
        let page = Template::from_config(&config).unwrap().fill("T", "B");
        assert!(page.contains("<title>T</title>"));
        assert!(page.contains("B"));
        assert!(!page.contains("%body%"));
    }

    #[test]
    fn template_without_content_placeholder_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<html>{{ Title }}</html>").unwrap();
        let config = Config::compiled_default().template;
        assert!(matches!(
            Template::load(&path, &config),
            Err(SiteError::Template { .. })
        ));
    }
}
