//! HTML page template with literal placeholder substitution.

use anyhow::{Context, Result};
use std::path::Path;

/// Placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{PAGE_TITLE}}";

/// Placeholder replaced by the converted markdown fragment.
pub const CONTENT_PLACEHOLDER: &str = "{{CONTENT}}";

/// Page template loaded from disk.
///
/// Substitution is plain string replacement with no escaping. The title is
/// substituted before the content, and neither pass looks at text inserted
/// by the other, so a fragment containing `{{PAGE_TITLE}}` reaches the final
/// page verbatim. A template missing either placeholder renders without
/// that value rather than failing.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Loads template from file.
    ///
    /// # Errors
    ///
    /// Returns error if the template file cannot be read
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        Ok(Self { source })
    }

    /// Creates template from an in-memory string.
    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Produces the final page.
    ///
    /// # Arguments
    ///
    /// * `title`: Text for every `{{PAGE_TITLE}}` occurrence
    /// * `content`: HTML fragment for every `{{CONTENT}}` occurrence
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

/// Loads template at `template_path` and renders it in one step.
///
/// # Errors
///
/// Returns error if the template file cannot be read
pub fn render_page(template_path: impl AsRef<Path>, title: &str, content: &str) -> Result<String> {
    Ok(Template::load(template_path)?.render(title, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PAGE: &str =
        "<html><head><title>{{PAGE_TITLE}}</title></head><body>{{CONTENT}}</body></html>";

    #[test]
    fn test_render_replaces_both_placeholders() {
        // Arrange
        let template = Template::from_string(PAGE);

        // Act
        let page = template.render("Jane Doe", "<p>Skills</p>");

        // Assert
        assert_eq!(
            page,
            "<html><head><title>Jane Doe</title></head><body><p>Skills</p></body></html>"
        );
        assert!(!page.contains(TITLE_PLACEHOLDER));
        assert!(!page.contains(CONTENT_PLACEHOLDER));
    }

    #[test]
    fn test_render_without_placeholders_is_noop() {
        // Arrange
        let template = Template::from_string("<p>static</p>");

        // Act
        let page = template.render("Jane Doe", "<p>Skills</p>");

        // Assert
        assert_eq!(page, "<p>static</p>");
    }

    #[test]
    fn test_title_placeholder_inside_content_passes_through() {
        // Arrange
        let template = Template::from_string(PAGE);

        // Act
        let page = template.render("Jane Doe", "<code>{{PAGE_TITLE}}</code>");

        // Assert
        assert!(page.contains("<code>{{PAGE_TITLE}}</code>"));
        assert_eq!(page.matches("Jane Doe").count(), 1);
    }

    #[test]
    fn test_content_placeholder_inside_title_is_substituted() {
        // Arrange
        let template = Template::from_string(PAGE);

        // Act
        let page = template.render("{{CONTENT}}", "<p>body</p>");

        // Assert
        assert_eq!(page.matches("<p>body</p>").count(), 2);
    }

    #[test]
    fn test_values_are_not_escaped() {
        // Arrange
        let template = Template::from_string(PAGE);

        // Act
        let page = template.render("R&D <Lead>", "");

        // Assert
        assert!(page.contains("<title>R&D <Lead></title>"));
    }

    #[test]
    fn test_render_page_from_file() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let path = dir.path().join("template.html");
        std::fs::write(&path, PAGE)?;

        // Act
        let page = render_page(&path, "Jane Doe", "<p>x</p>")?;

        // Assert
        assert!(page.contains("<title>Jane Doe</title>"));
        assert!(page.contains("<body><p>x</p></body>"));
        Ok(())
    }

    #[test]
    fn test_load_missing_template_fails() {
        // Act
        let result = Template::load("/nonexistent/template.html");

        // Assert
        let err = result.expect_err("Missing template should fail");
        assert!(format!("{:#}", err).contains("Failed to read template"));
    }
}
