// Markdown rendering and export for generated PRDs

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{GeneratedPrd, PrdSection, ProductInput};

/// Renders a section list into one markdown document.
///
/// Header: document H1 (product name or `TBD`), generation date, and a status
/// line that reads `AI-Enhanced` only when every section carries enriched or
/// manually edited content. Section content is emitted verbatim, each block
/// closed with a horizontal divider, so the divider count is always
/// `sections.len() + 1`.
pub fn render_markdown(
    sections: &[PrdSection],
    input: &ProductInput,
    generated_on: DateTime<Utc>,
) -> String {
    let product_name = if input.product_name.trim().is_empty() {
        "TBD"
    } else {
        input.product_name.as_str()
    };
    let status = if sections.iter().all(|s| s.is_generated) {
        "AI-Enhanced"
    } else {
        "Template"
    };

    let header = format!(
        "# Product Requirements Document: {}\n\n**Generated on:** {}\n**Status:** {}\n\n---\n\n",
        product_name,
        generated_on.format("%Y-%m-%d"),
        status
    );

    let section_content = sections
        .iter()
        .map(|section| format!("# {}\n\n{}\n\n---\n", section.title, section.content))
        .collect::<Vec<_>>()
        .join("\n");

    header + &section_content
}

/// A rendered document ready for download or saving.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
    pub size_bytes: usize,
}

impl ExportArtifact {
    /// Writes the artifact into `dir` under its own file name.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Renders `prd` and wraps it as a `PRD-<name>-<date>.md` download.
///
/// Unnamed products export as `Untitled`; the date suffix is the document's
/// creation date, so re-exporting the same document yields the same file.
pub fn export_markdown(prd: &GeneratedPrd) -> ExportArtifact {
    let content = render_markdown(&prd.sections, &prd.input, prd.timestamp);
    let product_name = if prd.input.product_name.trim().is_empty() {
        "Untitled"
    } else {
        prd.input.product_name.as_str()
    };
    let file_name = format!("PRD-{}-{}.md", product_name, prd.timestamp.format("%Y-%m-%d"));
    let mime_type = mime_guess::from_path(&file_name)
        .first_or_text_plain()
        .to_string();

    log::info!(
        "Exported PRD {} as {} ({} bytes)",
        prd.id,
        file_name,
        content.len()
    );

    ExportArtifact {
        file_name,
        mime_type,
        size_bytes: content.len(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_sections() -> Vec<PrdSection> {
        vec![
            PrdSection {
                id: "executive-summary".to_string(),
                title: "Executive Summary & Product Overview".to_string(),
                content: "## Product Name\nTaskFlow Pro".to_string(),
                is_generated: false,
            },
            PrdSection {
                id: "user-stories".to_string(),
                title: "User Stories & Use Cases".to_string(),
                content: "## Epic User Stories\n[AI to generate 5-8 epic user stories from product concept]".to_string(),
                is_generated: false,
            },
        ]
    }

    fn named_input() -> ProductInput {
        ProductInput {
            product_name: "TaskFlow Pro".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_header_uses_product_name() {
        let output = render_markdown(&create_test_sections(), &named_input(), Utc::now());
        assert!(output.starts_with("# Product Requirements Document: TaskFlow Pro\n"));
        assert!(output.contains("**Generated on:** "));
    }

    #[test]
    fn test_render_header_falls_back_to_tbd() {
        let input = ProductInput {
            product_name: "  ".to_string(),
            ..Default::default()
        };
        let output = render_markdown(&create_test_sections(), &input, Utc::now());
        assert!(output.starts_with("# Product Requirements Document: TBD\n"));
    }

    #[test]
    fn test_render_contains_each_title_and_content_once() {
        let sections = create_test_sections();
        let output = render_markdown(&sections, &named_input(), Utc::now());
        for section in &sections {
            assert_eq!(output.matches(&format!("# {}", section.title)).count(), 1);
            assert_eq!(output.matches(section.content.as_str()).count(), 1);
        }
    }

    #[test]
    fn test_render_divider_count_is_sections_plus_one() {
        let sections = create_test_sections();
        let output = render_markdown(&sections, &named_input(), Utc::now());
        let dividers = output.lines().filter(|line| *line == "---").count();
        assert_eq!(dividers, sections.len() + 1);

        let output = render_markdown(&[], &named_input(), Utc::now());
        let dividers = output.lines().filter(|line| *line == "---").count();
        assert_eq!(dividers, 1);
    }

    #[test]
    fn test_render_status_line_tracks_generation() {
        let mut sections = create_test_sections();
        let output = render_markdown(&sections, &named_input(), Utc::now());
        assert!(output.contains("**Status:** Template"));

        sections[0].is_generated = true;
        let output = render_markdown(&sections, &named_input(), Utc::now());
        assert!(output.contains("**Status:** Template"));

        sections[1].is_generated = true;
        let output = render_markdown(&sections, &named_input(), Utc::now());
        assert!(output.contains("**Status:** AI-Enhanced"));
    }

    #[test]
    fn test_render_preserves_content_verbatim() {
        let sections = vec![PrdSection {
            id: "strategic-context".to_string(),
            title: "Strategic Context and Background".to_string(),
            content: "Line with <html> & *markdown* _chars_\n\n| a | b |".to_string(),
            is_generated: false,
        }];
        let output = render_markdown(&sections, &ProductInput::default(), Utc::now());
        assert!(output.contains("Line with <html> & *markdown* _chars_\n\n| a | b |"));
    }

    #[test]
    fn test_export_names_file_after_product_and_date() {
        let prd = GeneratedPrd::new(named_input(), create_test_sections());
        let artifact = export_markdown(&prd);
        let expected = format!("PRD-TaskFlow Pro-{}.md", prd.timestamp.format("%Y-%m-%d"));
        assert_eq!(artifact.file_name, expected);
        assert_eq!(artifact.mime_type, "text/markdown");
        assert_eq!(artifact.size_bytes, artifact.content.len());
    }

    #[test]
    fn test_export_untitled_fallback() {
        let prd = GeneratedPrd::new(ProductInput::default(), create_test_sections());
        let artifact = export_markdown(&prd);
        assert!(artifact.file_name.starts_with("PRD-Untitled-"));
        assert!(artifact.file_name.ends_with(".md"));
    }

    #[test]
    fn test_export_content_matches_render() {
        let prd = GeneratedPrd::new(named_input(), create_test_sections());
        let artifact = export_markdown(&prd);
        assert_eq!(
            artifact.content,
            render_markdown(&prd.sections, &prd.input, prd.timestamp)
        );
    }

    #[test]
    fn test_write_to_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let prd = GeneratedPrd::new(named_input(), create_test_sections());
        let artifact = export_markdown(&prd);

        let path = artifact.write_to(dir.path()).unwrap();
        assert!(path.ends_with(&artifact.file_name));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, artifact.content);
    }
}
