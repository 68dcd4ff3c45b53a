//! Sources of the offer templates position templates are built from.

use std::path::{Path, PathBuf};

use entity::prelude::AvailableTemplate;

use crate::error::TemplateError;

/// File extension of offer templates in a template directory.
const TEMPLATE_EXTENSION: &str = "html";

/// Supplies the offer templates known to the system.
///
/// Called at most once per record store; the generator caches the result.
pub trait TemplateSource {
    fn available(&mut self) -> Result<Vec<AvailableTemplate>, TemplateError>;

    /// Directory the templates live in, when they live on disk.
    fn dir(&self) -> Option<&Path> {
        None
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for Box<T> {
    fn available(&mut self) -> Result<Vec<AvailableTemplate>, TemplateError> {
        (**self).available()
    }

    fn dir(&self) -> Option<&Path> {
        (**self).dir()
    }
}

/// Fixed template list.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplates {
    templates: Vec<AvailableTemplate>,
}

impl StaticTemplates {
    pub fn new(templates: Vec<AvailableTemplate>) -> Self {
        Self { templates }
    }

    /// The templates shipped with the application.
    pub fn builtin() -> Self {
        Self::new(
            ["standard", "oto", "invigilation"]
                .into_iter()
                .map(|name| AvailableTemplate {
                    position_type: name.to_string(),
                    offer_template: format!("{}.{}", name, TEMPLATE_EXTENSION),
                })
                .collect(),
        )
    }
}

impl TemplateSource for StaticTemplates {
    fn available(&mut self) -> Result<Vec<AvailableTemplate>, TemplateError> {
        Ok(self.templates.clone())
    }
}

/// Lists the offer templates stored as files in a directory.
///
/// Every `.html` file is one template: `offer_template` is the file name and
/// `position_type` the file stem. Results are sorted by file name.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateSource for DirectoryTemplates {
    fn dir(&self) -> Option<&Path> {
        Some(&self.dir)
    }

    fn available(&mut self) -> Result<Vec<AvailableTemplate>, TemplateError> {
        let io_err = |source| TemplateError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut templates = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION)
            {
                continue;
            }

            let (Some(file_name), Some(stem)) = (
                path.file_name().and_then(|name| name.to_str()),
                path.file_stem().and_then(|stem| stem.to_str()),
            ) else {
                tracing::warn!("Skipping offer template with non UTF-8 name: {}", path.display());
                continue;
            };

            templates.push(AvailableTemplate {
                position_type: stem.to_string(),
                offer_template: file_name.to_string(),
            });
        }

        templates.sort_by(|a, b| a.offer_template.cmp(&b.offer_template));
        tracing::debug!(
            "Found {} offer templates in {}",
            templates.len(),
            self.dir.display()
        );

        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_templates_are_html_files() {
        let templates = StaticTemplates::builtin().available().unwrap();
        assert_eq!(templates.len(), 3);
        assert!(templates.iter().all(|t| t.offer_template.ends_with(".html")));
    }

    #[test]
    fn directory_lists_only_html_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("standard.html"), "<p>offer</p>").unwrap();
        std::fs::write(dir.path().join("invigilation.html"), "<p>offer</p>").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested.html")).unwrap();

        let templates = DirectoryTemplates::new(dir.path()).available().unwrap();

        assert_eq!(
            templates,
            vec![
                AvailableTemplate {
                    position_type: "invigilation".to_string(),
                    offer_template: "invigilation.html".to_string(),
                },
                AvailableTemplate {
                    position_type: "standard".to_string(),
                    offer_template: "standard.html".to_string(),
                },
            ]
        );
    }

    #[test]
    fn boxed_source_delegates() {
        let mut source: Box<dyn TemplateSource> = Box::new(StaticTemplates::builtin());
        assert_eq!(source.available().unwrap().len(), 3);
        assert_eq!(source.dir(), None);

        let source: Box<dyn TemplateSource> = Box::new(DirectoryTemplates::new("offers"));
        assert_eq!(source.dir(), Some(Path::new("offers")));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let result = DirectoryTemplates::new(&missing).available();

        assert!(matches!(result, Err(TemplateError::Io { path, .. }) if path == missing));
    }
}
