//! Read-only asset store.
//!
//! Everything the server hands out comes from one directory:
//!
//! ```text
//! assets/
//!   courses.toml     course catalogue
//!   templates/       Tera templates (see `REQUIRED_TEMPLATES`)
//!   static/          files served verbatim under /static
//! ```
//!
//! The store is built once before the listener is bound and is then shared by
//! reference across all handlers. A missing piece is a startup error.

use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use crate::catalog::{Catalog, CatalogError};
use crate::config::{CATALOG_FILE, STATIC_DIR, TEMPLATE_GLOB};
use crate::templates::{init_templates, missing_templates};

pub struct AssetStore {
    tera: Tera,
    catalog: Catalog,
    static_dir: PathBuf,
}

impl AssetStore {
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, AssetError> {
        let root = dir.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(AssetError::Missing(root));
        }

        let static_dir = root.join(STATIC_DIR);
        if !static_dir.is_dir() {
            return Err(AssetError::Missing(static_dir));
        }

        let glob_path = root.join(TEMPLATE_GLOB);
        let glob = glob_path
            .to_str()
            .ok_or_else(|| AssetError::NonUtf8Path(glob_path.clone()))?;
        let tera = init_templates(glob)?;

        if let Some(name) = missing_templates(&tera).first() {
            return Err(AssetError::MissingTemplate(name.to_string()));
        }

        let catalog = Catalog::load(root.join(CATALOG_FILE))?;

        tracing::debug!(
            root = %root.display(),
            templates = tera.get_template_names().count(),
            courses = catalog.len(),
            "Asset store loaded"
        );

        Ok(Self {
            tera,
            catalog,
            static_dir,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn render(&self, template: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template, context)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset path not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Asset path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Required template not found: {0}")]
    MissingTemplate(String),

    #[error("Failed to load templates: {0}")]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::REQUIRED_TEMPLATES;
    use std::fs;

    const CATALOG: &str = r#"
        [[course]]
        slug = "ci-basics"
        title = "CI Basics"
        summary = "Pipelines."
        level = "beginner"
        duration_minutes = 60
    "#;

    fn scaffold(dir: &Path, templates: &[&str]) {
        fs::create_dir_all(dir.join("static")).unwrap();
        fs::create_dir_all(dir.join("templates")).unwrap();
        for name in templates {
            fs::write(dir.join("templates").join(name), format!("page {name}")).unwrap();
        }
        fs::write(dir.join(CATALOG_FILE), CATALOG).unwrap();
    }

    #[test]
    fn test_load_complete_store() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path(), REQUIRED_TEMPLATES);

        let store = AssetStore::load(dir.path()).unwrap();
        assert_eq!(store.catalog().len(), 1);
        assert_eq!(store.static_dir(), dir.path().join("static"));
        assert_eq!(
            store.render("about.html", &Context::new()).unwrap(),
            "page about.html"
        );
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = AssetStore::load(dir.path().join("nope")).err().unwrap();
        assert!(matches!(err, AssetError::Missing(_)));
    }

    #[test]
    fn test_missing_static_dir() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path(), REQUIRED_TEMPLATES);
        fs::remove_dir(dir.path().join("static")).unwrap();

        let err = AssetStore::load(dir.path()).err().unwrap();
        assert!(matches!(err, AssetError::Missing(p) if p.ends_with("static")));
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let partial: Vec<&str> = REQUIRED_TEMPLATES
            .iter()
            .copied()
            .filter(|name| *name != "courses.html")
            .collect();
        scaffold(dir.path(), &partial);

        let err = AssetStore::load(dir.path()).err().unwrap();
        assert!(matches!(err, AssetError::MissingTemplate(name) if name == "courses.html"));
    }

    #[test]
    fn test_missing_catalogue() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path(), REQUIRED_TEMPLATES);
        fs::remove_file(dir.path().join(CATALOG_FILE)).unwrap();

        let err = AssetStore::load(dir.path()).err().unwrap();
        assert!(matches!(err, AssetError::Catalog(CatalogError::Io(_))));
    }
}
