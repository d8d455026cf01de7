//! # Views
//!
//! Server-rendered pages. Handlers return a [`ModelAndView`] naming a view
//! and carrying its render context; [`ViewRenderer`] turns it into HTML.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

/// Name of the customer listing view.
pub const INDEX_VIEW: &str = "index";

const TEMPLATE_SUFFIX: &str = ".html";

/// Built-in templates, keyed by view name.
const BUILTIN_TEMPLATES: &[(&str, &str)] =
    &[(INDEX_VIEW, include_str!("../../templates/index.html"))];

/// Errors raised while loading or rendering views.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("unknown view '{0}'")]
    UnknownView(String),
    #[error("failed to render view '{view}': {source}")]
    Render {
        view: String,
        #[source]
        source: tera::Error,
    },
    #[error("failed to load templates: {0}")]
    Load(#[from] tera::Error),
}

/// A view name paired with the objects it renders.
#[derive(Debug, Clone)]
pub struct ModelAndView {
    view_name: String,
    model: Context,
}

impl ModelAndView {
    pub fn new(view_name: impl Into<String>) -> Self {
        Self {
            view_name: view_name.into(),
            model: Context::new(),
        }
    }

    /// Adds `value` to the render context under `key`, replacing any previous entry.
    pub fn add_object<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> &mut Self {
        self.model.insert(key, value);
        self
    }

    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    pub fn model(&self) -> &Context {
        &self.model
    }
}

/// Renders [`ModelAndView`]s against the registered templates.
#[derive(Debug)]
pub struct ViewRenderer {
    tera: Tera,
}

impl ViewRenderer {
    /// Creates a renderer with the built-in templates registered.
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(
            BUILTIN_TEMPLATES
                .iter()
                .map(|(name, body)| (format!("{name}{TEMPLATE_SUFFIX}"), *body)),
        )?;
        // .html templates are autoescaped by default; keep that explicit
        tera.autoescape_on(vec![TEMPLATE_SUFFIX]);
        Ok(Self { tera })
    }

    pub fn render(&self, view: &ModelAndView) -> Result<String, ViewError> {
        let template = format!("{}{}", view.view_name, TEMPLATE_SUFFIX);
        if !self.tera.get_template_names().any(|name| name == template) {
            return Err(ViewError::UnknownView(view.view_name.clone()));
        }

        self.tera
            .render(&template, &view.model)
            .map_err(|source| ViewError::Render {
                view: view.view_name.clone(),
                source,
            })
    }
}
