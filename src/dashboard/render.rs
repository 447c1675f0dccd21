//! HTML rendering of the dashboard view.

use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::dashboard::view::DashboardView;

/// Errors raised while producing the dashboard.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("failed to encode chart data: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write dashboard {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    title: &'a str,
    refresh_secs: u64,
    chart_script_url: &'a str,
    view: &'a DashboardView,
    chart_json: String,
}

/// Renders dashboard views and writes them to the configured path.
#[derive(Debug, Clone)]
pub struct DashboardRenderer {
    path: PathBuf,
    title: String,
    refresh_secs: u64,
    chart_script_url: String,
}

impl DashboardRenderer {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
            title: config.title.clone(),
            refresh_secs: config.refresh_secs,
            chart_script_url: config.chart_script_url.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render `view` to a complete HTML document.
    pub fn render(&self, view: &DashboardView) -> Result<String, RenderError> {
        let template = DashboardTemplate {
            title: &self.title,
            refresh_secs: self.refresh_secs,
            chart_script_url: &self.chart_script_url,
            view,
            chart_json: script_safe_json(&view.chart)?,
        };
        Ok(template.render()?)
    }

    /// Render `view` and overwrite the dashboard file.
    pub fn write(&self, view: &DashboardView) -> Result<&Path, RenderError> {
        let html = self.render(view)?;
        let io_err = |source| RenderError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, html).map_err(io_err)?;

        tracing::info!(path = %self.path.display(), "Dashboard updated");
        Ok(&self.path)
    }
}

/// JSON that can sit inside a `<script>` element.
fn script_safe_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
