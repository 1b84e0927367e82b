use catalog::Catalog;
use shared::{
    domain::{FilterCriteria, Movie},
    protocol::SearchParams,
};
use tracing::debug;

use crate::{filter, presenter::render_results};

/// The search controls of the host page. Read at the start of each command.
pub trait InputControls {
    fn criteria(&self) -> FilterCriteria;
    fn clear(&mut self);
}

/// The results container. Each render replaces its whole content.
pub trait DisplaySurface {
    fn replace_content(&mut self, markup: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Rendered { count: usize },
    /// The catalog was empty so the surface was left untouched.
    Skipped,
}

/// Form controls backed by the raw submitted values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormControls {
    pub values: SearchParams,
}

impl FormControls {
    pub fn new(values: SearchParams) -> Self {
        Self { values }
    }
}

impl InputControls for FormControls {
    fn criteria(&self) -> FilterCriteria {
        self.values.to_criteria()
    }

    fn clear(&mut self) {
        self.values = SearchParams::default();
    }
}

/// Results container held in memory until it is written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPane {
    content: Option<String>,
}

impl ResultsPane {
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_none()
    }

    pub fn into_content(self) -> String {
        self.content.unwrap_or_default()
    }
}

impl DisplaySurface for ResultsPane {
    fn replace_content(&mut self, markup: String) {
        self.content = Some(markup);
    }
}

/// Wires the user commands to the filter engine and the renderer.
#[derive(Debug, Clone)]
pub struct Presenter {
    catalog: Catalog,
}

impl Presenter {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn render(&self, surface: &mut dyn DisplaySurface, results: &[&Movie]) -> CommandOutcome {
        surface.replace_content(render_results(results.iter().copied()));
        CommandOutcome::Rendered {
            count: results.len(),
        }
    }

    /// Renders the whole catalog, unfiltered.
    pub fn show_all(&self, surface: &mut dyn DisplaySurface) -> CommandOutcome {
        let all: Vec<&Movie> = self.catalog.movies().iter().collect();
        self.render(surface, &all)
    }

    pub fn search(
        &self,
        controls: &dyn InputControls,
        surface: &mut dyn DisplaySurface,
    ) -> CommandOutcome {
        if self.catalog.is_empty() {
            debug!("search skipped, catalog is empty");
            return CommandOutcome::Skipped;
        }
        let criteria = controls.criteria();
        let results = filter::filter(self.catalog.movies(), &criteria);
        debug!(?criteria, matched = results.len(), "search");
        self.render(surface, &results)
    }

    pub fn surprise(&self, surface: &mut dyn DisplaySurface) -> CommandOutcome {
        if self.catalog.is_empty() {
            debug!("surprise skipped, catalog is empty");
            return CommandOutcome::Skipped;
        }
        let picked = filter::pick_random(self.catalog.movies());
        self.render(surface, &picked)
    }

    pub fn reset(
        &self,
        controls: &mut dyn InputControls,
        surface: &mut dyn DisplaySurface,
    ) -> CommandOutcome {
        controls.clear();
        self.show_all(surface)
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
