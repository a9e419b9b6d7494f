//! Server-side HTML views
//!
//! Templates are compiled into the binary and looked up by view name
//! (`vets/vetList`). Handlers return an [`HtmlView`] holding the view name
//! and its model; rendering happens when the response is produced.

use crate::Result;
use axum::response::{Html, IntoResponse, Response};
use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::sync::LazyLock;

pub const VET_LIST_VIEW: &str = "vets/vetList";

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    // View names carry no extension, so escaping can't be inferred from them.
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.set_loader(embedded_template);
    env
});

fn embedded_template(name: &str) -> std::result::Result<Option<String>, minijinja::Error> {
    let source = match name {
        "layout" => Some(include_str!("../../templates/layout.html")),
        VET_LIST_VIEW => Some(include_str!("../../templates/vets/vetList.html")),
        _ => None,
    };
    Ok(source.map(str::to_owned))
}

/// Renders the named view with `model` as its context
pub fn render<M: Serialize>(name: &str, model: &M) -> Result<String> {
    let template = TEMPLATES.get_template(name)?;
    Ok(template.render(model)?)
}

/// A named view plus the model it renders
#[derive(Debug, Clone)]
pub struct HtmlView<M> {
    pub name: &'static str,
    pub model: M,
}

impl<M> HtmlView<M> {
    pub fn new(name: &'static str, model: M) -> Self {
        Self { name, model }
    }
}

impl<M: Serialize> IntoResponse for HtmlView<M> {
    fn into_response(self) -> Response {
        match render(self.name, &self.model) {
            Ok(body) => Html(body).into_response(),
            Err(e) => e.into_response(),
        }
    }
}
