use axum::response::Html;
use utoipa::{
    OpenApi,
    openapi::{OpenApi as OpenApiSpec, PathItem},
};

use crate::routes::doc::{ApiDoc, DOCS_PATH};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML listing of every endpoint", content_type = "text/html", body = String)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Html<String> {
    Html(render_sitemap(&ApiDoc::openapi()))
}

/// (method, path) pairs registered in the document, ordered by path.
pub fn endpoints(doc: &OpenApiSpec) -> Vec<(&'static str, String)> {
    let mut endpoints = Vec::new();
    for (path, item) in &doc.paths.paths {
        for method in methods(item) {
            endpoints.push((method, path.clone()));
        }
    }
    endpoints
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}

pub fn render_sitemap(doc: &OpenApiSpec) -> String {
    let mut items = String::new();
    for (method, path) in endpoints(doc) {
        // Only parameterless GETs are directly browsable.
        if method == "GET" && !path.contains('{') {
            items.push_str(&format!(
                "<li><a href=\"{path}\">{method} {path}</a></li>\n"
            ));
        } else {
            items.push_str(&format!("<li>{method} {path}</li>\n"));
        }
    }
    items.push_str(&format!(
        "<li><a href=\"{DOCS_PATH}\">GET {DOCS_PATH}</a> (API reference)</li>\n"
    ));

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n<p>Registered endpoints:</p>\n<ul>\n{items}</ul>\n</body>\n</html>\n",
        title = "Star Wars Blog API",
    )
}
