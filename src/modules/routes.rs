// Pure route table - no storage or I/O.
// Maps a requested path to exactly one named page of the storefront.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::RouteError;

/// Origin used to turn relative navigation targets into parseable URLs.
const LOCAL_ORIGIN: &str = "http://localhost";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    ProductList,
    ProductDetail,
    BookNow,
    Project,
    Checkout,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::ProductList,
        Page::ProductDetail,
        Page::BookNow,
        Page::Project,
        Page::Checkout,
    ];

    /// Route name used for named navigation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ProductList => "product-list",
            Self::ProductDetail => "product-detail",
            Self::BookNow => "BookNow",
            Self::Project => "project",
            Self::Checkout => "Checkout",
        }
    }

    /// View the page renders.
    pub fn view(&self) -> &'static str {
        match self {
            Self::ProductList => "ProductList",
            Self::ProductDetail => "ProductDetail",
            Self::BookNow => "BookNow",
            Self::Project => "AddToProject",
            Self::Checkout => "Checkout",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Self::ProductList => "/",
            Self::ProductDetail => "/products/{id}",
            Self::BookNow => "/book-now/{id}",
            Self::Project => "/project",
            Self::Checkout => "/checkout",
        }
    }

    pub fn from_name(name: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
}

#[derive(Debug, Clone)]
struct Route {
    page: Page,
    segments: Vec<Segment>,
}

impl Route {
    fn compile(page: Page) -> Self {
        let segments = page
            .pattern()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(param) => Segment::Param(param),
                None => Segment::Static(s),
            })
            .collect();
        Route { page, segments }
    }

    fn capture(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(s) => {
                    if !s.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    let value = urlencoding::decode(part)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| part.to_string());
                    params.insert(name.to_string(), value);
                }
            }
        }
        Some(params)
    }
}

/// Result of resolving a path against the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub page: Page,
    /// Normalized path (no query, no fragment).
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: Page::ALL.into_iter().map(Route::compile).collect(),
        }
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        self.routes.iter().map(|r| r.page)
    }

    /// Resolve a navigation target to its page.
    ///
    /// Accepts a bare path (`/products/42?tab=specs`) or an absolute URL.
    /// Query string and fragment are ignored. Static segments compare
    /// case-insensitively and one trailing slash is tolerated, the same
    /// way the browser-side router treats them. Captured parameters are
    /// percent-decoded.
    pub fn resolve(&self, target: &str) -> Result<RouteMatch, RouteError> {
        let path = normalize_path(target).ok_or_else(|| RouteError::NotFound(target.to_string()))?;

        let mut parts: Vec<&str> = path.split('/').skip(1).collect();
        if parts.last() == Some(&"") {
            parts.pop();
        }

        self.routes
            .iter()
            .find_map(|route| {
                route.capture(&parts).map(|params| RouteMatch {
                    page: route.page,
                    path: path.clone(),
                    params,
                })
            })
            .ok_or_else(|| RouteError::NotFound(target.to_string()))
    }

    /// Build the path for a named page, percent-encoding parameters.
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let route = self
            .routes
            .iter()
            .find(|r| r.page.name() == name)
            .ok_or_else(|| RouteError::UnknownPage(name.to_string()))?;

        let mut path = String::new();
        for segment in &route.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(param) => {
                    let value = params
                        .iter()
                        .find(|(k, _)| k == param)
                        .map(|(_, v)| *v)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            page: name.to_string(),
                            param: param.to_string(),
                        })?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

/// Reduce a navigation target to its URL path.
fn normalize_path(target: &str) -> Option<String> {
    let trimmed = target.trim();
    let url = if trimmed.starts_with('/') {
        Url::parse(&format!("{}{}", LOCAL_ORIGIN, trimmed)).ok()?
    } else if let Ok(u) = Url::parse(trimmed) {
        // Only web URLs carry a router path.
        if u.scheme() != "http" && u.scheme() != "https" {
            return None;
        }
        u
    } else {
        Url::parse(&format!("{}/{}", LOCAL_ORIGIN, trimmed)).ok()?
    };
    Some(url.path().to_string())
}
