//! Console locations.
//!
//! The console navigates between the same paths as the registry manager's
//! web pages. A location string is parsed into a [`Route`]; only a
//! repository detail route activates the description editor.

use std::fmt;

use crate::constants::{LOGIN_PATH, REPOSITORIES_PATH, ROOT_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: stats and repository overview
    Dashboard,
    /// `/repositories`
    Repositories,
    /// `/repositories/{name}`; names may contain slashes
    Repository(String),
    /// `/login`
    Login,
    /// Anything else, kept verbatim
    Unknown(String),
}

impl Route {
    pub fn parse(location: &str) -> Self {
        let path = location.split(['?', '#']).next().unwrap_or_default();

        if path.is_empty() || path == ROOT_PATH {
            return Route::Dashboard;
        }
        if path == LOGIN_PATH {
            return Route::Login;
        }
        if path.trim_end_matches('/') == REPOSITORIES_PATH {
            return Route::Repositories;
        }
        if let Some(name) = repository_name(path) {
            return Route::Repository(name);
        }
        Route::Unknown(path.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => ROOT_PATH.to_string(),
            Route::Repositories => REPOSITORIES_PATH.to_string(),
            Route::Repository(name) => format!("{REPOSITORIES_PATH}/{name}"),
            Route::Login => LOGIN_PATH.to_string(),
            Route::Unknown(path) => path.clone(),
        }
    }

    /// Whether this screen has a search field
    pub fn has_search(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Repositories)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Repository name of a `/repositories/{name}` path
pub fn repository_name(path: &str) -> Option<String> {
    let rest = path.strip_prefix(REPOSITORIES_PATH)?.strip_prefix('/')?;
    let name = rest.trim_end_matches('/');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
