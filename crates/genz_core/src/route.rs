//! Path-to-route parsing for the view layer.
//!
//! # Responsibility
//! - Turn a navigation path into a typed `Route`.
//! - Keep path parameter extraction in one place.
//!
//! # Invariants
//! - One trailing slash is tolerated; `/` itself stays the root route.
//! - Parameters are a single non-empty path segment.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static USER_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/users/([^/]+)$").expect("valid user path regex"));
static POST_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/posts/([^/]+)$").expect("valid post path regex"));

/// Screen addressed by a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Posts,
    /// `/users`
    Users,
    /// `/users/:userId`
    User(String),
    /// `/notifications`
    Notifications,
    /// `/posts/:postId`
    Post(String),
}

/// Path parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Path does not start with `/`.
    RelativePath(String),
    /// Path matches no known route.
    UnknownPath(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativePath(path) => write!(f, "path must start with `/`, got `{path}`"),
            Self::UnknownPath(path) => write!(f, "no route for path `{path}`"),
        }
    }
}

impl Error for RouteError {}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        if !trimmed.starts_with('/') {
            return Err(RouteError::RelativePath(trimmed.to_string()));
        }
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && rest != "/" => rest,
            _ => trimmed,
        };

        match normalized {
            "/" => return Ok(Self::Posts),
            "/users" => return Ok(Self::Users),
            "/notifications" => return Ok(Self::Notifications),
            _ => {}
        }
        if let Some(caps) = USER_PATH_RE.captures(normalized) {
            return Ok(Self::User(caps[1].to_string()));
        }
        if let Some(caps) = POST_PATH_RE.captures(normalized) {
            return Ok(Self::Post(caps[1].to_string()));
        }
        Err(RouteError::UnknownPath(trimmed.to_string()))
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Posts => "/".to_string(),
            Self::Users => "/users".to_string(),
            Self::User(id) => format!("/users/{id}"),
            Self::Notifications => "/notifications".to_string(),
            Self::Post(id) => format!("/posts/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Route, RouteError};

    #[test]
    fn parses_every_known_route() {
        assert_eq!(Route::parse("/").unwrap(), Route::Posts);
        assert_eq!(Route::parse("/users").unwrap(), Route::Users);
        assert_eq!(Route::parse("/users/").unwrap(), Route::Users);
        assert_eq!(
            Route::parse("/users/u1").unwrap(),
            Route::User("u1".to_string())
        );
        assert_eq!(Route::parse("/notifications").unwrap(), Route::Notifications);
        assert_eq!(
            Route::parse("/posts/p_abc/").unwrap(),
            Route::Post("p_abc".to_string())
        );
    }

    #[test]
    fn rejects_unknown_and_relative_paths() {
        assert_eq!(
            Route::parse("/posts").unwrap_err(),
            RouteError::UnknownPath("/posts".to_string())
        );
        assert_eq!(
            Route::parse("/users/u1/extra").unwrap_err(),
            RouteError::UnknownPath("/users/u1/extra".to_string())
        );
        assert_eq!(
            Route::parse("//").unwrap_err(),
            RouteError::UnknownPath("//".to_string())
        );
        assert_eq!(
            Route::parse("users").unwrap_err(),
            RouteError::RelativePath("users".to_string())
        );
    }

    #[test]
    fn path_round_trips_through_parse() {
        let route = Route::User("u3".to_string());
        assert_eq!(Route::parse(&route.path()).unwrap(), route);
    }
}
