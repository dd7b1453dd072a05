//! Route Table
//!
//! Client-side routes and the session guard.

use crate::api::ResourceKind;
use crate::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Login,
    Register,
    Profile,
    Dashboard,
    /// `/applications`, `/companies`, ...
    Resources(ResourceKind),
    /// `/applications/:id`, ...
    ResourceDetail(ResourceKind, u64),
    Table,
    /// Anything else, keeping the requested path
    NotFound(String),
}

impl Route {
    /// Match a location pathname. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Login,
            ["register"] => Route::Register,
            ["profile"] => Route::Profile,
            ["dashboard"] => Route::Dashboard,
            ["table"] => Route::Table,
            [kind] => match ResourceKind::from_segment(kind) {
                Some(kind) => Route::Resources(kind),
                None => Route::NotFound(path.to_string()),
            },
            [kind, id] => match (ResourceKind::from_segment(kind), id.parse::<u64>()) {
                (Some(kind), Ok(id)) => Route::ResourceDetail(kind, id),
                _ => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Resources(kind) => format!("/{}", kind.segment()),
            Route::ResourceDetail(kind, id) => format!("/{}/{}", kind.segment(), id),
            Route::Table => "/table".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

/// Where a navigation to `requested` should actually land.
///
/// Signed-out users only reach the public routes; signed-in users skip the
/// login page.
pub fn resolve(state: SessionState, requested: Route) -> Route {
    match state {
        SessionState::Unauthenticated if !requested.is_public() => Route::Login,
        SessionState::Authenticated if requested == Route::Login => Route::Dashboard,
        _ => requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_routes() -> Vec<Route> {
        let mut routes = vec![
            Route::Login,
            Route::Register,
            Route::Profile,
            Route::Dashboard,
            Route::Table,
        ];
        for kind in ResourceKind::ALL {
            routes.push(Route::Resources(kind));
            routes.push(Route::ResourceDetail(kind, 17));
        }
        routes
    }

    #[test]
    fn test_parse_matches_path() {
        for route in all_routes() {
            assert_eq!(Route::parse(&route.path()), route, "path {}", route.path());
        }
    }

    #[test]
    fn test_parse_tolerates_trailing_slash() {
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(
            Route::parse("/companies/4/"),
            Route::ResourceDetail(ResourceKind::Companies, 4)
        );
        assert_eq!(Route::parse(""), Route::Login);
    }

    #[test]
    fn test_unmatched_paths_are_not_found() {
        for path in ["/nonexistent", "/applications/abc", "/questions/1/edit", "/users/3"] {
            assert_eq!(Route::parse(path), Route::NotFound(path.to_string()));
        }
        assert_eq!(Route::NotFound("/nonexistent".into()).path(), "/nonexistent");
    }

    #[test]
    fn test_guard_signed_out() {
        let state = SessionState::Unauthenticated;
        assert_eq!(resolve(state, Route::Login), Route::Login);
        assert_eq!(resolve(state, Route::Register), Route::Register);
        for route in all_routes().into_iter().filter(|r| !r.is_public()) {
            assert_eq!(resolve(state, route), Route::Login);
        }
        assert_eq!(resolve(state, Route::NotFound("/x".into())), Route::Login);
    }

    #[test]
    fn test_guard_signed_in() {
        let state = SessionState::Authenticated;
        assert_eq!(resolve(state, Route::Login), Route::Dashboard);
        for route in all_routes().into_iter().filter(|r| *r != Route::Login) {
            assert_eq!(resolve(state, route.clone()), route);
        }
        let missing = Route::NotFound("/nonexistent".into());
        assert_eq!(resolve(state, missing.clone()), missing);
    }
}
