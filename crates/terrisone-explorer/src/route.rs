//! Top-level views of the dashboard.

use std::fmt;
use std::str::FromStr;

/// Which page the app is displaying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Login,
    Services,
    About,
    Contact,
    Map,
}

impl Route {
    /// Routes in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Services,
        Route::About,
        Route::Contact,
        Route::Map,
        Route::Login,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "",
            Route::Login => "login",
            Route::Services => "servicios",
            Route::About => "sobre-nosotros",
            Route::Contact => "contactanos",
            Route::Map => "map",
        }
    }

    /// Resolves a path. Unknown paths redirect to [`Route::Home`].
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_matches('/');
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Services => "Services",
            Route::About => "About Us",
            Route::Contact => "Contact",
            Route::Map => "Map",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::from_path(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from_path("map"), Route::Map);
        assert_eq!(Route::from_path("/sobre-nosotros/"), Route::About);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn test_unknown_path_redirects_home() {
        assert_eq!(Route::from_path("does/not/exist"), Route::Home);
        assert_eq!("nope".parse::<Route>().unwrap(), Route::Home);
    }

    #[test]
    fn test_every_route_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
