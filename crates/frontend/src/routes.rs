//! Application routes

use crate::auth::RequireAuth;
use crate::pages::{
    CustomerPage, DashboardPage, EmployeesPage, LoginPage, OrdersPage, ServicesPage,
};
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/employees")]
    Employees,
    #[at("/orders")]
    Orders,
    #[at("/services")]
    Services,
    #[at("/customers/:username")]
    Customer { username: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query parameters understood by the login view
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginQuery {
    /// Originally requested path, for post-login redirect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Error indicator, e.g. `token_expired`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => guarded(html! { <DashboardPage /> }),
        Route::Employees => guarded(html! { <EmployeesPage /> }),
        Route::Orders => guarded(html! { <OrdersPage /> }),
        Route::Services => guarded(html! { <ServicesPage /> }),
        Route::Customer { username } => guarded(html! { <CustomerPage {username} /> }),
        Route::NotFound => html! { <h1 class="text-xl font-bold">{"Page not found"}</h1> },
    }
}

fn guarded(content: Html) -> Html {
    html! { <RequireAuth>{content}</RequireAuth> }
}

/// Resolve the post-login redirect from the preserved `next` value.
///
/// `next` carries the originally requested path and query string; an
/// absent or unrecognized path falls back to the dashboard.
pub fn login_redirect_target(next: Option<&str>) -> (Route, Vec<(String, String)>) {
    let Some(next) = next else {
        return (Route::Dashboard, Vec::new());
    };
    let (path, query) = next.split_once('?').unwrap_or((next, ""));
    let route = match Route::recognize(path) {
        Some(Route::NotFound) | None => return (Route::Dashboard, Vec::new()),
        Some(route) => route,
    };
    let query = serde_urlencoded::from_str(query).unwrap_or_default();
    (route, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_next_redirects_to_dashboard() {
        let (route, query) = login_redirect_target(None);
        assert_eq!(route, Route::Dashboard);
        assert!(query.is_empty());
    }

    #[test]
    fn next_preserves_path_and_query() {
        let (route, query) = login_redirect_target(Some("/customers/jdoe?tab=orders"));
        assert_eq!(
            route,
            Route::Customer {
                username: "jdoe".to_string()
            }
        );
        assert_eq!(query, vec![("tab".to_string(), "orders".to_string())]);
    }

    #[test]
    fn next_without_query_redirects_to_plain_route() {
        let (route, query) = login_redirect_target(Some("/orders"));
        assert_eq!(route, Route::Orders);
        assert!(query.is_empty());
    }

    #[test]
    fn unrecognized_next_redirects_to_dashboard() {
        let (route, query) = login_redirect_target(Some("/not-a-view?x=1"));
        assert_eq!(route, Route::Dashboard);
        assert!(query.is_empty());
    }
}
