//! Browser pages. Both are static HTML that talk to the JSON API from the
//! client side.

use axum::response::Html;

const UI_PAGE: &str = include_str!("../../assets/ui.html");
const DASHBOARD_PAGE: &str = include_str!("../../assets/dashboard.html");

/// Prediction form posting to `/predict`, with a species chart fed by `/stats`.
pub async fn ui() -> Html<&'static str> {
    Html(UI_PAGE)
}

/// Live dashboard polling `/stats` every 3 seconds.
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_reference_their_endpoints() {
        assert!(UI_PAGE.contains("fetch('/predict'"));
        assert!(UI_PAGE.contains("fetch('/stats'"));
        assert!(DASHBOARD_PAGE.contains("fetch('/stats'"));
        assert!(UI_PAGE.contains("setInterval(refreshCharts, 3000)"));
        assert!(DASHBOARD_PAGE.contains("setInterval(refresh, 3000)"));
    }
}
