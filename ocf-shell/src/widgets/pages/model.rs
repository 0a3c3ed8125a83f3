use serde::Deserialize;

use crate::widgets::router::RouteKey;
use crate::widgets::search::SearchRequest;
use crate::widgets::search::model::SEARCH_PATH;

/// A link rendered in the footer under every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FooterLink {
    pub(crate) label_key: &'static str,
    pub(crate) route: &'static str,
}

/// Legal pages linked from the footer, in display order.
pub(crate) const LEGAL_LINKS: [FooterLink; 3] = [
    FooterLink {
        label_key: "privacyPolicy",
        route: "/privacy",
    },
    FooterLink {
        label_key: "termsOfService",
        route: "/terms",
    },
    FooterLink {
        label_key: "cookiePolicy",
        route: "/cookies",
    },
];

/// Static metadata of one site page. Also a search record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct PageRecord {
    pub(crate) route: String,
    pub(crate) title: String,
    pub(crate) summary: String,
    pub(crate) category: String,
}

impl PageRecord {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
    }
}

/// Every page the shell can show, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct PageCatalog {
    pages: Vec<PageRecord>,
}

impl PageCatalog {
    pub(crate) fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub(crate) fn find(&self, path: &str) -> Option<&PageRecord> {
        self.pages.iter().find(|page| page.route == path)
    }

    /// Case-insensitive substring search over titles and summaries.
    pub(crate) fn search(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();
        let matches: Vec<PageRecord> = self
            .pages
            .iter()
            .filter(|page| page.matches(&needle))
            .cloned()
            .collect();

        let mut categories: Vec<(String, usize)> = Vec::new();
        for page in &matches {
            match categories.iter_mut().find(|(name, _)| *name == page.category)
            {
                Some((_, count)) => *count += 1,
                None => categories.push((page.category.clone(), 1)),
            }
        }

        SearchResults {
            query: query.to_string(),
            matches,
            categories,
        }
    }

    /// Resolve what the content area shows for `route`.
    pub(crate) fn resolve(&self, route: &RouteKey) -> PageView {
        if route.path() == SEARCH_PATH {
            let results = match SearchRequest::from_route(route.as_str()) {
                Some(request) => self.search(request.query()),
                None => SearchResults::default(),
            };
            return PageView::SearchResults(results);
        }

        match self.find(route.path()) {
            Some(page) => PageView::Page(page.clone()),
            None => PageView::NotFound {
                route: route.as_str().to_string(),
            },
        }
    }
}

/// Outcome of a search over the page catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SearchResults {
    pub(crate) query: String,
    pub(crate) matches: Vec<PageRecord>,
    /// Match count per category, in first-seen order.
    pub(crate) categories: Vec<(String, usize)>,
}

impl SearchResults {
    pub(crate) fn headline(&self) -> String {
        if self.matches.is_empty() {
            format!("No results found for \"{}\"", self.query)
        } else {
            format!("{} results for \"{}\"", self.matches.len(), self.query)
        }
    }
}

/// Content shown under the navigation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageView {
    Page(PageRecord),
    SearchResults(SearchResults),
    NotFound { route: String },
}

/// Read-only snapshot consumed by the page content view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PagesViewModel<'a> {
    pub(crate) page: &'a PageView,
    pub(crate) results_query: &'a str,
}

#[cfg(test)]
mod tests {
    use super::{PageCatalog, PageView};
    use crate::widgets::router::RouteKey;

    fn catalog() -> PageCatalog {
        serde_json::from_str(
            r#"{
                "pages": [
                    { "route": "/tokenomics", "title": "Tokenomics",
                      "summary": "Explore the token economics of the OCF ecosystem",
                      "category": "Token" },
                    { "route": "/whitepaper", "title": "Whitepaper",
                      "summary": "Read the OCF whitepaper and technical documentation",
                      "category": "Resources" },
                    { "route": "/manifesto", "title": "Manifesto",
                      "summary": "Discover the vision and mission of the Open Crypto Foundation",
                      "category": "About" },
                    { "route": "/resources/defi-fundamentals",
                      "title": "DeFi Fundamentals",
                      "summary": "Learn about the fundamentals of decentralized finance",
                      "category": "Resources" },
                    { "route": "/resources/traders", "title": "For Traders",
                      "summary": "Resources and tools for cryptocurrency traders",
                      "category": "Resources" }
                ]
            }"#,
        )
        .expect("catalog should parse")
    }

    #[test]
    fn given_mixed_case_query_when_searching_then_titles_and_summaries_match() {
        let results = catalog().search("OCF");

        let routes: Vec<&str> = results
            .matches
            .iter()
            .map(|page| page.route.as_str())
            .collect();
        assert_eq!(routes, vec!["/tokenomics", "/whitepaper"]);
        assert_eq!(results.headline(), "2 results for \"OCF\"");
    }

    #[test]
    fn given_matches_across_categories_when_searching_then_counts_keep_first_seen_order()
     {
        let results = catalog().search("the");

        assert_eq!(
            results.categories,
            vec![
                (String::from("Token"), 1),
                (String::from("Resources"), 2),
                (String::from("About"), 1),
            ]
        );
    }

    #[test]
    fn given_unmatched_query_when_searching_then_headline_reports_no_results() {
        let results = catalog().search("staking");

        assert!(results.matches.is_empty());
        assert!(results.categories.is_empty());
        assert_eq!(results.headline(), "No results found for \"staking\"");
    }

    #[test]
    fn given_routes_when_resolved_then_page_results_or_not_found_is_chosen() {
        let catalog = catalog();

        assert!(matches!(
            catalog.resolve(&RouteKey::new("/manifesto")),
            PageView::Page(page) if page.title == "Manifesto"
        ));
        assert!(matches!(
            catalog.resolve(&RouteKey::new("/search?q=defi")),
            PageView::SearchResults(results) if results.matches.len() == 1
        ));
        assert!(matches!(
            catalog.resolve(&RouteKey::new("/nope")),
            PageView::NotFound { route } if route == "/nope"
        ));
    }

    #[test]
    fn given_results_route_without_query_when_resolved_then_results_are_empty()
    {
        let view = catalog().resolve(&RouteKey::new("/search"));

        match view {
            PageView::SearchResults(results) => {
                assert_eq!(results.headline(), "No results found for \"\"");
            },
            other => panic!("expected search results, got {other:?}"),
        }
    }
}
