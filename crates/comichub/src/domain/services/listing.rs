use std::cmp::Ordering;

use thiserror::Error;

use crate::domain::entities::comic::{Comic, ComicStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("page and page size must be positive, got page {page} page size {page_size}")]
    InvalidArgument { page: i64, page_size: i64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    UpdatedAt,
    CreatedAt,
    Title,
    Author,
}

/// Filter, sort and page parameters for one catalog listing request.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub search_text: Option<String>,
    pub genre: Option<String>,
    pub status: Option<ComicStatus>,
    pub sort_key: SortKey,
    pub page: i64,
    pub page_size: i64,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search_text: None,
            genre: None,
            status: None,
            sort_key: SortKey::default(),
            page: 1,
            page_size: 20,
        }
    }
}

impl ListingQuery {
    fn matches(&self, comic: &Comic) -> bool {
        let matches_search = self.search_text.as_ref().is_none_or(|text| {
            let text = text.to_lowercase();
            comic.title.to_lowercase().contains(&text)
                || comic.author.to_lowercase().contains(&text)
        });

        let matches_genre = match self.genre.as_deref() {
            None | Some("all") => true,
            Some(genre) => comic.genres.iter().any(|g| g == genre),
        };

        let matches_status = self.status.is_none_or(|status| status == comic.status);

        matches_search && matches_genre && matches_status
    }
}

/// One page of listing results.
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    pub items: Vec<Comic>,
    pub total_matched: i64,
    pub total_pages: i64,
}

fn compare(a: &Comic, b: &Comic, key: SortKey) -> Ordering {
    match key {
        SortKey::UpdatedAt => b.updated_at.cmp(&a.updated_at),
        SortKey::CreatedAt => b.created_at.cmp(&a.created_at),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
    }
}

/// Run one listing request over the full catalog snapshot.
///
/// Pure and synchronous. The filter predicates are conjunctive, the sort is
/// stable so ties keep their input order, and a page past the end of the
/// matched set yields empty items rather than an error. Only non-positive
/// `page`/`page_size` are rejected.
pub fn apply(collection: &[Comic], query: &ListingQuery) -> Result<ListingPage, ListingError> {
    if query.page <= 0 || query.page_size <= 0 {
        return Err(ListingError::InvalidArgument {
            page: query.page,
            page_size: query.page_size,
        });
    }

    let mut matched: Vec<Comic> = collection
        .iter()
        .filter(|comic| query.matches(comic))
        .cloned()
        .collect();
    matched.sort_by(|a, b| compare(a, b, query.sort_key));

    let total_matched = matched.len() as i64;
    let total_pages = if total_matched == 0 {
        0
    } else {
        (total_matched - 1) / query.page_size + 1
    };

    let start = (query.page - 1).saturating_mul(query.page_size);
    let items = if start >= total_matched {
        Vec::new()
    } else {
        matched
            .into_iter()
            .skip(start as usize)
            .take(query.page_size as usize)
            .collect()
    };

    Ok(ListingPage {
        items,
        total_matched,
        total_pages,
    })
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    fn day(d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn comic(title: &str, author: &str, genres: &[&str], updated: u32) -> Comic {
        Comic {
            title: title.to_string(),
            author: author.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            created_at: day(updated),
            updated_at: day(updated),
            ..Default::default()
        }
    }

    fn titles(page: &ListingPage) -> Vec<&str> {
        page.items.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_sorts_by_updated_at_and_paginates() {
        let comics = vec![
            comic("Beta", "A", &[], 2),
            comic("Alpha", "B", &[], 3),
            comic("Gamma", "C", &[], 1),
        ];
        let query = ListingQuery {
            page_size: 2,
            ..Default::default()
        };

        let page = apply(&comics, &query).unwrap();

        assert_eq!(titles(&page), vec!["Alpha", "Beta"]);
        assert_eq!(page.total_matched, 3);
        assert_eq!(page.total_pages, 2);

        let page = apply(
            &comics,
            &ListingQuery {
                page: 2,
                page_size: 2,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(titles(&page), vec!["Gamma"]);
    }

    #[test]
    fn test_no_match_yields_empty_page() {
        let comics = vec![comic("Alpha", "A", &[], 1)];
        let query = ListingQuery {
            search_text: Some("zzz".to_string()),
            ..Default::default()
        };

        let page = apply(&comics, &query).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_matched, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_page_beyond_range_is_empty_not_error() {
        let comics = vec![
            comic("Alpha", "A", &[], 1),
            comic("Beta", "B", &[], 2),
            comic("Gamma", "C", &[], 3),
        ];
        let query = ListingQuery {
            page: 5,
            page_size: 2,
            ..Default::default()
        };

        let page = apply(&comics, &query).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_matched, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_non_positive_page_arguments_fail_fast() {
        let comics = vec![comic("Alpha", "A", &[], 1)];

        for (page, page_size) in [(0, 20), (-1, 20), (1, 0), (1, -5)] {
            let query = ListingQuery {
                page,
                page_size,
                ..Default::default()
            };
            assert_eq!(
                apply(&comics, &query).unwrap_err(),
                ListingError::InvalidArgument { page, page_size }
            );
        }
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let mut wanted = comic("Solo Leveling", "Chugong", &["Action", "Fantasy"], 1);
        wanted.status = ComicStatus::Completed;
        let comics = vec![
            wanted,
            comic("Solo Camping", "Chugong", &["Slice of Life"], 2),
            comic("Tower of God", "SIU", &["Action"], 3),
        ];
        let query = ListingQuery {
            search_text: Some("solo".to_string()),
            genre: Some("Action".to_string()),
            status: Some(ComicStatus::Completed),
            ..Default::default()
        };

        let page = apply(&comics, &query).unwrap();

        assert_eq!(titles(&page), vec!["Solo Leveling"]);
    }

    #[test]
    fn test_genre_all_matches_everything() {
        let comics = vec![
            comic("Alpha", "A", &["Action"], 1),
            comic("Beta", "B", &[], 2),
        ];
        let query = ListingQuery {
            genre: Some("all".to_string()),
            ..Default::default()
        };

        assert_eq!(apply(&comics, &query).unwrap().total_matched, 2);
    }

    #[test]
    fn test_search_matches_author_case_insensitively() {
        let comics = vec![
            comic("Alpha", "TurtleMe", &[], 1),
            comic("Beta", "SIU", &[], 2),
        ];
        let query = ListingQuery {
            search_text: Some("turtle".to_string()),
            ..Default::default()
        };

        assert_eq!(titles(&apply(&comics, &query).unwrap()), vec!["Alpha"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let comics = vec![
            comic("banana", "A", &[], 1),
            comic("Apple", "B", &[], 2),
            comic("cherry", "C", &[], 3),
        ];
        let query = ListingQuery {
            sort_key: SortKey::Title,
            ..Default::default()
        };

        assert_eq!(
            titles(&apply(&comics, &query).unwrap()),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let comics = vec![
            comic("First", "A", &[], 1),
            comic("Second", "B", &[], 1),
            comic("Third", "C", &[], 1),
        ];
        let query = ListingQuery::default();

        assert_eq!(
            titles(&apply(&comics, &query).unwrap()),
            vec!["First", "Second", "Third"]
        );
    }

    #[test]
    fn test_items_never_exceed_page_size() {
        let comics: Vec<Comic> = (1..=9)
            .map(|i| comic(&format!("Comic {i}"), "A", &[], i))
            .collect();

        for page in 1..=4 {
            let query = ListingQuery {
                page,
                page_size: 4,
                ..Default::default()
            };
            assert!(apply(&comics, &query).unwrap().items.len() <= 4);
        }
    }

    #[test]
    fn test_same_query_is_idempotent() {
        let comics = vec![
            comic("Beta", "A", &["Action"], 2),
            comic("Alpha", "B", &["Action"], 3),
            comic("Gamma", "C", &["Drama"], 1),
        ];
        let query = ListingQuery {
            genre: Some("Action".to_string()),
            page_size: 2,
            ..Default::default()
        };

        let first = apply(&comics, &query).unwrap();
        let second = apply(&comics, &query).unwrap();

        assert_eq!(titles(&first), titles(&second));
        assert_eq!(first.total_matched, second.total_matched);
        assert_eq!(first.total_pages, second.total_pages);
    }
}
