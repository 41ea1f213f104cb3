use serde::Deserialize;

/// Server-reported pagination block; `totalPages` is camelCase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginationMeta {
    pub(crate) page: u32,
    pub(crate) total_pages: u32,
}

pub(crate) fn prev_page(current: u32) -> u32 {
    current.saturating_sub(1).max(1)
}

pub(crate) fn next_page(current: u32, total_pages: u32) -> u32 {
    (current + 1).min(total_pages)
}

pub(crate) fn is_first_page(current: u32) -> bool {
    current == 1
}

pub(crate) fn is_last_page(current: u32, total_pages: u32) -> bool {
    current == total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_page_steps_back() {
        assert_eq!(prev_page(3), 2);
    }

    #[test]
    fn prev_page_stops_at_first_page() {
        assert_eq!(prev_page(1), 1);
    }

    #[test]
    fn next_page_advances() {
        assert_eq!(next_page(1, 3), 2);
    }

    #[test]
    fn next_page_stops_at_last_page() {
        assert_eq!(next_page(3, 3), 3);
    }

    #[test]
    fn first_page_bound_matches_page_one_only() {
        assert!(is_first_page(1));
        assert!(!is_first_page(2));
    }

    #[test]
    fn last_page_bound_matches_total_pages_only() {
        assert!(is_last_page(3, 3));
        assert!(!is_last_page(2, 3));
    }

    #[test]
    fn meta_decodes_camel_case_total_pages() {
        let meta: PaginationMeta =
            serde_json::from_str(r#"{"page": 1, "totalPages": 4}"#).expect("meta should decode");
        assert_eq!(meta.page, 1);
        assert_eq!(meta.total_pages, 4);
    }
}
