// Navigation history over the route table, in the manner of browser
// history: push, back, forward. Pure logic, no storage.

use std::collections::VecDeque;

use log::debug;

use crate::error::RouteError;
use crate::modules::routes::{RouteMatch, RouteTable};

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    current: RouteMatch,
    // Most recent entry at the back.
    back: VecDeque<RouteMatch>,
    forward: Vec<RouteMatch>,
    limit: usize,
}

impl Navigator {
    /// Start at `initial`, which must resolve.
    pub fn new(table: RouteTable, initial: &str, limit: usize) -> Result<Self, RouteError> {
        let current = table.resolve(initial)?;
        Ok(Self {
            table,
            current,
            back: VecDeque::new(),
            forward: Vec::new(),
            limit,
        })
    }

    pub fn current(&self) -> &RouteMatch {
        &self.current
    }

    /// Navigate to `target`. An unresolvable target leaves history untouched.
    pub fn push(&mut self, target: &str) -> Result<&RouteMatch, RouteError> {
        let next = self.table.resolve(target)?;
        if (next.page, &next.params) != (self.current.page, &self.current.params) {
            let previous = std::mem::replace(&mut self.current, next);
            debug!("[Navigation] {} -> {}", previous.path, self.current.path);
            self.back.push_back(previous);
            while self.back.len() > self.limit {
                self.back.pop_front();
            }
            self.forward.clear();
        }
        Ok(&self.current)
    }

    /// Navigate to a named page.
    pub fn push_named(&mut self, name: &str, params: &[(&str, &str)]) -> Result<&RouteMatch, RouteError> {
        let path = self.table.href(name, params)?;
        self.push(&path)
    }

    pub fn back(&mut self) -> bool {
        match self.back.pop_back() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.current, previous);
                self.forward.push(current);
                true
            }
            None => false,
        }
    }

    pub fn forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.current, next);
                self.back.push_back(current);
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::routes::Page;

    fn navigator() -> Navigator {
        Navigator::new(RouteTable::new(), "/", DEFAULT_HISTORY_LIMIT).unwrap()
    }

    #[test]
    fn test_push_back_forward() {
        let mut nav = navigator();
        nav.push("/products/42").unwrap();
        nav.push("/book-now/42").unwrap();
        assert_eq!(nav.current().page, Page::BookNow);

        assert!(nav.back());
        assert_eq!(nav.current().page, Page::ProductDetail);
        assert_eq!(nav.current().param("id"), Some("42"));
        assert!(nav.can_go_forward());

        assert!(nav.forward());
        assert_eq!(nav.current().page, Page::BookNow);
        assert!(!nav.forward());
    }

    #[test]
    fn test_push_clears_forward_stack() {
        let mut nav = navigator();
        nav.push("/project").unwrap();
        nav.back();
        nav.push("/checkout").unwrap();
        assert!(!nav.can_go_forward());
        assert!(nav.back());
        assert_eq!(nav.current().page, Page::ProductList);
    }

    #[test]
    fn test_same_path_not_recorded() {
        let mut nav = navigator();
        nav.push("/checkout").unwrap();
        nav.push("/checkout?step=2").unwrap();
        nav.back();
        assert_eq!(nav.current().page, Page::ProductList);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_same_page_in_other_case_not_recorded() {
        let mut nav = navigator();
        nav.push("/checkout").unwrap();
        nav.push("/Checkout/").unwrap();
        assert!(nav.back());
        assert_eq!(nav.current().page, Page::ProductList);
        assert!(!nav.can_go_back());

        // A different id is a different entry
        nav.push("/products/1").unwrap();
        nav.push("/PRODUCTS/2").unwrap();
        assert!(nav.back());
        assert_eq!(nav.current().param("id"), Some("1"));
    }

    #[test]
    fn test_unmatched_push_keeps_history() {
        let mut nav = navigator();
        nav.push("/project").unwrap();
        assert_eq!(
            nav.push("/nowhere").unwrap_err(),
            RouteError::NotFound("/nowhere".to_string())
        );
        assert_eq!(nav.current().page, Page::Project);
        assert!(nav.can_go_back());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut nav = Navigator::new(RouteTable::new(), "/", 2).unwrap();
        for id in 1..=5 {
            nav.push(&format!("/products/{}", id)).unwrap();
        }
        assert!(nav.back());
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current().param("id"), Some("3"));
    }

    #[test]
    fn test_push_named() {
        let mut nav = navigator();
        let m = nav.push_named("BookNow", &[("id", "9")]).unwrap();
        assert_eq!(m.path, "/book-now/9");
        assert!(nav.push_named("product-detail", &[]).is_err());
    }

    #[test]
    fn test_initial_must_resolve() {
        assert!(Navigator::new(RouteTable::new(), "/missing", 10).is_err());
    }
}
