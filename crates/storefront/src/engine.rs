//! Catalog filtering, sorting, and pagination.
//!
//! Pure functions over `(&ProductCatalog, &FilterSpec)`. The three filter
//! predicates are applied as a conjunction in a fixed order: category
//! membership, inclusive price range, case-insensitive substring search.
//! Sorting is stable, so ties keep catalog order and repeated application
//! is idempotent.

use std::collections::BTreeSet;

use sneaker_hub_core::{Category, Price, Product};

use crate::catalog::ProductCatalog;

/// Products per page.
pub const PAGE_SIZE: usize = 12;

/// Default upper bound of the price range filter.
pub const PRICE_CAP: Price = Price::new(50_000);

/// Maximum number of page buttons shown at once.
const PAGE_BUTTON_WINDOW: u32 = 5;

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Catalog order (the order products were loaded).
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    /// Case-folded lexicographic order of the product name.
    Name,
}

/// The user's current filter/sort/page selection.
///
/// Every filter, search, or sort mutation resets the page to 1; page
/// navigation alone does not. The two price bounds are linked: pushing the
/// minimum above the maximum drags the maximum up to match, and vice versa,
/// so a spec built through these setters always satisfies `min <= max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    categories: BTreeSet<Category>,
    min_price: Price,
    max_price: Price,
    search: String,
    sort: SortMode,
    page: u32,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            min_price: Price::ZERO,
            max_price: PRICE_CAP,
            search: String::new(),
            sort: SortMode::Default,
            page: 1,
        }
    }
}

impl FilterSpec {
    /// Selected categories. Empty means no category restriction.
    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    #[must_use]
    pub const fn min_price(&self) -> Price {
        self.min_price
    }

    #[must_use]
    pub const fn max_price(&self) -> Price {
        self.max_price
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    /// Current 1-indexed page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Toggle a category in or out of the selection.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
        self.page = 1;
    }

    /// Replace the category selection.
    pub fn set_categories(&mut self, categories: impl IntoIterator<Item = Category>) {
        self.categories = categories.into_iter().collect();
        self.page = 1;
    }

    /// Set the minimum price, dragging the maximum up if overtaken.
    pub fn set_min_price(&mut self, price: Price) {
        self.min_price = price;
        if self.max_price < price {
            self.max_price = price;
        }
        self.page = 1;
    }

    /// Set the maximum price, dragging the minimum down if undercut.
    pub fn set_max_price(&mut self, price: Price) {
        self.max_price = price;
        if self.min_price > price {
            self.min_price = price;
        }
        self.page = 1;
    }

    /// Set the free-text search term. Stored verbatim; matching trims and
    /// case-folds.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.page = 1;
    }

    /// Clear every filter back to the defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Jump to a page. Pages are 1-indexed; 0 is treated as 1.
    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// "Load more": advance one page while more matches remain.
    ///
    /// Returns whether the page actually advanced.
    pub fn advance_page(&mut self, total_matched: usize) -> bool {
        if (self.page as usize).saturating_mul(PAGE_SIZE) < total_matched {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Whether `product` satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if product.price < self.min_price || product.price > self.max_price {
            return false;
        }
        let term = self.search.trim().to_lowercase();
        if !term.is_empty()
            && !product.name.to_lowercase().contains(&term)
            && !product.description.to_lowercase().contains(&term)
        {
            return false;
        }
        true
    }
}

/// One page of filtered results plus the aggregates the UI needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// The visible window of products.
    pub items: Vec<Product>,
    /// Total matches across all pages.
    pub total_matched: usize,
    /// Current 1-indexed page.
    pub page: u32,
    /// `ceil(total_matched / PAGE_SIZE)`.
    pub total_pages: u32,
    /// Whether a further page exists ("load more" stays visible).
    pub has_more: bool,
    /// Page buttons to render; empty when nothing matched.
    pub buttons: Vec<u32>,
    /// Min and max price across the *full* filtered set, for the linked
    /// range sliders. `None` when nothing matched.
    pub price_bounds: Option<(Price, Price)>,
}

/// Filter and sort the whole catalog, without pagination.
#[must_use]
pub fn filter_all(catalog: &ProductCatalog, spec: &FilterSpec) -> Vec<Product> {
    let mut result: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|product| spec.matches(product))
        .cloned()
        .collect();
    sort(&mut result, spec.sort());
    result
}

/// Stable sort in place. `SortMode::Default` preserves the incoming order.
pub fn sort(products: &mut [Product], mode: SortMode) {
    match mode {
        SortMode::Default => {}
        SortMode::PriceAsc => products.sort_by_key(|p| p.price),
        SortMode::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::Name => products.sort_by_cached_key(|p| p.name.to_lowercase()),
    }
}

/// Filter, sort, and window the catalog for the spec's current page.
#[must_use]
pub fn apply(catalog: &ProductCatalog, spec: &FilterSpec) -> PageView {
    let filtered = filter_all(catalog, spec);
    let total_matched = filtered.len();
    let total_pages = u32::try_from(total_matched.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX);
    let page = spec.page();
    let price_bounds = price_bounds(&filtered);

    let items: Vec<Product> = filtered
        .into_iter()
        .skip((page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .collect();

    PageView {
        items,
        total_matched,
        page,
        total_pages,
        has_more: (page as usize).saturating_mul(PAGE_SIZE) < total_matched,
        buttons: page_buttons(page, total_pages),
        price_bounds,
    }
}

/// The sliding window of page buttons: at most five, starting two pages
/// behind the current one, clamped to `[1, total_pages]`.
#[must_use]
pub fn page_buttons(page: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let start = page.saturating_sub(2).max(1);
    let end = total_pages.min(start + PAGE_BUTTON_WINDOW - 1);
    (start..=end).collect()
}

/// Min and max price over `products`, or `None` when empty.
#[must_use]
pub fn price_bounds(products: &[Product]) -> Option<(Price, Price)> {
    let min = products.iter().map(|p| p.price).min()?;
    let max = products.iter().map(|p| p.price).max()?;
    Some((min, max))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sneaker_hub_core::ProductId;

    fn product(id: i32, name: &str, price: u64, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::new(price),
            category,
            description: format!("{name} description"),
            image: String::new(),
            featured: false,
        }
    }

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            product(1, "Air Zoom", 5000, Category::Men),
            product(2, "Cloud Runner", 15000, Category::Women),
            product(3, "Street Low", 9000, Category::Men),
            product(4, "Trail Peak", 9000, Category::Unisex),
            product(5, "Court Ace", 21000, Category::Women),
        ])
        .unwrap()
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_no_filters_preserves_catalog_order() {
        let result = filter_all(&catalog(), &FilterSpec::default());
        assert_eq!(ids(&result), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_filter_with_price_sort() {
        let mut spec = FilterSpec::default();
        spec.set_categories([Category::Men]);
        spec.set_sort(SortMode::PriceAsc);
        let result = filter_all(&catalog(), &spec);
        assert_eq!(ids(&result), [1, 3]);
    }

    #[test]
    fn test_category_filter_excludes_and_reorders() {
        let catalog = ProductCatalog::new(vec![
            product(1, "A", 5000, Category::Men),
            product(2, "B", 15000, Category::Women),
            product(3, "C", 900, Category::Men),
        ])
        .unwrap();
        let mut spec = FilterSpec::default();
        spec.set_categories([Category::Men]);
        spec.set_sort(SortMode::PriceAsc);
        assert_eq!(ids(&filter_all(&catalog, &spec)), [3, 1]);
    }

    #[test]
    fn test_conjunction_of_predicates() {
        let mut spec = FilterSpec::default();
        spec.set_categories([Category::Men, Category::Unisex]);
        spec.set_min_price(Price::new(6000));
        spec.set_search("description");
        let result = filter_all(&catalog(), &spec);
        // Every survivor satisfies all three predicates; nothing that
        // satisfies all three is dropped.
        assert_eq!(ids(&result), [3, 4]);
        for p in catalog().products() {
            let kept = result.iter().any(|r| r.id == p.id);
            assert_eq!(kept, spec.matches(p));
        }
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let mut spec = FilterSpec::default();
        spec.set_search("  AIR  ");
        assert_eq!(ids(&filter_all(&catalog(), &spec)), [1]);

        spec.set_search("cloud");
        assert_eq!(ids(&filter_all(&catalog(), &spec)), [2]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut spec = FilterSpec::default();
        spec.set_search("Trail Peak description");
        assert_eq!(ids(&filter_all(&catalog(), &spec)), [4]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let mut spec = FilterSpec::default();
        spec.set_min_price(Price::new(9000));
        spec.set_max_price(Price::new(9000));
        assert_eq!(ids(&filter_all(&catalog(), &spec)), [3, 4]);
    }

    #[test]
    fn test_sort_stable_on_ties() {
        let mut spec = FilterSpec::default();
        spec.set_sort(SortMode::PriceAsc);
        let result = filter_all(&catalog(), &spec);
        // 3 and 4 share a price; catalog order breaks the tie.
        assert_eq!(ids(&result), [1, 3, 4, 2, 5]);
    }

    #[test]
    fn test_sort_idempotent() {
        let mut spec = FilterSpec::default();
        spec.set_sort(SortMode::Name);
        let once = filter_all(&catalog(), &spec);
        let mut twice = once.clone();
        sort(&mut twice, SortMode::Name);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_price_desc_reverses_asc_without_ties() {
        let catalog = ProductCatalog::new(vec![
            product(1, "A", 300, Category::Men),
            product(2, "B", 100, Category::Men),
            product(3, "C", 200, Category::Men),
        ])
        .unwrap();
        let mut spec = FilterSpec::default();
        spec.set_sort(SortMode::PriceAsc);
        let mut asc = filter_all(&catalog, &spec);
        spec.set_sort(SortMode::PriceDesc);
        let desc = filter_all(&catalog, &spec);
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_name_sort_case_folded() {
        let catalog = ProductCatalog::new(vec![
            product(1, "zephyr", 100, Category::Men),
            product(2, "Apex", 100, Category::Men),
            product(3, "mono", 100, Category::Men),
        ])
        .unwrap();
        let mut spec = FilterSpec::default();
        spec.set_sort(SortMode::Name);
        assert_eq!(ids(&filter_all(&catalog, &spec)), [2, 3, 1]);
    }

    fn big_catalog(count: i32) -> ProductCatalog {
        ProductCatalog::new(
            (1..=count)
                .map(|i| product(i, &format!("Shoe {i}"), 1000 + u64::try_from(i).unwrap(), Category::Men))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_pagination_covers_exactly_once() {
        let catalog = big_catalog(30);
        let mut spec = FilterSpec::default();
        let full = filter_all(&catalog, &spec);

        let mut concatenated = Vec::new();
        let total_pages = apply(&catalog, &spec).total_pages;
        for page in 1..=total_pages {
            spec.go_to_page(page);
            concatenated.extend(apply(&catalog, &spec).items);
        }
        assert_eq!(concatenated, full);
    }

    #[test]
    fn test_page_window_sizes() {
        let catalog = big_catalog(30);
        let spec = FilterSpec::default();
        let view = apply(&catalog, &spec);
        assert_eq!(view.items.len(), PAGE_SIZE);
        assert_eq!(view.total_matched, 30);
        assert_eq!(view.total_pages, 3);
        assert!(view.has_more);

        let mut spec = FilterSpec::default();
        spec.go_to_page(3);
        let view = apply(&catalog, &spec);
        assert_eq!(view.items.len(), 6);
        assert!(!view.has_more);
    }

    #[test]
    fn test_empty_result_has_no_pagination() {
        let mut spec = FilterSpec::default();
        spec.set_search("no such shoe");
        let view = apply(&catalog(), &spec);
        assert!(view.items.is_empty());
        assert_eq!(view.total_matched, 0);
        assert_eq!(view.total_pages, 0);
        assert!(view.buttons.is_empty());
        assert!(view.price_bounds.is_none());
        assert!(!view.has_more);
    }

    #[test]
    fn test_page_buttons_window() {
        assert_eq!(page_buttons(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_buttons(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_buttons(7, 10), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_buttons(10, 10), vec![8, 9, 10]);
        assert_eq!(page_buttons(1, 3), vec![1, 2, 3]);
        assert_eq!(page_buttons(1, 0), Vec::<u32>::new());
    }

    #[test]
    fn test_advance_page_stops_at_end() {
        let mut spec = FilterSpec::default();
        assert!(spec.advance_page(30));
        assert_eq!(spec.page(), 2);
        assert!(spec.advance_page(30));
        assert_eq!(spec.page(), 3);
        assert!(!spec.advance_page(30));
        assert_eq!(spec.page(), 3);
    }

    #[test]
    fn test_filter_mutation_resets_page() {
        let mut spec = FilterSpec::default();
        spec.go_to_page(4);
        spec.set_search("zoom");
        assert_eq!(spec.page(), 1);

        spec.go_to_page(4);
        spec.toggle_category(Category::Men);
        assert_eq!(spec.page(), 1);

        spec.go_to_page(4);
        spec.set_sort(SortMode::Name);
        assert_eq!(spec.page(), 1);

        spec.go_to_page(4);
        spec.set_max_price(Price::new(30000));
        assert_eq!(spec.page(), 1);
    }

    #[test]
    fn test_linked_price_bounds_clamp_symmetrically() {
        let mut spec = FilterSpec::default();
        spec.set_max_price(Price::new(10000));
        spec.set_min_price(Price::new(12000));
        // Min overtook max: max is dragged up.
        assert_eq!(spec.max_price(), Price::new(12000));

        spec.set_max_price(Price::new(8000));
        // Max undercut min: min is dragged down.
        assert_eq!(spec.min_price(), Price::new(8000));
    }

    #[test]
    fn test_price_bounds_of_filtered_set() {
        let view = apply(&catalog(), &FilterSpec::default());
        assert_eq!(
            view.price_bounds,
            Some((Price::new(5000), Price::new(21000)))
        );
    }
}
