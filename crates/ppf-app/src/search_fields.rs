//! Search field slots: up to four product + color criteria
//!
//! Slots are addressed by 1-based index. Slot 1 is always active; slots
//! `1..=active_count` are the visible form rows and everything past
//! `active_count` is kept in the reset state. Removing a row compacts the
//! rows below it upwards so the active range never has gaps.
//!
//! Color lists are loaded asynchronously. Each request gets a
//! [`RequestToken`] that is stored on the slot and moves with it during
//! compaction; a response is applied to whichever slot still holds its
//! token, and dropped if none does.

use ppf_core::prelude::*;
use ppf_core::SearchPair;

/// Maximum number of search rows
pub const MAX_FIELDS: usize = 4;

/// Message shown when a search has no complete product + color pair
pub const NO_CRITERIA_MESSAGE: &str = "Bitte wähle mindestens ein Produkt und eine Farbe aus.";

/// Identifies one in-flight color request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// One product + color row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFieldSlot {
    product: String,
    color: String,
    color_options: Vec<String>,
    color_enabled: bool,
    pending: Option<RequestToken>,
}

impl SearchFieldSlot {
    /// Selected product, empty when unselected
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Selected color, empty when unselected
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn color_options(&self) -> &[String] {
        &self.color_options
    }

    pub fn is_color_enabled(&self) -> bool {
        self.color_enabled
    }

    /// A color request for this row has not answered yet
    pub fn is_loading_colors(&self) -> bool {
        self.pending.is_some()
    }

    /// Both product and color are selected
    pub fn is_complete(&self) -> bool {
        !self.product.is_empty() && !self.color.is_empty()
    }

    pub fn is_reset(&self) -> bool {
        *self == Self::default()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_color(&mut self) {
        self.color.clear();
        self.color_options.clear();
        self.color_enabled = false;
        self.pending = None;
    }
}

/// Outcome of changing a row's product
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductChange {
    /// Product was cleared; color is reset and disabled
    Cleared,
    /// Colors for `product` must be fetched and applied with `token`
    ColorsRequested { token: RequestToken, product: String },
}

/// The set of active search rows
#[derive(Debug, Clone)]
pub struct SearchFieldManager {
    slots: [SearchFieldSlot; MAX_FIELDS],
    active_count: usize,
    product_options: Vec<String>,
    next_token: u64,
}

impl Default for SearchFieldManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFieldManager {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| SearchFieldSlot::default()),
            active_count: 1,
            product_options: Vec::new(),
            next_token: 1,
        }
    }

    /// Build a manager whose rows already hold `pairs`, without color lookups.
    ///
    /// Used by non-interactive callers that get complete pairs up front.
    pub fn with_pairs(pairs: &[SearchPair]) -> Result<Self> {
        if pairs.len() > MAX_FIELDS {
            return Err(Error::validation(format!(
                "Maximal {} Suchkriterien möglich, {} angegeben.",
                MAX_FIELDS,
                pairs.len()
            )));
        }

        let mut manager = Self::new();
        for (i, pair) in pairs.iter().enumerate() {
            if i > 0 {
                manager.add_field();
            }
            let slot = &mut manager.slots[i];
            slot.product = pair.product.clone();
            slot.color_options = vec![pair.color.clone()];
            slot.color_enabled = !pair.product.is_empty();
            slot.color = if slot.color_enabled {
                pair.color.clone()
            } else {
                String::new()
            };
        }
        Ok(manager)
    }

    /// Back to a single empty row. Product options are kept until the
    /// caller replaces them.
    pub fn initialize(&mut self) {
        for slot in &mut self.slots {
            slot.reset();
        }
        self.active_count = 1;
    }

    /// Replace the product list shared by every row.
    ///
    /// Rows whose product is no longer offered are cleared.
    pub fn set_product_options(&mut self, products: Vec<String>) {
        for slot in self.slots.iter_mut().take(self.active_count) {
            if !slot.product.is_empty() && !products.contains(&slot.product) {
                debug!("Product {:?} no longer offered, clearing row", slot.product);
                slot.product.clear();
                slot.clear_color();
            }
        }
        self.product_options = products;
    }

    pub fn product_options(&self) -> &[String] {
        &self.product_options
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn is_active(&self, index: usize) -> bool {
        (1..=self.active_count).contains(&index)
    }

    /// Active row at 1-based `index`
    pub fn slot(&self, index: usize) -> Option<&SearchFieldSlot> {
        if self.is_active(index) {
            self.slots.get(index - 1)
        } else {
            None
        }
    }

    /// All rows including inactive ones
    pub fn slots(&self) -> &[SearchFieldSlot] {
        &self.slots
    }

    /// Active rows with their 1-based index
    pub fn active_slots(&self) -> impl Iterator<Item = (usize, &SearchFieldSlot)> {
        self.slots
            .iter()
            .take(self.active_count)
            .enumerate()
            .map(|(i, slot)| (i + 1, slot))
    }

    /// Whether another row can be added
    pub fn can_add(&self) -> bool {
        self.active_count < MAX_FIELDS
    }

    /// Whether the row at `index` offers a remove affordance
    pub fn can_remove(&self, index: usize) -> bool {
        index > 1 && index <= self.active_count
    }

    /// Set a row's product. Returns `None` when `index` is not active.
    pub fn on_product_changed(&mut self, index: usize, product: &str) -> Option<ProductChange> {
        if !self.is_active(index) {
            warn!("Product change for inactive row {}", index);
            return None;
        }

        let token = if product.is_empty() {
            None
        } else {
            Some(self.issue_token())
        };

        let slot = &mut self.slots[index - 1];
        slot.product = product.to_string();
        slot.clear_color();
        slot.pending = token;

        Some(match token {
            None => ProductChange::Cleared,
            Some(token) => ProductChange::ColorsRequested {
                token,
                product: product.to_string(),
            },
        })
    }

    /// Apply a color list. Returns the row it landed on, or `None` when the
    /// request was superseded or its row removed.
    pub fn apply_colors(&mut self, token: RequestToken, colors: Vec<String>) -> Option<usize> {
        let index = self.find_pending(token)?;
        let slot = &mut self.slots[index - 1];
        slot.color_options = colors;
        slot.color_enabled = true;
        slot.pending = None;
        Some(index)
    }

    /// Record a failed color request; the row's color stays disabled.
    pub fn reject_colors(&mut self, token: RequestToken) -> Option<usize> {
        let index = self.find_pending(token)?;
        self.slots[index - 1].pending = None;
        Some(index)
    }

    /// Select a color on an enabled row. An empty color deselects.
    pub fn select_color(&mut self, index: usize, color: &str) -> bool {
        if !self.is_active(index) {
            return false;
        }
        let slot = &mut self.slots[index - 1];
        if !slot.color_enabled {
            return false;
        }
        if !color.is_empty() && !slot.color_options.iter().any(|c| c == color) {
            warn!("Color {:?} is not offered for {:?}", color, slot.product);
            return false;
        }
        slot.color = color.to_string();
        true
    }

    /// Activate the next row. No-op at [`MAX_FIELDS`].
    pub fn add_field(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.active_count += 1;
        self.slots[self.active_count - 1].reset();
        true
    }

    /// Remove row `index` (never row 1), shifting later rows up.
    pub fn remove_field(&mut self, index: usize) -> bool {
        if !self.can_remove(index) {
            return false;
        }

        // Removed row ends up at the old last position, everything after
        // it moves up by one.
        self.slots[index - 1..self.active_count].rotate_left(1);
        self.slots[self.active_count - 1].reset();
        self.active_count -= 1;
        true
    }

    /// Complete pairs of the active rows, in row order
    pub fn collect_search_pairs(&self) -> Vec<SearchPair> {
        self.active_slots()
            .filter(|(_, slot)| slot.is_complete())
            .map(|(_, slot)| SearchPair::new(slot.product.clone(), slot.color.clone()))
            .collect()
    }

    /// [`Self::collect_search_pairs`], rejecting an empty result
    pub fn validated_pairs(&self) -> Result<Vec<SearchPair>> {
        let pairs = self.collect_search_pairs();
        if pairs.is_empty() {
            Err(Error::validation(NO_CRITERIA_MESSAGE))
        } else {
            Ok(pairs)
        }
    }

    fn issue_token(&mut self) -> RequestToken {
        let token = RequestToken(self.next_token);
        self.next_token += 1;
        token
    }

    fn find_pending(&self, token: RequestToken) -> Option<usize> {
        self.active_slots()
            .find(|(_, slot)| slot.pending == Some(token))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Put `product`/`color` into row `index` through the public flow
    fn fill(manager: &mut SearchFieldManager, index: usize, product: &str, color: &str) {
        match manager.on_product_changed(index, product) {
            Some(ProductChange::ColorsRequested { token, .. }) => {
                let options = if color.is_empty() {
                    vec!["Egal".to_string()]
                } else {
                    vec!["Egal".to_string(), color.to_string()]
                };
                assert_eq!(manager.apply_colors(token, options), Some(index));
                assert!(manager.select_color(index, color));
            }
            Some(ProductChange::Cleared) => {}
            None => panic!("row {} not active", index),
        }
    }

    fn manager_with_rows(rows: &[(&str, &str)]) -> SearchFieldManager {
        let mut manager = SearchFieldManager::new();
        for (i, (product, color)) in rows.iter().enumerate() {
            if i > 0 {
                assert!(manager.add_field());
            }
            fill(&mut manager, i + 1, product, color);
        }
        manager
    }

    #[test]
    fn test_new_has_one_active_row() {
        let manager = SearchFieldManager::new();
        assert_eq!(manager.active_count(), 1);
        assert!(manager.slots().iter().all(SearchFieldSlot::is_reset));
        assert!(manager.can_add());
        assert!(!manager.can_remove(1));
    }

    #[test]
    fn test_add_field_stops_at_max() {
        let mut manager = SearchFieldManager::new();
        assert!(manager.add_field());
        assert!(manager.add_field());
        assert!(manager.add_field());
        assert_eq!(manager.active_count(), MAX_FIELDS);
        assert!(!manager.can_add());

        assert!(!manager.add_field());
        assert_eq!(manager.active_count(), MAX_FIELDS);
    }

    #[test]
    fn test_added_row_is_reset_with_color_disabled() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau")]);
        manager.add_field();

        let slot = manager.slot(2).unwrap();
        assert_eq!(slot.product(), "");
        assert!(!slot.is_color_enabled());
        assert!(slot.color_options().is_empty());
    }

    #[test]
    fn test_remove_row_one_is_noop() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau"), ("Cap", "Rot")]);
        let before = manager.slots().to_vec();

        assert!(!manager.remove_field(1));
        assert_eq!(manager.active_count(), 2);
        assert_eq!(manager.slots(), before.as_slice());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau"), ("Cap", "Rot")]);
        assert!(!manager.remove_field(3));
        assert!(!manager.remove_field(0));
        assert_eq!(manager.active_count(), 2);
    }

    #[test]
    fn test_remove_compacts_following_rows() {
        let mut manager = manager_with_rows(&[
            ("Shirt", "Blau"),
            ("Cap", "Rot"),
            ("Hoodie", "Schwarz"),
            ("Polo", ""),
        ]);
        let before = manager.slots().to_vec();

        assert!(manager.remove_field(2));

        assert_eq!(manager.active_count(), 3);
        assert_eq!(manager.slots()[0], before[0]);
        // post (p-1) == pre p for p in (2, 4]
        assert_eq!(manager.slots()[1], before[2]);
        assert_eq!(manager.slots()[2], before[3]);
        assert!(manager.slots()[3].is_reset());
        assert!(manager.can_add());
    }

    #[test]
    fn test_remove_last_row_only_resets_it() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau"), ("Cap", "Rot")]);
        assert!(manager.remove_field(2));
        assert_eq!(manager.active_count(), 1);
        assert_eq!(manager.slot(1).unwrap().product(), "Shirt");
        assert!(manager.slots()[1].is_reset());
    }

    #[test]
    fn test_add_then_remove_restores_previous_rows() {
        for start in 1..MAX_FIELDS {
            let rows: Vec<(&str, &str)> = [("A", "Rot"), ("B", "Grün"), ("C", "Blau")]
                .into_iter()
                .take(start)
                .collect();
            let mut manager = manager_with_rows(&rows);
            let before = manager.slots().to_vec();

            assert!(manager.add_field());
            let added = manager.active_count();
            for index in 2..=added {
                let mut m = manager.clone();
                assert!(m.remove_field(index));
                assert_eq!(m.active_count(), start);
                assert_eq!(&m.slots()[..index - 1], &before[..index - 1]);
            }
        }
    }

    #[test]
    fn test_collect_only_complete_pairs() {
        let mut manager = manager_with_rows(&[("A", "Red"), ("B", ""), ("", "")]);
        // Third row: color only is impossible through the UI; force it
        manager.slots[2].color = "Blue".to_string();

        assert_eq!(manager.active_count(), 3);
        assert_eq!(
            manager.collect_search_pairs(),
            vec![SearchPair::new("A", "Red")]
        );
    }

    #[test]
    fn test_collect_ignores_inactive_rows() {
        let mut manager = manager_with_rows(&[("A", "Red"), ("B", "Blue")]);
        manager.remove_field(2);
        assert_eq!(
            manager.collect_search_pairs(),
            vec![SearchPair::new("A", "Red")]
        );
    }

    #[test]
    fn test_validated_pairs_rejects_empty() {
        let manager = SearchFieldManager::new();
        let err = manager.validated_pairs().unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(err.to_string(), NO_CRITERIA_MESSAGE);
    }

    #[test]
    fn test_clearing_product_resets_color() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau")]);
        assert_eq!(
            manager.on_product_changed(1, ""),
            Some(ProductChange::Cleared)
        );

        let slot = manager.slot(1).unwrap();
        assert_eq!(slot.color(), "");
        assert!(slot.color_options().is_empty());
        assert!(!slot.is_color_enabled());
    }

    #[test]
    fn test_product_change_on_inactive_row_is_ignored() {
        let mut manager = SearchFieldManager::new();
        assert_eq!(manager.on_product_changed(2, "Shirt"), None);
        assert!(manager.slots()[1].is_reset());
    }

    #[test]
    fn test_color_disabled_until_colors_arrive() {
        let mut manager = SearchFieldManager::new();
        let Some(ProductChange::ColorsRequested { token, product }) =
            manager.on_product_changed(1, "Shirt")
        else {
            panic!("expected color request");
        };
        assert_eq!(product, "Shirt");
        assert!(manager.slot(1).unwrap().is_loading_colors());
        assert!(!manager.select_color(1, "Blau"));

        manager.apply_colors(token, vec!["Blau".to_string()]);
        assert!(manager.select_color(1, "Blau"));
        assert!(!manager.select_color(1, "Lila"));
    }

    #[test]
    fn test_failed_colors_leave_color_disabled() {
        let mut manager = SearchFieldManager::new();
        let Some(ProductChange::ColorsRequested { token, .. }) =
            manager.on_product_changed(1, "Shirt")
        else {
            panic!("expected color request");
        };

        assert_eq!(manager.reject_colors(token), Some(1));
        let slot = manager.slot(1).unwrap();
        assert!(!slot.is_color_enabled());
        assert!(!slot.is_loading_colors());
    }

    #[test]
    fn test_superseded_color_response_is_dropped() {
        let mut manager = SearchFieldManager::new();
        let Some(ProductChange::ColorsRequested { token: first, .. }) =
            manager.on_product_changed(1, "Shirt")
        else {
            panic!("expected color request");
        };
        let Some(ProductChange::ColorsRequested { token: second, .. }) =
            manager.on_product_changed(1, "Cap")
        else {
            panic!("expected color request");
        };

        // Newer request answers first, older one arrives late
        assert_eq!(manager.apply_colors(second, vec!["Rot".to_string()]), Some(1));
        assert_eq!(manager.apply_colors(first, vec!["Blau".to_string()]), None);

        assert_eq!(manager.slot(1).unwrap().color_options(), ["Rot"]);
    }

    #[test]
    fn test_color_response_follows_row_through_compaction() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau"), ("Cap", "Rot")]);
        manager.add_field();
        let Some(ProductChange::ColorsRequested { token, .. }) =
            manager.on_product_changed(3, "Hoodie")
        else {
            panic!("expected color request");
        };

        manager.remove_field(2);

        // Row 3 moved to row 2 while its request was in flight
        assert_eq!(manager.apply_colors(token, vec!["Grau".to_string()]), Some(2));
        assert_eq!(manager.slot(2).unwrap().product(), "Hoodie");
        assert_eq!(manager.slot(2).unwrap().color_options(), ["Grau"]);
    }

    #[test]
    fn test_color_response_for_removed_row_is_dropped() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau")]);
        manager.add_field();
        let Some(ProductChange::ColorsRequested { token, .. }) =
            manager.on_product_changed(2, "Cap")
        else {
            panic!("expected color request");
        };

        manager.remove_field(2);
        assert_eq!(manager.apply_colors(token, vec!["Rot".to_string()]), None);
        assert!(manager.slots()[1].is_reset());
    }

    #[test]
    fn test_set_product_options_clears_vanished_products() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau"), ("Cap", "Rot")]);
        manager.set_product_options(vec!["Shirt".to_string()]);

        assert_eq!(manager.slot(1).unwrap().product(), "Shirt");
        assert_eq!(manager.slot(1).unwrap().color(), "Blau");
        assert_eq!(manager.slot(2).unwrap().product(), "");
        assert!(!manager.slot(2).unwrap().is_color_enabled());
        assert_eq!(manager.product_options(), ["Shirt"]);
    }

    #[test]
    fn test_initialize_resets_rows_and_count() {
        let mut manager = manager_with_rows(&[("Shirt", "Blau"), ("Cap", "Rot")]);
        manager.initialize();
        assert_eq!(manager.active_count(), 1);
        assert!(manager.slots().iter().all(SearchFieldSlot::is_reset));
    }

    #[test]
    fn test_with_pairs() {
        let manager = SearchFieldManager::with_pairs(&[
            SearchPair::new("Shirt", "Blau"),
            SearchPair::new("Cap", "Rot"),
        ])
        .unwrap();
        assert_eq!(manager.active_count(), 2);
        assert_eq!(
            manager.validated_pairs().unwrap(),
            vec![SearchPair::new("Shirt", "Blau"), SearchPair::new("Cap", "Rot")]
        );

        let too_many: Vec<SearchPair> = (0..5)
            .map(|i| SearchPair::new(format!("P{i}"), "Rot"))
            .collect();
        assert!(matches!(
            SearchFieldManager::with_pairs(&too_many),
            Err(Error::Validation { .. })
        ));
    }
}
