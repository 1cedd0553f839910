//! # Package Repository
//!
//! In-memory CRUD over the package collection and each package's items.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_package(draft)                 ──► packages.push(new)              │
//! │  update_package(id, update)         ──► packages[id].apply(update)      │
//! │  delete_package(id)                 ──► packages.remove(id)             │
//! │                                         + selection cascade             │
//! │  add_item_to_package(id, draft)     ──► packages[id].items.push(new)    │
//! │  add_area_to_package(id, area)      ──► packages[id].items.push(area)   │
//! │  update_package_item(id, item, u)   ──► items[item].apply(u)            │
//! │  remove_item_from_package(id, item) ──► items.remove(item)              │
//! │  add_feature / remove_feature       ──► packages[id].features           │
//! │                                                                         │
//! │  Unknown package or item ids leave the snapshot unchanged.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::item::{ItemUpdate, NewArea, NewPackageItem, PackageItem};
use crate::package::{NewPackage, Package, PackageUpdate};
use crate::snapshot::PricingSnapshot;

impl PricingSnapshot {
    /// Appends a new package built from `draft`.
    ///
    /// The new id is the last package's id in the returned snapshot.
    #[must_use]
    pub fn add_package(mut self, draft: NewPackage) -> Self {
        self.packages.push(Package::from_draft(draft));
        self
    }

    /// Applies a partial edit to one package.
    #[must_use]
    pub fn update_package(mut self, id: &str, update: PackageUpdate) -> Self {
        if let Some(pkg) = self.package_mut(id) {
            pkg.apply(update);
        }
        self
    }

    /// Removes a package and any selection that referenced it.
    #[must_use]
    pub fn delete_package(mut self, id: &str) -> Self {
        self.packages.retain(|pkg| pkg.id != id);
        self.forget_package_selection(id);
        self
    }

    /// Appends an item built from `draft` to one package.
    #[must_use]
    pub fn add_item_to_package(self, package_id: &str, draft: NewPackageItem) -> Self {
        self.push_item(package_id, || PackageItem::from_draft(draft))
    }

    /// Appends a single-quantity area item to one package.
    #[must_use]
    pub fn add_area_to_package(self, package_id: &str, area: NewArea) -> Self {
        self.push_item(package_id, || PackageItem::from_area(area))
    }

    /// Applies a partial edit to one item, recomputing its total.
    #[must_use]
    pub fn update_package_item(
        mut self,
        package_id: &str,
        item_id: &str,
        update: ItemUpdate,
    ) -> Self {
        if let Some(item) = self
            .package_mut(package_id)
            .and_then(|pkg| pkg.items.iter_mut().find(|item| item.id == item_id))
        {
            item.apply(update);
        }
        self
    }

    /// Removes one item; the remaining items keep their order.
    #[must_use]
    pub fn remove_item_from_package(mut self, package_id: &str, item_id: &str) -> Self {
        if let Some(pkg) = self.package_mut(package_id) {
            pkg.items.retain(|item| item.id != item_id);
        }
        self
    }

    /// Appends a feature bullet. Surrounding whitespace is trimmed and blank
    /// text is ignored.
    #[must_use]
    pub fn add_feature(mut self, package_id: &str, feature: &str) -> Self {
        let feature = feature.trim();
        if feature.is_empty() {
            return self;
        }
        if let Some(pkg) = self.package_mut(package_id) {
            pkg.features.push(feature.to_string());
        }
        self
    }

    /// Removes the feature at `index`; out-of-range indices are ignored.
    #[must_use]
    pub fn remove_feature(mut self, package_id: &str, index: usize) -> Self {
        if let Some(pkg) = self.package_mut(package_id) {
            if index < pkg.features.len() {
                pkg.features.remove(index);
            }
        }
        self
    }

    /// The item is only built once the package is known to exist, so a
    /// missing package does not consume an id.
    fn push_item(mut self, package_id: &str, build: impl FnOnce() -> PackageItem) -> Self {
        if let Some(pkg) = self.package_mut(package_id) {
            pkg.items.push(build());
        }
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::item::{ItemUpdate, NewArea, NewPackageItem};
    use crate::money::Money;
    use crate::package::{NewPackage, PackageType, PackageUpdate, PricingModel};
    use crate::snapshot::PricingSnapshot;

    fn with_package(package_type: PackageType) -> (PricingSnapshot, String) {
        let snapshot = PricingSnapshot::new().add_package(NewPackage::new("Silver", package_type));
        let id = snapshot.packages()[0].id.clone();
        (snapshot, id)
    }

    fn item(name: &str, quantity: f64, unit_cents: i64) -> NewPackageItem {
        NewPackageItem {
            name: name.to_string(),
            quantity: Some(quantity),
            unit_price: Money::from_cents(unit_cents),
            ..Default::default()
        }
    }

    fn item_names(snapshot: &PricingSnapshot, package_id: &str) -> Vec<String> {
        snapshot
            .package(package_id)
            .map(|pkg| pkg.items.iter().map(|i| i.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_add_package_appends_and_keeps_selection() {
        let (snapshot, tier_id) = with_package(PackageType::Tier);
        let snapshot = snapshot
            .select_tier(&tier_id)
            .add_package(NewPackage::new("Gutters", PackageType::Addon));

        assert_eq!(snapshot.packages().len(), 2);
        assert_eq!(snapshot.packages()[1].name, "Gutters");
        assert_ne!(snapshot.packages()[0].id, snapshot.packages()[1].id);
        assert_eq!(snapshot.selected_tier_package_id(), Some(tier_id.as_str()));
    }

    #[test]
    fn test_update_package() {
        let (snapshot, id) = with_package(PackageType::Tier);
        let snapshot = snapshot.update_package(
            &id,
            PackageUpdate {
                name: Some("Silver Plus".to_string()),
                pricing_model: Some(PricingModel::Itemized),
                ..Default::default()
            },
        );

        let pkg = snapshot.package(&id).unwrap();
        assert_eq!(pkg.name, "Silver Plus");
        assert_eq!(pkg.pricing_model, PricingModel::Itemized);
        assert_eq!(pkg.package_type(), PackageType::Tier);
    }

    #[test]
    fn test_update_unknown_package_is_noop() {
        let (snapshot, _) = with_package(PackageType::Tier);
        let before = snapshot.clone();
        let after = snapshot.update_package(
            "missing",
            PackageUpdate {
                name: Some("x".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_package() {
        let (snapshot, id) = with_package(PackageType::Tier);
        let snapshot = snapshot.delete_package(&id);
        assert!(snapshot.packages().is_empty());

        let unchanged = snapshot.clone().delete_package("missing");
        assert_eq!(unchanged, snapshot);
    }

    #[test]
    fn test_add_items_keeps_insertion_order_and_totals() {
        let (snapshot, id) = with_package(PackageType::Tier);
        let snapshot = snapshot
            .add_item_to_package(&id, item("A", 2.0, 5000))
            .add_item_to_package(&id, item("B", 1.0, 20000));

        let pkg = snapshot.package(&id).unwrap();
        assert_eq!(item_names(&snapshot, &id), ["A", "B"]);
        assert_eq!(pkg.items[0].total_price().cents(), 10000);
        assert_eq!(pkg.items[1].total_price().cents(), 20000);
    }

    #[test]
    fn test_add_item_to_unknown_package_is_noop() {
        let (snapshot, _) = with_package(PackageType::Tier);
        let before = snapshot.clone();
        assert_eq!(snapshot.add_item_to_package("missing", item("A", 1.0, 100)), before);
    }

    #[test]
    fn test_add_area() {
        let (snapshot, id) = with_package(PackageType::Tier);
        let snapshot = snapshot.add_area_to_package(
            &id,
            NewArea {
                name: "Kitchen".to_string(),
                description: String::new(),
                total_price: Money::from_cents(45000),
            },
        );

        let area = &snapshot.package(&id).unwrap().items[0];
        assert_eq!(area.category, "Area");
        assert_eq!(area.total_price().cents(), 45000);
    }

    #[test]
    fn test_remove_item_keeps_order_of_others() {
        let (snapshot, id) = with_package(PackageType::Tier);
        let snapshot = snapshot
            .add_item_to_package(&id, item("A", 1.0, 100))
            .add_item_to_package(&id, item("B", 1.0, 200))
            .add_item_to_package(&id, item("C", 1.0, 300));
        let b_id = snapshot.package(&id).unwrap().items[1].id.clone();

        let snapshot = snapshot.remove_item_from_package(&id, &b_id);
        assert_eq!(item_names(&snapshot, &id), ["A", "C"]);

        let snapshot = snapshot.remove_item_from_package(&id, "missing");
        assert_eq!(item_names(&snapshot, &id), ["A", "C"]);
    }

    #[test]
    fn test_remove_item_only_touches_target_package() {
        let (snapshot, first) = with_package(PackageType::Tier);
        let snapshot = snapshot
            .add_package(NewPackage::new("Gold", PackageType::Tier))
            .add_item_to_package(&first, item("A", 1.0, 100));
        let second = snapshot.packages()[1].id.clone();
        let snapshot = snapshot.add_item_to_package(&second, item("B", 1.0, 100));
        let a_id = snapshot.package(&first).unwrap().items[0].id.clone();

        let snapshot = snapshot.remove_item_from_package(&second, &a_id);
        assert_eq!(item_names(&snapshot, &first), ["A"]);
        assert_eq!(item_names(&snapshot, &second), ["B"]);
    }

    #[test]
    fn test_update_item_recomputes_total() {
        let (snapshot, id) = with_package(PackageType::Tier);
        let snapshot = snapshot.add_item_to_package(&id, item("A", 1.0, 5000));
        let item_id = snapshot.package(&id).unwrap().items[0].id.clone();

        let snapshot = snapshot.update_package_item(
            &id,
            &item_id,
            ItemUpdate {
                quantity: Some(4.0),
                ..Default::default()
            },
        );

        let updated = snapshot.package(&id).unwrap().item(&item_id).unwrap();
        assert_eq!(updated.total_price().cents(), 20000);
    }

    #[test]
    fn test_features() {
        let (snapshot, id) = with_package(PackageType::Tier);
        let snapshot = snapshot
            .add_feature(&id, "  Priority support ")
            .add_feature(&id, "   ")
            .add_feature(&id, "2-year warranty")
            .remove_feature(&id, 7);

        assert_eq!(
            snapshot.package(&id).unwrap().features,
            ["Priority support", "2-year warranty"]
        );

        let snapshot = snapshot.remove_feature(&id, 0);
        assert_eq!(snapshot.package(&id).unwrap().features, ["2-year warranty"]);
    }
}
