//! # Add-On Registry
//!
//! Create, toggle and remove global add-ons. Same contract as the package
//! repository: fresh ids on creation, unknown ids are no-ops, the whole
//! snapshot comes back.

use crate::addon::{AddOn, NewAddOn};
use crate::snapshot::PricingSnapshot;

impl PricingSnapshot {
    /// Appends a new, unselected add-on.
    #[must_use]
    pub fn add_add_on(mut self, draft: NewAddOn) -> Self {
        self.add_ons.push(AddOn::from_draft(draft));
        self
    }

    /// Flips one add-on's own `is_selected` flag.
    #[must_use]
    pub fn toggle_add_on(mut self, id: &str) -> Self {
        if let Some(add_on) = self.add_ons.iter_mut().find(|add_on| add_on.id == id) {
            add_on.is_selected = !add_on.is_selected;
        }
        self
    }

    #[must_use]
    pub fn remove_add_on(mut self, id: &str) -> Self {
        self.add_ons.retain(|add_on| add_on.id != id);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::addon::NewAddOn;
    use crate::money::Money;
    use crate::package::{NewPackage, PackageType};
    use crate::snapshot::PricingSnapshot;

    fn warranty() -> NewAddOn {
        NewAddOn {
            name: "Warranty".to_string(),
            price: Money::from_cents(9900),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_add_on() {
        let snapshot = PricingSnapshot::new().add_add_on(warranty()).add_add_on(warranty());

        assert_eq!(snapshot.add_ons().len(), 2);
        assert_ne!(snapshot.add_ons()[0].id, snapshot.add_ons()[1].id);
        assert!(snapshot.add_ons().iter().all(|a| !a.is_selected));
    }

    #[test]
    fn test_toggle_add_on() {
        let snapshot = PricingSnapshot::new().add_add_on(warranty());
        let id = snapshot.add_ons()[0].id.clone();

        let snapshot = snapshot.toggle_add_on(&id);
        assert!(snapshot.add_on(&id).unwrap().is_selected);

        let snapshot = snapshot.toggle_add_on(&id);
        assert!(!snapshot.add_on(&id).unwrap().is_selected);
    }

    #[test]
    fn test_toggle_add_on_does_not_touch_package_selection() {
        let snapshot = PricingSnapshot::new()
            .add_package(NewPackage::new("Gutters", PackageType::Addon))
            .add_add_on(warranty());
        let package_id = snapshot.packages()[0].id.clone();
        let add_on_id = snapshot.add_ons()[0].id.clone();

        let snapshot = snapshot.toggle_addon_package(&package_id).toggle_add_on(&add_on_id);

        assert_eq!(snapshot.selected_addon_package_ids(), &[package_id]);
        assert_eq!(snapshot.selected_add_ons().count(), 1);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let snapshot = PricingSnapshot::new().add_add_on(warranty());
        let before = snapshot.clone();

        let snapshot = snapshot.toggle_add_on("missing").remove_add_on("missing");
        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_remove_add_on() {
        let snapshot = PricingSnapshot::new().add_add_on(warranty());
        let id = snapshot.add_ons()[0].id.clone();

        let snapshot = snapshot.toggle_add_on(&id).remove_add_on(&id);
        assert!(snapshot.add_ons().is_empty());
        assert_eq!(snapshot.selected_add_ons().count(), 0);
    }
}
