//! Role-based feature gating.
//!
//! [`can_access`] is a pure, total function over the static role table:
//! no error cases, only boolean outcomes. It gates rendering only; the
//! backend independently authorizes every request.

use std::collections::HashMap;

use contracts::enums::{Feature, Role};
use leptos::prelude::*;
use once_cell::sync::Lazy;

use super::context::use_memberships;
use crate::domain::establishment::context::use_establishment;
use crate::system::session::context::use_session;

static ROLE_FEATURES: Lazy<HashMap<Role, Vec<Feature>>> = Lazy::new(|| {
    use Feature::*;
    HashMap::from([
        (Role::Owner, Feature::all()),
        (Role::Admin, Feature::all()),
        (
            Role::Manager,
            vec![Invoices, Recipes, Analytics, Performance, Mercuriales, Team],
        ),
        (Role::Staff, vec![Invoices, Recipes, Analytics]),
        (
            Role::Accountant,
            vec![Invoices, Analytics, Performance, Billing],
        ),
    ])
});

/// Whether a role may use a feature. `Padrino` passes everything;
/// unknown role/feature combinations are denied.
pub fn can_access(role: Role, feature: Feature) -> bool {
    if role == Role::Padrino {
        return true;
    }
    ROLE_FEATURES
        .get(&role)
        .map(|features| features.contains(&feature))
        .unwrap_or(false)
}

/// Reactive access check for the signed-in user against the active
/// establishment. A padrino membership anywhere grants everything.
pub fn use_can_access(feature: Feature) -> Signal<bool> {
    let (session, _) = use_session();
    let memberships = use_memberships();
    let establishment = use_establishment();

    Signal::derive(move || {
        let Some(user) = session.get().user else {
            return false;
        };
        let rows = memberships.memberships.get();

        if rows
            .iter()
            .any(|m| m.user_id == user.id && m.role == Role::Padrino)
        {
            return true;
        }

        let Some(active_id) = establishment.active_id.get() else {
            return false;
        };

        rows.iter()
            .filter(|m| m.user_id == user.id && m.establishment_id.to_string() == active_id)
            .any(|m| can_access(m.role, feature))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padrino_can_access_everything() {
        for feature in Feature::all() {
            assert!(can_access(Role::Padrino, feature));
        }
    }

    #[test]
    fn test_staff_feature_set() {
        let allowed = [Feature::Invoices, Feature::Recipes, Feature::Analytics];
        for feature in Feature::all() {
            assert_eq!(
                can_access(Role::Staff, feature),
                allowed.contains(&feature),
                "unexpected staff access for {:?}",
                feature
            );
        }
    }

    #[test]
    fn test_owner_and_admin_have_all_features() {
        for feature in Feature::all() {
            assert!(can_access(Role::Owner, feature));
            assert!(can_access(Role::Admin, feature));
        }
    }

    #[test]
    fn test_manager_is_denied_settings_and_billing() {
        assert!(!can_access(Role::Manager, Feature::Settings));
        assert!(!can_access(Role::Manager, Feature::Billing));
        assert!(can_access(Role::Manager, Feature::Performance));
    }

    #[test]
    fn test_accountant_subset() {
        assert!(can_access(Role::Accountant, Feature::Billing));
        assert!(!can_access(Role::Accountant, Feature::Recipes));
        assert!(!can_access(Role::Accountant, Feature::Team));
    }
}
