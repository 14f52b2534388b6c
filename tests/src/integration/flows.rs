//! # Integration Flows
//!
//! Exercises the seeded app container the way the presentation layer does:
//! every subsystem shares one clock and one set of repositories.
//!
//! ## Flows Tested
//!
//! 1. **Circle -> Vault**: a voting circle converts, the successor vault
//!    collects milestones, votes and releases
//! 2. **Catalog -> Cart**: listings are browsed, added and checked out per seller
//! 3. **Shop settings**: storefront edits persist in the file-backed store
//! 4. **Full cycle**: four months of contributions, then a restart vote
//! 5. **Profile -> Cart**: a member page lists the storefront; stock caps the cart
//! 6. **Learning hub**: category filters, completion and the next module

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use ac_01_rotation_ledger::{CircleStatus, CycleOutcome, RotationLedgerApi};
    use ac_02_vault_lifecycle::{
        MediaKind, MediaUpload, VaultCategory, VaultLifecycleApi, VaultStatus, VoteDecision,
    };
    use ac_03_marketplace_catalog::{ListingCategory, MarketplaceCatalogApi, Pricing};
    use ac_04_cart_session::CartSessionApi;
    use ac_05_local_store::ShopItemUpdate;
    use ac_06_community_directory::{CommunityDirectoryApi, LearnCategory};
    use app_runtime::container::{AppConfig, Clock, Shop};
    use app_runtime::{mock_dataset, AppContainer, SettledCycle};
    use shared_types::{
        CircleId, DomainError, ListingId, ManualTimeSource, ModuleId, TimeSource, UserId,
        VaultId,
    };

    use crate::integration::fixtures::NOW;

    fn boot(config: AppConfig) -> (AppContainer, Arc<ManualTimeSource>) {
        let manual = Arc::new(ManualTimeSource::new(NOW));
        let clock: Clock = Arc::clone(&manual) as Arc<dyn TimeSource>;
        let app = AppContainer::build(config, clock, mock_dataset(NOW).unwrap()).unwrap();
        (app, manual)
    }

    fn selection(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_circle_converts_and_vault_releases() {
        let (app, _) = boot(AppConfig::default());
        let circle_id = CircleId::from("circle_spring_fund");

        app.ledger
            .cast_cycle_vote(&circle_id, &UserId::from("user_alex"), CycleOutcome::ConvertToVault)
            .unwrap();
        let SettledCycle::Converted(vault) = app.coordinator.settle_cycle(&circle_id).unwrap()
        else {
            panic!("expected a conversion");
        };
        assert_eq!(vault.category, VaultCategory::CircleVault);
        assert_eq!(vault.raised, 100);
        assert_eq!(app.get_vault_by_id(&vault.id).unwrap().contributors.len(), 4);

        let organizer = UserId::from("user_maya");
        let milestone = app
            .vaults
            .add_milestone(&vault.id, "Book the stall", "Summer market", true, &organizer)
            .unwrap();
        app.vaults
            .attach_verification(
                &vault.id,
                &milestone.id,
                MediaUpload {
                    kind: MediaKind::Document,
                    title: "Stall permit".to_string(),
                    description: None,
                    url: "https://files.example/permit.pdf".to_string(),
                    thumbnail_url: None,
                    uploaded_by: organizer.clone(),
                },
            )
            .unwrap();
        app.vaults.open_vote_round(&vault.id).unwrap();
        for voter in ["user_maya", "user_leo"] {
            app.vaults
                .cast_vote(&vault.id, &UserId::from(voter), VoteDecision::Approve)
                .unwrap();
        }
        let released = app.vaults.release_funds(&vault.id).unwrap();
        assert_eq!(released.status, VaultStatus::Released);

        let err = app
            .vaults
            .record_contribution(&vault.id, &app.current_user, 10)
            .unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));

        let circle = app.get_circle_by_id(&circle_id).unwrap();
        assert_eq!(circle.status, CircleStatus::Completed);
        assert_eq!(circle.successor_vault, Some(vault.id));
    }

    #[test]
    fn test_seeded_vote_completes_with_second_approval() {
        let (app, _) = boot(AppConfig::default());
        let van = app
            .get_vault_by_id(&VaultId::from("vault_delivery_van"))
            .unwrap();

        let err = app
            .vaults
            .cast_vote(&van.id, &UserId::from("user_maya"), VoteDecision::Approve)
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateVote { .. }));

        let tally = app
            .vaults
            .cast_vote(&van.id, &app.current_user.id, VoteDecision::Approve)
            .unwrap();
        assert!(tally.passed);
        assert_eq!(
            app.vaults.release_funds(&van.id).unwrap().status,
            VaultStatus::Released
        );
    }

    #[test]
    fn test_catalog_to_cart_checkout() {
        let (app, manual) = boot(AppConfig::default());
        let tee = app.catalog.get_by_id(&ListingId::from("item_garden_tee")).unwrap();
        let bread = app.catalog.get_by_id(&ListingId::from("item_sourdough")).unwrap();

        app.cart
            .add_listing(&tee, selection(&[("Size", "M"), ("Color", "Green")]), 2)
            .unwrap();
        app.cart
            .add_listing(&tee, selection(&[("Color", "Green"), ("Size", "M")]), 1)
            .unwrap();
        app.cart
            .add_listing(&bread, selection(&[("Size", "Whole")]), 1)
            .unwrap();
        assert_eq!(app.cart.items().len(), 2);
        assert_eq!(app.cart.total_items(), 4);
        assert_eq!(app.cart.total_price(), 3 * 22 + 8);

        let maya = UserId::from("user_maya");
        assert_eq!(app.cart.store_subtotal(&maya), Some(66));

        manual.advance(60_000);
        let receipt = app.cart.checkout_seller(&maya).unwrap();
        assert_eq!(receipt.total_price, 66);
        assert_eq!(receipt.placed_at, NOW + 60_000);
        assert_eq!(app.cart.stores().len(), 1);

        let err = app.cart.checkout_seller(&maya).unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));

        let cause = app.catalog.get_by_id(&ListingId::from("item_food_bank")).unwrap();
        assert!(app.cart.add_listing(&cause, BTreeMap::new(), 1).is_err());

        let receipt = app.cart.checkout_all().unwrap();
        assert_eq!(receipt.total_items, 1);
        assert!(app.cart.items().is_empty());
    }

    #[test]
    fn test_catalog_views() {
        let (app, _) = boot(AppConfig::default());
        assert_eq!(app.catalog.list_by_category(ListingCategory::Cause).len(), 1);
        let funding = app
            .catalog
            .funding_progress(&ListingId::from("item_food_bank"))
            .unwrap();
        assert_eq!(funding.backers, 2);
        assert!((funding.ratio - 0.4).abs() < f64::EPSILON);
        assert_eq!(app.catalog.get_posts_by_tag("#food").len(), 1);
        assert_eq!(app.catalog.get_total_unread(), 2);
        assert_eq!(app.catalog.search("sourdough").len(), 1);
    }

    fn shop_item(shop: &Shop) -> ac_03_marketplace_catalog::Listing {
        let mut item = shop.get_shop_items()[0].clone();
        item.id = Shop::generate_item_id();
        item.title = "Rye Loaf".to_string();
        item.pricing = Pricing::Fixed { price: 9 };
        item
    }

    #[test]
    fn test_shop_edits_persist_across_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.kv_path = Some(dir.path().join("ascor.json"));

        let item_id = {
            let (app, _) = boot(config.clone());
            assert_eq!(app.shop.get_shop_items().len(), 2);
            let item = shop_item(&app.shop);
            let id = item.id.clone();
            app.shop.add_shop_item(item).unwrap();
            app.shop
                .update_shop_item(
                    &id,
                    ShopItemUpdate {
                        inventory: Some(5),
                        ..Default::default()
                    },
                )
                .unwrap();
            assert!(app
                .shop
                .delete_shop_item(&ListingId::from("item_math_tutoring"))
                .unwrap());
            app.shop.set_business_mode(true).unwrap();
            id
        };

        let (app, _) = boot(config);
        let items = app.shop.get_shop_items();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Sourdough Loaf", "Rye Loaf"]);
        let rye = items.iter().find(|i| i.id == item_id).unwrap();
        assert_eq!(rye.inventory, Some(5));
        assert!(app.shop.business_mode());
    }

    #[test]
    fn test_full_cycle_then_restart() {
        let (app, manual) = boot(AppConfig::default());
        let circle_id = CircleId::from("circle_tuesday_savers");
        let members: Vec<UserId> = app
            .get_circle_by_id(&circle_id)
            .unwrap()
            .members
            .iter()
            .map(|m| m.id().clone())
            .collect();

        // Month two is half paid in the seed.
        for month in 2..=4u8 {
            for member in &members {
                match app.ledger.post_contribution(&circle_id, member, 200) {
                    Ok(_) => {}
                    Err(DomainError::AlreadyPaid { month: paid, .. }) => assert_eq!(paid, month),
                    Err(other) => panic!("unexpected {other}"),
                }
            }
            manual.advance(30 * 24 * 60 * 60 * 1000);
            let payout = app.ledger.advance_cycle(&circle_id).unwrap();
            assert_eq!(payout.month, month);
        }

        let circle = app.get_circle_by_id(&circle_id).unwrap();
        assert_eq!(circle.status, CircleStatus::Voting);
        let mut recipients: Vec<UserId> = circle
            .payout_history
            .iter()
            .map(|p| p.recipient.clone())
            .collect();
        recipients.sort();
        let mut expected = members.clone();
        expected.sort();
        assert_eq!(recipients, expected);

        for member in &members[..3] {
            app.ledger
                .cast_cycle_vote(&circle_id, member, CycleOutcome::Restart)
                .unwrap();
        }
        assert_eq!(
            app.coordinator.settle_cycle(&circle_id).unwrap(),
            SettledCycle::Restarted
        );
        let circle = app.get_circle_by_id(&circle_id).unwrap();
        assert_eq!(circle.status, CircleStatus::Active);
        assert_eq!(circle.cycles_completed, 1);
        assert_eq!(circle.current_month, 0);
    }

    #[test]
    fn test_member_page_to_cart_respects_stock() {
        let (app, _) = boot(AppConfig::default());
        let page = app.member_page(&UserId::from("user_alex")).unwrap();
        assert!(page.member.is_business_owner);

        let bread = page
            .storefront
            .iter()
            .find(|l| l.id.as_str() == "item_sourdough")
            .unwrap();
        let whole = selection(&[("Size", "Whole")]);
        app.cart.add_listing(bread, whole.clone(), 15).unwrap();
        let err = app.cart.add_listing(bread, whole.clone(), 6).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount { .. }));
        assert_eq!(app.cart.add_listing(bread, whole, 5).unwrap(), 20);
        assert_eq!(app.cart.total_items(), 20);
    }

    #[test]
    fn test_learning_hub_overview() {
        let (app, _) = boot(AppConfig::default());
        let hub = app.directory_api();

        assert_eq!(hub.modules_in(None).len(), 5);
        assert_eq!(hub.modules_in(Some(LearnCategory::Circles)).len(), 1);
        assert!(hub.modules_in(Some(LearnCategory::Crypto)).is_empty());
        assert_eq!(hub.completed_module_count(), 1);

        let next = hub.next_module().unwrap();
        assert_eq!(next.id, ModuleId::from("module_budget_basics"));
        assert!(!next.is_lesson_locked(1));
        assert!(next.is_lesson_locked(2));
        assert_eq!(next.next_lesson().map(|l| l.id.as_str()), Some("budget_2"));

        let err = hub.module_progress(&ModuleId::from("module_ghost")).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
