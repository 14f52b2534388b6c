//! # End-to-End Scenarios
//!
//! Command sequences run against fresh services through their public APIs:
//!
//! 1. A fully paid circle month pays out the rotation slot
//! 2. A vault with every required milestone verified releases on quorum
//! 3. Release is refused below quorum
//! 4. Approving a join request on a full circle fails
//! 5. Adding the same listing and variants twice merges into one cart line

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ac_01_rotation_ledger::{CircleStatus, RotationLedgerApi};
    use ac_02_vault_lifecycle::{
        MediaKind, MediaUpload, VaultCategory, VaultDraft, VaultLifecycleApi, VaultStatus,
        VoteDecision,
    };
    use ac_03_marketplace_catalog::{
        Listing, ListingCategory, ListingKind, ListingOwner, Pricing, ProductVariant,
    };
    use ac_04_cart_session::{CartSessionApi, CartSessionService, LineKey};
    use shared_types::{DomainError, ListingId, UserId, VaultId};

    use crate::integration::fixtures::*;

    fn vault_with_contributors(vaults: &Vaults, contributors: usize) -> VaultId {
        let vault = vaults
            .create_vault(VaultDraft {
                name: "Tool Library".to_string(),
                icon: "🧰".to_string(),
                goal: 5000,
                description: "Shared tools for the block".to_string(),
                organizer_notes: None,
                organizer: profile("org"),
                category: VaultCategory::Goal,
                family_id: None,
            })
            .unwrap();
        for i in 0..contributors {
            vaults
                .record_contribution(&vault.id, &profile(&format!("c{}", i)), 1000)
                .unwrap();
        }
        vault.id
    }

    fn verify_required(vaults: &Vaults, vault_id: &VaultId, count: usize) {
        let organizer = UserId::from("org");
        for i in 0..count {
            let milestone = vaults
                .add_milestone(vault_id, &format!("Stage {}", i + 1), "", true, &organizer)
                .unwrap();
            vaults
                .attach_verification(
                    vault_id,
                    &milestone.id,
                    MediaUpload {
                        kind: MediaKind::Document,
                        title: format!("Stage {} receipt", i + 1),
                        description: None,
                        url: format!("https://files.example/stage-{}.pdf", i + 1),
                        thumbnail_url: None,
                        uploaded_by: organizer.clone(),
                    },
                )
                .unwrap();
        }
    }

    #[test]
    fn test_scenario_1_full_month_pays_rotation_slot() {
        let clock = clock();
        let ledger = ledger(&clock);
        let circle_id = active_circle(&ledger, 200, None);

        for id in ["m1", "m2", "m3", "m4"] {
            ledger
                .post_contribution(&circle_id, &UserId::from(id), 200)
                .unwrap();
        }
        let payout = ledger.advance_cycle(&circle_id).unwrap();

        assert_eq!(payout.amount, 800);
        assert_eq!(payout.recipient, UserId::from("m1"));
        assert_eq!(payout.month, 1);
        let circle = ledger.get_circle_by_id(&circle_id).unwrap();
        assert_eq!(circle.current_month, 1);
        assert!(circle.members.iter().all(|m| !m.has_paid));
        assert_eq!(circle.pool_balance, 0);
    }

    #[test]
    fn test_scenario_1_double_contribution_rejected() {
        let clock = clock();
        let ledger = ledger(&clock);
        let circle_id = active_circle(&ledger, 200, None);
        let member = UserId::from("m2");

        let first = ledger.post_contribution(&circle_id, &member, 200).unwrap();
        let err = ledger
            .post_contribution(&circle_id, &member, 200)
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyPaid { month: 1, .. }));
        assert_eq!(ledger.get_circle_by_id(&circle_id).unwrap(), first);
    }

    #[test]
    fn test_scenario_2_release_on_quorum() {
        let clock = clock();
        let vaults = vaults(&clock);
        let vault_id = vault_with_contributors(&vaults, 4);
        verify_required(&vaults, &vault_id, 3);
        assert_eq!(
            vaults.get_vault_by_id(&vault_id).unwrap().status,
            VaultStatus::MilestonesMet
        );

        vaults.open_vote_round(&vault_id).unwrap();
        vaults
            .cast_vote(&vault_id, &UserId::from("c0"), VoteDecision::Approve)
            .unwrap();
        let tally = vaults
            .cast_vote(&vault_id, &UserId::from("c1"), VoteDecision::Approve)
            .unwrap();
        assert!(tally.passed);

        let released = vaults.release_funds(&vault_id).unwrap();
        assert_eq!(released.status, VaultStatus::Released);
        assert!(released.released_at.is_some());
    }

    #[test]
    fn test_scenario_3_release_refused_below_quorum() {
        let clock = clock();
        let vaults = vaults(&clock);
        let vault_id = vault_with_contributors(&vaults, 5);
        verify_required(&vaults, &vault_id, 1);
        vaults.open_vote_round(&vault_id).unwrap();
        for (id, decision) in [
            ("c0", VoteDecision::Approve),
            ("c1", VoteDecision::Approve),
            ("c2", VoteDecision::Deny),
        ] {
            vaults
                .cast_vote(&vault_id, &UserId::from(id), decision)
                .unwrap();
        }

        let err = vaults.release_funds(&vault_id).unwrap_err();
        assert!(matches!(err, DomainError::PreconditionFailed { .. }));
        assert_eq!(
            vaults.get_vault_by_id(&vault_id).unwrap().status,
            VaultStatus::Voting
        );
    }

    #[test]
    fn test_scenario_4_full_circle_rejects_approval() {
        let clock = clock();
        let ledger = ledger(&clock);
        let circle_id = active_circle(&ledger, 200, None);

        let request = ledger
            .request_join(&circle_id, profile("late"), 6000, "any room?")
            .unwrap();
        let err = ledger
            .resolve_join_request(
                &circle_id,
                &request.id,
                ac_01_rotation_ledger::JoinDecision::Approve,
            )
            .unwrap_err();

        assert_eq!(err, DomainError::CircleFull { capacity: 4 });
        let circle = ledger.get_circle_by_id(&circle_id).unwrap();
        assert_eq!(circle.filled_seats(), 4);
        assert_eq!(circle.status, CircleStatus::Active);
    }

    #[test]
    fn test_scenario_5_cart_merges_same_variant() {
        let listing = Listing {
            id: ListingId::from("p1"),
            title: "Canvas Tote".to_string(),
            description: String::new(),
            category: ListingCategory::Business,
            kind: Some(ListingKind::Product),
            pricing: Pricing::Fixed { price: 15 },
            image: String::new(),
            external_url: None,
            tags: Vec::new(),
            owner: Some(ListingOwner {
                id: UserId::from("seller"),
                username: "seller".to_string(),
                avatar: String::new(),
            }),
            support_count: 0,
            contact_enabled: false,
            organizer_note: None,
            duration: None,
            available_slots: Vec::new(),
            variants: vec![ProductVariant {
                id: "size".to_string(),
                name: "size".to_string(),
                options: vec!["S".to_string(), "M".to_string()],
            }],
            inventory: None,
            delivery_info: None,
        };
        let medium: BTreeMap<String, String> =
            BTreeMap::from([("size".to_string(), "M".to_string())]);
        let cart = CartSessionService::new(clock());

        cart.add_listing(&listing, medium.clone(), 2).unwrap();
        let merged = cart.add_listing(&listing, medium.clone(), 1).unwrap();

        assert_eq!(merged, 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_price(), 45);

        let small = BTreeMap::from([("size".to_string(), "S".to_string())]);
        cart.add_listing(&listing, small, 1).unwrap();
        assert_eq!(cart.items().len(), 2);

        cart.remove_item(&LineKey {
            listing_id: listing.id.clone(),
            variants: medium,
        })
        .unwrap();
        assert_eq!(cart.total_items(), 1);
    }
}
