//! Invariants checked against generated command sequences.

#[cfg(test)]
mod tests {
    use ac_01_rotation_ledger::{CircleStatus, JoinDecision, RotationLedgerApi, TOTAL_SEATS};
    use ac_02_vault_lifecycle::{
        MediaKind, MediaUpload, VaultCategory, VaultDraft, VaultLifecycleApi, VaultStatus,
        VoteDecision,
    };
    use proptest::prelude::*;
    use shared_types::{DomainError, UserId};

    use crate::integration::fixtures::*;

    proptest! {
        #[test]
        fn seats_never_exceed_capacity(decisions in prop::collection::vec(any::<bool>(), 1..12)) {
            let clock = clock();
            let ledger = ledger(&clock);
            let circle = ledger.create_circle(profile("org"), draft(100, None)).unwrap();

            for (i, approve) in decisions.iter().enumerate() {
                let applicant = profile(&format!("a{}", i));
                let Ok(request) = ledger.request_join(&circle.id, applicant, 4000, "") else {
                    continue;
                };
                let decision = if *approve { JoinDecision::Approve } else { JoinDecision::Decline };
                let result = ledger.resolve_join_request(&circle.id, &request.id, decision);

                let snapshot = ledger.get_circle_by_id(&circle.id).unwrap();
                prop_assert!(snapshot.filled_seats() <= TOTAL_SEATS);
                prop_assert_eq!(
                    snapshot.status == CircleStatus::Active,
                    snapshot.filled_seats() == TOTAL_SEATS
                );
                if let Err(err) = result {
                    prop_assert_eq!(err, DomainError::CircleFull { capacity: TOTAL_SEATS });
                }
            }
        }

        #[test]
        fn release_follows_quorum(contributors in 1usize..8, approvals_seed in 0usize..8) {
            let approvals = approvals_seed.min(contributors);
            let clock = clock();
            let vaults = vaults(&clock);
            let vault = vaults
                .create_vault(VaultDraft {
                    name: "Quorum".to_string(),
                    icon: String::new(),
                    goal: 100,
                    description: String::new(),
                    organizer_notes: None,
                    organizer: profile("org"),
                    category: VaultCategory::Goal,
                    family_id: None,
                })
                .unwrap();
            for i in 0..contributors {
                vaults.record_contribution(&vault.id, &profile(&format!("c{}", i)), 10).unwrap();
            }
            let milestone = vaults
                .add_milestone(&vault.id, "Done", "", true, &UserId::from("org"))
                .unwrap();
            vaults
                .attach_verification(
                    &vault.id,
                    &milestone.id,
                    MediaUpload {
                        kind: MediaKind::Link,
                        title: "Proof".to_string(),
                        description: None,
                        url: "https://example.org/proof".to_string(),
                        thumbnail_url: None,
                        uploaded_by: UserId::from("org"),
                    },
                )
                .unwrap();
            vaults.open_vote_round(&vault.id).unwrap();
            for i in 0..contributors {
                let decision = if i < approvals { VoteDecision::Approve } else { VoteDecision::Deny };
                vaults.cast_vote(&vault.id, &UserId::from(format!("c{}", i)), decision).unwrap();
            }

            let eligible = approvals >= contributors.div_ceil(2);
            let released = vaults.release_funds(&vault.id);
            prop_assert_eq!(released.is_ok(), eligible);
            let status = vaults.get_vault_by_id(&vault.id).unwrap().status;
            prop_assert_eq!(
                status,
                if eligible { VaultStatus::Released } else { VaultStatus::Voting }
            );
        }
    }
}
