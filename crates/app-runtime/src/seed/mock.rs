//! Mock dataset: a handful of neighbours saving, funding and selling together.

use ac_01_rotation_ledger::{
    Circle, CircleDraft, CircleStatus, CycleOutcome, JoinDecision, RotationPolicy,
};
use ac_02_vault_lifecycle::{
    MediaKind, MediaUpload, MessageKind, Vault, VaultCategory, VaultDraft, VaultFamily,
    VoteDecision,
};
use ac_03_marketplace_catalog::{
    Conversation, DirectMessage, FundingBacker, Listing, ListingCategory, ListingKind,
    ListingOwner, Notification, NotificationKind, Pricing, ProductVariant, SocialPost, TimeSlot,
};
use ac_06_community_directory::{
    Difficulty, LearnCategory, LearnLesson, LearnModule, LessonKind, Member,
};
use shared_types::{
    Amount, CircleId, ConversationId, DomainResult, JoinRequestId, ListingId, MemberProfile,
    MessageId, ModuleId, NotificationId, PostId, Timestamp, UserId, VaultFamilyId, VaultId,
};

use super::Dataset;

const HOUR_MS: u64 = 60 * 60 * 1000;
const DAY_MS: u64 = 24 * HOUR_MS;

fn member(id: &str, username: &str, cycles: u32, on_time: f64, age: &str) -> MemberProfile {
    MemberProfile {
        completed_cycles: cycles,
        on_time_rate: on_time,
        account_age: age.to_string(),
        ..MemberProfile::new(id, username)
    }
}

struct Cast {
    alex: MemberProfile,
    maya: MemberProfile,
    jordan: MemberProfile,
    sam: MemberProfile,
    priya: MemberProfile,
    leo: MemberProfile,
    nina: MemberProfile,
}

impl Cast {
    fn new() -> Self {
        Self {
            alex: member("user_alex", "Alex Miller", 3, 0.97, "2 yrs"),
            maya: member("user_maya", "Maya Chen", 5, 1.0, "3 yrs"),
            jordan: member("user_jordan", "Jordan Reyes", 1, 0.92, "8 mos"),
            sam: member("user_sam", "Sam Okafor", 2, 0.88, "1 yr"),
            priya: member("user_priya", "Priya Nair", 4, 0.99, "2 yrs"),
            leo: member("user_leo", "Leo Martins", 0, 1.0, "3 mos"),
            nina: member("user_nina", "Nina Kowalski", 2, 0.95, "1 yr"),
        }
    }
}

/// Seats `joiners` into `circle` through approved join requests.
fn seat(
    circle: &mut Circle,
    joiners: &[&MemberProfile],
    income: Amount,
    now: Timestamp,
) -> DomainResult<()> {
    for joiner in joiners {
        let request_id = JoinRequestId::new(format!("req_{}_{}", circle.id, joiner.id));
        circle.submit_request(
            request_id.clone(),
            (*joiner).clone(),
            income,
            "Count me in".to_string(),
            now,
        )?;
        circle.resolve_request(&request_id, JoinDecision::Approve, &RotationPolicy::JoinOrder, now)?;
    }
    Ok(())
}

/// Every member pays, then the rotation slot is paid out.
fn run_month(circle: &mut Circle, now: Timestamp) -> DomainResult<()> {
    let ids: Vec<UserId> = circle.members.iter().map(|m| m.id().clone()).collect();
    for id in &ids {
        circle.post_contribution(id, circle.contribution)?;
    }
    circle.advance_cycle(now)?;
    Ok(())
}

fn circles(cast: &Cast, now: Timestamp) -> DomainResult<Vec<Circle>> {
    let start = now.saturating_sub(120 * DAY_MS);

    // Active, one payout made, two members paid up for month two.
    let mut tuesday = Circle::create(
        CircleId::from("circle_tuesday_savers"),
        CircleDraft {
            name: "Tuesday Savers".to_string(),
            avatar: None,
            contribution: 200,
            vault_contribution: Some(50),
            description: "Four friends saving for a group trip".to_string(),
        },
        cast.alex.clone(),
        start,
    )?;
    seat(&mut tuesday, &[&cast.maya, &cast.jordan, &cast.sam], 4200, start)?;
    run_month(&mut tuesday, now.saturating_sub(20 * DAY_MS))?;
    tuesday.post_contribution(&cast.maya.id, 200)?;
    tuesday.post_contribution(&cast.jordan.id, 200)?;

    // Recruiting, one pending request.
    let mut builders = Circle::create(
        CircleId::from("circle_block_builders"),
        CircleDraft {
            name: "Block Builders".to_string(),
            avatar: None,
            contribution: 150,
            vault_contribution: None,
            description: "Small monthly pool for home repairs".to_string(),
        },
        cast.priya.clone(),
        now.saturating_sub(6 * DAY_MS),
    )?;
    seat(&mut builders, &[&cast.leo], 3000, now.saturating_sub(5 * DAY_MS))?;
    builders.submit_request(
        JoinRequestId::from("req_block_builders_nina"),
        cast.nina.clone(),
        2800,
        "I can commit to all four months".to_string(),
        now.saturating_sub(DAY_MS),
    )?;

    // Cycle finished, members deciding whether to pool into a vault.
    let mut spring = Circle::create(
        CircleId::from("circle_spring_fund"),
        CircleDraft {
            name: "Spring Fund".to_string(),
            avatar: None,
            contribution: 100,
            vault_contribution: Some(25),
            description: "Seasonal savings for the community market stall".to_string(),
        },
        cast.maya.clone(),
        start,
    )?;
    seat(&mut spring, &[&cast.alex, &cast.leo, &cast.nina], 3500, start)?;
    for month in 0..4u64 {
        run_month(&mut spring, start + (month + 1) * 30 * DAY_MS)?;
    }
    spring.cast_ballot(&cast.maya.id, CycleOutcome::ConvertToVault, now.saturating_sub(HOUR_MS))?;
    spring.cast_ballot(&cast.leo.id, CycleOutcome::ConvertToVault, now.saturating_sub(HOUR_MS))?;

    // Closed after one cycle.
    let mut first_steps = Circle::create(
        CircleId::from("circle_first_steps"),
        CircleDraft {
            name: "First Steps".to_string(),
            avatar: None,
            contribution: 50,
            vault_contribution: None,
            description: "A starter circle for new members".to_string(),
        },
        cast.sam.clone(),
        start,
    )?;
    seat(&mut first_steps, &[&cast.jordan, &cast.priya, &cast.nina], 1500, start)?;
    for month in 0..4u64 {
        run_month(&mut first_steps, start + (month + 1) * 30 * DAY_MS)?;
    }
    first_steps.resolve_vote(CycleOutcome::End)?;

    Ok(vec![tuesday, builders, spring, first_steps])
}

fn document(title: &str, by: &UserId) -> MediaUpload {
    MediaUpload {
        kind: MediaKind::Document,
        title: title.to_string(),
        description: None,
        url: format!(
            "https://files.ascor.app/{}.pdf",
            title.to_lowercase().replace(' ', "-")
        ),
        thumbnail_url: None,
        uploaded_by: by.clone(),
    }
}

fn vaults(cast: &Cast, now: Timestamp) -> DomainResult<(Vec<VaultFamily>, Vec<Vault>)> {
    let family = VaultFamily {
        id: VaultFamilyId::from("family_neighborhood"),
        name: "Neighborhood Projects".to_string(),
        icon: "🏘️".to_string(),
        vault_ids: Vec::new(),
    };
    let opened = now.saturating_sub(60 * DAY_MS);

    // Cause vault still collecting milestones.
    let mut garden = Vault::create(
        VaultId::from("vault_community_garden"),
        VaultDraft {
            name: "Community Garden".to_string(),
            icon: "🌱".to_string(),
            goal: 5000,
            description: "Raised beds and a tool shed for the east lot".to_string(),
            organizer_notes: Some("Receipts go up as each stage closes".to_string()),
            organizer: cast.priya.clone(),
            category: VaultCategory::Cause,
            family_id: Some(family.id.clone()),
        },
        opened,
    )?;
    garden.record_contribution(&cast.alex, 500, opened + DAY_MS)?;
    garden.record_contribution(&cast.maya, 300, opened + 2 * DAY_MS)?;
    garden.record_contribution(&cast.priya, 1200, opened + 3 * DAY_MS)?;
    let lot = garden.add_milestone(
        "Secure the lot",
        "Signed lease with the city",
        true,
        cast.priya.id.clone(),
    )?;
    let beds = garden.add_milestone(
        "Build raised beds",
        "Twelve cedar beds",
        true,
        cast.priya.id.clone(),
    )?;
    garden.add_milestone("Opening day", "Planting party", false, cast.priya.id.clone())?;
    garden.attach_verification(&lot.id, document("Lot lease", &cast.priya.id), opened + 10 * DAY_MS)?;
    garden.start_milestone(&beds.id)?;
    garden.post_message(
        cast.priya.id.clone(),
        "Lumber is ordered, build weekend is the 14th",
        MessageKind::Update,
        None,
        now.saturating_sub(2 * DAY_MS),
    )?;

    // Every required milestone verified, release vote under way.
    let mut van = Vault::create(
        VaultId::from("vault_delivery_van"),
        VaultDraft {
            name: "Delivery Van".to_string(),
            icon: "🚐".to_string(),
            goal: 12000,
            description: "Shared van for the co-op's weekly deliveries".to_string(),
            organizer_notes: None,
            organizer: cast.maya.clone(),
            category: VaultCategory::Goal,
            family_id: Some(family.id.clone()),
        },
        opened,
    )?;
    for (contributor, amount) in [
        (&cast.maya, 4000),
        (&cast.alex, 3000),
        (&cast.jordan, 2500),
        (&cast.sam, 2500),
    ] {
        van.record_contribution(contributor, amount, opened + DAY_MS)?;
    }
    for title in ["Pick a dealer", "Inspection report", "Insurance quote"] {
        let milestone = van.add_milestone(title, "", true, cast.maya.id.clone())?;
        van.attach_verification(&milestone.id, document(title, &cast.maya.id), opened + 30 * DAY_MS)?;
    }
    van.open_vote_round(now.saturating_sub(DAY_MS), None)?;
    van.cast_vote(&cast.maya.id, VoteDecision::Approve, now.saturating_sub(DAY_MS))?;

    // Personal goal, no milestones yet.
    let mut rainy_day = Vault::create(
        VaultId::from("vault_rainy_day"),
        VaultDraft {
            name: "Rainy Day".to_string(),
            icon: "☔".to_string(),
            goal: 2000,
            description: "Emergency cushion".to_string(),
            organizer_notes: None,
            organizer: cast.alex.clone(),
            category: VaultCategory::Goal,
            family_id: None,
        },
        now.saturating_sub(10 * DAY_MS),
    )?;
    rainy_day.record_contribution(&cast.alex, 250, now.saturating_sub(9 * DAY_MS))?;

    Ok((vec![family], vec![garden, van, rainy_day]))
}

fn owner(profile: &MemberProfile) -> Option<ListingOwner> {
    Some(ListingOwner {
        id: profile.id.clone(),
        username: profile.username.clone(),
        avatar: profile.avatar.clone(),
    })
}

fn blank_listing(id: &str, title: &str, category: ListingCategory, pricing: Pricing) -> Listing {
    Listing {
        id: ListingId::from(id),
        title: title.to_string(),
        description: String::new(),
        category,
        kind: None,
        pricing,
        image: format!("https://images.ascor.app/{}.jpg", id),
        external_url: None,
        tags: Vec::new(),
        owner: None,
        support_count: 0,
        contact_enabled: false,
        organizer_note: None,
        duration: None,
        available_slots: Vec::new(),
        variants: Vec::new(),
        inventory: None,
        delivery_info: None,
    }
}

fn listings(cast: &Cast) -> Vec<Listing> {
    let bread = Listing {
        description: "Naturally leavened, baked Saturday mornings".to_string(),
        kind: Some(ListingKind::Product),
        tags: vec!["food".to_string(), "local".to_string()],
        owner: owner(&cast.alex),
        support_count: 12,
        contact_enabled: true,
        variants: vec![ProductVariant {
            id: "size".to_string(),
            name: "Size".to_string(),
            options: vec!["Half".to_string(), "Whole".to_string()],
        }],
        inventory: Some(20),
        delivery_info: Some("Pickup on Elm St or local delivery".to_string()),
        ..blank_listing(
            "item_sourdough",
            "Sourdough Loaf",
            ListingCategory::Business,
            Pricing::Fixed { price: 8 },
        )
    };

    let tutoring = Listing {
        description: "Algebra and geometry help for middle schoolers".to_string(),
        kind: Some(ListingKind::Service),
        tags: vec!["education".to_string()],
        owner: owner(&cast.alex),
        support_count: 4,
        contact_enabled: true,
        duration: Some("1 hour".to_string()),
        available_slots: vec![
            TimeSlot {
                id: "slot_mon".to_string(),
                date: "Mon".to_string(),
                time: "16:00".to_string(),
                available: true,
            },
            TimeSlot {
                id: "slot_wed".to_string(),
                date: "Wed".to_string(),
                time: "16:00".to_string(),
                available: false,
            },
        ],
        ..blank_listing(
            "item_math_tutoring",
            "Math Tutoring",
            ListingCategory::Service,
            Pricing::Fixed { price: 30 },
        )
    };

    let tees = Listing {
        description: "Screen printed shirts, proceeds go to the garden".to_string(),
        kind: Some(ListingKind::Product),
        tags: vec!["apparel".to_string(), "local".to_string()],
        owner: owner(&cast.maya),
        support_count: 9,
        variants: vec![
            ProductVariant {
                id: "size".to_string(),
                name: "Size".to_string(),
                options: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            },
            ProductVariant {
                id: "color".to_string(),
                name: "Color".to_string(),
                options: vec!["Green".to_string(), "Sand".to_string()],
            },
        ],
        inventory: Some(40),
        ..blank_listing(
            "item_garden_tee",
            "Garden Tee",
            ListingCategory::Business,
            Pricing::Fixed { price: 22 },
        )
    };

    let food_bank = Listing {
        description: "Restocking the Westside pantry before winter".to_string(),
        tags: vec!["cause".to_string(), "food".to_string()],
        owner: owner(&cast.priya),
        support_count: 31,
        organizer_note: Some("Every dollar buys three meals".to_string()),
        ..blank_listing(
            "item_food_bank",
            "Westside Food Bank",
            ListingCategory::Cause,
            Pricing::Funding {
                goal: 3000,
                raised: 1200,
                backers: vec![
                    FundingBacker {
                        id: cast.alex.id.clone(),
                        username: cast.alex.username.clone(),
                        avatar: cast.alex.avatar.clone(),
                        amount: 200,
                    },
                    FundingBacker {
                        id: cast.nina.id.clone(),
                        username: cast.nina.username.clone(),
                        avatar: cast.nina.avatar.clone(),
                        amount: 1000,
                    },
                ],
            },
        )
    };

    let credit_union = Listing {
        description: "Member-owned savings accounts with no monthly fees".to_string(),
        external_url: Some("https://example.org/credit-union".to_string()),
        tags: vec!["finance".to_string()],
        ..blank_listing(
            "item_credit_union",
            "Neighborhood Credit Union",
            ListingCategory::External,
            Pricing::Unpriced,
        )
    };

    vec![bread, tutoring, tees, food_bank, credit_union]
}

fn post(
    id: &str,
    author: &MemberProfile,
    content: &str,
    tags: &[&str],
    likes: u32,
    timestamp: Timestamp,
) -> SocialPost {
    SocialPost {
        id: PostId::from(id),
        user_id: author.id.clone(),
        username: author.username.clone(),
        user_avatar: author.avatar.clone(),
        content: content.to_string(),
        timestamp,
        likes,
        bookmarks: 0,
        liked: false,
        bookmarked: false,
        attached_listing: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        mentions: Vec::new(),
    }
}

fn posts(cast: &Cast, now: Timestamp) -> Vec<SocialPost> {
    let mut launch = post(
        "post_bread_launch",
        &cast.alex,
        "Saturday loaves are back! Half and whole sizes.",
        &["food", "local"],
        18,
        now.saturating_sub(3 * HOUR_MS),
    );
    launch.attached_listing = Some(ListingId::from("item_sourdough"));

    let mut payout = post(
        "post_first_payout",
        &cast.maya,
        "First Tuesday Savers payout landed, thanks @alex for organizing",
        &["savings"],
        25,
        now.saturating_sub(DAY_MS),
    );
    payout.mentions = vec!["alex".to_string()];

    vec![
        launch,
        payout,
        post(
            "post_garden_lease",
            &cast.priya,
            "Lease signed for the east lot. Raised beds next!",
            &["garden", "community"],
            40,
            now.saturating_sub(5 * DAY_MS),
        ),
    ]
}

fn notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    read: bool,
    timestamp: Timestamp,
) -> Notification {
    Notification {
        id: NotificationId::from(id),
        title: title.to_string(),
        message: message.to_string(),
        timestamp,
        read,
        kind,
    }
}

fn notifications(now: Timestamp) -> Vec<Notification> {
    vec![
        notification(
            "notif_contribution_due",
            NotificationKind::Circle,
            "Contribution due",
            "Your $200 Tuesday Savers contribution for month 2 is due Friday",
            false,
            now.saturating_sub(2 * HOUR_MS),
        ),
        notification(
            "notif_vote_open",
            NotificationKind::Vault,
            "Release vote open",
            "Delivery Van met every milestone. Cast your vote.",
            false,
            now.saturating_sub(DAY_MS),
        ),
        notification(
            "notif_payout",
            NotificationKind::Payout,
            "Payout sent",
            "$800 was paid out to Alex Miller",
            true,
            now.saturating_sub(20 * DAY_MS),
        ),
        notification(
            "notif_cycle_vote",
            NotificationKind::Circle,
            "Spring Fund cycle complete",
            "Vote to restart, convert to a vault or end the circle",
            true,
            now.saturating_sub(2 * DAY_MS),
        ),
    ]
}

fn message(
    id: &str,
    conversation: &ConversationId,
    sender: &MemberProfile,
    content: &str,
    read: bool,
    timestamp: Timestamp,
) -> DirectMessage {
    DirectMessage {
        id: MessageId::from(id),
        conversation_id: conversation.clone(),
        sender_id: sender.id.clone(),
        sender_username: sender.username.clone(),
        sender_avatar: sender.avatar.clone(),
        content: content.to_string(),
        timestamp,
        read,
    }
}

fn conversations(cast: &Cast, now: Timestamp) -> Vec<(Conversation, Vec<DirectMessage>)> {
    let with_maya = ConversationId::from("conv_maya");
    let maya_thread = vec![
        message(
            "msg_maya_1",
            &with_maya,
            &cast.alex,
            "Can you cover the van inspection this week?",
            true,
            now.saturating_sub(5 * HOUR_MS),
        ),
        message(
            "msg_maya_2",
            &with_maya,
            &cast.maya,
            "Yes, uploading the report tonight",
            false,
            now.saturating_sub(HOUR_MS),
        ),
        message(
            "msg_maya_3",
            &with_maya,
            &cast.maya,
            "Done, vote is open",
            false,
            now.saturating_sub(HOUR_MS / 2),
        ),
    ];

    let with_leo = ConversationId::from("conv_leo");
    let leo_thread = vec![message(
        "msg_leo_1",
        &with_leo,
        &cast.leo,
        "Thanks for the tutoring slot!",
        true,
        now.saturating_sub(3 * DAY_MS),
    )];

    vec![
        (
            Conversation {
                id: with_maya,
                participant_id: cast.maya.id.clone(),
                participant_username: cast.maya.username.clone(),
                participant_avatar: cast.maya.avatar.clone(),
                last_message: "Done, vote is open".to_string(),
                last_message_time: now.saturating_sub(HOUR_MS / 2),
                unread_count: 2,
                is_online: true,
            },
            maya_thread,
        ),
        (
            Conversation {
                id: with_leo,
                participant_id: cast.leo.id.clone(),
                participant_username: cast.leo.username.clone(),
                participant_avatar: cast.leo.avatar.clone(),
                last_message: "Thanks for the tutoring slot!".to_string(),
                last_message_time: now.saturating_sub(3 * DAY_MS),
                unread_count: 0,
                is_online: false,
            },
            leo_thread,
        ),
    ]
}

/// Directory entries for the whole cast. Circle counts and the business flag
/// are derived from the seeded circles and listings.
fn members(cast: &Cast, circles: &[Circle], listings: &[Listing], now: Timestamp) -> Vec<Member> {
    let entries = [
        (&cast.alex, 730, 4_850, "Baker on weekends, math tutor on weeknights."),
        (&cast.maya, 1_095, 9_200, "Organizer of the Spring Fund and the van vault."),
        (&cast.jordan, 240, 1_100, "Saving for a used car."),
        (&cast.sam, 365, 2_300, "Started First Steps to help new neighbours."),
        (&cast.priya, 730, 6_400, "Runs the food bank drive."),
        (&cast.leo, 90, 450, ""),
        (&cast.nina, 365, 2_050, "Retired librarian, garden volunteer."),
    ];
    entries
        .into_iter()
        .map(|(profile, days, total_saved, bio)| {
            let open_circles = circles
                .iter()
                .filter(|c| c.status != CircleStatus::Completed && c.is_member(&profile.id))
                .count() as u32;
            let is_business_owner = listings
                .iter()
                .any(|l| l.category == ListingCategory::Business && l.owned_by(&profile.id));
            Member {
                bio: bio.to_string(),
                circles_count: open_circles,
                total_saved,
                is_business_owner,
                ..Member::new(profile.clone(), now.saturating_sub(days * DAY_MS))
            }
        })
        .collect()
}

fn lesson(id: &str, title: &str, minutes: u32, kind: LessonKind, completed: bool) -> LearnLesson {
    LearnLesson {
        id: id.to_string(),
        title: title.to_string(),
        duration: format!("{} min", minutes),
        kind,
        completed,
    }
}

fn learn_module(
    id: &str,
    title: &str,
    category: LearnCategory,
    difficulty: Difficulty,
    lessons: u32,
) -> LearnModule {
    LearnModule {
        id: ModuleId::from(id),
        title: title.to_string(),
        summary: String::new(),
        image: format!("https://images.ascor.app/learn/{}.jpg", id),
        duration: format!("{} min", lessons * 8),
        completed: false,
        lessons,
        category,
        difficulty,
        author: "Ascor Learning".to_string(),
        author_avatar: "https://images.ascor.app/learn/author.png".to_string(),
        rating: 4.6,
        enrolled_count: 0,
        lessons_list: Vec::new(),
        key_takeaways: Vec::new(),
    }
}

fn learn_modules() -> Vec<LearnModule> {
    let circles = LearnModule {
        summary: "How a four-seat savings circle rotates its payout".to_string(),
        completed: true,
        rating: 4.9,
        enrolled_count: 1_240,
        lessons_list: vec![
            lesson("circles_1", "What is a savings circle?", 6, LessonKind::Video, true),
            lesson("circles_2", "Payout order and fairness", 8, LessonKind::Article, true),
            lesson("circles_3", "Check your understanding", 4, LessonKind::Quiz, true),
        ],
        key_takeaways: vec![
            "Every member is paid exactly once per cycle".to_string(),
            "Missed contributions hold up the whole circle".to_string(),
        ],
        ..learn_module(
            "module_circles_101",
            "Savings Circles 101",
            LearnCategory::Circles,
            Difficulty::Beginner,
            3,
        )
    };

    let budgeting = LearnModule {
        summary: "Build a monthly budget that leaves room for your circle".to_string(),
        rating: 4.7,
        enrolled_count: 860,
        lessons_list: vec![
            lesson("budget_1", "Tracking what comes in", 7, LessonKind::Video, true),
            lesson("budget_2", "Fixed versus flexible costs", 9, LessonKind::Article, false),
            lesson("budget_3", "Plan your month", 12, LessonKind::Interactive, false),
            lesson("budget_4", "Budget check", 5, LessonKind::Quiz, false),
        ],
        ..learn_module(
            "module_budget_basics",
            "Budgeting Basics",
            LearnCategory::Budgeting,
            Difficulty::Beginner,
            4,
        )
    };

    let emergency = LearnModule {
        summary: "Sizing and keeping a rainy-day fund".to_string(),
        enrolled_count: 540,
        ..learn_module(
            "module_emergency_fund",
            "Your Emergency Fund",
            LearnCategory::Savings,
            Difficulty::Beginner,
            5,
        )
    };

    let bonds = LearnModule {
        summary: "Coupons, maturities and why rates move prices".to_string(),
        rating: 4.4,
        enrolled_count: 310,
        ..learn_module(
            "module_bonds_explained",
            "Bonds Explained",
            LearnCategory::Bonds,
            Difficulty::Intermediate,
            6,
        )
    };

    let property = LearnModule {
        summary: "Down payments, mortgages and pooling toward a first home".to_string(),
        rating: 4.5,
        enrolled_count: 420,
        ..learn_module(
            "module_first_home",
            "Saving for a First Home",
            LearnCategory::RealEstate,
            Difficulty::Advanced,
            7,
        )
    };

    vec![circles, budgeting, emergency, bonds, property]
}

/// Build the mock dataset relative to `now`.
pub fn mock_dataset(now: Timestamp) -> DomainResult<Dataset> {
    let cast = Cast::new();
    let (families, vaults) = vaults(&cast, now)?;
    let circles = circles(&cast, now)?;
    let listings = listings(&cast);
    Ok(Dataset {
        members: members(&cast, &circles, &listings, now),
        modules: learn_modules(),
        circles,
        families,
        vaults,
        listings,
        posts: posts(&cast, now),
        notifications: notifications(now),
        conversations: conversations(&cast, now),
        current_user: cast.alex,
    })
}

#[cfg(test)]
mod tests {
    use ac_01_rotation_ledger::CircleStatus;
    use ac_02_vault_lifecycle::VaultStatus;

    use super::*;

    const NOW: Timestamp = 1_700_000_000_000;

    #[test]
    fn test_mock_dataset_builds() {
        let dataset = mock_dataset(NOW).unwrap();
        assert_eq!(dataset.current_user.id.as_str(), "user_alex");
        assert_eq!(dataset.circles.len(), 4);
        assert_eq!(dataset.vaults.len(), 3);
        assert_eq!(dataset.families.len(), 1);
    }

    #[test]
    fn test_circles_cover_every_status() {
        let dataset = mock_dataset(NOW).unwrap();
        let statuses: Vec<CircleStatus> = dataset.circles.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![
                CircleStatus::Active,
                CircleStatus::Recruiting,
                CircleStatus::Voting,
                CircleStatus::Completed,
            ]
        );

        let tuesday = &dataset.circles[0];
        assert_eq!(tuesday.current_month, 1);
        assert_eq!(tuesday.payout_history.len(), 1);
        assert_eq!(tuesday.payout_history[0].amount, 800);
        assert_eq!(tuesday.pool_balance, 400);
        assert_eq!(tuesday.unpaid_members().count(), 2);
    }

    #[test]
    fn test_directory_entries_follow_seeded_state() {
        let dataset = mock_dataset(NOW).unwrap();
        assert_eq!(dataset.members.len(), 7);
        assert!(dataset.members.iter().all(|m| m.validate().is_ok()));

        let alex = &dataset.members[0];
        assert_eq!(alex.id(), &dataset.current_user.id);
        assert_eq!(alex.circles_count, 2);
        assert!(alex.is_business_owner);

        let priya = dataset
            .members
            .iter()
            .find(|m| m.id().as_str() == "user_priya")
            .unwrap();
        assert_eq!(priya.circles_count, 1);
        assert!(!priya.is_business_owner);
    }

    #[test]
    fn test_learn_modules_are_valid() {
        let dataset = mock_dataset(NOW).unwrap();
        assert_eq!(dataset.modules.len(), 5);
        assert!(dataset.modules.iter().all(|m| m.validate().is_ok()));
        assert_eq!(dataset.modules.iter().filter(|m| m.completed).count(), 1);
    }

    #[test]
    fn test_van_vault_is_voting() {
        let dataset = mock_dataset(NOW).unwrap();
        let van = dataset
            .vaults
            .iter()
            .find(|v| v.id.as_str() == "vault_delivery_van")
            .unwrap();
        assert_eq!(van.status, VaultStatus::Voting);
        assert_eq!(van.raised, 12000);
        let tally = van.tally();
        assert_eq!(tally.approvals, 1);
        assert!(!tally.passed);
    }

    #[test]
    fn test_listings_are_valid() {
        let dataset = mock_dataset(NOW).unwrap();
        for listing in &dataset.listings {
            listing.validate().unwrap();
        }
        let own = dataset
            .listings
            .iter()
            .filter(|l| l.owned_by(&dataset.current_user.id))
            .count();
        assert_eq!(own, 2);
    }
}
