use super::*;
use crate::adapters::InMemoryDirectory;
use crate::domain::learn::test_support::module;
use crate::domain::member::test_support::member;

fn service() -> CommunityDirectoryService<InMemoryDirectory> {
    let service = CommunityDirectoryService::new(InMemoryDirectory::new());
    service.import_member(member("u1", "maya")).unwrap();
    service.import_member(member("u2", "jordan")).unwrap();

    service
        .import_module(module("circles_101", LearnCategory::Circles, &[true, true]))
        .unwrap();
    service
        .import_module(module("budget_basics", LearnCategory::Budgeting, &[true, false]))
        .unwrap();
    let mut bonds = module("bonds_intro", LearnCategory::Bonds, &[]);
    bonds.title = "Bonds Explained".to_string();
    bonds.lessons = 5;
    service.import_module(bonds).unwrap();
    service
}

#[test]
fn test_member_lookups() {
    let service = service();
    assert_eq!(service.get_all_members().len(), 2);
    assert_eq!(
        service.get_member_by_id(&"u2".into()).map(|m| m.profile.username),
        Some("jordan".to_string())
    );
    assert_eq!(
        service.get_member_by_username("maya").map(|m| m.profile.id),
        Some(UserId::from("u1"))
    );
    assert!(service.get_member_by_username("MAYA").is_none());
    assert!(service.get_member_by_id(&"ghost".into()).is_none());
}

#[test]
fn test_invalid_member_not_imported() {
    let service = service();
    let mut bad = member("u3", "sam");
    bad.profile.on_time_rate = -0.1;
    assert!(service.import_member(bad).is_err());
    assert_eq!(service.get_all_members().len(), 2);
}

#[test]
fn test_module_filters() {
    let service = service();
    assert_eq!(service.get_modules().len(), 3);
    assert_eq!(service.modules_in(None).len(), 3);

    let circles = service.modules_in(Some(LearnCategory::Circles));
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].id.as_str(), "circles_101");
    assert!(service.modules_in(Some(LearnCategory::Crypto)).is_empty());

    assert_eq!(service.search_modules("bonds").len(), 1);
    assert!(service.search_modules("  ").is_empty());
}

#[test]
fn test_completion_overview() {
    let service = service();
    assert_eq!(service.completed_module_count(), 1);
    assert_eq!(
        service.next_module().map(|m| m.id),
        Some(ModuleId::from("budget_basics"))
    );

    let progress = service.module_progress(&"budget_basics".into()).unwrap();
    assert_eq!(progress.percent(), 50);
    let progress = service.module_progress(&"bonds_intro".into()).unwrap();
    assert_eq!(progress.total_lessons, 5);
}

#[test]
fn test_unknown_module_progress_not_found() {
    let service = service();
    let err = service.module_progress(&"ghost".into()).unwrap_err();
    assert_eq!(err, DomainError::not_found(EntityKind::LearnModule, "ghost"));
    assert!(service.get_module_by_id(&"ghost".into()).is_none());
}
