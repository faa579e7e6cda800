use jinmyaku_core::{MemoryServices, MockStore, ServiceError, TagListQuery};

fn seeded_services() -> MemoryServices {
    MemoryServices::new(MockStore::with_seed().into_shared())
}

#[test]
fn create_trims_name_and_continues_seeded_counter() {
    let services = seeded_services();

    let created = services.tags.create("  Vue.js  ").unwrap();
    assert_eq!(created.id, "tag-15");
    assert_eq!(created.name, "Vue.js");
}

#[test]
fn create_rejects_blank_name_before_any_mutation() {
    let services = seeded_services();

    let err = services.tags.create("   ").unwrap_err();
    assert!(matches!(err, ServiceError::MissingTagName));
    assert_eq!(err.to_string(), "タグ名は必須項目です");
    assert_eq!(services.tags.count().unwrap(), 14);
}

#[test]
fn create_rejects_duplicate_name_with_seed_casing() {
    let services = seeded_services();

    let err = services.tags.create("React").unwrap_err();
    assert_eq!(err.to_string(), "タグ「React」は既に存在します");
}

#[test]
fn create_duplicate_message_names_the_new_input_not_stored_casing() {
    let services = seeded_services();

    let err = services.tags.create("  REACT  ").unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateTag(_)));
    assert_eq!(err.to_string(), "タグ「REACT」は既に存在します");
    assert_eq!(services.tags.count().unwrap(), 14);
}

#[test]
fn find_by_id_and_find_by_name_return_none_when_absent() {
    let services = seeded_services();

    assert!(services.tags.find_by_id("tag-999").unwrap().is_none());
    assert!(services.tags.find_by_name("存在しない").unwrap().is_none());
}

#[test]
fn find_by_name_matches_case_insensitively() {
    let services = seeded_services();

    let tag = services.tags.find_by_name("rEaCt").unwrap().unwrap();
    assert_eq!(tag.id, "tag-1");
    assert_eq!(tag.name, "React");
}

#[test]
fn find_many_filters_by_case_insensitive_substring() {
    let services = seeded_services();

    let all = services.tags.find_many(&TagListQuery::default()).unwrap();
    assert_eq!(all.len(), 14);

    let scripts = services
        .tags
        .find_many(&TagListQuery {
            name: Some("SCRIPT".to_string()),
        })
        .unwrap();
    let names: Vec<&str> = scripts.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(names, vec!["TypeScript", "JavaScript"]);
}

#[test]
fn find_all_sorts_ascending_by_name_collation() {
    let services = seeded_services();

    let names: Vec<String> = services
        .tags
        .find_all()
        .unwrap()
        .into_iter()
        .map(|tag| tag.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "AWS",
            "Docker",
            "Firebase",
            "Go",
            "GraphQL",
            "JavaScript",
            "Kotlin",
            "Python",
            "React",
            "Rust",
            "Swift",
            "TypeScript",
            "デザイン",
            "マーケティング",
        ]
    );
}

#[test]
fn delete_is_silent_noop_for_missing_id() {
    let services = seeded_services();

    services.tags.delete("tag-999").unwrap();
    assert_eq!(services.tags.count().unwrap(), 14);

    services.tags.delete("tag-1").unwrap();
    assert_eq!(services.tags.count().unwrap(), 13);
    assert!(services.tags.find_by_id("tag-1").unwrap().is_none());
}

#[test]
fn find_or_create_skips_blank_entries_entirely() {
    let services = seeded_services();

    let ids = services
        .tags
        .find_or_create_by_names(&[
            "React".to_string(),
            String::new(),
            "  ".to_string(),
            "Flutter".to_string(),
        ])
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], "tag-1");
    assert_eq!(ids[1], "tag-15");
    assert_eq!(services.tags.count().unwrap(), 15);
}

#[test]
fn find_or_create_with_empty_input_returns_empty() {
    let services = seeded_services();

    let ids = services.tags.find_or_create_by_names(&[]).unwrap();
    assert!(ids.is_empty());
    assert_eq!(services.tags.count().unwrap(), 14);
}

#[test]
fn find_or_create_resolves_existing_and_creates_missing_once() {
    let services = seeded_services();

    let ids = services
        .tags
        .find_or_create_by_names(&["React".to_string(), "Flutter".to_string()])
        .unwrap();
    assert_eq!(ids[0], "tag-1");
    assert_eq!(ids[1], "tag-15");
    assert_eq!(services.tags.count().unwrap(), 15);
}

#[test]
fn find_or_create_reuses_the_id_created_for_a_repeated_name() {
    let services = seeded_services();

    let ids = services
        .tags
        .find_or_create_by_names(&["Flutter".to_string(), "flutter".to_string()])
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], ids[1]);
    assert_eq!(services.tags.count().unwrap(), 15);
}
