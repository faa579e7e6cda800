use jinmyaku_core::{
    CreateEventRequest, CreatePersonRequest, MemoryServices, MockStore, Person, Tag,
};

fn seeded_services() -> MemoryServices {
    MemoryServices::new(MockStore::with_seed().into_shared())
}

fn bare_person(id: &str, name: &str, created_at: i64) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        handle: None,
        company: None,
        position: None,
        description: None,
        product_name: None,
        memo: None,
        github_id: None,
        created_at,
        updated_at: created_at,
        tags: Vec::new(),
        events: Vec::new(),
        relations: Vec::new(),
    }
}

#[test]
fn clear_mock_data_empties_tags_and_resets_the_counter() {
    let services = seeded_services();

    services.tags.clear_mock_data().unwrap();
    assert_eq!(services.tags.count().unwrap(), 0);

    let created = services.tags.create("Alpha").unwrap();
    assert_eq!(created.id, "tag-1");
}

#[test]
fn add_mock_data_observes_seeded_ids_for_generation() {
    let services = seeded_services();

    services.tags.clear_mock_data().unwrap();
    services
        .tags
        .add_mock_data(vec![Tag::new("tag-7", "Custom")])
        .unwrap();

    let created = services.tags.create("Next").unwrap();
    assert_eq!(created.id, "tag-8");
}

#[test]
fn reset_mock_data_restores_the_tag_fixture() {
    let services = seeded_services();

    services.tags.create("Vue.js").unwrap();
    services.tags.delete("tag-1").unwrap();
    assert_eq!(services.tags.count().unwrap(), 14);

    services.tags.reset_mock_data().unwrap();
    assert_eq!(services.tags.count().unwrap(), 14);
    let react = services.tags.find_by_name("React").unwrap().unwrap();
    assert_eq!(react.id, "tag-1");

    let created = services.tags.create("Vue.js").unwrap();
    assert_eq!(created.id, "tag-15");
}

#[test]
fn person_clear_and_add_mock_data_round_trip() {
    let services = seeded_services();

    services.persons.clear_mock_data().unwrap();
    assert_eq!(services.persons.count().unwrap(), 0);

    services
        .persons
        .add_mock_data(vec![bare_person("test-person-9", "手動シード", 1_000)])
        .unwrap();
    assert_eq!(services.persons.count().unwrap(), 1);
    let seeded = services.persons.find_by_id("test-person-9").unwrap().unwrap();
    assert_eq!(seeded.name, "手動シード");

    // Seeded ids live in a foreign namespace; generation still starts at 1.
    let created = services
        .persons
        .create(CreatePersonRequest {
            name: "生成太郎".to_string(),
            ..CreatePersonRequest::default()
        })
        .unwrap();
    assert_eq!(created.id, "person-1");
}

#[test]
fn event_clear_drops_join_records_and_reset_restores_them() {
    let services = seeded_services();

    services.events.clear_mock_data().unwrap();
    assert_eq!(services.events.count().unwrap(), 0);
    assert_eq!(services.events.get_participant_count("event-1").unwrap(), 0);

    let created = services
        .events
        .create(CreateEventRequest {
            name: "リセット後".to_string(),
            ..CreateEventRequest::default()
        })
        .unwrap();
    assert_eq!(created.id, "event-1");

    services.events.reset_mock_data().unwrap();
    assert_eq!(services.events.count().unwrap(), 2);
    assert_eq!(services.events.get_participant_count("event-1").unwrap(), 2);
}

#[test]
fn services_over_one_shared_store_see_each_others_writes() {
    let store = MockStore::with_seed().into_shared();
    let first = MemoryServices::new(store.clone());
    let second = MemoryServices::new(store);

    let created = first.tags.create("Vue.js").unwrap();
    let seen = second.tags.find_by_id(&created.id).unwrap().unwrap();
    assert_eq!(seen.name, "Vue.js");

    second.persons.delete("test-person-3").unwrap();
    assert_eq!(first.persons.count().unwrap(), 2);
}
