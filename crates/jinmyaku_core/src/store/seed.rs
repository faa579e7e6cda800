//! Canonical mock fixture.
//!
//! # Responsibility
//! - Seed the deterministic dataset development builds and tests share.
//!
//! # Invariants
//! - Seeded tag ids occupy `tag-1`..`tag-14`; the first generated tag id
//!   is therefore `tag-15`.
//! - Seeded persons use the `test-person-*` namespace so generated
//!   `person-N` ids never collide with them.
//! - Embedded person `events` arrays agree with the participant join
//!   records seeded here.

use crate::model::event::{Event, EventParticipant};
use crate::model::person::Person;
use crate::model::relation::Relation;
use crate::model::tag::Tag;
use crate::store::MockStore;

const SEED_DAY_1: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z
const SEED_DAY_2: i64 = 1_704_153_600_000; // 2024-01-02T00:00:00Z
const SEED_DAY_3: i64 = 1_704_240_000_000; // 2024-01-03T00:00:00Z
const SEED_EVENT_DATE: i64 = 1_706_281_200_000; // 2024-01-26T15:00:00Z

/// Applies the full fixture to an empty store.
pub(crate) fn apply(store: &mut MockStore) {
    seed_tags(store);
    seed_events(store);
    seed_persons(store);
}

pub(crate) fn seed_tags(store: &mut MockStore) {
    let names = [
        "React",
        "TypeScript",
        "JavaScript",
        "Python",
        "Go",
        "Rust",
        "Swift",
        "Kotlin",
        "Docker",
        "AWS",
        "GraphQL",
        "Firebase",
        "デザイン",
        "マーケティング",
    ];
    let tags = names
        .iter()
        .enumerate()
        .map(|(index, name)| Tag::new(format!("tag-{}", index + 1), *name))
        .collect();
    store.add_tags(tags);
}

pub(crate) fn seed_events(store: &mut MockStore) {
    store.add_events(vec![
        Event {
            id: "event-1".to_string(),
            name: "React勉強会 #42".to_string(),
            date: Some(SEED_EVENT_DATE),
            location: Some("東京・渋谷".to_string()),
        },
        Event {
            id: "event-2".to_string(),
            name: "もくもく会".to_string(),
            date: None,
            location: Some("オンライン".to_string()),
        },
    ]);
    store.add_participants(vec![
        EventParticipant::new("test-person-1", "event-1"),
        EventParticipant::new("test-person-2", "event-1"),
    ]);
}

pub(crate) fn seed_persons(store: &mut MockStore) {
    let react = seeded_tag(store, "tag-1");
    let typescript = seeded_tag(store, "tag-2");
    let design = seeded_tag(store, "tag-13");
    let study_meetup = seeded_event(store, "event-1");

    store.add_persons(vec![
        Person {
            id: "test-person-1".to_string(),
            name: "山田太郎".to_string(),
            handle: Some("@taro_yama".to_string()),
            company: Some("テックスタート株式会社".to_string()),
            position: Some("エンジニア".to_string()),
            description: None,
            product_name: Some("名刺管理アプリ".to_string()),
            memo: Some("Tech Conference Tokyoで名刺交換".to_string()),
            github_id: Some("taroyama".to_string()),
            created_at: SEED_DAY_1,
            updated_at: SEED_DAY_1,
            tags: vec![react, typescript],
            events: vec![study_meetup.clone()],
            relations: vec![Relation {
                id: "relation-1".to_string(),
                source_id: "test-person-1".to_string(),
                target_id: "test-person-2".to_string(),
                relation_type: "同僚".to_string(),
                created_at: SEED_DAY_2,
            }],
        },
        Person {
            id: "test-person-2".to_string(),
            name: "鈴木花子".to_string(),
            handle: None,
            company: Some("デザインラボ合同会社".to_string()),
            position: Some("デザイナー".to_string()),
            description: Some("プロダクトデザインが専門".to_string()),
            product_name: None,
            memo: None,
            github_id: None,
            created_at: SEED_DAY_2,
            updated_at: SEED_DAY_2,
            tags: vec![design],
            events: vec![study_meetup],
            relations: Vec::new(),
        },
        Person {
            id: "test-person-3".to_string(),
            name: "佐藤次郎".to_string(),
            handle: None,
            company: None,
            position: None,
            description: None,
            product_name: None,
            memo: None,
            github_id: None,
            created_at: SEED_DAY_3,
            updated_at: SEED_DAY_3,
            tags: Vec::new(),
            events: Vec::new(),
            relations: Vec::new(),
        },
    ]);
}

fn seeded_tag(store: &MockStore, id: &str) -> Tag {
    store
        .tags
        .iter()
        .find(|tag| tag.id == id)
        .cloned()
        .expect("fixture tag must be seeded before persons")
}

fn seeded_event(store: &MockStore, id: &str) -> Event {
    store
        .events
        .iter()
        .find(|event| event.id == id)
        .cloned()
        .expect("fixture event must be seeded before persons")
}
