//! Unit tests for SafeMap.
//!
//! Covers lookups, conversions, immutability and every transformation,
//! using a small set of people keyed by id.

use rstest::{fixture, rstest};
use safemap::SafeMap;
use safemap::entries::Entries;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Person {
    id: String,
    name: String,
    age: u32,
}

fn person(id: &str, name: &str, age: u32) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        age,
    }
}

#[fixture]
fn alice() -> Person {
    person("alice", "Alice", 42)
}

#[fixture]
fn bob() -> Person {
    person("bob", "Bob", 12)
}

#[fixture]
fn mallory() -> Person {
    person("bob", "Bob", 50)
}

#[fixture]
fn people(alice: Person, bob: Person) -> SafeMap<Person> {
    SafeMap::of(vec![("alice", alice), ("bob", bob)])
}

fn age_person(person: &Person) -> Person {
    Person {
        age: person.age + 1,
        ..person.clone()
    }
}

// =============================================================================
// Absence
// =============================================================================

#[rstest]
fn test_get_missing_key_is_absent(people: SafeMap<Person>) {
    assert_eq!(people.get("mallory"), None);
}

#[rstest]
fn test_find_without_match_is_absent(people: SafeMap<Person>) {
    assert_eq!(people.find(|person| person.age >= 50), None);
}

#[rstest]
fn test_find_returns_first_match_in_order(people: SafeMap<Person>, alice: Person) {
    assert_eq!(people.find(|person| person.age >= 10), Some(&alice));
}

#[rstest]
fn test_has_agrees_with_get(people: SafeMap<Person>) {
    for key in ["alice", "bob", "mallory", ""] {
        assert_eq!(people.has(key), people.get(key).is_some());
    }
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_is_isomorphic_with_arrays(people: SafeMap<Person>, alice: Person, bob: Person) {
    assert_eq!(people.to_array(), vec![alice.clone(), bob.clone()]);
    assert_eq!(
        SafeMap::from_array(|person: &Person| person.id.clone(), vec![alice, bob]),
        people
    );
}

#[rstest]
fn test_is_isomorphic_with_entries(people: SafeMap<Person>, alice: Person, bob: Person) {
    let expected: Entries<String, Person> = vec![
        ("alice".to_string(), alice.clone()),
        ("bob".to_string(), bob.clone()),
    ];

    assert_eq!(people.to_entries(), expected);
    assert_eq!(SafeMap::of(vec![("alice", alice), ("bob", bob)]), people);
    assert_eq!(SafeMap::of(people.to_entries()), people);
}

#[rstest]
fn test_from_array_last_item_wins(alice: Person, bob: Person, mallory: Person) {
    let map = SafeMap::from_array(
        |person: &Person| person.id.clone(),
        vec![bob, alice.clone(), mallory.clone()],
    );

    assert_eq!(map.size(), 2);
    assert_eq!(map.to_array(), vec![alice, mallory]);
}

#[rstest]
fn test_converts_to_unsafe_map(people: SafeMap<Person>, alice: Person, bob: Person) {
    let raw_map = people.to_unsafe_map();

    assert_eq!(raw_map.len(), 2);
    assert_eq!(raw_map.get("alice"), Some(&alice));
    assert_eq!(raw_map.get("bob"), Some(&bob));
}

#[rstest]
fn test_unsafe_map_is_a_snapshot(people: SafeMap<Person>, mallory: Person) {
    let mut raw_map = people.to_unsafe_map();
    raw_map.insert("mallory", mallory);
    raw_map.remove("alice");

    assert!(people.has("alice"));
    assert!(!people.has("mallory"));
    assert_eq!(people.size(), 2);
}

// =============================================================================
// Immutability
// =============================================================================

#[rstest]
fn test_is_immutable(people: SafeMap<Person>, mallory: Person) {
    let _ = people.delete("alice");
    assert!(people.has("alice"));

    let _ = people.set(("mallory", mallory));
    assert!(!people.has("mallory"));
}

#[rstest]
fn test_transformations_leave_receiver_unchanged(people: SafeMap<Person>, mallory: Person) {
    let before = people.clone();

    let _ = people.concat(vec![("mallory", mallory.clone())]);
    let _ = people.filter_keys(["bob"]);
    let _ = people.map(age_person);
    let _ = people.set(("bob", mallory));
    let _ = people.delete("bob");

    assert_eq!(people, before);
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn test_is_mappable(people: SafeMap<Person>, alice: Person, bob: Person) {
    let aged_people = people.map(age_person);

    assert_eq!(
        aged_people.to_array(),
        vec![age_person(&alice), age_person(&bob)]
    );
    assert_eq!(
        aged_people.keys().collect::<Vec<_>>(),
        people.keys().collect::<Vec<_>>()
    );
}

#[rstest]
fn test_map_can_change_value_type(people: SafeMap<Person>) {
    let names = people.map(|person| person.name.clone());
    assert_eq!(names.to_array(), vec!["Alice".to_string(), "Bob".to_string()]);
}

#[rstest]
fn test_has_a_size(people: SafeMap<Person>) {
    let empty: SafeMap<Person> = SafeMap::of(Vec::<(String, Person)>::new());

    assert_eq!(empty.size(), 0);
    assert!(empty.is_empty());
    assert_eq!(people.size(), 2);
    assert_eq!(people.size(), people.to_array().len());
    assert_eq!(people.size(), people.to_entries().len());
}

#[rstest]
fn test_is_concatable(people: SafeMap<Person>, alice: Person, bob: Person, mallory: Person) {
    assert_eq!(
        people.concat(vec![("mallory", mallory.clone())]),
        SafeMap::of(vec![
            ("alice", alice.clone()),
            ("bob", bob.clone()),
            ("mallory", mallory),
        ])
    );

    let concatenated = people.concat(vec![("bob", age_person(&bob))]);
    assert_eq!(
        concatenated,
        SafeMap::of(vec![("alice", alice), ("bob", age_person(&bob))])
    );
    assert_eq!(concatenated.size(), 2);
}

#[rstest]
fn test_concat_with_nothing_is_equal(people: SafeMap<Person>) {
    assert_eq!(people.concat(Vec::<(String, Person)>::new()), people);
}

#[rstest]
fn test_can_be_filtered_by_keys(people: SafeMap<Person>, bob: Person) {
    let nobody = people.filter_keys(["mallory"]);
    assert_eq!(nobody, SafeMap::default());
    assert_eq!(nobody.size(), 0);

    assert_eq!(people.filter_keys(["bob"]), SafeMap::of(vec![("bob", bob)]));
}

#[rstest]
fn test_filter_keys_keeps_own_order(people: SafeMap<Person>) {
    let filtered = people.filter_keys(vec!["bob".to_string(), "alice".to_string()]);

    assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["alice", "bob"]);
    assert_eq!(filtered, people);
}

#[rstest]
fn test_set_overwrites_and_moves_key_last(people: SafeMap<Person>, mallory: Person) {
    let updated = people.set(("alice", mallory.clone()));

    assert_eq!(updated.size(), 2);
    assert_eq!(updated.get("alice"), Some(&mallory));
    assert_eq!(updated.keys().collect::<Vec<_>>(), vec!["bob", "alice"]);
}

#[rstest]
fn test_set_new_key_appends(people: SafeMap<Person>, mallory: Person) {
    let updated = people.set(("mallory", mallory));

    assert_eq!(updated.size(), 3);
    assert_eq!(
        updated.keys().collect::<Vec<_>>(),
        vec!["alice", "bob", "mallory"]
    );
}

#[rstest]
#[case("alice", 1)]
#[case("bob", 1)]
#[case("mallory", 2)]
fn test_delete(people: SafeMap<Person>, #[case] key: &str, #[case] expected_size: usize) {
    let deleted = people.delete(key);

    assert!(!deleted.has(key));
    assert_eq!(deleted.size(), expected_size);
}

#[rstest]
fn test_delete_missing_key_is_equal(people: SafeMap<Person>) {
    assert_eq!(people.delete("mallory"), people);
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_equality_is_order_sensitive(alice: Person, bob: Person) {
    let forward = SafeMap::of(vec![("alice", alice.clone()), ("bob", bob.clone())]);
    let backward = SafeMap::of(vec![("bob", bob), ("alice", alice)]);

    assert_ne!(forward, backward);
}

#[rstest]
fn test_iteration_matches_entries(people: SafeMap<Person>) {
    let borrowed: Vec<(String, Person)> = people
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    let owned: Vec<(String, Person)> = people.clone().into_iter().collect();

    assert_eq!(borrowed, people.to_entries());
    assert_eq!(owned, people.to_entries());
}
