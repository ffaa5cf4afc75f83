//! Integration tests for hobbit record checks.

use setwise_cli::hobbit::{Hobbit, HobbitError, HobbitRules};

fn rules() -> HobbitRules {
    HobbitRules::new().expect("built-in rules compile")
}

#[test]
fn test_valid_hobbit() {
    let rules = rules();
    let hobbit = Hobbit::validate(&rules, 123, "Bilbo", "McBeggins").unwrap();
    assert_eq!(
        hobbit,
        Hobbit {
            id: 123,
            first_name: "Bilbo".to_string(),
            last_name: "McBeggins".to_string(),
        }
    );
    assert_eq!(hobbit.to_string(), "#123 Bilbo McBeggins");
}

#[test]
fn test_invalid_hobbit_reports_id_then_last_name() {
    let rules = rules();
    let errors = Hobbit::validate(&rules, -1, "Bilbo", "Ivanov").unwrap_err();

    assert_eq!(errors.len(), 2);
    match &errors[0] {
        HobbitError::Id(exclusion) => {
            assert_eq!(exclusion.expression(), &rules.db_id);
            assert_eq!(*exclusion.value(), -1);
        }
        other => panic!("expected id exclusion, got {other:?}"),
    }
    match &errors[1] {
        HobbitError::Name(exclusion) => {
            assert_eq!(exclusion.expression(), &rules.last_name);
            assert_eq!(exclusion.value(), "Ivanov");
        }
        other => panic!("expected name exclusion, got {other:?}"),
    }
}

#[test]
fn test_every_field_rejected() {
    let rules = rules();
    let errors = Hobbit::validate(&rules, 2_000_000, "Saruman", "baggins").unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|error| error.field(&rules)).collect();
    assert_eq!(fields, vec!["id", "first_name", "last_name"]);
}

#[test]
fn test_mac_and_stein_last_names() {
    let rules = rules();
    assert!(Hobbit::validate(&rules, 0, "Rosie", "MacCotton").is_ok());
    assert!(Hobbit::validate(&rules, 1_999_999, "Hamfast", "Gamstein").is_ok());
    assert!(Hobbit::validate(&rules, 1, "Peregrin", "Took").is_err());
}

#[test]
fn test_rejection_is_labelled() {
    let rules = rules();
    let errors = Hobbit::validate(&rules, 1, "Gollum", "Goldberg").unwrap_err();
    let rejection = errors[0].to_rejection(&rules);

    assert_eq!(rejection.field.as_deref(), Some("first_name"));
    assert_eq!(rejection.expression, "(Name & ~BadName)");
    assert_eq!(rejection.failing_rules, vec!["BadName"]);
}
