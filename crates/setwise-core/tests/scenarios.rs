//! End-to-end record checks built from rules, expressions and chains.

use setwise_core::{Chain, Exclusion, Expr, Rejection, Rule};

struct Rules {
    db_id: Expr<i64>,
    first_name: Expr<String>,
    last_name: Expr<String>,
}

fn rules() -> Rules {
    let db_id = Rule::range("DbId", 0..2_000_000_i64);
    let name = Rule::matching("Name", "^[A-Z][A-Za-z]+$").unwrap();
    let bad_name: Rule<String> = Rule::one_of("BadName", ["Sauron", "Saruman", "Gollum"]);
    let scottish = Rule::matching("ScottishLastName", "^Ma?c[A-Z]").unwrap();
    let jewish = Rule::matching("JewishLastName", "(berg|stein|man)$").unwrap();

    let first_name = name & !bad_name;
    let last_name = &first_name & (scottish | jewish);
    Rules {
        db_id: db_id.into(),
        first_name,
        last_name,
    }
}

#[derive(Debug, PartialEq)]
enum FieldError {
    Id(Exclusion<i64>),
    Name(Exclusion<String>),
}

impl From<Exclusion<i64>> for FieldError {
    fn from(exclusion: Exclusion<i64>) -> Self {
        FieldError::Id(exclusion)
    }
}

impl From<Exclusion<String>> for FieldError {
    fn from(exclusion: Exclusion<String>) -> Self {
        FieldError::Name(exclusion)
    }
}

fn check(rules: &Rules, id: i64, first: &str, last: &str) -> Result<(i64, String, String), Vec<FieldError>> {
    Chain::start(rules.db_id.might_describe(id).map_err(FieldError::from))
        .then(rules.first_name.might_describe(first.to_string()))
        .then(rules.last_name.might_describe(last.to_string()))
        .map(|(id, first, last)| (id.into_inner(), first.into_inner(), last.into_inner()))
}

#[test]
fn test_last_name_textual_form() {
    let rules = rules();
    assert_eq!(
        rules.last_name.describe(),
        "((Name & ~BadName) & (ScottishLastName | JewishLastName))"
    );
}

#[test]
fn test_valid_record() {
    let rules = rules();
    let record = check(&rules, 123, "Bilbo", "McBeggins");
    assert_eq!(
        record,
        Ok((123, "Bilbo".to_string(), "McBeggins".to_string()))
    );
}

#[test]
fn test_invalid_record_collects_failures_in_order() {
    let rules = rules();
    let errors = check(&rules, -1, "Bilbo", "Ivanov").unwrap_err();

    let expected_id = rules.db_id.might_describe(-1).unwrap_err();
    let expected_last = rules.last_name.might_describe("Ivanov".to_string()).unwrap_err();
    assert_eq!(
        errors,
        vec![FieldError::Id(expected_id), FieldError::Name(expected_last)]
    );

    let FieldError::Name(last) = &errors[1] else {
        panic!("expected a name exclusion");
    };
    assert_eq!(last.expression(), &rules.last_name);
    let failing: Vec<&str> = last.failing_rules().into_iter().map(Rule::id).collect();
    assert_eq!(failing, vec!["ScottishLastName", "JewishLastName"]);
}

#[test]
fn test_middle_success_dropped() {
    let rules = rules();
    let errors = check(&rules, 2_000_000, "Frodo", "Baggins").unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(matches!(&errors[0], FieldError::Id(e) if *e.value() == 2_000_000));
    assert!(matches!(&errors[1], FieldError::Name(e) if e.value() == "Baggins"));
}

#[test]
fn test_bad_first_name_reports_villain_rule() {
    let rules = rules();
    let errors = check(&rules, 7, "Sauron", "Goldberg").unwrap_err();

    let [FieldError::Name(first)] = errors.as_slice() else {
        panic!("expected exactly one name exclusion, got {errors:?}");
    };
    assert_eq!(first.expression(), &rules.first_name);
    let rejection = Rejection::from(first).for_field("first_name");
    assert_eq!(rejection.failing_rules, vec!["BadName"]);
}

#[test]
fn test_rejections_serialize() {
    let rules = rules();
    let exclusion = rules.db_id.might_describe(-1).unwrap_err();
    let json = serde_json::to_value(Rejection::from(exclusion).for_field("id")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "field": "id",
            "expression": "DbId",
            "value": "-1",
            "failing_rules": ["DbId"],
        })
    );
}
