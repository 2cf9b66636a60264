//! Error paths through the full pipeline.

use paramsearch_query::Error;

use crate::common::{params, person_mapper};

#[test]
fn test_unknown_parameter() {
    let err = person_mapper()
        .convert(&params(&[("age", &["1"]), ("heightFrom", &["170"])]))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownParameter { ref parameter } if parameter == "heightFrom"));
    assert!(err.is_bad_request());
}

#[test]
fn test_three_parameters_on_one_field() {
    let err = person_mapper()
        .convert(&params(&[
            ("ageFrom", &["1"]),
            ("ageTo", &["2"]),
            ("age", &["3"]),
        ]))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateProperty { ref field, count: 3 } if field == "age"));
}

#[test]
fn test_three_parameters_fail_before_bound_checks() {
    // The bounds are malformed too, but the count is checked first.
    let err = person_mapper()
        .convert(&params(&[
            ("ageFrom", &["1", "2"]),
            ("ageFROM", &["x"]),
            ("ageMatch", &["3", "4"]),
        ]))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateProperty { count: 3, .. }));
}

#[test]
fn test_invalid_pairs_are_duplicates() {
    let mapper = person_mapper();
    for pair in [
        [("coinsFrom", "1"), ("coinsfrom", "2")],
        [("coinsTo", "1"), ("coinsTO", "2")],
        [("coins", "1"), ("coinsTo", "2")],
        [("coinsMatch", "1"), ("coinsFrom", "2")],
    ] {
        let params = params(&[(pair[0].0, &[pair[0].1]), (pair[1].0, &[pair[1].1])]);
        let err = mapper.convert(&params).unwrap_err();
        assert!(
            matches!(err, Error::DuplicateProperty { count: 2, .. }),
            "{pair:?} should be rejected"
        );
    }
}

#[test]
fn test_multi_valued_bound_is_malformed() {
    let err = person_mapper()
        .convert(&params(&[("coinsFrom", &["1"]), ("coinsTo", &["5", "6"])]))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedRange { ref parameter, count: 2, .. } if parameter == "coinsTo"
    ));
}

#[test]
fn test_match_with_two_values_is_ambiguous() {
    let err = person_mapper()
        .convert(&params(&[("nameMatch", &["John", "Jane"])]))
        .unwrap_err();
    assert!(matches!(err, Error::AmbiguousMatch { ref field, count: 2 } if field == "name"));
}

#[test]
fn test_invalid_date_names_expected_format() {
    let err = person_mapper()
        .convert(&params(&[("birthDateFrom", &["not-a-date"])]))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDate { ref value, .. } if value == "not-a-date"));
    assert!(err.to_string().contains("yyyy-MM-dd"));
}

#[test]
fn test_invalid_number() {
    let err = person_mapper()
        .convert(&params(&[("coinsTo", &["plenty"])]))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { ref field, .. } if field == "coins"));
}

#[test]
fn test_no_partial_query_on_late_error() {
    let result = person_mapper().convert(&params(&[
        ("label", &["Foo"]),
        ("age", &["12"]),
        ("birthDateFrom", &["31/12/2020"]),
    ]));
    assert!(result.is_err());
}

#[test]
fn test_field_name_case_is_significant() {
    // Only the suffix is case-insensitive.
    for raw in ["COINSFROM", "Coins", "AGEfrom"] {
        let err = person_mapper()
            .convert(&params(&[(raw, &["1"])]))
            .unwrap_err();
        assert!(
            matches!(err, Error::UnknownParameter { ref parameter } if parameter == raw),
            "{raw} should not resolve"
        );
    }
}
