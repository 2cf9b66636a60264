//! End-to-end translation tests.

use paramsearch_query::{QueryNode, QueryParams, RangeValue, SearchSource};
use serde_json::json;

use crate::common::{params, person_mapper};

#[test]
fn test_person_search_source() {
    let mapper = person_mapper();
    let params = params(&[
        ("birthDateFrom", &["2020-12-31"]),
        ("birthDateTo", &["2022-12-31"]),
        ("age", &["12"]),
        ("nameMatch", &["John"]),
        ("label", &["Foo", "Bar"]),
    ]);

    let query = mapper.convert(&params).unwrap();
    assert_eq!(query.len(), 4);

    let json = serde_json::to_value(SearchSource::new(query)).unwrap();
    assert_eq!(
        json,
        json!({
            "query": {
                "bool": {
                    "must": [
                        {
                            "range": {
                                "birthDate": {
                                    "from": "2020-12-31",
                                    "to": "2022-12-31",
                                    "include_lower": true,
                                    "include_upper": true,
                                    "boost": 1.0
                                }
                            }
                        },
                        {
                            "term": {
                                "age": {
                                    "value": "12",
                                    "boost": 1.0
                                }
                            }
                        },
                        {
                            "match": {
                                "name": {
                                    "query": "John",
                                    "operator": "OR",
                                    "prefix_length": 0,
                                    "max_expansions": 50,
                                    "fuzzy_transpositions": true,
                                    "lenient": false,
                                    "zero_terms_query": "NONE",
                                    "auto_generate_synonyms_phrase_query": true,
                                    "boost": 1.0
                                }
                            }
                        },
                        {
                            "terms": {
                                "label.keyword": ["Foo", "Bar"],
                                "boost": 1.0
                            }
                        }
                    ],
                    "adjust_pure_negative": true,
                    "boost": 1.0
                }
            }
        })
    );
}

#[test]
fn test_single_keyword_value_is_term_on_keyword_subfield() {
    let query = person_mapper()
        .convert(&params(&[("label", &["Foo"])]))
        .unwrap();
    assert_eq!(
        query.to_json()["bool"]["must"][0],
        json!({"term": {"label.keyword": {"value": "Foo", "boost": 1.0}}})
    );
}

#[test]
fn test_multiple_values_keep_order_and_duplicates() {
    let query = person_mapper()
        .convert(&params(&[("name", &["b", "a", "b"])]))
        .unwrap();
    assert_eq!(
        query.to_json()["bool"]["must"][0],
        json!({"terms": {"name.keyword": ["b", "a", "b"], "boost": 1.0}})
    );
}

#[test]
fn test_numeric_terms_do_not_use_keyword_subfield() {
    let query = person_mapper()
        .convert(&params(&[("coins", &["1", "2"])]))
        .unwrap();
    assert_eq!(query.clauses()[0].field(), "coins");
}

#[test]
fn test_one_sided_ranges() {
    let mapper = person_mapper();

    let query = mapper.convert(&params(&[("coinsFrom", &["5"])])).unwrap();
    let QueryNode::Range(range) = &query.clauses()[0] else {
        unreachable!("Expected range query");
    };
    assert_eq!(range.from, Some(RangeValue::Number(5.0)));
    assert_eq!(range.to, None);
    assert!(range.include_lower && range.include_upper);

    let query = mapper.convert(&params(&[("birthDateTo", &["2022-12-31"])])).unwrap();
    assert_eq!(
        query.to_json()["bool"]["must"][0],
        json!({"range": {"birthDate": {
            "from": null,
            "to": "2022-12-31",
            "include_lower": true,
            "include_upper": true,
            "boost": 1.0
        }}})
    );
}

#[test]
fn test_number_bounds_serialize_as_numbers() {
    let query = person_mapper()
        .convert(&params(&[("ageFrom", &["18"]), ("ageTo", &["65.5"])]))
        .unwrap();
    let range = &query.to_json()["bool"]["must"][0]["range"]["age"];
    assert_eq!(range["from"], json!(18.0));
    assert_eq!(range["to"], json!(65.5));
}

#[test]
fn test_suffixes_are_case_insensitive() {
    let query = person_mapper()
        .convert(&params(&[
            ("coinsFROM", &["1"]),
            ("coinsto", &["2"]),
            ("nameMATCH", &["Ann"]),
        ]))
        .unwrap();
    assert_eq!(query.len(), 2);
    assert_eq!(query.clauses()[0].query_type(), "range");
    assert_eq!(query.clauses()[1].query_type(), "match");
}

#[test]
fn test_from_query_string() {
    let params = QueryParams::from_query_string(
        "label=Foo&label=Bar&birthDateFrom=2020-12-31&nameMatch=John%20Smith",
    );
    let query = person_mapper().convert(&params).unwrap();
    let types: Vec<&str> = query.iter().map(QueryNode::query_type).collect();
    assert_eq!(types, vec!["terms", "range", "match"]);
    assert_eq!(
        query.to_json()["bool"]["must"][2]["match"]["name"]["query"],
        "John Smith"
    );
}

#[test]
fn test_date_bound_is_not_reformatted() {
    let query = person_mapper()
        .convert(&params(&[("birthDateFrom", &["2020-02-29"])]))
        .unwrap();
    let QueryNode::Range(range) = &query.clauses()[0] else {
        unreachable!("Expected range query");
    };
    assert_eq!(range.from, Some(RangeValue::Text("2020-02-29".to_string())));
}

#[test]
fn test_every_clause_is_mandatory() {
    let query = person_mapper()
        .convert(&params(&[("age", &["1"]), ("label", &["x"])]))
        .unwrap();
    let json = query.to_json();
    let bool_query = json["bool"].as_object().unwrap();
    assert!(bool_query.contains_key("must"));
    assert!(!bool_query.contains_key("should"));
    assert!(!bool_query.contains_key("must_not"));
    assert!(!bool_query.contains_key("filter"));
}
