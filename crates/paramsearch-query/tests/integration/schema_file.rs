//! Mappers built from schema description files.

use paramsearch_core::SchemaRegistry;
use paramsearch_query::{MapperConfig, MatchOperator, ParamMapper, QueryParams};
use serde_json::json;

const PRODUCT_SCHEMA: &str = r#"
[[fields]]
name = "title"
type = "string"

[[fields]]
name = "price"
type = "number"

[[fields]]
name = "releasedOn"
type = "temporal"
nullable = true

[[fields]]
name = "inStock"
type = "other"
"#;

fn product_mapper() -> ParamMapper {
    ParamMapper::new(SchemaRegistry::from_toml_str(PRODUCT_SCHEMA).unwrap())
}

#[test]
fn test_toml_schema_translation() {
    let params = QueryParams::from_query_string(
        "titleMatch=red+shoes&priceFrom=10&priceTo=99.99&releasedOnFrom=2023-01-01&inStock=true",
    );
    let query = product_mapper().convert(&params).unwrap();
    let must = &query.to_json()["bool"]["must"];

    assert_eq!(must[0]["match"]["title"]["query"], "red shoes");
    assert_eq!(must[1]["range"]["price"]["from"], json!(10.0));
    assert_eq!(must[1]["range"]["price"]["to"], json!(99.99));
    assert_eq!(must[2]["range"]["releasedOn"]["from"], "2023-01-01");
    assert_eq!(
        must[3],
        json!({"term": {"inStock": {"value": "true", "boost": 1.0}}})
    );
}

#[test]
fn test_other_typed_range_passes_through() {
    let params = QueryParams::from_query_string("inStockFrom=false");
    let query = product_mapper().convert(&params).unwrap();
    assert_eq!(
        query.to_json()["bool"]["must"][0]["range"]["inStock"]["from"],
        "false"
    );
}

#[test]
fn test_config_from_toml() {
    let config: MapperConfig =
        toml::from_str("keyword_subfield = \"raw\"\nmatch_operator = \"and\"\n").unwrap();
    assert_eq!(config.match_operator, MatchOperator::And);

    let mapper = product_mapper().with_config(config);
    let err = mapper
        .convert(&QueryParams::from_query_string("title=Boots&titleMatch=x"))
        .unwrap_err();
    // Two parameters on one field that are not a range pair.
    assert!(err.is_bad_request());

    let query = mapper
        .convert(&QueryParams::from_query_string("title=Boots"))
        .unwrap();
    assert_eq!(query.clauses()[0].field(), "title.raw");
}

#[test]
fn test_field_named_boost_keeps_its_terms() {
    let registry =
        SchemaRegistry::from_toml_str("[[fields]]\nname = \"boost\"\ntype = \"number\"\n").unwrap();
    let query = ParamMapper::new(registry)
        .convert(&QueryParams::from_query_string("boost=1&boost=2"))
        .unwrap();
    assert_eq!(
        query.to_json()["bool"]["must"][0],
        json!({"terms": {"boost": ["1", "2"]}})
    );
}

#[test]
fn test_configured_boost_is_written_as_given() {
    let config: MapperConfig = toml::from_str("boost = 1.1\n").unwrap();
    let query = product_mapper()
        .with_config(config)
        .convert(&QueryParams::from_query_string("price=5"))
        .unwrap();
    let json = serde_json::to_string(&query).unwrap();
    assert!(json.contains("1.1"));
    assert!(!json.contains("1.100000"));
}
