//! One mapper shared across threads.

use std::sync::Arc;

use paramsearch_query::QueryParams;

use crate::common::person_mapper;

#[test]
fn test_shared_mapper_across_threads() {
    let mapper = Arc::new(person_mapper());
    let expected = mapper
        .convert(&QueryParams::from_query_string("age=1&label=a&label=b"))
        .unwrap();

    std::thread::scope(|scope| {
        for i in 0..8 {
            let mapper = Arc::clone(&mapper);
            let expected = &expected;
            scope.spawn(move || {
                for _ in 0..50 {
                    let query = mapper
                        .convert(&QueryParams::from_query_string("age=1&label=a&label=b"))
                        .unwrap();
                    assert_eq!(&query, expected);

                    let own = QueryParams::from_query_string(&format!("coinsFrom={i}"));
                    let query = mapper.convert(&own).unwrap();
                    assert_eq!(query.len(), 1);

                    let bad = QueryParams::from_query_string("nameMatch=a&nameMatch=b");
                    assert!(mapper.convert(&bad).is_err());
                }
            });
        }
    });
}
