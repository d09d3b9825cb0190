//! Tests for table query-state synchronization

#[cfg(test)]
mod tests {
    use crate::core::table::{
        DEFAULT_PAGE_SIZE, FilterValue, PageState, Sort, TableQuery, TableSpec, Update,
        apply_filter_update, apply_pagination_update, apply_search_update, apply_sorting_update,
        decode, decode_query_str, encode, encode_query_str,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== Decoding ====================

    #[test]
    fn test_decode_empty_params_yields_defaults() {
        let query = decode(&[], &TableSpec::new());
        assert_eq!(query, TableQuery::default());
        assert_eq!(query.page_index, 0);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert!(query.sort.is_none());
        assert!(query.search.is_none());
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_decode_full_query() {
        let raw = params(&[
            ("page", "3"),
            ("pageSize", "20"),
            ("sort", "name.desc"),
            ("q", "alice"),
        ]);
        let query = decode(&raw, &TableSpec::new());
        assert_eq!(query.page_index, 2);
        assert_eq!(query.page_size, 20);
        assert_eq!(query.sort, Some(Sort::new("name", true)));
        assert_eq!(query.search.as_deref(), Some("alice"));
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_decode_malformed_integers_fall_back() {
        for bad in ["abc", "-2", "0", "2.5", ""] {
            let raw = params(&[("page", bad), ("pageSize", bad)]);
            let query = decode(&raw, &TableSpec::new());
            assert_eq!(query.page_index, 0, "page {:?}", bad);
            assert_eq!(query.page_size, DEFAULT_PAGE_SIZE, "pageSize {:?}", bad);
        }
    }

    #[test]
    fn test_decode_malformed_sort_is_absent() {
        for bad in ["name", "name.sideways", ".desc", ""] {
            let raw = params(&[("sort", bad)]);
            let query = decode(&raw, &TableSpec::new());
            assert!(query.sort.is_none(), "sort {:?}", bad);
        }
    }

    #[test]
    fn test_decode_sort_column_may_contain_dots() {
        let raw = params(&[("sort", "guest.name.asc")]);
        let query = decode(&raw, &TableSpec::new());
        assert_eq!(query.sort, Some(Sort::new("guest.name", false)));
    }

    #[test]
    fn test_decode_date_filter() {
        let spec = TableSpec::new().date_column("checkIn");
        let raw = params(&[("checkIn", "2024-06-01")]);
        let query = decode(&raw, &spec);
        assert_eq!(
            query.filters.get("checkIn"),
            Some(&FilterValue::Date(date(2024, 6, 1)))
        );
    }

    #[test]
    fn test_decode_malformed_date_degrades_to_no_filter() {
        let spec = TableSpec::new().date_column("checkIn");
        for bad in ["yesterday", "2024-13-01", "2024-06-99", ""] {
            let raw = params(&[("checkIn", bad)]);
            let query = decode(&raw, &spec);
            assert!(query.filters.is_empty(), "date {:?}", bad);
        }
    }

    #[test]
    fn test_decode_date_range_variants() {
        let spec = TableSpec::new().date_range_column("stay");

        let query = decode(&params(&[("stay", "2024-06-01,2024-06-03")]), &spec);
        assert_eq!(
            query.filters.get("stay"),
            Some(&FilterValue::DateRange {
                from: Some(date(2024, 6, 1)),
                to: Some(date(2024, 6, 3)),
            })
        );

        // Open-ended ranges keep the missing bound undefined
        let query = decode(&params(&[("stay", "2024-06-01,")]), &spec);
        assert_eq!(
            query.filters.get("stay"),
            Some(&FilterValue::DateRange {
                from: Some(date(2024, 6, 1)),
                to: None,
            })
        );

        let query = decode(&params(&[("stay", ",2024-06-03")]), &spec);
        assert_eq!(
            query.filters.get("stay"),
            Some(&FilterValue::DateRange {
                from: None,
                to: Some(date(2024, 6, 3)),
            })
        );

        let query = decode(&params(&[("stay", ",")]), &spec);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_decode_list_and_text_filters() {
        let spec = TableSpec::new().list_column("status");
        let raw = params(&[("status", "confirmed,cancelled"), ("city", "Lisbon")]);
        let query = decode(&raw, &spec);
        assert_eq!(
            query.filters.get("status"),
            Some(&FilterValue::List(vec![
                "confirmed".to_string(),
                "cancelled".to_string(),
            ]))
        );
        assert_eq!(
            query.filters.get("city"),
            Some(&FilterValue::Text("Lisbon".to_string()))
        );
    }

    #[test]
    fn test_decode_last_occurrence_wins() {
        let raw = params(&[("page", "2"), ("page", "5")]);
        let query = decode(&raw, &TableSpec::new());
        assert_eq!(query.page_index, 4);
    }

    // ==================== Encoding ====================

    #[test]
    fn test_encode_defaults_emit_nothing() {
        assert!(encode(&TableQuery::default()).is_empty());

        let query = TableQuery::new().with_page(1).with_page_size(10);
        assert!(encode(&query).is_empty());
    }

    #[test]
    fn test_encode_strips_only_default_fields() {
        let query = TableQuery::new().with_page(3).with_page_size(20);
        let params = encode(&query);
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "3".to_string()),
                ("pageSize".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_encode_sort_and_search() {
        let query = TableQuery::new().with_sort("name", true).with_search("alice");
        let params = encode(&query);
        assert!(params.contains(&("sort".to_string(), "name.desc".to_string())));
        assert!(params.contains(&("q".to_string(), "alice".to_string())));
    }

    #[test]
    fn test_encode_date_range_open_bounds() {
        let query = TableQuery::new().with_filter(
            "stay",
            FilterValue::DateRange {
                from: Some(date(2024, 6, 1)),
                to: None,
            },
        );
        let params = encode(&query);
        assert_eq!(
            params,
            vec![("stay".to_string(), "2024-06-01,".to_string())]
        );
    }

    #[test]
    fn test_encode_empty_filters_emit_no_key() {
        let mut query = TableQuery::new();
        query
            .filters
            .insert("status".to_string(), FilterValue::List(vec![]));
        query
            .filters
            .insert("city".to_string(), FilterValue::Text(String::new()));
        query.filters.insert(
            "stay".to_string(),
            FilterValue::DateRange {
                from: None,
                to: None,
            },
        );
        assert!(encode(&query).is_empty());
    }

    // ==================== Round trips ====================

    #[test]
    fn test_round_trip_law() {
        let spec = TableSpec::new()
            .date_column("checkIn")
            .date_range_column("stay")
            .list_column("status");
        let query = TableQuery::new()
            .with_page(4)
            .with_page_size(50)
            .with_sort("createdAt", true)
            .with_search("beach")
            .with_filter("checkIn", FilterValue::Date(date(2024, 6, 1)))
            .with_filter(
                "stay",
                FilterValue::DateRange {
                    from: Some(date(2024, 6, 1)),
                    to: Some(date(2024, 6, 3)),
                },
            )
            .with_filter(
                "status",
                FilterValue::List(vec!["confirmed".to_string(), "pending".to_string()]),
            )
            .with_filter("city", FilterValue::Text("Lisbon".to_string()));

        assert_eq!(decode(&encode(&query), &spec), query);
    }

    #[test]
    fn test_round_trip_defaults() {
        let query = TableQuery::default();
        assert_eq!(decode(&encode(&query), &TableSpec::new()), query);
    }

    #[test]
    fn test_query_string_round_trip_with_encoding() {
        let query = TableQuery::new().with_search("café & spa");
        let raw = encode_query_str(&query);
        assert!(!raw.contains(' '));
        let decoded = decode_query_str(&raw, &TableSpec::new());
        assert_eq!(decoded.search.as_deref(), Some("café & spa"));
    }

    #[test]
    fn test_decode_query_str_leading_question_mark() {
        let query = decode_query_str("?page=3&pageSize=20", &TableSpec::new());
        assert_eq!(query.page_index, 2);
        assert_eq!(query.page_size, 20);
    }

    // ==================== Pagination bounds ====================

    #[test]
    fn test_page_count_bound() {
        let query = TableQuery::new().with_page_size(20);
        assert_eq!(query.page_count(0), 0);
        assert_eq!(query.page_count(1), 1);
        assert_eq!(query.page_count(100), 5);
        assert_eq!(query.page_count(101), 6);
    }

    #[test]
    fn test_offset_tracks_page() {
        let query = TableQuery::new().with_page(3).with_page_size(20);
        assert_eq!(query.offset(), 40);
        assert_eq!(query.page(), 3);
    }

    // ==================== Updates ====================

    #[test]
    fn test_pagination_update_literal() {
        let query = TableQuery::default();
        let query = apply_pagination_update(
            query,
            Update::set(PageState {
                page_index: 4,
                page_size: DEFAULT_PAGE_SIZE,
            }),
        );
        assert_eq!(query.page_index, 4);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_update_functional() {
        let query = TableQuery::new().with_page(2);
        let query = apply_pagination_update(
            query,
            Update::with(|previous: PageState| PageState {
                page_index: previous.page_index + 1,
                ..previous
            }),
        );
        assert_eq!(query.page_index, 2);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let query = TableQuery::new().with_page(5);
        let query = apply_pagination_update(
            query,
            Update::with(|previous: PageState| PageState {
                page_size: 50,
                ..previous
            }),
        );
        assert_eq!(query.page_index, 0);
        assert_eq!(query.page_size, 50);
    }

    #[test]
    fn test_zero_page_size_degrades_to_default() {
        let query = apply_pagination_update(
            TableQuery::default(),
            Update::set(PageState {
                page_index: 0,
                page_size: 0,
            }),
        );
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_sorting_update_replaces() {
        let query = TableQuery::new().with_sort("name", false);
        let query = apply_sorting_update(query, Update::set(vec![Sort::new("createdAt", true)]));
        assert_eq!(query.sort, Some(Sort::new("createdAt", true)));
    }

    #[test]
    fn test_sorting_update_first_entry_wins() {
        let query = apply_sorting_update(
            TableQuery::default(),
            Update::set(vec![Sort::new("name", false), Sort::new("city", true)]),
        );
        assert_eq!(query.sort, Some(Sort::new("name", false)));
    }

    #[test]
    fn test_clearing_sort_removes_key() {
        let query = TableQuery::new().with_sort("name", false);
        let query = apply_sorting_update(query, Update::set(vec![]));
        assert!(query.sort.is_none());
        // The serialization must drop the key entirely, not emit `sort=`
        assert!(encode(&query).iter().all(|(key, _)| key != "sort"));
    }

    #[test]
    fn test_clearing_sort_functional() {
        let query = TableQuery::new().with_sort("name", false);
        let query = apply_sorting_update(query, Update::with(|_previous| vec![]));
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_filter_update_set_and_remove() {
        let query = TableQuery::new().with_page(3);
        let query = apply_filter_update(
            query,
            "city",
            Update::set(Some(FilterValue::Text("Porto".to_string()))),
        );
        assert_eq!(
            query.filters.get("city"),
            Some(&FilterValue::Text("Porto".to_string()))
        );
        // Filter changes move back to the first page
        assert_eq!(query.page_index, 0);

        let query = apply_filter_update(query, "city", Update::set(None));
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_filter_update_empty_value_removes() {
        let query = TableQuery::new().with_filter("city", FilterValue::Text("Porto".to_string()));
        let query = apply_filter_update(
            query,
            "city",
            Update::set(Some(FilterValue::Text(String::new()))),
        );
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let query = TableQuery::new()
            .with_page(3)
            .with_filter("city", FilterValue::Text("Porto".to_string()));
        let query = apply_filter_update(
            query,
            "city",
            Update::set(Some(FilterValue::Text("Porto".to_string()))),
        );
        assert_eq!(query.page_index, 2);
    }

    #[test]
    fn test_search_update_clears_on_whitespace() {
        let query = TableQuery::new().with_search("beach").with_page(2);
        let query = apply_search_update(query, Update::set(Some("   ".to_string())));
        assert!(query.search.is_none());
        assert_eq!(query.page_index, 0);
    }

    #[test]
    fn test_search_update_functional() {
        let query = TableQuery::new().with_search("bea");
        let query = apply_search_update(
            query,
            Update::with(|previous: Option<String>| previous.map(|text| format!("{}ch", text))),
        );
        assert_eq!(query.search.as_deref(), Some("beach"));
    }
}
