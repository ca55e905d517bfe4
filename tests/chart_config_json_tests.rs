use chart_series::ChartError;
use chart_series::api::{ChartConfig, SeriesAdapter, SeriesOptions, SeriesType};
use chart_series::core::{PointRecord, Scalar};
use serde_json::json;

#[test]
fn serialized_entries_use_front_end_keys() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new().with_option("title", json!({ "text": "Demo" }));

    adapter
        .add_series(
            &mut chart,
            vec![1.0, 2.0],
            SeriesOptions::new()
                .with_name("s")
                .with_type(SeriesType::AreaRange)
                .with_z_index(-1)
                .with_linked_to("main")
                .with_fill_opacity(0.5)
                .with_line_width(0.0)
                .with_extra("showInLegend", false),
        )
        .expect("add series");

    let document = chart.to_json_value().expect("serialize");
    assert_eq!(
        document,
        json!({
            "series": [{
                "data": [1.0, 2.0],
                "name": "s",
                "type": "arearange",
                "zIndex": -1,
                "linkedTo": "main",
                "fillOpacity": 0.5,
                "lineWidth": 0.0,
                "showInLegend": false
            }],
            "title": { "text": "Demo" }
        })
    );
}

#[test]
fn documents_round_trip_through_typed_config() {
    let document = json!({
        "chart": { "type": "line" },
        "series": [
            { "data": [1, [2, 3], { "name": "a", "y": 4 }, null], "name": "mixed", "type": "waterfall" },
            { "data": [], "custom": { "nested": true } }
        ]
    });

    let chart = ChartConfig::from_json_value(document).expect("parse");

    assert_eq!(chart.series_len(), 2);
    let mixed = &chart.series()[0];
    assert_eq!(mixed.data[0], PointRecord::Scalar(Scalar::Number(1.0)));
    assert_eq!(mixed.data[1], PointRecord::pair(2.0, 3.0));
    assert_eq!(mixed.data[2].field("y"), Some(&Scalar::Number(4.0)));
    assert_eq!(mixed.data[3], PointRecord::Scalar(Scalar::Null));
    assert_eq!(
        mixed.options.series_type,
        Some(SeriesType::Other("waterfall".to_owned()))
    );
    assert_eq!(
        chart.series()[1].options.extra.get("custom"),
        Some(&json!({ "nested": true }))
    );
    assert_eq!(chart.options.get("chart"), Some(&json!({ "type": "line" })));

    let text = chart.to_json_pretty().expect("pretty");
    let reparsed = ChartConfig::from_json_str(&text).expect("reparse");
    assert_eq!(reparsed, chart);
}

#[test]
fn non_chart_documents_are_invalid_arguments() {
    for document in [
        json!([1, 2, 3]),
        json!("chart"),
        json!({ "series": { "data": [] } }),
        json!({ "series": [ [1, 2] ] }),
        json!({ "series": [ { "name": "no data" } ] }),
        json!({ "series": [ { "data": 3 } ] }),
    ] {
        let err = ChartConfig::from_json_value(document.clone()).expect_err("must fail");
        assert!(
            matches!(err, ChartError::InvalidArgument(_)),
            "unexpected error for {document}: {err}"
        );
    }
}

#[test]
fn document_operations_check_preconditions() {
    let adapter = SeriesAdapter::default();

    let err = adapter
        .add_series_to_document(&json!(42), vec![1.0, 2.0], SeriesOptions::new())
        .expect_err("non-object document must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));

    let err = adapter
        .remove_series_from_document(&json!(null), &["a"])
        .expect_err("null document must fail");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn document_operations_add_and_remove() {
    let adapter = SeriesAdapter::default();
    let document = json!({ "title": { "text": "t" }, "series": [ { "data": [1], "name": "keep" } ] });

    let added = adapter
        .add_series_to_document(&document, vec![5.0, 6.0], SeriesOptions::new().with_name("new"))
        .expect("add");
    assert_eq!(added["series"].as_array().map(Vec::len), Some(2));
    assert_eq!(added["series"][1]["name"], json!("new"));
    assert_eq!(added["title"], json!({ "text": "t" }));

    let removed = adapter
        .remove_series_from_document(&added, &["new"])
        .expect("remove");
    assert_eq!(
        removed,
        json!({ "series": [ { "data": [1.0], "name": "keep" } ], "title": { "text": "t" } })
    );
}

#[test]
fn top_level_series_option_is_ignored() {
    let chart = ChartConfig::new().with_option("series", json!([]));
    assert!(chart.options.is_empty());
}
