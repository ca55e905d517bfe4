use chart_series::api::{ChartConfig, FieldMapping, SeriesAdapter, SeriesData, SeriesOptions};
use chart_series::core::{PointRecord, Scalar, Table};

fn fruit_table() -> Table {
    Table::from_columns([
        (
            "name",
            vec![Scalar::from("apple"), Scalar::from("pear"), Scalar::Null],
        ),
        (
            "y",
            vec![Scalar::from(3.0), Scalar::from(5.0), Scalar::from(1.0)],
        ),
    ])
    .expect("table")
}

#[test]
fn rows_become_named_field_records() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();

    adapter
        .add_series(&mut chart, fruit_table(), SeriesOptions::new().with_name("fruit"))
        .expect("add table");

    let data = &chart.series()[0].data;
    assert_eq!(data.len(), 3);
    assert_eq!(
        data[0],
        PointRecord::fields([("name", Scalar::from("apple")), ("y", Scalar::from(3.0))])
    );
    assert_eq!(data[2].field("name"), Some(&Scalar::Null));
}

#[test]
fn field_mapping_leaves_chart_unchanged() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();
    adapter
        .add_series(&mut chart, vec![1.0, 2.0], SeriesOptions::new().with_name("base"))
        .expect("base series");
    let before = chart.clone();

    adapter
        .add_series(
            &mut chart,
            SeriesData::tabular(fruit_table(), FieldMapping::new().with("x", "name")),
            SeriesOptions::new(),
        )
        .expect("mapped table is a no-op");

    assert_eq!(chart, before);
}

#[test]
fn empty_table_adds_empty_series() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();

    adapter
        .add_series(&mut chart, Table::new(), SeriesOptions::new())
        .expect("add empty table");

    assert_eq!(chart.series_len(), 1);
    assert!(chart.series()[0].data.is_empty());
}

#[test]
fn deserialized_ragged_table_is_rejected() {
    let err = serde_json::from_str::<Table>(r#"{"columns":{"a":[1,2,3],"b":[1]}}"#)
        .expect_err("ragged table must fail");
    assert!(format!("{err}").contains("`b`"));

    let table: Table =
        serde_json::from_str(r#"{"columns":{"name":["x","y"],"y":[1,2]}}"#).expect("table");
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();
    adapter
        .add_series(&mut chart, table, SeriesOptions::new())
        .expect("add table");
    assert_eq!(chart.series()[0].data.len(), 2);
}
