use chart_series::api::{AdapterConfig, ChartConfig, SeriesAdapter, SeriesOptions, SeriesType};
use chart_series::core::{PointRecord, Scalar};

#[test]
fn numeric_vector_becomes_bare_scalar_points() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();

    adapter
        .add_series(
            &mut chart,
            vec![1.0, 2.5, f64::NAN, 4.0],
            SeriesOptions::new().with_name("values"),
        )
        .expect("add numeric series");

    assert_eq!(chart.series_len(), 1);
    let entry = &chart.series()[0];
    assert_eq!(entry.name(), Some("values"));
    assert_eq!(
        entry.data,
        vec![
            PointRecord::Scalar(Scalar::Number(1.0)),
            PointRecord::Scalar(Scalar::Number(2.5)),
            PointRecord::Scalar(Scalar::Null),
            PointRecord::Scalar(Scalar::Number(4.0)),
        ]
    );
}

#[test]
fn single_value_is_padded_to_two_points() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();

    adapter
        .add_series(&mut chart, vec![42.0], SeriesOptions::new())
        .expect("add single value");

    let data = &chart.series()[0].data;
    assert_eq!(data.len(), 2);
    assert_eq!(data[0], data[1]);
    assert_eq!(data[0], PointRecord::from(42.0));
}

#[test]
fn single_value_padding_can_be_disabled() {
    let config = AdapterConfig {
        pad_single_point_numeric: false,
        ..AdapterConfig::default()
    };
    let adapter = SeriesAdapter::new(config).expect("adapter");
    let mut chart = ChartConfig::new();

    adapter
        .add_series(&mut chart, vec![42.0], SeriesOptions::new())
        .expect("add single value");

    assert_eq!(chart.series()[0].data.len(), 1);
}

#[test]
fn caller_options_pass_through_verbatim() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();
    let options = SeriesOptions::new()
        .with_type(SeriesType::Column)
        .with_color("#ff0000")
        .with_extra("showInLegend", false);

    adapter
        .add_series(&mut chart, vec![1.0, 2.0], options.clone())
        .expect("add numeric series");

    assert_eq!(chart.series()[0].options, options);
}

#[test]
fn existing_series_are_not_touched() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();
    adapter
        .add_series(&mut chart, vec![1.0, 2.0], SeriesOptions::new().with_name("a"))
        .expect("first series");
    let before = chart.series().to_vec();

    adapter
        .add_series(&mut chart, vec![3.0, 4.0], SeriesOptions::new().with_name("b"))
        .expect("second series");

    assert_eq!(chart.series_len(), 2);
    assert_eq!(&chart.series()[..1], before.as_slice());
    assert_eq!(chart.series_names(), ["a", "b"]);
}

#[test]
fn invalid_options_abort_without_appending() {
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();

    let err = adapter
        .add_series(
            &mut chart,
            vec![1.0, 2.0],
            SeriesOptions::new().with_extra("line.width", 2),
        )
        .expect_err("dotted option must fail");

    assert!(format!("{err}").contains("lineWidth"));
    assert_eq!(chart.series_len(), 0);
}
