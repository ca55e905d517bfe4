use approx::assert_relative_eq;
use chart_series::api::{ChartConfig, SeriesAdapter, SeriesOptions, SeriesType};
use chart_series::core::{Categorical, Density, PointRecord, Scalar};

#[test]
fn density_zips_coordinates_into_pairs() {
    let density = Density::new(vec![-1.0, 0.0, 1.0], vec![0.24, 0.4, 0.24]).expect("density");
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();

    adapter
        .add_series(
            &mut chart,
            density,
            SeriesOptions::new().with_type(SeriesType::Area),
        )
        .expect("add density");

    let data = &chart.series()[0].data;
    assert_eq!(data.len(), 3);
    assert_eq!(data[1], PointRecord::pair(0.0, 0.4));
    let area: f64 = data
        .iter()
        .filter_map(|p| p.as_tuple().and_then(|t| t[1].as_f64()))
        .sum();
    assert_relative_eq!(area, 0.88, epsilon = 1e-12);
}

#[test]
fn density_rejects_mismatched_lengths() {
    assert!(Density::new(vec![1.0, 2.0], vec![1.0]).is_err());
}

#[test]
fn text_values_are_counted_per_distinct_value() {
    let values = ["B", "A", "B", "C", "B", "A"];
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();

    adapter
        .add_series(
            &mut chart,
            Categorical::text(values),
            SeriesOptions::new().with_type(SeriesType::Pie),
        )
        .expect("add categorical");

    let data = &chart.series()[0].data;
    assert_eq!(data.len(), 3);
    let summary: Vec<(&str, f64)> = data
        .iter()
        .map(|p| {
            (
                p.field("name").and_then(Scalar::as_str).expect("name"),
                p.field("y").and_then(Scalar::as_f64).expect("y"),
            )
        })
        .collect();
    assert_eq!(summary, [("A", 2.0), ("B", 3.0), ("C", 1.0)]);
}

#[test]
fn missing_values_are_not_counted() {
    let categorical = Categorical::text_with_missing(vec![
        Some("x".to_owned()),
        None,
        Some("x".to_owned()),
    ]);

    let counts = categorical.counts();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get("x"), Some(&2));
}

#[test]
fn factor_counts_use_level_order_and_skip_unused_levels() {
    let values = vec![Some("hi".to_owned()), Some("lo".to_owned()), Some("hi".to_owned())];
    let levels = vec!["lo".to_owned(), "mid".to_owned(), "hi".to_owned()];
    let factor = Categorical::factor(values, levels).expect("factor");
    let adapter = SeriesAdapter::default();
    let mut chart = ChartConfig::new();

    adapter
        .add_series(&mut chart, factor, SeriesOptions::new())
        .expect("add factor");

    let names: Vec<&str> = chart.series()[0]
        .data
        .iter()
        .filter_map(|p| p.field("name").and_then(Scalar::as_str))
        .collect();
    assert_eq!(names, ["lo", "hi"]);
}

#[test]
fn deserialized_factor_with_unknown_value_is_rejected() {
    let err = serde_json::from_str::<Categorical>(r#"{"values":["x"],"levels":["a"]}"#)
        .expect_err("value outside levels must fail");
    assert!(format!("{err}").contains("`x`"));

    let text: Categorical =
        serde_json::from_str(r#"{"values":["b", null, "a"]}"#).expect("text values");
    assert_eq!(text.counts().len(), 2);
}
