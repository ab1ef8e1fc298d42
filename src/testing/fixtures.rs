use crate::core::attributes::AttributeValue;
use crate::core::instances::FeatureVector;

/// A small weather-style training set with mixed attribute types:
/// outlook (categorical), temperature and humidity (numeric) and the
/// class label ("play" / "stay") in the last slot (class index 3).
pub fn weather_rows() -> Vec<FeatureVector> {
    let rows: Vec<(&str, f64, f64, &str)> = vec![
        ("sunny", 25.0, 60.0, "play"),
        ("sunny", 27.0, 65.0, "play"),
        ("overcast", 22.0, 70.0, "play"),
        ("rain", 18.0, 90.0, "stay"),
        ("rain", 16.0, 95.0, "stay"),
        ("sunny", 30.0, 85.0, "stay"),
    ];
    rows.into_iter()
        .map(|(outlook, temperature, humidity, label)| {
            FeatureVector::new(vec![
                AttributeValue::from(outlook),
                AttributeValue::from(temperature),
                AttributeValue::from(humidity),
                AttributeValue::from(label),
            ])
        })
        .collect()
}

/// A query coinciding with the first "play" row of [`weather_rows`],
/// class slot omitted.
pub fn weather_query() -> FeatureVector {
    FeatureVector::new(vec![
        AttributeValue::from("sunny"),
        AttributeValue::from(25.0),
        AttributeValue::from(60.0),
    ])
}
