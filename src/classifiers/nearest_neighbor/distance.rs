use crate::classifiers::nearest_neighbor::config::Metric;
use crate::classifiers::nearest_neighbor::normalization::NormalizationParams;
use crate::core::attributes::AttributeValue;
use crate::core::instances::FeatureVector;
use crate::error::ClassifierError;

/// Pairwise distance between attribute vectors under one metric and one
/// set of normalization parameters.
///
/// The class slot is stripped before pairing: from both vectors when
/// their lengths match, from the longer one when they differ by exactly
/// one. After stripping, position `j` pairs the j-th non-class attribute
/// of each side and indexes the parameter array directly.
pub struct DistanceEngine<'a> {
    metric: Metric,
    class_index: usize,
    params: &'a NormalizationParams,
}

impl<'a> DistanceEngine<'a> {
    pub fn new(
        metric: Metric,
        class_index: usize,
        params: &'a NormalizationParams,
    ) -> DistanceEngine<'a> {
        DistanceEngine {
            metric,
            class_index,
            params,
        }
    }

    /// Distance between `a` and `b`, always finite and non-negative.
    ///
    /// Categorical pairs contribute 0 when equal and 1 otherwise; a
    /// numeric paired against a categorical counts as a mismatch.
    /// Numeric pairs contribute the absolute (Manhattan) or squared
    /// (Euclidean) difference of their normalized values.
    pub fn distance(
        &self,
        a: &FeatureVector,
        b: &FeatureVector,
    ) -> Result<f64, ClassifierError> {
        let (xs, ys) = self.paired(a, b)?;

        let mut total = 0.0;
        for (j, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
            let contribution = match (x, y) {
                (AttributeValue::Numeric(u), AttributeValue::Numeric(v)) => {
                    let (u, v) = self.transform(j, *u, *v)?;
                    (u - v).abs()
                }
                (AttributeValue::Categorical(s), AttributeValue::Categorical(t)) => {
                    if s == t { 0.0 } else { 1.0 }
                }
                // A numeric value never equals a categorical token.
                _ => 1.0,
            };
            match self.metric {
                Metric::Manhattan => total += contribution,
                Metric::Euclidean => total += contribution * contribution,
            }
        }

        Ok(match self.metric {
            Metric::Manhattan => total,
            Metric::Euclidean => total.sqrt(),
        })
    }

    fn transform(&self, j: usize, u: f64, v: f64) -> Result<(f64, f64), ClassifierError> {
        let translation = self.params.translation.get(j).copied().ok_or_else(|| {
            ClassifierError::InvariantViolation(format!(
                "normalization parameters have no entry for non-class attribute {j}"
            ))
        })?;
        let scale = self.params.scale.get(j).copied().ok_or_else(|| {
            ClassifierError::InvariantViolation(format!(
                "normalization parameters have no entry for non-class attribute {j}"
            ))
        })?;
        Ok(((u - translation) / scale, (v - translation) / scale))
    }

    /// Pairs the two vectors' non-class attributes positionally.
    fn paired<'v>(
        &self,
        a: &'v FeatureVector,
        b: &'v FeatureVector,
    ) -> Result<(Vec<&'v AttributeValue>, Vec<&'v AttributeValue>), ClassifierError> {
        let (xs, ys) = if a.len() == b.len() {
            (self.stripped(a), self.stripped(b))
        } else if a.len() == b.len() + 1 {
            (self.stripped(a), b.values().iter().collect())
        } else if b.len() == a.len() + 1 {
            (self.stripped(b), a.values().iter().collect())
        } else {
            return Err(ClassifierError::InvalidInput(format!(
                "vector lengths {} and {} differ by more than one attribute",
                a.len(),
                b.len()
            )));
        };

        if xs.len() != ys.len() {
            return Err(ClassifierError::InvalidInput(format!(
                "vectors pair {} against {} attributes after removing the class slot",
                xs.len(),
                ys.len()
            )));
        }
        Ok((xs, ys))
    }

    fn stripped<'v>(&self, vector: &'v FeatureVector) -> Vec<&'v AttributeValue> {
        vector
            .values()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.class_index)
            .map(|(_, value)| value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::nearest_neighbor::normalization::compute_params;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-12;

    fn row(values: Vec<AttributeValue>) -> FeatureVector {
        FeatureVector::new(values)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS
    }

    #[test]
    fn manhattan_sums_absolute_differences() {
        let params = NormalizationParams::neutral(2);
        let engine = DistanceEngine::new(Metric::Manhattan, 2, &params);
        let a = row(vec![1.0.into(), 5.0.into(), "x".into()]);
        let b = row(vec![4.0.into(), 3.0.into(), "y".into()]);
        let d = engine.distance(&a, &b).unwrap();
        assert!(approx_eq(d, 3.0 + 2.0));
    }

    #[test]
    fn euclidean_takes_root_of_squared_sum() {
        let params = NormalizationParams::neutral(2);
        let engine = DistanceEngine::new(Metric::Euclidean, 2, &params);
        let a = row(vec![0.0.into(), 0.0.into(), "x".into()]);
        let b = row(vec![3.0.into(), 4.0.into(), "x".into()]);
        let d = engine.distance(&a, &b).unwrap();
        assert!(approx_eq(d, 5.0));
    }

    #[test]
    fn categorical_attributes_use_zero_one_distance() {
        let params = NormalizationParams::neutral(2);
        for metric in Metric::iter() {
            let engine = DistanceEngine::new(metric, 2, &params);
            let a = row(vec!["sunny".into(), "high".into(), "yes".into()]);
            let b = row(vec!["sunny".into(), "low".into(), "no".into()]);
            // One mismatch among the non-class attributes.
            let d = engine.distance(&a, &b).unwrap();
            assert!(approx_eq(d, 1.0), "metric {metric} gave {d}");
        }
    }

    #[test]
    fn mixed_type_pair_counts_as_mismatch() {
        let params = NormalizationParams::neutral(1);
        let engine = DistanceEngine::new(Metric::Manhattan, 1, &params);
        let a = row(vec![2.0.into(), "x".into()]);
        let b = row(vec!["two".into(), "x".into()]);
        assert!(approx_eq(engine.distance(&a, &b).unwrap(), 1.0));
    }

    #[test]
    fn class_slot_is_stripped_from_the_longer_vector_only() {
        let params = NormalizationParams::neutral(2);
        let engine = DistanceEngine::new(Metric::Manhattan, 1, &params);
        let train = row(vec![1.0.into(), "label".into(), 4.0.into()]);
        let query = row(vec![2.0.into(), 6.0.into()]);
        // |1-2| + |4-6|, the label never pairs with anything.
        let d = engine.distance(&train, &query).unwrap();
        assert!(approx_eq(d, 3.0));
        // Symmetric in argument order.
        let d_rev = engine.distance(&query, &train).unwrap();
        assert!(approx_eq(d, d_rev));
    }

    #[test]
    fn equal_length_vectors_both_lose_the_class_slot() {
        let params = NormalizationParams::neutral(2);
        let engine = DistanceEngine::new(Metric::Manhattan, 1, &params);
        let a = row(vec![1.0.into(), "yes".into(), 4.0.into()]);
        let b = row(vec![1.0.into(), "no".into(), 4.0.into()]);
        // The mismatching labels sit in the class slot and are ignored.
        assert!(approx_eq(engine.distance(&a, &b).unwrap(), 0.0));
    }

    #[test]
    fn symmetry_under_every_metric() {
        let params = NormalizationParams::neutral(3);
        for metric in Metric::iter() {
            let engine = DistanceEngine::new(metric, 3, &params);
            let a = row(vec![1.5.into(), "a".into(), 9.0.into(), "c1".into()]);
            let b = row(vec![4.0.into(), "b".into(), 2.5.into(), "c2".into()]);
            let d_ab = engine.distance(&a, &b).unwrap();
            let d_ba = engine.distance(&b, &a).unwrap();
            assert!(approx_eq(d_ab, d_ba), "metric {metric}: {d_ab} vs {d_ba}");
        }
    }

    #[test]
    fn length_gap_beyond_one_is_rejected() {
        let params = NormalizationParams::neutral(2);
        let engine = DistanceEngine::new(Metric::Manhattan, 2, &params);
        let a = row(vec![1.0.into(), 2.0.into(), "x".into()]);
        let b = row(vec![1.0.into()]);
        let err = engine.distance(&a, &b).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput(_)));
    }

    #[test]
    fn normalization_rescales_by_column_range() {
        let rows = vec![
            row(vec![0.0.into(), "a".into(), 0.0.into()]),
            row(vec![10.0.into(), "b".into(), 2.0.into()]),
        ];
        let params = compute_params(&rows, 1, true).unwrap();
        let engine = DistanceEngine::new(Metric::Manhattan, 1, &params);
        // Both numeric columns span their full range, so each
        // contributes exactly 1 after rescaling; the class slot is
        // stripped.
        let d = engine.distance(&rows[0], &rows[1]).unwrap();
        assert!(approx_eq(d, 2.0));
    }

    #[test]
    fn params_stay_aligned_when_class_is_the_last_attribute() {
        // Regression guard for the parameter/attribute alignment: with
        // the class slot last, the second numeric column must use the
        // second parameter pair, not fall off the end of the array.
        let rows = vec![
            row(vec![0.0.into(), 100.0.into(), "a".into()]),
            row(vec![4.0.into(), 300.0.into(), "b".into()]),
        ];
        let params = compute_params(&rows, 2, true).unwrap();
        let engine = DistanceEngine::new(Metric::Manhattan, 2, &params);
        let d = engine.distance(&rows[0], &rows[1]).unwrap();
        assert!(approx_eq(d, 2.0));
    }

    #[test]
    fn degenerate_training_set_normalizes_like_the_identity() {
        // Every column's min equals its max, so the derived transform
        // must reproduce the unnormalized distances exactly.
        let rows = vec![
            row(vec![1.0.into(), "a".into(), 2.0.into()]),
            row(vec![1.0.into(), "b".into(), 2.0.into()]),
        ];

        let normalized = compute_params(&rows, 1, true).unwrap();
        let plain = compute_params(&rows, 1, false).unwrap();

        let d_norm = DistanceEngine::new(Metric::Manhattan, 1, &normalized)
            .distance(&rows[0], &rows[1])
            .unwrap();
        let d_plain = DistanceEngine::new(Metric::Manhattan, 1, &plain)
            .distance(&rows[0], &rows[1])
            .unwrap();
        // The "a"/"b" mismatch sits in the class slot, so both sides
        // reduce to identical numeric columns.
        assert_eq!(d_norm, d_plain);
        assert_eq!(d_norm, 0.0);

        // Same rows with the class slot at the end: the categorical
        // mismatch now survives stripping and contributes exactly 1,
        // normalized or not.
        let normalized = compute_params(&rows, 2, true).unwrap();
        let plain = compute_params(&rows, 2, false).unwrap();
        let d_norm = DistanceEngine::new(Metric::Manhattan, 2, &normalized)
            .distance(&rows[0], &rows[1])
            .unwrap();
        let d_plain = DistanceEngine::new(Metric::Manhattan, 2, &plain)
            .distance(&rows[0], &rows[1])
            .unwrap();
        assert_eq!(d_norm, d_plain);
        assert_eq!(d_norm, 1.0);
    }

    #[test]
    fn undersized_params_are_an_invariant_violation() {
        let params = NormalizationParams::neutral(1);
        let engine = DistanceEngine::new(Metric::Manhattan, 2, &params);
        let a = row(vec![1.0.into(), 2.0.into(), "x".into()]);
        let b = row(vec![3.0.into(), 4.0.into(), "y".into()]);
        let err = engine.distance(&a, &b).unwrap_err();
        assert!(matches!(err, ClassifierError::InvariantViolation(_)));
    }
}
