use crate::core::attributes::AttributeValue;
use crate::core::instances::FeatureVector;
use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};

/// Per-attribute translation/scale pairs, one pair per attribute
/// excluding the class attribute. Entry `j` belongs to the j-th
/// non-class attribute, so it lines up positionally with vectors whose
/// class slot has been stripped.
///
/// Invariant: no scale is ever zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationParams {
    pub translation: Vec<f64>,
    pub scale: Vec<f64>,
}

impl NormalizationParams {
    /// The identity transform: translation 0, scale 1 for every
    /// non-class attribute. Distances computed under it match the
    /// unnormalized ones exactly.
    pub fn neutral(attribute_count: usize) -> NormalizationParams {
        NormalizationParams {
            translation: vec![0.0; attribute_count],
            scale: vec![1.0; attribute_count],
        }
    }

    pub fn len(&self) -> usize {
        self.translation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translation.is_empty()
    }
}

/// Derives normalization parameters from the training set.
///
/// With `normalize` off this returns the neutral transform, so the
/// distance engine needs no separate unnormalized code path. With it on,
/// each non-class column contributes translation = min and
/// scale = max - min over all rows; a column containing any categorical
/// value stays neutral (categorical distances are 0/1 regardless), and a
/// degenerate column with max == min gets scale 1.
pub fn compute_params(
    rows: &[FeatureVector],
    class_index: usize,
    normalize: bool,
) -> Result<NormalizationParams, ClassifierError> {
    let first = rows.first().ok_or_else(|| {
        ClassifierError::InvalidInput("cannot derive normalization from an empty training set".into())
    })?;
    if class_index >= first.len() {
        return Err(ClassifierError::InvalidInput(format!(
            "class index {} outside training rows of length {}",
            class_index,
            first.len()
        )));
    }

    let non_class = first.len() - 1;
    if !normalize {
        return Ok(NormalizationParams::neutral(non_class));
    }

    let mut translation = Vec::with_capacity(non_class);
    let mut scale = Vec::with_capacity(non_class);

    for position in (0..first.len()).filter(|&p| p != class_index) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut saw_categorical = false;

        for row in rows {
            match row.value_at_index(position) {
                Some(AttributeValue::Numeric(v)) => {
                    min = min.min(*v);
                    max = max.max(*v);
                }
                Some(AttributeValue::Categorical(_)) => saw_categorical = true,
                None => {
                    return Err(ClassifierError::InvalidInput(format!(
                        "training row shorter than expected at attribute {position}"
                    )));
                }
            }
        }

        if saw_categorical {
            min = 0.0;
            max = 0.0;
        }

        translation.push(min);
        scale.push(if max == min { 1.0 } else { max - min });
    }

    Ok(NormalizationParams { translation, scale })
}
