use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Nutrient quantities for one food, per 100 g serving.
///
/// The six required fields are always known. `sugars_g` and
/// `saturated_fat_g` are optional: `None` means the source did not report
/// them, which is different from a reported zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub calcium_mg: f64,
    pub vitamin_d_ug: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat_g: Option<f64>,
}

impl NutrientProfile {
    /// Profile with the required fields set and no optional fields.
    pub const fn new(
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        calcium_mg: f64,
        vitamin_d_ug: f64,
    ) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            calcium_mg,
            vitamin_d_ug,
            sugars_g: None,
            saturated_fat_g: None,
        }
    }

    pub fn with_sugars(mut self, sugars_g: f64) -> Self {
        self.sugars_g = Some(sugars_g);
        self
    }

    pub fn with_saturated_fat(mut self, saturated_fat_g: f64) -> Self {
        self.saturated_fat_g = Some(saturated_fat_g);
        self
    }

    /// Every populated field as `(name, value)`, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, f64)> {
        let required = [
            ("calories", self.calories),
            ("proteinG", self.protein_g),
            ("carbsG", self.carbs_g),
            ("fatG", self.fat_g),
            ("calciumMg", self.calcium_mg),
            ("vitaminDUg", self.vitamin_d_ug),
        ];
        let optional = [
            ("sugarsG", self.sugars_g),
            ("saturatedFatG", self.saturated_fat_g),
        ];
        required.into_iter().chain(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v))),
        )
    }

    /// Reject negative, NaN and infinite values.
    pub(crate) fn validate(&self, key: &str) -> Result<(), CatalogError> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidValue {
                    key: key.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// One row of the catalog: a canonical key and its profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub canonical_key: String,
    pub profile: NutrientProfile,
}

impl CatalogEntry {
    pub fn new(canonical_key: impl Into<String>, profile: NutrientProfile) -> Self {
        Self {
            canonical_key: canonical_key.into(),
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_skip_missing_optionals() {
        let profile = NutrientProfile::new(165.0, 31.0, 0.0, 3.6, 15.0, 0.0);
        assert_eq!(profile.fields().count(), 6);

        let richer = profile.with_sugars(2.0).with_saturated_fat(1.0);
        let names: Vec<_> = richer.fields().map(|(name, _)| name).collect();
        assert_eq!(names.last(), Some(&"saturatedFatG"));
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn validate_rejects_nan_and_negative() {
        let nan = NutrientProfile::new(f64::NAN, 1.0, 1.0, 1.0, 1.0, 1.0);
        assert!(matches!(
            nan.validate("x"),
            Err(CatalogError::InvalidValue { field: "calories", .. })
        ));

        let negative_sugar = NutrientProfile::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0).with_sugars(-0.5);
        assert!(matches!(
            negative_sugar.validate("x"),
            Err(CatalogError::InvalidValue { field: "sugarsG", .. })
        ));
    }

    #[test]
    fn serde_uses_camel_case_and_omits_unknowns() {
        let profile = NutrientProfile::new(165.0, 31.0, 0.0, 3.6, 15.0, 0.0);
        let json = serde_json::to_value(profile).expect("serialize");
        assert_eq!(json["proteinG"], 31.0);
        assert_eq!(json["vitaminDUg"], 0.0);
        assert!(json.get("sugarsG").is_none());

        let parsed: NutrientProfile = serde_json::from_str(
            r#"{"calories":52,"proteinG":0.3,"carbsG":13.8,"fatG":0.2,"calciumMg":6,"vitaminDUg":0,"sugarsG":10.4}"#,
        )
        .expect("deserialize");
        assert_eq!(parsed.sugars_g, Some(10.4));
        assert_eq!(parsed.saturated_fat_g, None);
    }
}
