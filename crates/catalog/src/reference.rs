//! Bundled reference data.
//!
//! Approximate values per 100 g, rounded from USDA FoodData Central
//! (SR Legacy / Foundation) entries for the most common preparation.
//! Columns: calories (kcal), protein (g), carbs (g), fat (g), calcium (mg),
//! vitamin D (µg). Dairy and soy milks are the vitamin D fortified variants.
//!
//! Keys must stay normalized and unique; `Catalog::reference` trusts this
//! table and the unit tests re-validate it.

use crate::profile::NutrientProfile;

const fn food(
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    calcium_mg: f64,
    vitamin_d_ug: f64,
) -> NutrientProfile {
    NutrientProfile::new(calories, protein_g, carbs_g, fat_g, calcium_mg, vitamin_d_ug)
}

pub(crate) const REFERENCE_FOODS: &[(&str, NutrientProfile)] = &[
    ("almonds", food(579.0, 21.2, 21.6, 49.9, 269.0, 0.0)),
    ("apple", food(52.0, 0.3, 13.8, 0.2, 6.0, 0.0)),
    ("avocado", food(160.0, 2.0, 8.5, 14.7, 12.0, 0.0)),
    ("banana", food(89.0, 1.1, 22.8, 0.3, 5.0, 0.0)),
    ("beef", food(250.0, 26.0, 0.0, 15.0, 18.0, 0.1)),
    ("black beans", food(132.0, 8.9, 23.7, 0.5, 27.0, 0.0)),
    ("broccoli", food(34.0, 2.8, 6.6, 0.4, 47.0, 0.0)),
    ("brown rice", food(112.0, 2.3, 23.5, 0.8, 10.0, 0.0)),
    ("carrot", food(41.0, 0.9, 9.6, 0.2, 33.0, 0.0)),
    ("cheddar cheese", food(403.0, 24.9, 1.3, 33.1, 721.0, 0.6)),
    ("chicken", food(239.0, 27.3, 0.0, 13.6, 15.0, 0.2)),
    ("chicken breast", food(165.0, 31.0, 0.0, 3.6, 15.0, 0.0)),
    ("chickpeas", food(164.0, 8.9, 27.4, 2.6, 49.0, 0.0)),
    ("cod", food(82.0, 17.8, 0.0, 0.7, 16.0, 0.9)),
    ("cottage cheese", food(98.0, 11.1, 3.4, 4.3, 83.0, 0.1)),
    ("egg", food(155.0, 12.6, 1.1, 10.6, 56.0, 2.2)),
    ("greek yogurt", food(59.0, 10.2, 3.6, 0.4, 110.0, 0.0)),
    ("kale", food(49.0, 4.3, 8.8, 0.9, 150.0, 0.0)),
    ("lentils", food(116.0, 9.0, 20.1, 0.4, 19.0, 0.0)),
    ("milk", food(61.0, 3.2, 4.8, 3.3, 113.0, 1.3)),
    ("mushrooms", food(22.0, 3.1, 3.3, 0.3, 3.0, 0.2)),
    ("oatmeal", food(71.0, 2.5, 12.0, 1.5, 9.0, 0.0)),
    ("orange", food(47.0, 0.9, 11.8, 0.1, 40.0, 0.0)),
    ("peanut butter", food(588.0, 25.0, 20.0, 50.0, 43.0, 0.0)),
    ("pork", food(242.0, 27.0, 0.0, 14.0, 19.0, 0.7)),
    ("quinoa", food(120.0, 4.4, 21.3, 1.9, 17.0, 0.0)),
    ("salmon", food(208.0, 20.4, 0.0, 13.4, 9.0, 11.0)),
    ("sardines", food(208.0, 24.6, 0.0, 11.5, 382.0, 4.8)),
    ("shrimp", food(99.0, 24.0, 0.2, 0.3, 70.0, 0.1)),
    ("soy milk", food(54.0, 3.3, 6.3, 1.8, 123.0, 1.1)),
    ("spinach", food(23.0, 2.9, 3.6, 0.4, 99.0, 0.0)),
    ("sweet potato", food(86.0, 1.6, 20.1, 0.1, 30.0, 0.0)),
    ("tofu", food(76.0, 8.1, 1.9, 4.8, 350.0, 0.0)),
    ("tuna", food(132.0, 28.0, 0.0, 1.0, 10.0, 1.7)),
    ("turkey", food(189.0, 29.0, 0.0, 7.4, 21.0, 0.4)),
    ("white bread", food(265.0, 9.0, 49.0, 3.2, 151.0, 0.0)),
    ("white rice", food(130.0, 2.7, 28.2, 0.3, 10.0, 0.0)),
    ("whole wheat bread", food(247.0, 13.0, 41.0, 3.4, 107.0, 0.0)),
    ("yogurt", food(61.0, 3.5, 4.7, 3.3, 121.0, 0.1)),
];
