use serde::{Deserialize, Serialize};

/// Fitted state of a category-expansion encoding.
///
/// Holds one category list per input column, in input-column order. The
/// naming function yields `<column>_<category>` for every fitted
/// (column, category) pair, so the output column count is the total number
/// of fitted categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoding {
    pub categories: Vec<Vec<String>>,
}

impl OneHotEncoding {
    pub fn new(categories: Vec<Vec<String>>) -> Self {
        Self { categories }
    }

    /// Output names for the given input names.
    ///
    /// Input names and fitted category lists are paired positionally.
    pub fn feature_names_out(&self, features_in: &[String]) -> Vec<String> {
        features_in
            .iter()
            .zip(&self.categories)
            .flat_map(|(column, categories)| {
                categories
                    .iter()
                    .map(move |category| format!("{}_{}", column, category))
            })
            .collect()
    }

    /// Total number of output columns implied by the fitted categories.
    pub fn output_width(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }
}
