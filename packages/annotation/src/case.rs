//! Case Conventions
//!
//! Name transforms used to match a destination field against the keys of a
//! property map written in a different casing style.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToTrainCase, ToUpperCamelCase,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Identifier casing styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseConvention {
    /// `acamelcasevalue`
    Lower,
    /// `a_camel_case_value`
    Snake,
    /// `a-camel-case-value`
    Kebab,
    /// `A_CAMEL_CASE_VALUE`
    UpperSnake,
    /// `A-Camel-Case-Value`
    Train,
    /// `aCamelCaseValue`
    Camel,
    /// `ACamelCaseValue`
    Pascal,
}

/// Lookup candidates for one field: the exact name plus one per convention
pub type Candidates = SmallVec<[String; 8]>;

impl CaseConvention {
    /// Order in which conventions are tried; the first candidate present wins
    pub const DEFAULT_ORDER: [CaseConvention; 7] = [
        CaseConvention::Lower,
        CaseConvention::Snake,
        CaseConvention::Kebab,
        CaseConvention::UpperSnake,
        CaseConvention::Train,
        CaseConvention::Camel,
        CaseConvention::Pascal,
    ];

    pub fn apply(&self, ident: &str) -> String {
        match self {
            CaseConvention::Lower => ident.to_lowercase(),
            CaseConvention::Snake => ident.to_snake_case(),
            CaseConvention::Kebab => ident.to_kebab_case(),
            CaseConvention::UpperSnake => ident.to_shouty_snake_case(),
            CaseConvention::Train => ident.to_train_case(),
            CaseConvention::Camel => ident.to_lower_camel_case(),
            CaseConvention::Pascal => ident.to_upper_camel_case(),
        }
    }
}

/// Build the ordered, duplicate-free list of names a field may appear under
pub fn candidates(field: &str, conventions: &[CaseConvention]) -> Candidates {
    let mut names = Candidates::new();
    names.push(field.to_string());
    for convention in conventions {
        let name = convention.apply(field);
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
