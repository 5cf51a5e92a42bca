//! Filter criteria parsed from a read request's query string.

use thiserror::Error;

/// Query key for trait criteria. The bracketed form is accepted as well.
const TRAITS_KEY: &str = "personalityTraits";
const TRAITS_KEY_BRACKETED: &str = "personalityTraits[]";

/// Errors raised while parsing criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// A single-valued key (`diet`, `species`, `name`) appeared more than once.
    #[error("criterion `{0}` must be a single string value")]
    Repeated(String),
}

/// Result type for criteria parsing.
pub type CriteriaResult<T> = Result<T, CriteriaError>;

/// The optional filter keys a read request may supply.
///
/// Every field that is set narrows the result; unset fields impose no
/// constraint. An empty `personality_traits` means "no trait constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub personality_traits: Vec<String>,
    pub diet: Option<String>,
    pub species: Option<String>,
    pub name: Option<String>,
}

impl Criteria {
    /// Parse criteria from raw query-string pairs, in order of appearance.
    ///
    /// Trait keys may repeat, each occurrence adding one trait. The scalar
    /// keys may appear at most once. Empty values are ignored, as are keys
    /// this filter does not know about.
    pub fn from_pairs<I, K, V>(pairs: I) -> CriteriaResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Self::default();
        let mut seen: Vec<&'static str> = Vec::new();
        for (key, value) in pairs {
            let value: String = value.into();
            let (field, slot) = match key.as_ref() {
                TRAITS_KEY | TRAITS_KEY_BRACKETED => {
                    if !value.is_empty() {
                        criteria.personality_traits.push(value);
                    }
                    continue;
                }
                "diet" => ("diet", &mut criteria.diet),
                "species" => ("species", &mut criteria.species),
                "name" => ("name", &mut criteria.name),
                _ => continue,
            };
            // Checked before the empty-value skip so `diet=&diet=x` is a repeat too.
            if seen.contains(&field) {
                return Err(CriteriaError::Repeated(field.to_string()));
            }
            seen.push(field);
            if !value.is_empty() {
                *slot = Some(value);
            }
        }
        Ok(criteria)
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_none()
            && self.species.is_none()
            && self.name.is_none()
    }

    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.personality_traits.push(trait_name.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
