use crate::{Animal, Criteria};

/// Narrow `animals` to the records matching every criterion that is set.
///
/// Stages run traits, diet, species, then name; each only shrinks the
/// working set, so the result is the intersection of all criteria and keeps
/// the input order. Comparisons are exact and case-sensitive.
pub fn filter_by_query<'a>(criteria: &Criteria, animals: &'a [Animal]) -> Vec<&'a Animal> {
    let mut results: Vec<&Animal> = animals.iter().collect();

    for trait_name in &criteria.personality_traits {
        results.retain(|animal| animal.has_trait(trait_name));
    }
    if let Some(diet) = &criteria.diet {
        results.retain(|animal| &animal.diet == diet);
    }
    if let Some(species) = &criteria.species {
        results.retain(|animal| &animal.species == species);
    }
    if let Some(name) = &criteria.name {
        results.retain(|animal| &animal.name == name);
    }

    results
}

/// First record whose id matches exactly, if any.
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|animal| animal.id == id)
}
