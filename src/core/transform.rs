use crate::domain::model::{Owner, OwnerGenderAndCat};

/// Flattens owners into (gender, cat name) pairings sorted by gender, then by
/// cat name. Owners without a pet list or without cats contribute nothing.
/// Ordering is byte-wise, not locale-aware.
pub fn sort_gender_and_cats(owners: &[Owner]) -> Vec<OwnerGenderAndCat> {
    let mut pairs: Vec<OwnerGenderAndCat> = owners
        .iter()
        .filter_map(|owner| owner.pets.as_deref().map(|pets| (owner, pets)))
        .flat_map(|(owner, pets)| {
            pets.iter()
                .filter(|pet| pet.is_cat())
                .map(move |pet| OwnerGenderAndCat::new(owner.gender.as_str(), pet.name.as_str()))
        })
        .collect();

    pairs.sort_by(|a, b| {
        a.owner_gender
            .cmp(&b.owner_gender)
            .then_with(|| a.pet_name.cmp(&b.pet_name))
    });

    tracing::debug!("Kept {} cats from {} owners", pairs.len(), owners.len());
    pairs
}
