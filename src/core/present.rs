use crate::domain::model::{DisplaySummary, OwnerGenderAndCat};

pub const SEPARATOR: &str = "--------------";

/// Renders sorted pairings, printing a header each time the gender changes
/// from the previous pairing. The previous gender starts out empty, so pairings
/// with an empty gender at the head of the list print without a header.
/// Empty input renders an empty string.
pub fn render(pairs: &[OwnerGenderAndCat]) -> String {
    let mut out = String::new();
    let mut previous_gender: &str = "";

    for pair in pairs {
        if pair.owner_gender != previous_gender {
            out.push('\n');
            out.push_str(&pair.owner_gender);
            out.push('\n');
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        out.push_str(&pair.pet_name);
        out.push('\n');
        previous_gender = pair.owner_gender.as_str();
    }

    out
}

pub fn summarize(pairs: &[OwnerGenderAndCat]) -> DisplaySummary {
    let mut previous_gender: &str = "";
    let mut genders = 0;
    for pair in pairs {
        if pair.owner_gender != previous_gender {
            genders += 1;
        }
        previous_gender = pair.owner_gender.as_str();
    }

    DisplaySummary {
        genders,
        cats: pairs.len(),
    }
}
