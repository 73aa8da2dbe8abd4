use serde::{Deserialize, Serialize};

/// Pet type kept by the cat filter. Compared case-sensitively.
pub const CAT_TYPE: &str = "Cat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pet {
    pub name: String,
    #[serde(rename = "Type")]
    pub pet_type: String,
}

impl Pet {
    pub fn is_cat(&self) -> bool {
        self.pet_type == CAT_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Owner {
    pub name: String,
    pub gender: String,
    pub age: i64,
    /// `None` when the payload has `"Pets": null` or omits the field.
    #[serde(default)]
    pub pets: Option<Vec<Pet>>,
}

/// One (owner gender, cat name) pairing, the unit the presenter prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerGenderAndCat {
    pub owner_gender: String,
    pub pet_name: String,
}

impl OwnerGenderAndCat {
    pub fn new(owner_gender: impl Into<String>, pet_name: impl Into<String>) -> Self {
        Self {
            owner_gender: owner_gender.into(),
            pet_name: pet_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplaySummary {
    pub genders: usize,
    pub cats: usize,
}
