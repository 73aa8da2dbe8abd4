use crate::domain::model::Owner;
use crate::utils::error::Result;

pub fn decode_owners(text: &str) -> Result<Vec<Owner>> {
    let owners: Vec<Owner> = serde_json::from_str(text)?;
    tracing::debug!("Decoded {} owners", owners.len());
    Ok(owners)
}
