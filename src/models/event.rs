use super::User;
use crate::error::OrmError;
use crate::model::{Field, Model};
use crate::scan::RowReader;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub owner_user_id: i64,
    pub label: String,
    pub cover_photo_path: Option<String>,
    /// Derived for responses; not stored.
    #[serde(rename = "coverPhotoURL", skip_serializing_if = "Option::is_none")]
    pub cover_photo_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Box<User>>,
}

const EVENT_FIELDS: &[Field] = &[
    Field::column("Id"),
    Field::column("OwnerUserId"),
    Field::column("Label"),
    Field::column("CoverPhotoPath"),
    Field::ignored("CoverPhotoURL"),
    Field::column("CreatedAt"),
    Field::column("UpdatedAt"),
    Field::relation("Owner"),
];

impl Model for Event {
    fn fields() -> &'static [Field] {
        EVENT_FIELDS
    }

    fn from_row(row: &mut RowReader<'_>) -> Result<Self, OrmError> {
        Ok(Event {
            id: row.next()?,
            owner_user_id: row.next()?,
            label: row.next()?,
            cover_photo_path: row.next()?,
            cover_photo_url: None,
            created_at: row.next()?,
            updated_at: row.next()?,
            owner: None,
        })
    }
}
