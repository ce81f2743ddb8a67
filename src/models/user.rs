use super::Event;
use crate::error::OrmError;
use crate::model::{Field, Model};
use crate::scan::RowReader;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
}

const USER_FIELDS: &[Field] = &[
    Field::column("Id"),
    Field::column("Email"),
    Field::column("PasswordHash"),
    Field::column("CreatedAt"),
    Field::column("UpdatedAt"),
    Field::relation("Events"),
];

impl Model for User {
    fn fields() -> &'static [Field] {
        USER_FIELDS
    }

    fn from_row(row: &mut RowReader<'_>) -> Result<Self, OrmError> {
        Ok(User {
            id: row.next()?,
            email: row.next()?,
            password_hash: row.next()?,
            created_at: row.next()?,
            updated_at: row.next()?,
            events: None,
        })
    }
}
