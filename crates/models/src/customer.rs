use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, Set, Unchanged};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub age: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Exactly one `@` with non-empty parts and no whitespace anywhere; callers trim first.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.len() > 255 || email.chars().any(char::is_whitespace) {
        return Err(ModelError::Validation("invalid email".into()));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(ModelError::Validation("invalid email".into())),
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    if name.chars().count() > 128 { return Err(ModelError::Validation("name too long (<=128)".into())); }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), ModelError> {
    if age < 0 { return Err(ModelError::Validation("age must be >= 0".into())); }
    Ok(())
}

/// All customers ordered by id.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn exists(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}

pub async fn email_exists(db: &DatabaseConnection, email: &str) -> Result<bool, ModelError> {
    let n = Entity::find().filter(Column::Email.eq(email)).count(db).await?;
    Ok(n > 0)
}

/// Insert a customer; the id comes from the table sequence.
pub async fn create(db: &DatabaseConnection, name: &str, age: i32, email: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_age(age)?;
    validate_email(email)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        age: Set(age),
        email: Set(email.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite name, age and email of an existing row.
pub async fn overwrite(db: &DatabaseConnection, id: i64, name: &str, age: i32, email: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Unchanged(id),
        name: Set(name.to_string()),
        age: Set(age),
        email: Set(email.to_string()),
        created_at: NotSet,
        updated_at: Set(Utc::now().into()),
    };
    Ok(am.update(db).await?)
}

pub async fn hard_delete(db: &DatabaseConnection, id: i64) -> Result<(), ModelError> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(validate_email("ann@x.com").is_ok());
        assert!(validate_email("ann.x.com").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("ann@").is_err());
        assert!(validate_email("   ").is_err());
    }

    #[test]
    fn email_validation_rejects_whitespace_and_extra_at() {
        assert!(validate_email(" ann@x.com").is_err());
        assert!(validate_email("ann@x.com ").is_err());
        assert!(validate_email("a b@x.com").is_err());
        assert!(validate_email("a@b@c").is_err());
        assert!(validate_email(&format!("{}@x.com", "a".repeat(250))).is_err());
    }

    #[test]
    fn name_validation() {
        assert!(validate_name("Ann").is_ok());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(&"a".repeat(129)).is_err());
    }

    #[test]
    fn age_validation() {
        assert!(validate_age(0).is_ok());
        assert!(validate_age(120).is_ok());
        assert!(matches!(validate_age(-1), Err(ModelError::Validation(_))));
    }
}
