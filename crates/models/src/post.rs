use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{comment, errors::ModelError, InsertedId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Comments }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Comments => Entity::has_many(comment::Entity).into(),
        }
    }
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Comments.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Author-supplied fields of a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub contents: String,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contents: Option<String>,
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn create(db: &DatabaseConnection, input: &NewPost) -> Result<InsertedId, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(input.title.clone()),
        contents: Set(input.contents.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    Ok(InsertedId { id: created.id })
}

/// Apply `changes` to post `id`; returns the number of rows updated (0 or 1).
pub async fn update(db: &DatabaseConnection, id: i32, changes: &PostChanges) -> Result<u64, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(0);
    };
    let mut am: ActiveModel = found.into();
    if let Some(title) = &changes.title {
        am.title = Set(title.clone());
    }
    if let Some(contents) = &changes.contents {
        am.contents = Set(contents.clone());
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await?;
    Ok(1)
}

/// Delete post `id`; returns the number of rows removed (0 or 1).
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
