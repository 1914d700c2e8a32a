use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, post, InsertedId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub post_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Post }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Post => Entity::belongs_to(post::Entity)
                .from(Column::PostId)
                .to(post::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<post::Entity> for Entity {
    fn to() -> RelationDef { Relation::Post.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
    pub post_id: i32,
}

/// A comment together with the title of the post it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentWithPost {
    #[serde(flatten)]
    pub comment: Model,
    pub post: String,
}

impl From<(Model, Option<post::Model>)> for CommentWithPost {
    fn from((comment, parent): (Model, Option<post::Model>)) -> Self {
        Self { comment, post: parent.map(|p| p.title).unwrap_or_default() }
    }
}

pub async fn list_for_post(db: &DatabaseConnection, post_id: i32) -> Result<Vec<CommentWithPost>, ModelError> {
    let rows = Entity::find()
        .filter(Column::PostId.eq(post_id))
        .order_by_asc(Column::Id)
        .find_also_related(post::Entity)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(CommentWithPost::from).collect())
}

pub async fn find_with_post(db: &DatabaseConnection, id: i32) -> Result<Option<CommentWithPost>, ModelError> {
    let row = Entity::find_by_id(id)
        .find_also_related(post::Entity)
        .one(db)
        .await?;
    Ok(row.map(CommentWithPost::from))
}

/// Insert a comment. Fails with `ModelError::Validation` when `post_id`
/// does not reference a stored post.
pub async fn create(db: &DatabaseConnection, input: &NewComment) -> Result<InsertedId, ModelError> {
    if post::Entity::find_by_id(input.post_id).one(db).await?.is_none() {
        return Err(ModelError::Validation(format!(
            "post_id {} does not reference an existing post",
            input.post_id
        )));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        text: Set(input.text.clone()),
        post_id: Set(input.post_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = am.insert(db).await?;
    Ok(InsertedId { id: created.id })
}
