//! Follow entity for SeaORM.
//!
//! The `(user_id, author_id)` pair is the composite primary key, which
//! doubles as the uniqueness constraint on the edge.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub author_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Follow.
impl From<Model> for murmur_core::domain::Follow {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            author_id: model.author_id,
        }
    }
}

/// Conversion from Domain Follow to SeaORM ActiveModel.
impl From<murmur_core::domain::Follow> for ActiveModel {
    fn from(follow: murmur_core::domain::Follow) -> Self {
        Self {
            user_id: Set(follow.user_id),
            author_id: Set(follow.author_id),
        }
    }
}
