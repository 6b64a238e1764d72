use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub creator_id: String,
    pub event_name: String,
    pub category: String,
    pub image_url: Option<String>,
    pub event_date: OffsetDateTime,
    pub location: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_package::Entity")]
    EventPackage,
}

impl Related<super::event_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventPackage.def()
    }
}

impl Related<super::package::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_package::Relation::Package.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_package::Relation::Event.def().rev())
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Identity is assigned on insert when the caller left it unset.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.id.is_not_set() {
            self.id = ActiveValue::Set(Uuid::new_v4());
        }
        Ok(self)
    }
}
