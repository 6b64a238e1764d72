use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub package_name: String,
    pub seating_arrangement: Option<String>,
    pub placement: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))", nullable)]
    pub price: Option<Decimal>,
    pub currency: Option<String>,
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

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_package::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_package::Relation::Package.def().rev())
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
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
