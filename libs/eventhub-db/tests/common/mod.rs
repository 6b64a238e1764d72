#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared fixtures: a small widget/tag schema with a many-to-many join.

use eventhub_db::{Db, DbConfig, DbHandle};
use sea_orm_migration::prelude::*;

pub mod widget {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "widgets")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub weight: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl Related<super::tag::Entity> for Entity {
        fn to() -> RelationDef {
            super::widget_tag::Relation::Tag.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::widget_tag::Relation::Widget.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod tag {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "tags")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub label: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod widget_tag {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "widget_tags")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub widget_id: i32,
        pub tag_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::widget::Entity",
            from = "Column::WidgetId",
            to = "super::widget::Column::Id"
        )]
        Widget,
        #[sea_orm(
            belongs_to = "super::tag::Entity",
            from = "Column::TagId",
            to = "super::tag::Column::Id"
        )]
        Tag,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

#[derive(DeriveMigrationName)]
struct CreateWidgets;

#[async_trait::async_trait]
impl MigrationTrait for CreateWidgets {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Widgets::Table)
                    .col(
                        ColumnDef::new(Widgets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Widgets::Name).string().not_null())
                    .col(ColumnDef::new(Widgets::Weight).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .col(
                        ColumnDef::new(Tags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tags::Label).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WidgetTags::Table)
                    .col(
                        ColumnDef::new(WidgetTags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WidgetTags::WidgetId).integer().not_null())
                    .col(ColumnDef::new(WidgetTags::TagId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(WidgetTags::Table, WidgetTags::WidgetId)
                            .to(Widgets::Table, Widgets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WidgetTags::Table, WidgetTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WidgetTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Widgets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Widgets {
    Table,
    Id,
    Name,
    Weight,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Label,
}

#[derive(DeriveIden)]
enum WidgetTags {
    Table,
    Id,
    WidgetId,
    TagId,
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateWidgets)]
    }
}

/// Fresh in-memory database with the widget schema applied.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup() -> Db {
    let cfg = DbConfig {
        dsn: "sqlite::memory:".to_owned(),
        max_conns: Some(1),
        ..Default::default()
    };
    let db = DbHandle::connect(&cfg)
        .await
        .expect("Failed to connect to database")
        .into_db();
    db.run_migrations::<Migrator>()
        .await
        .expect("Failed to run migrations");
    db
}
