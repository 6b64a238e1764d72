//! Events, packages and the join table between them.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::CreatorId).string().not_null())
                    .col(ColumnDef::new(Events::EventName).string().not_null())
                    .col(ColumnDef::new(Events::Category).string().not_null())
                    .col(ColumnDef::new(Events::ImageUrl).string())
                    .col(
                        ColumnDef::new(Events::EventDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::Location).string().not_null())
                    .col(ColumnDef::new(Events::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_creator")
                    .table(Events::Table)
                    .col(Events::CreatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Packages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Packages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Packages::PackageName).string().not_null())
                    .col(ColumnDef::new(Packages::SeatingArrangement).string())
                    .col(ColumnDef::new(Packages::Placement).string())
                    .col(ColumnDef::new(Packages::Price).decimal_len(16, 2))
                    .col(ColumnDef::new(Packages::Currency).string_len(3))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventPackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventPackages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventPackages::EventId).uuid().not_null())
                    .col(ColumnDef::new(EventPackages::PackageId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventPackages::Table, EventPackages::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EventPackages::Table, EventPackages::PackageId)
                            .to(Packages::Table, Packages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_packages_event")
                    .table(EventPackages::Table)
                    .col(EventPackages::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventPackages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Packages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    CreatorId,
    EventName,
    Category,
    ImageUrl,
    EventDate,
    Location,
    Description,
}

#[derive(DeriveIden)]
enum Packages {
    Table,
    Id,
    PackageName,
    SeatingArrangement,
    Placement,
    Price,
    Currency,
}

#[derive(DeriveIden)]
enum EventPackages {
    Table,
    Id,
    EventId,
    PackageId,
}
