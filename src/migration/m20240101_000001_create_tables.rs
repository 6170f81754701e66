use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string_len(120).not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string_len(120).not_null().unique_key())
                    .col(ColumnDef::new(Users::Password).string_len(255).not_null())
                    .col(ColumnDef::new(Users::IsActive).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planets::Name).string_len(120).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Name).string_len(120).not_null())
                    .to_owned(),
            )
            .await?;

        // Only user_id is a database foreign key. Targets are not checked, and
        // there is no unique (user_id, planet_id) constraint.
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritePlanets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritePlanets::UserId).integer().not_null())
                    .col(ColumnDef::new(FavoritePlanets::PlanetId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planets_user")
                            .from(FavoritePlanets::Table, FavoritePlanets::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoritePeople::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FavoritePeople::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FavoritePeople::UserId).integer().not_null())
                    .col(ColumnDef::new(FavoritePeople::PeopleId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_people_user")
                            .from(FavoritePeople::Table, FavoritePeople::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePeople::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FavoritePlanets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
    IsActive,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum FavoritePlanets {
    Table,
    Id,
    UserId,
    PlanetId,
}

#[derive(DeriveIden)]
enum FavoritePeople {
    Table,
    Id,
    UserId,
    PeopleId,
}
