use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Product transactions seeded from the external JSON source.
        // source_id is intentionally NOT unique: re-seeding appends duplicates.
        manager
            .create_table(
                Table::create()
                    .table(ProductTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductTransactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProductTransactions::SourceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductTransactions::Title)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductTransactions::Price)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductTransactions::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductTransactions::Category)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductTransactions::Image)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductTransactions::Sold)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductTransactions::DateOfSale)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Every aggregate endpoint filters on the sale date's month.
        manager
            .create_index(
                Index::create()
                    .name("idx_product_transactions_date_of_sale")
                    .table(ProductTransactions::Table)
                    .col(ProductTransactions::DateOfSale)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductTransactions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProductTransactions {
    Table,
    Id,
    SourceId,
    Title,
    Price,
    Description,
    Category,
    Image,
    Sold,
    DateOfSale,
}
