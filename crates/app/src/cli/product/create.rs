use std::sync::Arc;

use clap::Args;
use kart_app::{
    database::{self, Db},
    domain::products::{
        PgProductsRepository, ProductsService, ProductsServiceImpl,
        models::{NewProduct, ProductUuid},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    category: String,

    /// Unit price in whole currency units
    #[arg(long)]
    cost: u64,

    /// Star rating from 0 to 5
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    rating: u8,

    /// Image URL
    #[arg(long, default_value = "")]
    image: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = ProductsServiceImpl::new(Arc::new(PgProductsRepository::new(Db::new(pool))));

    let product = service
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: args.name,
            category: args.category,
            cost: args.cost,
            rating: args.rating,
            image: args.image,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);

    Ok(())
}
