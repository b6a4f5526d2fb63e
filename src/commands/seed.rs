//! Seed command - loads the sample laptop catalog.
//!
//! Skips seeding when the catalog already has entries unless `--fresh`
//! is passed, in which case existing laptops are removed first.

use sea_orm::EntityTrait;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::{discount_percent, NewLaptop};
use crate::errors::AppResult;
use crate::infra::repositories::entities::laptop::Entity as LaptopEntity;
use crate::infra::{Database, LaptopRepository, LaptopStore};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await;
    let connection = db.get_connection();

    if args.fresh {
        let deleted = LaptopEntity::delete_many().exec(&connection).await?;
        tracing::info!("Cleared {} existing laptops", deleted.rows_affected);
    } else {
        let existing = LaptopEntity::find().all(&connection).await?;
        if !existing.is_empty() {
            tracing::info!(
                "Catalog already has {} laptops, skipping seed (use --fresh to replace)",
                existing.len()
            );
            return Ok(());
        }
    }

    let store = LaptopStore::new(connection);
    let laptops = sample_laptops();
    let count = laptops.len();

    for laptop in laptops {
        let created = store.create(laptop).await?;
        tracing::info!("- {} ({}) - NPR {}", created.name, created.brand, created.price);
    }

    tracing::info!("Successfully seeded {} laptops", count);
    Ok(())
}

fn laptop(
    name: &str,
    brand: &str,
    price: i64,
    original_price: i64,
    image: &str,
    description: &str,
    processor: &str,
    ram: &str,
    storage: &str,
    display: &str,
    os: &str,
    is_new: bool,
    rating: f64,
    reviews: i32,
) -> NewLaptop {
    NewLaptop {
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        original_price,
        image: image.to_string(),
        description: Some(description.to_string()),
        processor: processor.to_string(),
        ram: ram.to_string(),
        storage: storage.to_string(),
        display: display.to_string(),
        os: os.to_string(),
        in_stock: true,
        is_new,
        rating,
        reviews,
        discount: discount_percent(original_price, price),
    }
}

/// The demo catalog shipped with the storefront.
fn sample_laptops() -> Vec<NewLaptop> {
    vec![
        laptop(
            "Lenovo IdeaPad 3",
            "Lenovo",
            45_000,
            55_000,
            "https://images.pexels.com/photos/7974/pexels-photo.jpg?auto=compress&w=400",
            "Perfect for everyday computing with reliable performance",
            "AMD Ryzen 5 5500U",
            "8GB",
            "256GB SSD",
            "15.6\" FHD",
            "Windows 11 Home",
            false,
            4.1,
            334,
        ),
        laptop(
            "HP Pavilion 15",
            "HP",
            52_000,
            65_000,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=compress&w=400",
            "Stylish design with powerful performance for work and entertainment",
            "AMD Ryzen 5 5600H",
            "8GB",
            "256GB SSD",
            "15.6\" FHD",
            "Windows 11 Home",
            false,
            4.2,
            423,
        ),
        laptop(
            "Dell Inspiron 15 300",
            "Dell",
            48_000,
            60_000,
            "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=compress&w=400",
            "Reliable performance for students and professionals",
            "Intel i5-1135G7",
            "8GB",
            "256GB SSD",
            "15.6\" FHD",
            "Windows 11 Home",
            false,
            4.0,
            287,
        ),
        laptop(
            "ASUS VivoBook 15",
            "ASUS",
            58_000,
            72_000,
            "https://images.pexels.com/photos/2115217/pexels-photo-2115217.jpeg?auto=compress&w=400",
            "Slim and lightweight with premium features",
            "Intel i5-1135G7",
            "8GB",
            "512GB SSD",
            "15.6\" FHD",
            "Windows 11 Home",
            false,
            4.3,
            567,
        ),
        laptop(
            "Acer Swift 3",
            "Acer",
            55_000,
            68_000,
            "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=compress&w=400",
            "Ultra-portable with all-day battery life",
            "Intel i5-1135G7",
            "8GB",
            "512GB SSD",
            "14\" FHD",
            "Windows 11 Home",
            false,
            4.4,
            389,
        ),
        laptop(
            "MacBook Air M1",
            "Apple",
            120_000,
            140_000,
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=compress&w=400",
            "Revolutionary performance with Apple Silicon",
            "Apple M1",
            "8GB",
            "256GB SSD",
            "13.3\" Retina",
            "macOS",
            true,
            4.8,
            892,
        ),
        laptop(
            "MSI Gaming Laptop",
            "MSI",
            85_000,
            95_000,
            "https://images.pexels.com/photos/7974/pexels-photo.jpg?auto=compress&w=400",
            "High-performance gaming laptop with RGB lighting",
            "Intel i5-11400H",
            "16GB",
            "512GB SSD",
            "15.6\" FHD 144Hz",
            "Windows 11 Home",
            false,
            4.5,
            234,
        ),
        laptop(
            "Razer Blade 15",
            "Razer",
            180_000,
            200_000,
            "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=compress&w=400",
            "Premium gaming laptop with exceptional build quality",
            "Intel i7-11800H",
            "16GB",
            "1TB SSD",
            "15.6\" QHD 165Hz",
            "Windows 11 Home",
            true,
            4.7,
            156,
        ),
    ]
}
