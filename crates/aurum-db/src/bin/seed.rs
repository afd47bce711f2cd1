//! # Seed Data Generator
//!
//! Populates the database with a development jewellery catalog.
//!
//! ## Usage
//! ```bash
//! # Generate 40 products (default)
//! cargo run -p aurum-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p aurum-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p aurum-db --bin seed -- --db ./data/aurum.db
//! ```
//!
//! ## Generated Data
//! - Metals: gold at several karats, silver, platinum
//! - Diamonds: a spread of carat weights and clarity grades
//! - Purity levels and ring sizes
//! - Products cycling through a list of designs, each with one metal,
//!   every other one with a diamond, pricing components, and a stock row
//!   per ring size (some of them zero)

use aurum_core::{
    InventoryKey, NewDiamond, NewInventoryRecord, NewMetal, NewProduct, NewPurityLevel,
    NewRingSize, PricingComponents,
};
use aurum_db::{Database, DbConfig};
use std::env;

/// (name, purity label, color, price per gram)
const METALS: &[(&str, &str, &str, f64)] = &[
    ("Gold", "24K", "Yellow", 7200.0),
    ("Gold", "22K", "Yellow", 6600.0),
    ("Gold", "18K", "Rose", 5400.0),
    ("Silver", "925", "White", 95.0),
    ("Platinum", "950", "White", 3100.0),
];

/// (carat, quality, price per carat)
const DIAMONDS: &[(f64, &str, f64)] = &[
    (0.25, "SI1", 35000.0),
    (0.5, "VS2", 48000.0),
    (1.0, "VVS1", 65000.0),
    (1.5, "IF", 90000.0),
];

/// (label, purity percentage)
const PURITY_LEVELS: &[(&str, f64)] = &[
    ("24K", 99.9),
    ("22K", 91.6),
    ("18K", 75.0),
    ("925 Sterling", 92.5),
];

const RING_SIZES: &[&str] = &["10", "12", "14", "16", "18"];

const DESIGNS: &[&str] = &[
    "Solitaire Ring",
    "Temple Necklace",
    "Jhumka Earrings",
    "Kada Bangle",
    "Mangalsutra",
    "Nose Pin",
    "Eternity Band",
    "Tennis Bracelet",
];

const TAX_PERCENTAGES: &[f64] = &[0.0, 3.0, 5.0];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 40;
    let mut db_path = String::from("./aurum_catalog.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(40);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Aurum Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 40)");
                println!("  -d, --db <PATH>    Database file path (default: ./aurum_catalog.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Aurum Catalog Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();

    // Dimension tables first: everything else references them.
    let mut metal_ids = Vec::with_capacity(METALS.len());
    for (name, purity, color, price_per_gram) in METALS {
        let metal = db
            .metals()
            .insert(&NewMetal {
                name: name.to_string(),
                purity: Some(purity.to_string()),
                color: Some(color.to_string()),
                price_per_gram: *price_per_gram,
                is_alloy: *purity != "24K",
                description: None,
            })
            .await?;
        metal_ids.push(metal.id);
    }
    println!("✓ {} metals", metal_ids.len());

    let mut diamond_ids = Vec::with_capacity(DIAMONDS.len());
    for (carat, quality, price_per_carat) in DIAMONDS {
        let diamond = db
            .diamonds()
            .insert(&NewDiamond {
                carat: *carat,
                quality: Some(quality.to_string()),
                price_per_carat: *price_per_carat,
            })
            .await?;
        diamond_ids.push(diamond.id);
    }
    println!("✓ {} diamonds", diamond_ids.len());

    let mut purity_ids = Vec::with_capacity(PURITY_LEVELS.len());
    for (label, purity_percentage) in PURITY_LEVELS {
        let level = db
            .inventory()
            .insert_purity_level(&NewPurityLevel {
                label: label.to_string(),
                purity_percentage: *purity_percentage,
            })
            .await?;
        purity_ids.push(level.id);
    }

    let mut ring_size_ids = Vec::with_capacity(RING_SIZES.len());
    for label in RING_SIZES {
        let size = db
            .inventory()
            .insert_ring_size(&NewRingSize {
                label: label.to_string(),
            })
            .await?;
        ring_size_ids.push(size.id);
    }
    println!(
        "✓ {} purity levels, {} ring sizes",
        purity_ids.len(),
        ring_size_ids.len()
    );

    println!();
    println!("Generating products...");

    let mut generated = 0;
    let mut stock_rows = 0;
    for seed in 0..count {
        let design = DESIGNS[seed % DESIGNS.len()];
        let new_product = generate_product(design, seed);

        let product = match db.products().insert(&new_product).await {
            Ok(product) => product,
            Err(e) => {
                eprintln!("Failed to insert {}: {}", new_product.name, e);
                continue;
            }
        };

        let metal_idx = seed % metal_ids.len();
        db.products()
            .attach_metal(product.id, metal_ids[metal_idx])
            .await?;

        if seed % 2 == 0 {
            let diamond_id = diamond_ids[seed % diamond_ids.len()];
            db.products().attach_diamond(product.id, diamond_id).await?;
        }

        db.pricing()
            .upsert(&PricingComponents {
                product_id: product.id,
                tax_percentage: TAX_PERCENTAGES[seed % TAX_PERCENTAGES.len()],
                exchange_discount: ((seed % 5) * 100) as f64,
            })
            .await?;

        // Metals and purity levels line up by index where both exist.
        let purity_id = purity_ids[metal_idx.min(purity_ids.len() - 1)];
        for (size_idx, ring_size_id) in ring_size_ids.iter().enumerate() {
            let key = InventoryKey {
                product_id: product.id,
                metal_id: metal_ids[metal_idx],
                purity_id,
                ring_size_id: *ring_size_id,
            };
            let quantity = ((seed + size_idx * 3) % 7) as i64;
            db.inventory()
                .insert_record(&NewInventoryRecord { key, quantity })
                .await?;
            stock_rows += 1;
        }

        generated += 1;
        if generated % 10 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!(
        "✓ Generated {} products and {} stock rows in {:?}",
        generated, stock_rows, elapsed
    );

    // Price the first product as a smoke test.
    if let Some(first) = db.products().list().await?.first() {
        let quote = aurum_core::quote_product(&db.lookup(), first.id).await?;
        println!(
            "  {} #{} prices at {}",
            first.name, first.id, quote.breakdown.final_price
        );
    }

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Builds one product with plausible weight and making charges.
fn generate_product(design: &str, seed: usize) -> NewProduct {
    // 2.0g - 24.5g in 0.5g steps
    let base_weight = 2.0 + ((seed * 7) % 46) as f64 * 0.5;
    // 800 - 4750 in steps of 50
    let making_charges = 800.0 + ((seed * 13) % 80) as f64 * 50.0;

    NewProduct {
        name: format!("{} #{:03}", design, seed + 1),
        description: Some(format!("{} from the development catalog", design)),
        base_weight,
        making_charges,
        is_bis_hallmarked: seed % 3 != 0,
        is_gia_certified: seed % 2 == 0,
    }
}
