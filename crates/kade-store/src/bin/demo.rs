//! # Checkout Walkthrough
//!
//! Drives one full shopper journey against an in-memory database:
//! seed a small catalog, fill a cart, create a COD payment, place the
//! order, and print the result.
//!
//! ## Usage
//! ```bash
//! cargo run -p kade-store --bin demo
//! ```

use chrono::NaiveDate;
use tracing::info;

use kade_core::catalog::{Catalog, PackVariant, Product};
use kade_core::customer::{Address, Customer};
use kade_core::money::Money;
use kade_core::payment::cod::DeliverySlot;
use kade_core::payment::{MethodData, PaymentRequest, PaymentService};
use kade_store::{BoundedGateway, CartSession, SimulatedGateway, Store, StoreConfig};

/// A handful of pantry staples with per-pack variants.
fn seed_catalog() -> Catalog {
    let products = vec![
        Product {
            id: 1,
            name: "Ceylon Black Tea".to_string(),
            brand: "Watawala".to_string(),
            category: "Tea".to_string(),
            image: Some("/images/tea-black.jpg".to_string()),
            base_price: Money::from_rupees(420),
            variants: vec![
                PackVariant {
                    size: "200g".to_string(),
                    price: Money::from_rupees(420),
                    weight_grams: 200,
                    stock: 40,
                    sku: "TEA-BLK-200".to_string(),
                },
                PackVariant {
                    size: "500g".to_string(),
                    price: Money::from_rupees(750),
                    weight_grams: 500,
                    stock: 20,
                    sku: "TEA-BLK-500".to_string(),
                },
            ],
        },
        Product {
            id: 2,
            name: "White Rice".to_string(),
            brand: "Araliya".to_string(),
            category: "Rice".to_string(),
            image: Some("/images/rice-white.jpg".to_string()),
            base_price: Money::from_rupees(1150),
            variants: vec![PackVariant {
                size: "5kg".to_string(),
                price: Money::from_rupees(1150),
                weight_grams: 5000,
                stock: 15,
                sku: "RICE-WHT-5K".to_string(),
            }],
        },
    ];

    // Seed data is static; a duplicate SKU here is a programmer error
    Catalog::new(products).expect("seed catalog is valid")
}

fn shopper() -> Customer {
    Customer {
        first_name: "Nimal".to_string(),
        last_name: "Perera".to_string(),
        email: "nimal@example.com".to_string(),
        phone: "0771234567".to_string(),
        address: Address {
            street: "24 Temple Road".to_string(),
            city: "Peradeniya".to_string(),
            district: "Kandy".to_string(),
            postal_code: "20400".to_string(),
            country: "Sri Lanka".to_string(),
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let catalog = seed_catalog();
    let store = Store::new(StoreConfig::in_memory()).await?;
    let payments = PaymentService::new(BoundedGateway::new(SimulatedGateway::new()));

    // Fill the cart
    let mut session = CartSession::open(store.clone(), &catalog, "demo-visitor").await?;
    session.add_item(&catalog, 1, "500g", 2).await?;
    session.add_item(&catalog, 2, "5kg", 1).await?;

    let cart = session.cart();
    info!(
        lines = cart.items().len(),
        subtotal = %cart.total(),
        "Cart ready"
    );

    // Price the order for the shopper's district
    let customer = shopper();
    let totals = kade_core::pricing::order_totals(cart.total(), &customer.address.district);
    info!(
        subtotal = %totals.subtotal,
        shipping = %totals.shipping,
        tax = %totals.tax,
        total = %totals.total,
        "Order priced"
    );

    // Create a COD payment for the order total
    let payment = payments
        .create_payment(PaymentRequest {
            amount: totals.total,
            customer: customer.clone(),
            data: MethodData::CashOnDelivery {
                delivery_date: NaiveDate::from_ymd_opt(2026, 9, 1)
                    .ok_or("invalid delivery date")?,
                slot: DeliverySlot::Morning,
            },
        })
        .await?;
    info!(reference = %payment.reference, status = %payment.status, "Payment created");

    // Place the order
    let order = session
        .place_order(customer, &payment, Some("Ring the bell twice".to_string()))
        .await?;
    info!(id = %order.id, total = %order.total, status = %order.status, "Order placed");

    // Read it back
    let stored = store
        .orders()
        .get_by_id(&order.id)
        .await?
        .ok_or("order vanished after insert")?;
    println!();
    println!("Order {}", stored.id);
    println!("  Customer : {} {}", stored.customer.first_name, stored.customer.last_name);
    for item in &stored.items {
        println!(
            "  Line     : {} ({}) x{} @ {}",
            item.name, item.pack_size, item.quantity, item.price
        );
    }
    println!("  Subtotal : {}", stored.subtotal);
    println!("  Shipping : {}", stored.shipping);
    println!("  VAT 15%  : {}", stored.tax);
    println!("  Total    : {}", stored.total);
    println!("  Payment  : {} ({})", stored.payment_method, payment.reference);

    store.close().await;
    Ok(())
}
