//! Starter catalog
//!
//! Upserted at startup so a fresh database (or the in-memory store) has
//! something to sell.

use rust_decimal::Decimal;

use crate::domain::entities::{Category, Product};

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn product(
    id: &str,
    name: &str,
    cents: i64,
    category: Category,
    stock: i32,
    photo: &str,
    description: &str,
) -> Product {
    Product {
        id: id.into(),
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        category,
        image_url: format!("{}/{}?auto=format&fit=crop&q=80&w=800", IMAGE_BASE, photo),
        description: description.to_string(),
        stock,
    }
}

pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Jarrón Cerámico",
            2500,
            Category::Decoracion,
            8,
            "photo-1578500494198-246f612d3b3d",
            "Jarrón minimalista de cerámica blanca con acabado mate.",
        ),
        product(
            "2",
            "Utensilios de Cocina",
            3250,
            Category::Cocina,
            2,
            "photo-1584346133934-a3afd2a33c4c",
            "Set de utensilios de madera de bambú sostenibles.",
        ),
        product(
            "3",
            "Lámpara de Escritorio",
            4800,
            Category::Decoracion,
            0,
            "photo-1534073828943-f801091bb18c",
            "Lámpara LED moderna con luz cálida ajustable.",
        ),
        product(
            "4",
            "Cojín Texturizado",
            1999,
            Category::Textil,
            3,
            "photo-1583847268964-b28dc8f51f92",
            "Cojín suave con textura tejida en color beige neutro.",
        ),
        product(
            "5",
            "Planta Suculenta",
            1500,
            Category::Jardin,
            12,
            "photo-1509423350716-97f9360b4e09",
            "Pequeña suculenta artificial en maceta geométrica.",
        ),
        product(
            "6",
            "Dispensador de Jabón",
            2200,
            Category::Bano,
            1,
            "photo-1603533866380-48281358997a",
            "Dispensador de vidrio ámbar elegante y reutilizable.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let products = seed_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn seed_covers_every_category() {
        let products = seed_products();
        for category in Category::ALL {
            assert!(products.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn seed_prices_are_positive_and_stock_non_negative() {
        for p in seed_products() {
            assert!(p.price > Decimal::ZERO);
            assert!(p.stock >= 0);
        }
    }
}
