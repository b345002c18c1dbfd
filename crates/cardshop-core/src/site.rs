//! # Built-in Site Content
//!
//! The content served by the API. Compiled into the binary and assembled
//! once when the store is built.

use crate::{Card, CardId, Catalog, CatalogError, ContentStore, Section};
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde_json::{Value, json};

/// Site version reported by `/api/health` and the metadata section.
pub const SITE_VERSION: &str = "1.0.0";

/// Display name of the shop.
pub const SITE_NAME: &str = "All Occasion Cards";

/// Assemble the full built-in store.
///
/// `built_at` stamps the footer copyright year and `metadata.last_updated`.
pub fn build(built_at: DateTime<Utc>) -> Result<ContentStore, CatalogError> {
    let catalog = catalog()?;
    let gallery = gallery(&catalog);

    Ok(ContentStore::builder()
        .section(Section::Header, header())
        .section(Section::Hero, hero())
        .section(Section::About, about())
        .section(Section::Gallery, gallery)
        .section(Section::Contact, contact())
        .section(Section::Footer, footer(built_at))
        .section(Section::Metadata, metadata(built_at))
        .section(Section::Theme, theme())
        .catalog(catalog)
        .build())
}

/// The built-in card catalog.
pub fn catalog() -> Result<Catalog, CatalogError> {
    let categories = [
        "birthday",
        "sympathy",
        "wedding",
        "thank_you",
        "holiday",
        "get_well",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    Catalog::new(cards(), categories)
}

fn card(
    id: u64,
    name: &str,
    category: &str,
    description: &str,
    price: f64,
    image: &str,
    rotation: f64,
    tags: [&str; 3],
) -> Card {
    Card {
        id: CardId(id),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price,
        image_url: format!("/images/cards/{}.jpg", image),
        rotation,
        tags: tags.into_iter().map(str::to_string).collect(),
    }
}

fn cards() -> Vec<Card> {
    vec![
        card(
            1,
            "Birthday Celebration",
            "birthday",
            "A vibrant birthday card with colorful balloons and confetti",
            4.99,
            "birthday-1",
            2.5,
            ["birthday", "celebration", "colorful"],
        ),
        card(
            2,
            "Sympathy & Comfort",
            "sympathy",
            "A gentle sympathy card with soft floral design",
            5.99,
            "sympathy-1",
            -1.8,
            ["sympathy", "comfort", "floral"],
        ),
        card(
            3,
            "Wedding Congratulations",
            "wedding",
            "An elegant wedding card with gold accents",
            6.99,
            "wedding-1",
            3.2,
            ["wedding", "elegant", "gold"],
        ),
        card(
            4,
            "Thank You Note",
            "thank_you",
            "A heartfelt thank you card with handwritten style",
            3.99,
            "thank-you-1",
            -2.1,
            ["thank_you", "handwritten", "heartfelt"],
        ),
        card(
            5,
            "Holiday Cheer",
            "holiday",
            "A festive holiday card with warm winter scenes",
            4.99,
            "holiday-1",
            1.5,
            ["holiday", "festive", "winter"],
        ),
        card(
            6,
            "Get Well Soon",
            "get_well",
            "A cheerful get well card with bright flowers",
            4.49,
            "get-well-1",
            -0.8,
            ["get_well", "cheerful", "flowers"],
        ),
    ]
}

// =============================================================================
// SECTIONS
// =============================================================================

fn header() -> Value {
    json!({
        "logo": {
            "text": SITE_NAME,
            "font_family": "Dancing Script",
            "font_size": "2rem"
        },
        "navigation": [
            {"id": "gallery", "text": "Gallery", "href": "#gallery"},
            {"id": "about", "text": "About", "href": "#about"},
            {"id": "contact", "text": "Contact", "href": "#contact"}
        ]
    })
}

fn hero() -> Value {
    json!({
        "title": "Handcrafted Cards for Every Occasion",
        "subtitle": "Bringing warmth and personality to your special moments with carefully crafted greeting cards",
        "background": {
            "type": "wood",
            "opacity": 0.1,
            "color": "#8B4513"
        },
        "animation": {
            "duration": 0.8,
            "delay": 0.2
        }
    })
}

fn about() -> Value {
    json!({
        "title": "About Us",
        "content": [
            {
                "id": "intro",
                "text": "Welcome to our cozy corner of creativity! We're passionate about crafting beautiful, heartfelt greeting cards that bring warmth and joy to every occasion. Each card is carefully designed with love and attention to detail, making your special moments even more memorable."
            },
            {
                "id": "journey",
                "text": "Our journey began with a simple idea: to create cards that feel like they were made by a friend, not a factory. We believe that the perfect card can speak volumes and create lasting connections between people. That's why we pour our hearts into every design, ensuring that each card carries its own unique personality and charm."
            },
            {
                "id": "quality",
                "text": "Whether you're celebrating a birthday, expressing sympathy, or just want to brighten someone's day, we have a card that will help you convey your feelings perfectly. Each card is made with high-quality materials and designed to be treasured for years to come."
            }
        ],
        "animation": {
            "duration": 0.8,
            "viewport_once": true
        }
    })
}

/// The gallery document is derived from the typed catalog so the two
/// cannot disagree.
fn gallery(catalog: &Catalog) -> Value {
    json!({
        "title": "Our Collection",
        "cards": catalog.cards(),
        "categories": catalog.categories(),
        "animation": {
            "duration": 0.5,
            "delay_increment": 0.1
        }
    })
}

fn contact() -> Value {
    json!({
        "title": "Get in Touch",
        "info": [
            {
                "id": "email",
                "type": "email",
                "icon": "FaEnvelope",
                "value": "hello@alloccasioncards.com",
                "label": "Email Address"
            },
            {
                "id": "phone",
                "type": "phone",
                "icon": "FaPhone",
                "value": "(555) 123-4567",
                "label": "Phone Number"
            }
        ],
        "social_media": [
            {
                "id": "instagram",
                "platform": "Instagram",
                "url": "https://instagram.com/alloccasioncards",
                "icon": "FaInstagram"
            },
            {
                "id": "facebook",
                "platform": "Facebook",
                "url": "https://facebook.com/alloccasioncards",
                "icon": "FaFacebook"
            }
        ],
        "business_hours": {
            "monday": "9:00 AM - 6:00 PM",
            "tuesday": "9:00 AM - 6:00 PM",
            "wednesday": "9:00 AM - 6:00 PM",
            "thursday": "9:00 AM - 6:00 PM",
            "friday": "9:00 AM - 6:00 PM",
            "saturday": "10:00 AM - 4:00 PM",
            "sunday": "Closed"
        }
    })
}

fn footer(built_at: DateTime<Utc>) -> Value {
    json!({
        "copyright": format!("© {} {}. All rights reserved.", built_at.year(), SITE_NAME),
        "links": [
            {"text": "Privacy Policy", "url": "/privacy"},
            {"text": "Terms of Service", "url": "/terms"},
            {"text": "Shipping Info", "url": "/shipping"}
        ]
    })
}

fn metadata(built_at: DateTime<Utc>) -> Value {
    json!({
        "site_name": SITE_NAME,
        "description": "Handcrafted greeting cards for every special moment",
        "keywords": ["greeting cards", "handcrafted", "personalized", "occasions"],
        "author": "All Occasion Cards Team",
        "version": SITE_VERSION,
        "last_updated": built_at.to_rfc3339_opts(SecondsFormat::Micros, true)
    })
}

fn theme() -> Value {
    json!({
        "colors": {
            "primary": "#4A5568",
            "secondary": "#F7FAFC",
            "text": "#2D3748",
            "background": "#FFFFFF",
            "paper": "#FEFEFE",
            "wood": "#8B4513"
        },
        "fonts": {
            "heading": "Dancing Script",
            "body": "Quicksand"
        },
        "border_radius": {
            "small": "4px",
            "medium": "8px",
            "large": "16px"
        },
        "shadows": {
            "subtle": "0 1px 3px rgba(0,0,0,0.1)",
            "medium": "0 4px 6px rgba(0,0,0,0.1)"
        }
    })
}

// =============================================================================
// TESTS
// =============================================================================
