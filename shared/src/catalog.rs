//! Built-in popular-items catalog used to seed an empty store.

use crate::models::NewCatalogItem;

struct SeedItem {
    name: &'static str,
    img: &'static str,
    price: &'static str,
    description: &'static str,
    rating: &'static str,
    reviews: &'static [&'static str],
}

const SEED_ITEMS: &[SeedItem] = &[
    SeedItem {
        name: "HellDivers 2",
        img: "helldivers2.png",
        price: "$49.99",
        description: "A third-person shooter where the HellDivers, an elite faction of soldiers must spread managed Democracy across the galaxy",
        rating: "4.2",
        reviews: &[
            "Very fun game!",
            "Super hard but great concept!",
            "Too hard for all audiences",
        ],
    },
    SeedItem {
        name: "Marvel Rivals",
        img: "marvelrivals.png",
        price: "$0.00",
        description: "A free-to-play, team-based, third-person hero shooter where players assemble squads of iconic Marvel Super Heroes and Villains to battle in objective-based PVP combat",
        rating: "4.5",
        reviews: &[
            "Awesome implementation of Marvel characters!",
            "Great multiplayer game for all ages",
        ],
    },
    SeedItem {
        name: "Steel Series Gaming Headset",
        img: "headset.webp",
        price: "$129.99",
        description: "A comfortable designed microphone with fabric ear cushions, high-quality, and detailed audio.",
        rating: "3.9",
        reviews: &[
            "Comfortable headset",
            "Breaks easily.",
            "A little pricey, but worth the price.",
        ],
    },
    SeedItem {
        name: "NVIDIA RTX-4090 GPU",
        img: "gpu.png",
        price: "$1599.99",
        description: "A high-end NVIDIA GeForce GPU, part of the Ada Lovelace architecture, featuring a massive number of CUDA cores (over 16,000), 24GB of GDDR6X memory, and a 384-bit memory bus",
        rating: "4.5",
        reviews: &["Made my pc insanely good!", "Super pricey but great piece!"],
    },
    SeedItem {
        name: "Oculus Quest",
        img: "oculus.png",
        price: "$399.99",
        description: "A device worn over the eyes to immerse users in digital environments for gaming, entertainment, and social experiences.",
        rating: "3.7",
        reviews: &[
            "Super cool!",
            "Can cause headaches...",
            "I had a lot of fun but I can't play it for hours straight.",
        ],
    },
    SeedItem {
        name: "Nintendo Switch 2",
        img: "switch2.png",
        price: "$499.99",
        description: "A hybrid video game console that serves as a successor to the original Nintendo Switch.",
        rating: "4.7",
        reviews: &["So much fun!", "A bit pricey but totally worth it!"],
    },
    SeedItem {
        name: "Hallow Knight Silksong",
        img: "hallowknightsilk.webp",
        price: "$19.99",
        description: "An action-adventure Metroidvania, the sequel to Hollow Knight, where players control Hornet on a journey through the unfamiliar land of Pharloom",
        rating: "4.9",
        reviews: &["GOTY!"],
    },
    SeedItem {
        name: "Expedition 33",
        img: "clairobscurexp33.webp",
        price: "$49.99",
        description: "A 2025 turn-based RPG developed by Sandfall Interactive, set in a dark fantasy Belle Époque world where the Paintress erases people at an ever-decreasing age.",
        rating: "4.9",
        reviews: &[
            "Best story out of any game, made me cry!",
            "Insane twists and story, goty for sure.",
        ],
    },
    SeedItem {
        name: "Elgato Stream Deck",
        img: "streamdeck.png",
        price: "$119.99",
        description: "A programmable desktop controller, most notably from Elgato, that features physical, customizable LCD keys to trigger actions and control various applications and accessories.",
        rating: "4.0",
        reviews: &["Very helpful for streaming, buggy sometimes."],
    },
];

/// The nine popular items every fresh deployment starts with, in display order
pub fn default_catalog() -> Vec<NewCatalogItem> {
    SEED_ITEMS
        .iter()
        .map(|seed| NewCatalogItem {
            name: seed.name.to_string(),
            img: seed.img.to_string(),
            price: seed.price.to_string(),
            description: seed.description.to_string(),
            rating: seed.rating.to_string(),
            reviews: seed.reviews.iter().map(|r| r.to_string()).collect(),
        })
        .collect()
}
