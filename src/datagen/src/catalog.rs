use common::CATEGORIES_COUNT;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::DatagenError;
use crate::error::Result;

pub struct Category {
    pub name: &'static str,
    pub products: &'static [&'static str],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Electronics",
        products: &[
            "Wireless Bluetooth Earbuds",
            "Noise Cancelling Headphones",
            "Portable Power Bank 20000mAh",
            "USB-C Fast Charger 65W",
            "4K Streaming Stick",
            "Smart Speaker with Alexa",
            "1080p USB Webcam",
            "Mechanical Gaming Keyboard",
            "Ergonomic Wireless Mouse",
            "27-inch 4K Monitor",
            "Wi-Fi 6 Router",
            "External SSD 1TB",
        ],
    },
    Category {
        name: "Computers & Accessories",
        products: &[
            "Laptop Stand Adjustable Aluminum",
            "USB-C Hub Multiport Adapter",
            "HDMI Cable 6ft 4K",
            "Bluetooth Keyboard for Tablet",
            "Gaming Mouse Pad Extended",
            "Webcam Privacy Cover (Pack of 3)",
            "Portable Laptop Charger",
            "DisplayPort Cable 8K",
            "NVMe SSD Enclosure USB-C",
            "Ethernet Adapter USB 3.0",
        ],
    },
    Category {
        name: "Smart Home",
        products: &[
            "Smart Plug Mini (4 Pack)",
            "Smart LED Light Bulb Color Changing",
            "Video Doorbell Camera",
            "Indoor Security Camera 1080p",
            "Smart Thermostat",
            "Smart Light Switch",
            "Robot Vacuum Cleaner",
            "Smart Smoke Detector",
            "Smart Motion Sensor",
            "Smart Door Lock Keyless Entry",
        ],
    },
    Category {
        name: "Home & Kitchen",
        products: &[
            "Stainless Steel Water Bottle 32oz",
            "Nonstick Frying Pan 12-inch",
            "Air Fryer 6 Quart",
            "Electric Kettle Temperature Control",
            "Memory Foam Pillow",
            "Vacuum Storage Bags (10 Pack)",
            "Kitchen Knife Set with Block",
            "Dish Drying Rack",
            "Bamboo Cutting Board Set",
            "LED Desk Lamp Dimmable",
        ],
    },
    Category {
        name: "Furniture",
        products: &[
            "Ergonomic Office Chair with Lumbar Support",
            "Standing Desk Converter",
            "Bookshelf 5-Tier Industrial",
            "Storage Ottoman Bench",
            "Side Table with Charging Station",
            "Adjustable Bar Stools Set of 2",
            "Computer Desk with Shelves",
            "Accent Chair Modern",
        ],
    },
    Category {
        name: "Tools & Home Improvement",
        products: &[
            "Cordless Drill Driver Kit",
            "Digital Laser Measuring Tool",
            "Socket Wrench Set 108-Piece",
            "Utility Knife Retractable",
            "Heavy Duty Extension Cord 25ft",
            "LED Work Light Rechargeable",
            "Stud Finder with Deep Scan",
            "Smart Tape Measure",
            "Screwdriver Set Magnetic",
        ],
    },
    Category {
        name: "Sports & Outdoors",
        products: &[
            "Yoga Mat Non-Slip",
            "Adjustable Dumbbells Pair",
            "Resistance Bands Set",
            "Insulated Water Bottle",
            "Camping Lantern LED",
            "Hiking Backpack 40L",
            "Trekking Poles Collapsible",
            "Fitness Tracker Watch",
            "Inflatable Sleeping Pad",
            "Bike Phone Mount",
        ],
    },
    Category {
        name: "Clothing",
        products: &[
            "Men's Performance T-Shirt",
            "Women's High-Waisted Leggings",
            "Unisex Hoodie Fleece",
            "Men's Slim Fit Jeans",
            "Women's Summer Dress",
            "Athletic Socks Cushioned (6 Pack)",
            "Winter Beanie Knit",
            "Rain Jacket Lightweight",
        ],
    },
    Category {
        name: "Shoes",
        products: &[
            "Men's Running Shoes Breathable",
            "Women's Walking Shoes",
            "Slip-On Sneakers",
            "Hiking Boots Waterproof",
            "Casual Loafers",
            "Training Shoes Lightweight",
        ],
    },
    Category {
        name: "Beauty & Personal Care",
        products: &[
            "Electric Toothbrush Rechargeable",
            "Facial Cleanser Gentle",
            "Vitamin C Serum for Face",
            "Hair Dryer Ionic",
            "Beard Trimmer Kit",
            "Sunscreen SPF 50",
            "Moisturizing Body Lotion",
            "Makeup Brush Set",
        ],
    },
    Category {
        name: "Health & Household",
        products: &[
            "Digital Thermometer",
            "Blood Pressure Monitor",
            "First Aid Kit 200 Piece",
            "Hand Sanitizer Gel",
            "Air Purifier HEPA",
            "Laundry Detergent Pods",
            "Disinfecting Wipes",
            "Pain Relief Patches",
        ],
    },
    Category {
        name: "Baby",
        products: &[
            "Baby Diapers Size 3 (120 Count)",
            "Baby Wipes Sensitive (8 Pack)",
            "Convertible Car Seat",
            "Baby Monitor with Camera",
            "Portable Changing Pad",
            "Silicone Baby Bibs (3 Pack)",
        ],
    },
    Category {
        name: "Pet Supplies",
        products: &[
            "Dry Dog Food 20lb",
            "Cat Litter Clumping 40lb",
            "Dog Training Pads (100 Count)",
            "Interactive Cat Toy",
            "Pet Grooming Brush",
            "Dog Leash Heavy Duty",
            "Cat Water Fountain",
        ],
    },
    Category {
        name: "Toys & Games",
        products: &[
            "Building Blocks Set 500pcs",
            "Remote Control Car",
            "Puzzle 1000 Pieces",
            "Board Game Family Edition",
            "STEM Science Kit",
            "Dollhouse Furniture Set",
            "Kids Art Supplies Kit",
        ],
    },
    Category {
        name: "Books",
        products: &[
            "Hardcover Notebook Dotted",
            "Cookbook: Quick & Easy Meals",
            "Science Fiction Novel Bestseller",
            "Children's Picture Book",
            "Productivity Planner Weekly",
            "Language Learning Workbook",
        ],
    },
    Category {
        name: "Office Products",
        products: &[
            "Ballpoint Pens Black (12 Pack)",
            "Wireless Label Maker",
            "Desk Organizer Mesh",
            "Sticky Notes Assorted Colors",
            "Printer Paper 500 Sheets",
            "Ergonomic Wrist Rest",
            "Whiteboard Markers Set",
        ],
    },
    Category {
        name: "Video Games",
        products: &[
            "Gaming Controller Wireless",
            "Gaming Headset Surround Sound",
            "Mechanical Keyboard RGB",
            "Console Charging Dock",
            "Gaming Chair Mat",
        ],
    },
    Category {
        name: "Automotive",
        products: &[
            "Car Phone Mount Magnetic",
            "Jump Starter Battery Pack",
            "Tire Inflator Portable Air Compressor",
            "Windshield Sun Shade",
            "Car Vacuum Cleaner Handheld",
            "OBD2 Scanner Diagnostic Tool",
        ],
    },
    Category {
        name: "Industrial & Scientific",
        products: &[
            "Safety Glasses Anti-Fog",
            "Nitrile Gloves Box of 100",
            "Digital Caliper Stainless Steel",
            "Labeling Tape Refill",
            "ESD Anti-Static Wrist Strap",
            "Infrared Thermometer Gun",
        ],
    },
    Category {
        name: "Arts, Crafts & Sewing",
        products: &[
            "Acrylic Paint Set 24 Colors",
            "Sketchbook Hardcover A4",
            "Hot Glue Gun Kit",
            "Knitting Needles Set",
            "Craft Scissors Titanium",
            "Sewing Thread Set 60 Spools",
        ],
    },
];

pub const BRANDS: &[&str] = &[
    "Anker",
    "Samsung",
    "Sony",
    "Logitech",
    "Amazon Basics",
    "Apple",
    "HP",
    "Dell",
    "ASUS",
    "Lenovo",
    "Bose",
    "Philips",
    "Nike",
    "Adidas",
    "Under Armour",
    "Instant Pot",
    "Shark",
    "Dyson",
    "Fitbit",
    "Ring",
    "TP-Link",
    "Roku",
    "JBL",
    "Belkin",
    "Xiaomi",
    "Spigen",
    "Hydro Flask",
    "Brita",
    "KitchenAid",
    "LEGO",
];

pub const QUALIFIERS: &[&str] = &[
    "New",
    "2026 Model",
    "Upgraded",
    "Premium",
    "Ultra",
    "Pro",
    "Compact",
    "Lightweight",
    "Heavy Duty",
    "High Performance",
    "Fast Charging",
    "Waterproof",
    "Wireless",
    "Rechargeable",
];

// blank entries make "no suffix" the most likely pick
pub const BUNDLE_HINTS: &[&str] = &["", "", "", " (2 Pack)", " (3 Pack)", " (4 Pack)", " Bundle"];

pub const COLORS: &[&str] = &[
    "", "", "", " - Black", " - White", " - Blue", " - Gray", " - Red",
];

pub const SIZES: &[&str] = &[
    "", "", "", "", " Small", " Medium", " Large", " XL", " 1TB", " 2TB", " 64GB", " 128GB",
    " 20000mAh",
];

const QUALIFIER_PROBABILITY: f64 = 0.75;

pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    pub fn try_new() -> Result<Self> {
        Self::try_new_from(CATEGORIES)
    }

    pub fn try_new_from(categories: &'static [Category]) -> Result<Self> {
        if categories.len() != CATEGORIES_COUNT {
            return Err(DatagenError::Config(format!(
                "expected {CATEGORIES_COUNT} categories, got {}",
                categories.len()
            )));
        }

        if let Some(cat) = categories.iter().find(|c| c.products.is_empty()) {
            return Err(DatagenError::Config(format!(
                "category {:?} has no products",
                cat.name
            )));
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|c| c.name)
    }

    /// Round-robin by id, so categories are evenly spread and stable across runs.
    pub fn category_for_id(&self, id: i64) -> &'static Category {
        let idx = (id - 1).rem_euclid(self.categories.len() as i64) as usize;
        &self.categories[idx]
    }

    pub fn sample_name(&self, rng: &mut StdRng, category: &Category) -> String {
        let base = category.products.choose(rng).copied().unwrap_or(category.name);
        make_title(rng, base)
    }
}

fn pick(rng: &mut StdRng, values: &[&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

/// Assembles a marketplace-style title, e.g. "Anker Upgraded Wireless Bluetooth Earbuds - Black (2 Pack)".
pub fn make_title(rng: &mut StdRng, base: &str) -> String {
    let brand = pick(rng, BRANDS);
    let qualifier = if rng.gen::<f64>() < QUALIFIER_PROBABILITY {
        pick(rng, QUALIFIERS)
    } else {
        ""
    };
    let size = pick(rng, SIZES);
    let color = pick(rng, COLORS);
    let bundle = pick(rng, BUNDLE_HINTS);

    let head = format!("{base}{size}");
    let title = [brand, qualifier, head.as_str()]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    format!("{title}{color}{bundle}")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
