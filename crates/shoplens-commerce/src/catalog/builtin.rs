//! Built-in product templates.

use super::template::ProductTemplate;

const HEADPHONE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1484704849700-f032a568e944?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1545127398-14699f92334b?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1583394838336-acd977736f90?w=500&h=500&fit=crop",
];

const LAPTOP_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1525547719571-a2d4ac8945e2?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1588872657578-7efd1f1555ed?w=500&h=500&fit=crop",
];

const PHONE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1592899677977-9c10ca588bbd?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1674501542101-9ba6d7f9c1b8?w=500&h=500&fit=crop",
];

const WATCH_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1434493789847-2f02dc6ca35d?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1579586337278-3f436f25d4d6?w=500&h=500&fit=crop",
];

const CAMERA_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1502920917128-1aa500764cbd?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=500&h=500&fit=crop",
];

const SHOE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1556906781-9a412961c28c?w=500&h=500&fit=crop",
];

const BAG_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1584917865442-de89df76afd3?w=500&h=500&fit=crop",
];

const DEFAULT_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=500&h=500&fit=crop",
    "https://images.unsplash.com/photo-1586495777744-4413f21062fa?w=500&h=500&fit=crop",
];

const COLORS: &[&str] = &["Black", "White", "Silver", "Blue", "Midnight Green"];

/// Category keyword with its templates, in declaration order.
pub(super) fn categories() -> Vec<(String, Vec<ProductTemplate>)> {
    vec![
        (
            "headphones".to_string(),
            vec![
                ProductTemplate::new("Wireless Noise Cancelling Headphones", "Audio")
                    .with_brands(&["Sony", "Bose", "Apple", "Sennheiser", "Audio-Technica"])
                    .with_tiers(&[(49.0, 149.0), (150.0, 299.0), (300.0, 549.0)])
                    .with_features(&[
                        "Active Noise Cancellation",
                        "30-Hour Battery Life",
                        "Multipoint Bluetooth Pairing",
                        "Hi-Res Audio Certified",
                        "Foldable Travel Design",
                        "Built-in Voice Assistant",
                        "Quick Charge Support",
                        "Memory Foam Ear Cushions",
                    ])
                    .with_spec("Connectivity", &["Bluetooth 5.3", "Bluetooth 5.2", "Bluetooth + 3.5mm Wired"])
                    .with_spec("Battery Life", &["20 hours", "30 hours", "40 hours"])
                    .with_spec("Driver Size", &["30mm", "40mm", "50mm"])
                    .with_spec("Color", COLORS)
                    .with_images(HEADPHONE_IMAGES),
                ProductTemplate::new("True Wireless Earbuds", "Audio")
                    .with_brands(&["Samsung", "JBL", "Sony", "Apple"])
                    .with_tiers(&[(29.0, 99.0), (100.0, 249.0)])
                    .with_features(&[
                        "IPX4 Sweat Resistance",
                        "Wireless Charging Case",
                        "Transparency Mode",
                        "Touch Controls",
                        "Low-Latency Gaming Mode",
                        "24-Hour Total Playtime",
                        "Spatial Audio",
                    ])
                    .with_spec("Connectivity", &["Bluetooth 5.3", "Bluetooth 5.2"])
                    .with_spec("Battery Life", &["6 hours", "8 hours", "10 hours"])
                    .with_spec("Water Resistance", &["IPX4", "IPX5", "IP57"])
                    .with_images(HEADPHONE_IMAGES),
            ],
        ),
        (
            "laptop".to_string(),
            vec![
                ProductTemplate::new("Thin & Light Laptop", "Computers")
                    .with_brands(&["Dell", "HP", "Lenovo", "Apple", "Asus"])
                    .with_tiers(&[(300.0, 600.0), (600.0, 1200.0), (1200.0, 2500.0)])
                    .with_features(&[
                        "Backlit Keyboard",
                        "Fingerprint Reader",
                        "All-Day Battery",
                        "Full HD IPS Display",
                        "Fast SSD Storage",
                        "Wi-Fi 6E",
                        "Aluminium Chassis",
                        "Thunderbolt 4 Ports",
                    ])
                    .with_spec("RAM", &["8GB", "16GB", "32GB"])
                    .with_spec("Storage", &["256GB SSD", "512GB SSD", "1TB SSD"])
                    .with_spec("Display", &["13.3 inch", "14 inch", "15.6 inch"])
                    .with_spec("Processor", &["Intel Core i5", "Intel Core i7", "AMD Ryzen 7", "Apple M3"])
                    .with_images(LAPTOP_IMAGES),
                ProductTemplate::new("Gaming Laptop", "Computers")
                    .with_brands(&["Asus", "Lenovo", "HP", "MSI"])
                    .with_tiers(&[(800.0, 1500.0), (1500.0, 3200.0)])
                    .with_features(&[
                        "144Hz Refresh Rate Display",
                        "RGB Backlit Keyboard",
                        "Dedicated Graphics Card",
                        "Advanced Cooling System",
                        "Wi-Fi 6E",
                        "Dolby Atmos Speakers",
                    ])
                    .with_spec("RAM", &["16GB", "32GB"])
                    .with_spec("Storage", &["512GB SSD", "1TB SSD", "2TB SSD"])
                    .with_spec("Graphics", &["RTX 4050", "RTX 4060", "RTX 4070"])
                    .with_images(LAPTOP_IMAGES),
            ],
        ),
        (
            "smartphone".to_string(),
            vec![ProductTemplate::new("5G Smartphone", "Mobiles")
                .with_brands(&["Samsung", "Apple", "Xiaomi", "OnePlus", "Realme", "Motorola"])
                .with_tiers(&[(150.0, 400.0), (400.0, 800.0), (800.0, 1400.0)])
                .with_features(&[
                    "AMOLED Display",
                    "Triple Camera Setup",
                    "Fast Charging",
                    "5000mAh Battery",
                    "120Hz Refresh Rate",
                    "Optical Image Stabilization",
                    "In-Display Fingerprint Sensor",
                ])
                .with_spec("Storage", &["128GB", "256GB", "512GB"])
                .with_spec("RAM", &["6GB", "8GB", "12GB"])
                .with_spec("Screen Size", &["6.1 inch", "6.5 inch", "6.7 inch"])
                .with_spec("Color", COLORS)
                .with_images(PHONE_IMAGES)],
        ),
        (
            "watch".to_string(),
            vec![ProductTemplate::new("Smartwatch", "Wearables")
                .with_brands(&["Apple", "Samsung", "Garmin", "Fitbit", "Amazfit"])
                .with_tiers(&[(40.0, 150.0), (150.0, 450.0)])
                .with_features(&[
                    "Heart Rate Monitoring",
                    "Built-in GPS",
                    "Sleep Tracking",
                    "Always-On Display",
                    "Water Resistant to 50m",
                    "Blood Oxygen Sensor",
                ])
                .with_spec("Case Size", &["40mm", "42mm", "44mm", "46mm"])
                .with_spec("Battery Life", &["2 days", "7 days", "14 days"])
                .with_spec("Strap", &["Silicone", "Leather", "Metal Link"])
                .with_images(WATCH_IMAGES)],
        ),
        (
            "camera".to_string(),
            vec![ProductTemplate::new("Mirrorless Camera", "Cameras")
                .with_brands(&["Canon", "Nikon", "Sony", "Fujifilm"])
                .with_tiers(&[(450.0, 900.0), (900.0, 2200.0)])
                .with_features(&[
                    "4K Video Recording",
                    "In-Body Image Stabilization",
                    "Eye Autofocus",
                    "Weather-Sealed Body",
                    "Dual Card Slots",
                    "Flip-Out Touchscreen",
                ])
                .with_spec("Sensor", &["APS-C", "Full Frame"])
                .with_spec("Resolution", &["24MP", "33MP", "45MP"])
                .with_spec("Kit Lens", &["Body Only", "18-55mm", "24-105mm"])
                .with_images(CAMERA_IMAGES)],
        ),
        (
            "shoes".to_string(),
            vec![ProductTemplate::new("Running Shoes", "Footwear")
                .with_brands(&["Nike", "Adidas", "Puma", "Asics", "New Balance"])
                .with_tiers(&[(40.0, 90.0), (90.0, 180.0)])
                .with_features(&[
                    "Breathable Mesh Upper",
                    "Responsive Foam Midsole",
                    "Rubber Outsole Grip",
                    "Lightweight Build",
                    "Padded Collar",
                    "Reflective Details",
                ])
                .with_spec("Size", &["UK 7", "UK 8", "UK 9", "UK 10"])
                .with_spec("Color", &["Black", "White", "Grey", "Navy"])
                .with_spec("Material", &["Mesh", "Knit", "Synthetic"])
                .with_images(SHOE_IMAGES)],
        ),
        (
            "backpack".to_string(),
            vec![ProductTemplate::new("Travel Backpack", "Bags")
                .with_brands(&["Samsonite", "Herschel", "Wildcraft", "The North Face"])
                .with_tiers(&[(25.0, 60.0), (60.0, 150.0)])
                .with_features(&[
                    "Padded Laptop Sleeve",
                    "Water-Resistant Fabric",
                    "USB Charging Port",
                    "Anti-Theft Pocket",
                    "Ergonomic Shoulder Straps",
                    "Luggage Pass-Through",
                ])
                .with_spec("Capacity", &["20L", "30L", "40L"])
                .with_spec("Color", &["Black", "Olive", "Navy", "Grey"])
                .with_images(BAG_IMAGES)],
        ),
        (
            "speaker".to_string(),
            vec![ProductTemplate::new("Portable Bluetooth Speaker", "Audio")
                .with_brands(&["JBL", "Bose", "Sony", "boAt", "Ultimate Ears"])
                .with_tiers(&[(25.0, 80.0), (80.0, 250.0)])
                .with_features(&[
                    "360-Degree Sound",
                    "IP67 Waterproof",
                    "12-Hour Playtime",
                    "Party Mode Pairing",
                    "Built-in Microphone",
                    "Deep Bass Boost",
                ])
                .with_spec("Output Power", &["10W", "20W", "30W"])
                .with_spec("Battery Life", &["10 hours", "12 hours", "20 hours"])
                .with_spec("Color", COLORS)
                .with_images(DEFAULT_IMAGES)],
        ),
        (
            "tv".to_string(),
            vec![ProductTemplate::new("4K Smart TV", "Televisions")
                .with_brands(&["Samsung", "LG", "Sony", "TCL"])
                .with_tiers(&[(250.0, 600.0), (600.0, 1500.0)])
                .with_features(&[
                    "HDR10+ Support",
                    "Dolby Vision",
                    "Built-in Streaming Apps",
                    "Voice Remote",
                    "Game Mode",
                    "Bezel-Less Design",
                ])
                .with_spec("Screen Size", &["43 inch", "55 inch", "65 inch"])
                .with_spec("Panel", &["LED", "QLED", "OLED"])
                .with_spec("Refresh Rate", &["60Hz", "120Hz"])
                .with_images(DEFAULT_IMAGES)],
        ),
    ]
}
