//! The phone-price feature set the reference models were trained on.

use crate::fields::{CategoryEncoding, CategoryTable, FieldDef};

pub const BRANDS: &[&str] = &[
    "Honor", "Others", "HTC", "Huawei", "Infinix", "Lava", "Lenovo", "LG", "Meizu", "Micromax",
    "Motorola", "Nokia", "OnePlus", "Oppo", "Realme", "Samsung", "Vivo", "Xiaomi", "ZTE", "Apple",
    "Asus", "Coolpad", "Acer", "Alcatel", "BlackBerry", "Celkon", "Gionee", "Google", "Karbonn",
    "Microsoft", "Panasonic", "Sony", "Spice", "XOLO",
];

pub const OPERATING_SYSTEMS: &[&str] = &["Android", "Others", "iOS", "Windows"];

pub const YES_NO: &[&str] = &["Yes", "No"];

/// Returns the thirteen phone fields in model order, with their defaults.
pub fn fields() -> Vec<FieldDef> {
    let yes_no = CategoryTable::new(YES_NO.iter().copied());

    vec![
        FieldDef::categorical(
            "brand",
            "Device Brand",
            CategoryTable::new(BRANDS.iter().copied()),
            "Huawei",
        ),
        FieldDef::categorical(
            "os",
            "OS",
            CategoryTable::new(OPERATING_SYSTEMS.iter().copied()),
            "Android",
        ),
        FieldDef::numeric("screenSize", "Screen Size (inches)", "5.7"),
        // TODO: replace the constant once the training export documents how 4G/5G were encoded.
        FieldDef::categorical("fourG", "4G", yes_no.clone(), "Yes")
            .with_encoding(CategoryEncoding::Constant(0.0)),
        FieldDef::categorical("fiveG", "5G", yes_no, "No")
            .with_encoding(CategoryEncoding::Constant(0.0)),
        FieldDef::numeric("rearCamera", "Rear Camera (MP)", "13"),
        FieldDef::numeric("frontCamera", "Front Camera (MP)", "8"),
        FieldDef::numeric("internalMemory", "Internal Memory (GB)", "4"),
        FieldDef::numeric("ram", "RAM (GB)", "3"),
        FieldDef::numeric("battery", "Battery (mAh)", "4000"),
        FieldDef::numeric("weight", "Weight (g)", "6.8"),
        FieldDef::numeric("releaseYear", "Release Year", "2018"),
        FieldDef::numeric("daysUsed", "Days Used", "1284"),
    ]
}
