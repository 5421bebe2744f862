//! The apparel schema sent to the model.
//!
//! Enumerated fields are real Rust enums, so the JSON schema embedded in the
//! prompt and any typed reading of a reply use the same value lists.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// An enumerated schema field with a fixed set of allowed values.
pub trait SchemaEnum: Sized + Copy + 'static {
    /// Every allowed value, in schema order.
    const ALL: &'static [Self];

    /// The exact string the model is asked to produce.
    fn as_str(&self) -> &'static str;
}

macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl SchemaEnum for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

schema_enum! {
    /// Main category of the apparel item.
    Category {
        Tops => "Tops",
        Bottoms => "Bottoms",
        Outerwear => "Outerwear",
        FullBody => "Full Body",
        Footwear => "Footwear",
        Accessory => "Accessory",
        Other => "Other",
    }
}

schema_enum! {
    /// Intended audience.
    TargetAudience {
        Men => "Men",
        Women => "Women",
        Unisex => "Unisex",
        Kids => "Kids",
        Baby => "Baby",
    }
}

schema_enum! {
    /// Fabric pattern. `Solid` when there is none.
    Pattern {
        Solid => "Solid",
        Striped => "Striped",
        Floral => "Floral",
        Checkered => "Checkered",
        PolkaDot => "Polka Dot",
        Geometric => "Geometric",
        Abstract => "Abstract",
        Camouflage => "Camouflage",
        AnimalPrint => "Animal Print",
        Other => "Other",
    }
}

schema_enum! {
    /// Fit or silhouette of the garment.
    Fit {
        Slim => "Slim",
        Regular => "Regular",
        Loose => "Loose",
        Oversized => "Oversized",
        Fitted => "Fitted",
        Straight => "Straight",
        Bootcut => "Bootcut",
        NotApplicable => "Not Applicable",
    }
}

schema_enum! {
    SleeveLength {
        Sleeveless => "Sleeveless",
        ShortSleeve => "Short Sleeve",
        LongSleeve => "Long Sleeve",
        ThreeQuarter => "Three-Quarter",
        NotApplicable => "Not Applicable",
    }
}

schema_enum! {
    Neckline {
        CrewNeck => "Crew Neck",
        VNeck => "V-Neck",
        RoundNeck => "Round Neck",
        Collared => "Collared",
        ScoopNeck => "Scoop Neck",
        Hooded => "Hooded",
        Turtleneck => "Turtleneck",
        NotApplicable => "Not Applicable",
    }
}

/// The fixed JSON schema describing the expected reply.
pub struct ApparelSchema;

impl ApparelSchema {
    /// Fields the model must always fill in.
    pub const REQUIRED: [&'static str; 6] = [
        "category",
        "apparel_type",
        "main_color",
        "material",
        "pattern",
        "description",
    ];

    /// Build the schema as a JSON value, properties in declaration order.
    pub fn to_json() -> Value {
        json!({
            "type": "object",
            "properties": {
                "category": enum_property::<Category>(
                    "The main category of the apparel item."
                ),
                "apparel_type": string_property(
                    "The specific type of clothing within the category (e.g., 'T-Shirt', 'Jeans', 'Sneakers', 'Handbag')."
                ),
                "target_audience": enum_property::<TargetAudience>(
                    "The intended audience for the apparel."
                ),
                "main_color": string_property(
                    "The dominant color of the apparel. Use simple color names (e.g., 'Blue', 'Red', 'Black')."
                ),
                "color_palette": list_property(
                    "An array of all significant colors present in the item."
                ),
                "material": string_property(
                    "The likely material of the apparel (e.g., 'Cotton', 'Denim', 'Polyester', 'Leather', 'Wool', 'Silk')."
                ),
                "pattern": enum_property::<Pattern>(
                    "The pattern on the fabric (e.g., 'Solid', 'Striped', 'Floral', 'Checkered'). If none, use 'Solid'."
                ),
                "fit": enum_property::<Fit>(
                    "The fit or silhouette of the garment."
                ),
                "sleeve_length": enum_property::<SleeveLength>(
                    "The length of the sleeves, if applicable."
                ),
                "neckline": enum_property::<Neckline>(
                    "The style of the neckline, if applicable."
                ),
                "occasion": list_property(
                    "Suitable occasions for the item (e.g., 'Casual', 'Formal', 'Sportswear', 'Business')."
                ),
                "style_tags": list_property(
                    "Descriptive tags for the aesthetic style (e.g., 'Minimalist', 'Vintage', 'Bohemian', 'Streetwear')."
                ),
                "description": string_property(
                    "A brief, one-sentence summary of the apparel item."
                ),
            },
            "required": Self::REQUIRED,
        })
    }

    /// Render the schema as indented JSON text for embedding in a prompt.
    pub fn to_pretty_string() -> String {
        // Serializing a Value built from string literals cannot fail.
        serde_json::to_string_pretty(&Self::to_json()).unwrap_or_default()
    }
}

fn string_property(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn list_property(description: &str) -> Value {
    json!({
        "type": "array",
        "description": description,
        "items": { "type": "string" },
    })
}

fn enum_property<E: SchemaEnum>(description: &str) -> Value {
    let values: Vec<&'static str> = E::ALL.iter().map(SchemaEnum::as_str).collect();
    json!({ "type": "string", "description": description, "enum": values })
}
