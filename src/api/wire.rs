//! JSON response bodies of the Nexon Open API.
//!
//! Only the fields the lookup needs are declared; everything else in the
//! responses is ignored. Text fields are optional because the API returns
//! `null` for snapshot dates before a character existed.

use crate::domain::{CharacterProfile, EquipmentItem, EquipmentRecord, Identity};
use serde::Deserialize;

/// `GET /id` response.
#[derive(Debug, Deserialize)]
pub struct OcidResponse {
    pub ocid: String,
}

impl From<OcidResponse> for Identity {
    fn from(body: OcidResponse) -> Self {
        Self::new(body.ocid)
    }
}

/// `GET /character/basic` response.
#[derive(Debug, Deserialize)]
pub struct BasicResponse {
    #[serde(default)]
    pub character_image: Option<String>,
    #[serde(default)]
    pub character_name: Option<String>,
    #[serde(default)]
    pub world_name: Option<String>,
    #[serde(default)]
    pub character_level: Option<u32>,
    #[serde(default)]
    pub character_class: Option<String>,
}

impl From<BasicResponse> for CharacterProfile {
    fn from(body: BasicResponse) -> Self {
        Self {
            image_url: body.character_image.unwrap_or_default(),
            name: body.character_name.unwrap_or_default(),
            world_name: body.world_name.unwrap_or_default(),
            level: body.character_level.unwrap_or_default(),
            class_name: body.character_class.unwrap_or_default(),
        }
    }
}

/// `GET /character/item-equipment` response.
#[derive(Debug, Deserialize)]
pub struct ItemEquipmentResponse {
    #[serde(default)]
    pub item_equipment: Option<Vec<ItemEquipmentEntry>>,
}

/// One entry of `item_equipment`.
#[derive(Debug, Deserialize)]
pub struct ItemEquipmentEntry {
    #[serde(default)]
    pub item_equipment_part: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
}

impl From<ItemEquipmentResponse> for EquipmentRecord {
    fn from(body: ItemEquipmentResponse) -> Self {
        body.item_equipment
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                EquipmentItem::new(
                    entry.item_equipment_part.unwrap_or_default(),
                    entry.item_name.unwrap_or_default(),
                )
            })
            .collect()
    }
}
