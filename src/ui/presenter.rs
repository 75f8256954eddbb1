//! Mapping from lookup results to view models.

use crate::domain::{CharacterProfile, EquipmentItem, EquipmentRecord};
use crate::ui::viewmodel::CharacterView;

/// Builds the view model for a profile and its equipment.
///
/// Pure and infallible: inputs have already been decoded and validated.
///
/// # Example
///
/// ```rust
/// use maplestat::domain::{CharacterProfile, EquipmentItem, EquipmentRecord};
/// use maplestat::ui::render;
///
/// let profile = CharacterProfile {
///     image_url: String::new(),
///     name: "Alice".to_string(),
///     world_name: "Scania".to_string(),
///     level: 250,
///     class_name: "Hero".to_string(),
/// };
/// let equipment = EquipmentRecord::new(vec![EquipmentItem::new("Weapon", "Genesis")]);
///
/// let view = render(&profile, &equipment);
/// assert_eq!(view.level, "250");
/// assert_eq!(view.equipment, vec!["Weapon: Genesis"]);
/// ```
#[must_use]
pub fn render(profile: &CharacterProfile, equipment: &EquipmentRecord) -> CharacterView {
    CharacterView {
        image_url: profile.image_url.clone(),
        name: profile.name.clone(),
        world_name: profile.world_name.clone(),
        level: profile.level.to_string(),
        class_name: profile.class_name.clone(),
        equipment: equipment.iter().map(equipment_line).collect(),
    }
}

fn equipment_line(item: &EquipmentItem) -> String {
    format!("{}: {}", item.slot_name, item.item_name)
}
