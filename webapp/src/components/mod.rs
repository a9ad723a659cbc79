pub mod card;
pub mod navigation;
pub mod overlay;
pub mod typing;
