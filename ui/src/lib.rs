//! Presentational pieces shared by the HarvestNet views.

mod brand;
mod cards;
mod icons;
mod notice;

pub use brand::Logo;
pub use cards::{FeatureCard, StatTile};
pub use icons::{Glyph, Icon, PageIcon};
pub use notice::UnderDevelopment;
