//! Page sections.
//!
//! Each section pairs static, per-language content with optional local
//! state. State never depends on the active language, so switching
//! language only changes how it is rendered.

pub mod about;
pub mod commissions;
pub mod contact;
pub mod fan_wall;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;

pub use about::AboutView;
pub use commissions::{
    CommissionField, CommissionRequest, CommissionState, CommissionsView, PackageId,
};
pub use contact::{ContactField, ContactForm, ContactState, ContactView};
pub use fan_wall::{CommentId, FanWallState, FanWallView};
pub use footer::FooterView;
pub use gallery::{ArtCategory, ArtworkId, GalleryFilter, GalleryState, GalleryView};
pub use header::{HeaderState, HeaderView};
pub use hero::HeroView;
