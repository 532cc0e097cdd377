//! Where the render's resources come from
//!
//! A render needs three things besides the text: one font, a store of
//! emoji bitmaps named by asset key, and a way to decode and fit those
//! bitmaps. This crate provides all three.

pub mod codec;
pub mod font;
pub mod store;

pub use codec::StdImageCodec;
pub use font::Font;
pub use store::{DirAssetStore, MemoryAssetStore};
