// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod attr;
pub mod capability;
pub mod codec;
pub mod logging;
pub mod tag;
pub mod user_config;

// Re-export commonly used types
pub use attr::{AttributeStore, MemoryStore, XattrStore, FINDER_INFO_ATTRIBUTE, TAG_ATTRIBUTE};
pub use capability::Capability;
pub use codec::PlistFormat;
pub use tag::{resolve_color, Color, ColorInput, Tag, TagError, TagInput, TagStore};
pub use user_config::{load_user_config, load_user_config_from, TaggingMode, UserConfig};
