use std::borrow::Cow;

use rust_embed::RustEmbed;

/// Asset name of the word list used when no dictionary is configured.
pub const DEFAULT_WORDS: &str = "words.txt";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Raw bytes of an embedded word list, if one exists under `name`.
pub(crate) fn asset(name: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(name).map(|file| file.data)
}

/// Names of all embedded word lists.
pub fn embedded_names() -> Vec<String> {
    Assets::iter().map(|name| name.into_owned()).collect()
}
