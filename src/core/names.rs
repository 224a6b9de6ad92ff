//! File name normalization: strip diacritics, keep the extension.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Decompose (NFD), drop combining marks, recompose (NFC).
///
/// Ex: "Dấu Tiếng Việt" -> "Dau Tieng Viet"
///
/// Letters without a canonical decomposition (like 'đ') are left alone.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Split "name.ext" into ("name", ".ext").
/// A leading dot is part of the name (".mp3" has no extension).
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => name.split_at(i),
        _ => (name, ""),
    }
}

/// Diacritic-free file name with the original extension untouched.
pub fn normalized_file_name(name: &str) -> String {
    let (stem, ext) = split_extension(name);
    let mut out = strip_diacritics(stem);
    out.push_str(ext);
    out
}
