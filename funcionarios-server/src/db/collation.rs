//! Name ordering for the directory listing
//!
//! Registered on every SQLite connection as `pt_ci` and declared on the
//! `nome` column, so "ana" and "Álvaro" sort among the capitalized names.

use std::cmp::Ordering;

pub const NAME_COLLATION: &str = "pt_ci";

/// Case- and accent-insensitive comparison
pub fn compare_names(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(strip_accent)
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
