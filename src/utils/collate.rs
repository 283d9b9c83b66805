//! pt-BR aware collation folding for employee names.
//!
//! Accented letters must sort together with their base letter ("Álvaro"
//! next to "Alvaro", not after "Zuleica").

/// Build a sort key: lowercased, accents folded to base letters.
pub fn collation_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars() {
        for lower in c.to_lowercase() {
            key.push(fold_accent(lower));
        }
    }
    key
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}
