//! URL slug derivation from article titles.

/// Derive a URL-safe slug from a title.
///
/// Lowercases, folds Romanian (and the common Latin-1) diacritics to ASCII,
/// collapses every non-alphanumeric run into a single `-` and trims the
/// result. Only used while composing a brand-new article; an existing
/// article keeps its slug even when the title changes, so published URLs
/// stay stable.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    let mut push = |ch: char, slug: &mut String| {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    };

    for ch in title.chars() {
        match fold_diacritic(ch) {
            Some(folded) => {
                for ch in folded.chars() {
                    push(ch, &mut slug);
                }
            },
            None => push(ch, &mut slug),
        }
    }

    slug
}

/// ASCII base form of one accented character, `None` when the character
/// needs no folding.
///
/// Covers the Romanian set (with both cedilla and comma-below forms of
/// ș/ț) plus the Latin-1 accents that show up in names and loanwords.
fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'ă' | 'â' | 'á' | 'à' | 'ä' | 'ã' | 'å' => "a",
        'Ă' | 'Â' | 'Á' | 'À' | 'Ä' | 'Ã' | 'Å' => "A",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'É' | 'È' | 'Ê' | 'Ë' => "E",
        'î' | 'í' | 'ì' | 'ï' => "i",
        'Î' | 'Í' | 'Ì' | 'Ï' => "I",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => "o",
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => "O",
        'ú' | 'ù' | 'û' | 'ü' => "u",
        'Ú' | 'Ù' | 'Û' | 'Ü' => "U",
        'ș' | 'ş' => "s",
        'Ș' | 'Ş' => "S",
        'ț' | 'ţ' => "t",
        'Ț' | 'Ţ' => "T",
        'ç' => "c",
        'Ç' => "C",
        'ñ' => "n",
        'Ñ' => "N",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn folds_romanian_diacritics() {
        assert_eq!(slugify("Titlul Meu, Ăâî!"), "titlul-meu-aai");
        assert_eq!(slugify("Modificări în Codul Fiscal"), "modificari-in-codul-fiscal");
        assert_eq!(slugify("Soluții și Țeluri"), "solutii-si-teluri");
    }

    #[test]
    fn collapses_punctuation_runs_into_single_dashes() {
        assert_eq!(slugify("Hello --- World!!!"), "hello-world");
        assert_eq!(slugify("a  b\tc"), "a-b-c");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  (Un titlu)  "), "un-titlu");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(slugify("Noutăți Legislative 2024"), "noutati-legislative-2024");
    }

    #[test]
    fn drops_characters_without_ascii_fold() {
        assert_eq!(slugify("法律 update"), "update");
    }
}
