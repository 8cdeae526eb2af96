use iced::font::{Family, Weight};
use iced::Font;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Map a configured family name to an [`iced::Font`].
pub(crate) fn resolve(name: &str, bold: bool) -> Font {
    let family = match name.trim().to_ascii_lowercase().as_str() {
        "" | "sans-serif" | "sans" => Family::SansSerif,
        "serif"                    => Family::Serif,
        "monospace" | "mono"       => Family::Monospace,
        _                          => Family::Name(intern(name.trim())),
    };

    Font {
        family,
        weight: if bold { Weight::Bold } else { Weight::Normal },
        ..Font::DEFAULT
    }
}

/// `Family::Name` wants a `&'static str`.  Each distinct family name is leaked
/// once; config reloads reuse the interned copy.
fn intern(name: &str) -> &'static str {
    static NAMES: OnceLock<Mutex<Vec<&'static str>>> = OnceLock::new();

    let mut names = NAMES
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(known) = names.iter().find(|n| **n == name) {
        return known;
    }

    let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
    names.push(leaked);
    leaked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_families() {
        assert_eq!(resolve("monospace", false).family, Family::Monospace);
        assert_eq!(resolve("Serif", false).family, Family::Serif);
        assert_eq!(resolve("", false).family, Family::SansSerif);
    }

    #[test]
    fn named_family_and_weight() {
        let font = resolve("Arial", true);
        assert_eq!(font.family, Family::Name("Arial"));
        assert_eq!(font.weight, Weight::Bold);
        assert_eq!(resolve("Arial", false).weight, Weight::Normal);
    }

    #[test]
    fn interning_reuses_the_same_allocation() {
        let a = intern("Fira Code");
        let b = intern("Fira Code");
        assert!(std::ptr::eq(a, b));
    }
}
