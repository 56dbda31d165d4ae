use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{Catalog, Locale};

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.')
}

/// Extract all `t("...")` occurrences from source files under `src/`.
/// Only a direct literal first argument is matched; dynamically built keys are not seen.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                for entry in read_dir.flatten() {
                    let p = entry.path();
                    // Test fixtures use made-up keys on purpose.
                    if p.file_name().and_then(|s| s.to_str()) == Some("tests") {
                        continue;
                    }
                    stack.push(p);
                }
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }

        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        // Unit test modules sit at the bottom of each file.
        let content = content
            .split("#[cfg(test)]")
            .next()
            .unwrap_or_default();

        let needle = ".t(\"";
        let mut rest = content;
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            let Some(end) = rest.find('"') else {
                break;
            };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    found
}

#[test]
fn every_referenced_key_exists_in_the_default_dictionary() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = extract_translation_keys_from_source(&src_root);
    assert!(
        referenced.contains("hero.title"),
        "key scan found nothing; did the t(\"...\") call pattern change?"
    );

    let catalog = Catalog::bundled().expect("bundled dictionaries parse");
    let missing: Vec<_> = referenced
        .iter()
        .filter(|key| catalog.lookup(Locale::DEFAULT, key).is_missing())
        .cloned()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Referenced translation keys missing in the default dictionary ({}):\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn every_locale_covers_the_default_dictionary() {
    let catalog = Catalog::bundled().expect("bundled dictionaries parse");
    let mut report = String::new();
    for locale in Locale::ALL {
        let missing = catalog.missing_keys(locale);
        if !missing.is_empty() {
            report.push_str(&format!("  {locale} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
    }
    assert!(report.is_empty(), "Locales with missing translations:\n{report}");
}

#[test]
fn structured_lists_have_matching_lengths() {
    let catalog = Catalog::bundled().expect("bundled dictionaries parse");
    for key in ["hero.features", "services.items"] {
        let lengths: Vec<usize> = Locale::ALL
            .iter()
            .map(|locale| {
                catalog
                    .lookup(*locale, key)
                    .value()
                    .and_then(|v| v.as_array())
                    .map_or(0, Vec::len)
            })
            .collect();
        assert!(lengths[0] > 0, "{key} is empty");
        assert!(
            lengths.windows(2).all(|w| w[0] == w[1]),
            "{key} differs in length across locales: {lengths:?}"
        );
    }
}
