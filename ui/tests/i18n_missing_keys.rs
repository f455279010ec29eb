use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

const PT_BR: &str = include_str!("../i18n/pt-BR/evasao_ui.ftl");
const EN_US: &str = include_str!("../i18n/en-US/evasao_ui.ftl");

/// Every non-fallback locale provides at least the keys of the fallback
/// (pt-BR) bundle.
///
/// The parser is a heuristic: comment, attribute and variant lines are
/// skipped and any `key =` line counts as a message definition.
#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(PT_BR);
    assert!(!fallback_keys.is_empty(), "Fallback (pt-BR) contains no keys.");
    assert_no_dup_keys(PT_BR, "pt-BR");

    let locales: &[(&str, &str)] = &[
        ("en-US", EN_US),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<String> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from pt-BR, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Every `t!("...")` lookup in the crate sources names a fallback key.
#[test]
fn every_source_lookup_has_a_fallback_key() {
    let fallback_keys = extract_keys(PT_BR);
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut used = BTreeSet::new();
    collect_lookups(&src_dir, &mut used);
    assert!(!used.is_empty(), "no t! lookups found under {src_dir:?}");

    let missing: Vec<String> = used
        .into_iter()
        .filter(|key| !fallback_keys.contains(key))
        .collect();
    assert!(missing.is_empty(), "keys used in code but missing from pt-BR: {missing:?}");
}

#[test]
fn student_counts_use_an_exact_singular_variant() {
    for (locale, src) in [("pt-BR", PT_BR), ("en-US", EN_US)] {
        assert!(
            src.contains("[1] { $count }"),
            "{locale}: singular must match exactly one"
        );
    }
}

fn collect_lookups(dir: &Path, out: &mut BTreeSet<String>) {
    let entries = fs::read_dir(dir).expect("readable source dir");
    for entry in entries {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            collect_lookups(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            let source = fs::read_to_string(&path).expect("readable source file");
            for line in source.lines() {
                if line.trim_start().starts_with("//") {
                    continue;
                }
                let mut offset = 0;
                while let Some(pos) = line[offset..].find("t!(\"") {
                    let start = offset + pos;
                    offset = start + 4;
                    // Skip `format!(` and other macros ending in `t`.
                    let preceded_by_ident = line[..start]
                        .chars()
                        .next_back()
                        .is_some_and(|c| c.is_alphanumeric() || c == '_');
                    if preceded_by_ident {
                        continue;
                    }
                    if let Some(end) = line[offset..].find('"') {
                        out.insert(line[offset..offset + end].to_string());
                    }
                }
            }
        }
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
