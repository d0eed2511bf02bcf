//! Sensitive path warnings, checked before an edit lands.
//!
//! Only `file_path` is inspected. Every rule is evaluated; matches are
//! reported together in rule order.

use tracing::debug;

use super::Advisory;
use crate::event::EditEvent;

/// A path predicate paired with the warning it raises.
pub struct PathRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub message: &'static str,
}

const VERSION_CATALOG: &str = "libs.versions.toml";
const MANIFEST: &str = "AndroidManifest.xml";
const PROGUARD_RULES: &str = "proguard-rules.pro";
const LOCAL_PROPERTIES: &str = "local.properties";
const GRADLE_PROPERTIES: &str = "gradle.properties";

fn is_version_catalog(path: &str) -> bool {
    path.contains(VERSION_CATALOG)
}

fn is_manifest(path: &str) -> bool {
    path.contains(MANIFEST)
}

fn is_proguard_rules(path: &str) -> bool {
    path.contains(PROGUARD_RULES)
}

fn is_local_properties(path: &str) -> bool {
    path.contains(LOCAL_PROPERTIES)
}

// Anything mentioning "local" belongs to the rule above.
fn is_gradle_properties(path: &str) -> bool {
    path.contains(GRADLE_PROPERTIES) && !path.contains("local")
}

pub const PATH_RULES: &[PathRule] = &[
    PathRule {
        name: "version-catalog",
        matches: is_version_catalog,
        message: concat!(
            "⚠️  CATALOG GUARD: libs.versions.toml change detected.\n",
            "   All dependency versions cascade from here. Verify:\n",
            "   - Kotlin ↔ Compose BOM ↔ AGP compatibility matrix\n",
            "   - GeckoView version pinned to Mozilla Maven\n",
            "   - Run: ./gradlew dependencies | grep -i conflict",
        ),
    },
    PathRule {
        name: "manifest",
        matches: is_manifest,
        message: concat!(
            "🔐 MANIFEST GUARD: AndroidManifest.xml change detected.\n",
            "   Verify before saving:\n",
            "   - No unintended android:exported=\"true\" on services/receivers\n",
            "   - LEANBACK_LAUNCHER intent filter is intact\n",
            "   - QUERY_ALL_PACKAGES still present (required for app grid)\n",
            "   - INTERNET still present (required for browser + widgets)",
        ),
    },
    PathRule {
        name: "proguard-rules",
        matches: is_proguard_rules,
        message: concat!(
            "🔒 PROGUARD GUARD: proguard-rules.pro change detected.\n",
            "   MinifyEnabled is currently false in release. If enabling:\n",
            "   - Add GeckoView keep rules\n",
            "   - Add Hilt keep rules\n",
            "   - Test release variant: ./gradlew assembleRelease",
        ),
    },
    PathRule {
        name: "local-properties",
        matches: is_local_properties,
        message: concat!(
            "🔑 SECRETS GUARD: local.properties is git-ignored and local only.\n",
            "   NEVER commit this file. Store API keys here (NASA, weather, etc).",
        ),
    },
    PathRule {
        name: "gradle-properties",
        matches: is_gradle_properties,
        message: concat!(
            "⚙️  GRADLE PROPS GUARD: gradle.properties is committed to git.\n",
            "   Do NOT add API keys or secrets here. Use local.properties.",
        ),
    },
];

/// Collect the warnings for every rule matching the event's path.
pub fn evaluate(event: &EditEvent) -> Advisory {
    let path = event.file_path.as_str();
    let matched: Vec<&PathRule> = PATH_RULES.iter().filter(|r| (r.matches)(path)).collect();

    if matched.is_empty() {
        return Advisory::allow();
    }

    for rule in &matched {
        debug!(rule = rule.name, path, "Path rule matched");
    }

    let message = matched
        .iter()
        .map(|r| r.message)
        .collect::<Vec<_>>()
        .join("\n");
    Advisory::warn(message)
}
