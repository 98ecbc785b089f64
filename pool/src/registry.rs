//! A catalogue of the gadgets of this crate by name, grouped in packages,
//! with the gadgets each one instantiates.
//!
//! Resolving a gadget walks its dependencies through the registered
//! packages. Problems are reported as [Diagnostic]s rather than errors, so
//! that a caller sees all of them at once.

use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt,
};

use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GadgetEntry {
    pub name: &'static str,
    pub dependencies: &'static [&'static str],
}

const fn gadget(name: &'static str, dependencies: &'static [&'static str]) -> GadgetEntry {
    GadgetEntry { name, dependencies }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GadgetPackage {
    pub name: &'static str,
    pub gadgets: Vec<GadgetEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// `gadget` depends on a name no registered package provides.
    Unresolved {
        gadget: &'static str,
        dependency: &'static str,
    },
    /// Two packages, or one package twice, provide `gadget`.
    Duplicate {
        gadget: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unresolved { gadget, dependency } => {
                write!(f, "{gadget}: unresolved dependency `{dependency}`")
            }
            Diagnostic::Duplicate {
                gadget,
                first,
                second,
            } => write!(
                f,
                "{gadget}: provided by `{first}` and again by `{second}`"
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GadgetRegistry {
    /// Gadget name to the package providing it and its entry.
    entries: BTreeMap<&'static str, (&'static str, GadgetEntry)>,
    duplicates: Vec<Diagnostic>,
}

impl GadgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packages<'a>(packages: impl IntoIterator<Item = &'a GadgetPackage>) -> Self {
        let mut registry = Self::new();
        for package in packages {
            registry.register(package);
        }
        registry
    }

    /// Adds every gadget of `package`. A name already registered keeps its
    /// first entry and is reported.
    pub fn register(&mut self, package: &GadgetPackage) {
        for entry in &package.gadgets {
            match self.entries.get(entry.name) {
                Some((first, _)) => self.duplicates.push(Diagnostic::Duplicate {
                    gadget: entry.name,
                    first: *first,
                    second: package.name,
                }),
                None => {
                    self.entries.insert(entry.name, (package.name, *entry));
                }
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&GadgetEntry> {
        self.entries.get(name).map(|(_, entry)| entry)
    }

    /// The package providing `name`.
    pub fn package_of(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|(package, _)| *package)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walks the dependencies of `root` breadth first. Returns the gadgets
    /// reached, `root` first, with the duplicates found at registration and
    /// the unresolved references met on the way.
    pub fn resolve(&self, root: &'static str) -> (Vec<&'static str>, Vec<Diagnostic>) {
        let mut diagnostics = self.duplicates.clone();
        let mut reached = vec![];
        let mut seen = BTreeSet::from([root]);
        let mut queue = VecDeque::from([(root, None)]);

        while let Some((name, parent)) = queue.pop_front() {
            let Some((_, entry)) = self.entries.get(name) else {
                diagnostics.push(Diagnostic::Unresolved {
                    gadget: parent.unwrap_or(name),
                    dependency: name,
                });
                continue;
            };
            reached.push(name);
            for &dependency in entry.dependencies {
                if seen.insert(dependency) {
                    queue.push_back((dependency, Some(name)));
                }
            }
        }

        debug!(
            "resolved {root}: {} gadgets, {} diagnostics",
            reached.len(),
            diagnostics.len()
        );
        (reached, diagnostics)
    }

    /// Every problem of the registry: duplicates and all unresolved
    /// references, whichever gadget they hang from.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.duplicates.clone();
        for (_, entry) in self.entries.values() {
            for &dependency in entry.dependencies {
                if !self.entries.contains_key(dependency) {
                    diagnostics.push(Diagnostic::Unresolved {
                        gadget: entry.name,
                        dependency,
                    });
                }
            }
        }
        diagnostics
    }
}

/// The packages of this crate, leaves first.
pub static PACKAGES: Lazy<Vec<GadgetPackage>> = Lazy::new(|| {
    vec![
        GadgetPackage {
            name: "bitify",
            gadgets: vec![
                gadget("num_to_bits", &[]),
                gadget("bits_to_num", &[]),
                gadget("num_to_bits_strict", &["num_to_bits", "alias_check"]),
                gadget("bits_to_num_strict", &["alias_check", "bits_to_num"]),
                gadget("num_to_bits_neg", &["is_zero"]),
            ],
        },
        GadgetPackage {
            name: "binsum",
            gadgets: vec![gadget("bin_sum", &[])],
        },
        GadgetPackage {
            name: "circuit_utils",
            gadgets: vec![
                gadget("comp_constant", &["num_to_bits"]),
                gadget("alias_check", &["comp_constant"]),
                gadget("calculate_total", &[]),
            ],
        },
        GadgetPackage {
            name: "comparators",
            gadgets: vec![
                gadget("is_zero", &[]),
                gadget("is_equal", &["is_zero"]),
                gadget("force_equal_if_enabled", &["is_equal"]),
                gadget("less_than", &["num_to_bits"]),
                gadget("less_eq_than", &["less_than"]),
                gadget("greater_than", &["less_than"]),
                gadget("greater_eq_than", &["less_than"]),
            ],
        },
        GadgetPackage {
            name: "safe_comparators",
            gadgets: vec![
                gadget("safe_less_than", &["num_to_bits_strict"]),
                gadget("safe_less_eq_than", &["safe_less_than"]),
                gadget("safe_greater_than", &["safe_less_than"]),
                gadget("safe_greater_eq_than", &["safe_less_than"]),
            ],
        },
        GadgetPackage {
            name: "gates",
            gadgets: vec![
                gadget("xor", &[]),
                gadget("and", &[]),
                gadget("or", &[]),
                gadget("not", &[]),
                gadget("nand", &[]),
                gadget("nor", &[]),
                gadget("multi_and", &["and"]),
            ],
        },
        GadgetPackage {
            name: "multiplexer",
            gadgets: vec![
                gadget("mux1", &[]),
                gadget("multi_mux1", &["mux1"]),
                gadget("multi_mux3", &[]),
                gadget("mux3", &["multi_mux3"]),
            ],
        },
        GadgetPackage {
            name: "montgomery",
            gadgets: vec![
                gadget("edwards_to_montgomery", &[]),
                gadget("montgomery_to_edwards", &[]),
                gadget("montgomery_add", &[]),
                gadget("montgomery_double", &[]),
            ],
        },
        GadgetPackage {
            name: "babyjub",
            gadgets: vec![
                gadget("baby_add", &[]),
                gadget("baby_dbl", &["baby_add"]),
                gadget("baby_check", &[]),
                gadget(
                    "baby_priv_to_pub",
                    &["less_than", "num_to_bits", "escalar_mul_fix"],
                ),
            ],
        },
        GadgetPackage {
            name: "escalarmul",
            gadgets: vec![
                gadget("multiplexor2", &["multi_mux1"]),
                gadget(
                    "segment_mul_any",
                    &[
                        "edwards_to_montgomery",
                        "montgomery_double",
                        "montgomery_add",
                        "multiplexor2",
                        "montgomery_to_edwards",
                        "baby_add",
                    ],
                ),
                gadget(
                    "escalar_mul_any",
                    &[
                        "segment_mul_any",
                        "is_zero",
                        "multiplexor2",
                        "edwards_to_montgomery",
                        "montgomery_double",
                        "montgomery_to_edwards",
                        "baby_add",
                    ],
                ),
                gadget(
                    "window_mul_fix",
                    &["multi_mux3", "montgomery_add", "montgomery_double"],
                ),
                gadget(
                    "segment_mul_fix",
                    &[
                        "window_mul_fix",
                        "edwards_to_montgomery",
                        "montgomery_to_edwards",
                        "montgomery_add",
                        "montgomery_double",
                        "baby_add",
                    ],
                ),
                gadget(
                    "escalar_mul_fix",
                    &[
                        "segment_mul_fix",
                        "montgomery_double",
                        "montgomery_to_edwards",
                        "edwards_to_montgomery",
                        "baby_add",
                    ],
                ),
            ],
        },
        GadgetPackage {
            name: "ecdh",
            gadgets: vec![gadget("ecdh", &["num_to_bits", "escalar_mul_any"])],
        },
        GadgetPackage {
            name: "poseidon",
            gadgets: vec![
                gadget("poseidon_permutation", &[]),
                gadget("poseidon_hash", &["poseidon_permutation"]),
                gadget("poseidon_std", &["poseidon_hash"]),
                gadget("poseidon_decrypt_iterations", &["less_than", "poseidon_hash"]),
                gadget("poseidon_decrypt_without_check", &["poseidon_decrypt_iterations"]),
                gadget("poseidon_decrypt", &["poseidon_decrypt_iterations"]),
            ],
        },
        GadgetPackage {
            name: "merkletree",
            gadgets: vec![
                gadget(
                    "merkle_generate_path_indices",
                    &["safe_less_than", "calculate_total"],
                ),
                gadget(
                    "lean_imt_inclusion_proof",
                    &[
                        "merkle_generate_path_indices",
                        "is_equal",
                        "multi_mux1",
                        "poseidon_std",
                    ],
                ),
                gadget("compute_merkle_tree_root", &["poseidon_std"]),
            ],
        },
        GadgetPackage {
            name: "privacy_pool",
            gadgets: vec![
                gadget("recover_commitment_keys", &["baby_priv_to_pub", "ecdh"]),
                gadget(
                    "decrypt_commitment",
                    &["poseidon_decrypt_without_check", "poseidon_std"],
                ),
                gadget(
                    "commitment_ownership_proof",
                    &[
                        "recover_commitment_keys",
                        "compute_merkle_tree_root",
                        "decrypt_commitment",
                        "is_equal",
                    ],
                ),
                gadget("commitment_membership_proof", &["lean_imt_inclusion_proof"]),
                gadget(
                    "handle_existing_commitment",
                    &[
                        "commitment_ownership_proof",
                        "commitment_membership_proof",
                        "is_zero",
                        "nor",
                    ],
                ),
                gadget(
                    "handle_new_commitment",
                    &["commitment_ownership_proof", "is_zero"],
                ),
                gadget(
                    "privacy_pool",
                    &[
                        "num_to_bits",
                        "handle_existing_commitment",
                        "handle_new_commitment",
                        "is_equal",
                    ],
                ),
            ],
        },
    ]
});

/// A registry of every package of this crate.
pub fn default_registry() -> GadgetRegistry {
    GadgetRegistry::with_packages(PACKAGES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_is_complete() {
        let registry = default_registry();
        assert_eq!(registry.diagnostics(), vec![]);
        let (reached, diagnostics) = registry.resolve("privacy_pool");
        assert!(diagnostics.is_empty());
        assert_eq!(reached[0], "privacy_pool");
        assert!(reached.contains(&"comp_constant"));
        assert!(!reached.contains(&"xor"));
        assert_eq!(registry.package_of("ecdh"), Some("ecdh"));
    }

    #[test]
    fn test_missing_package() {
        let packages: Vec<_> = PACKAGES.iter().filter(|p| p.name != "multiplexer").collect();
        let registry = GadgetRegistry::with_packages(packages);
        let (_, diagnostics) = registry.resolve("privacy_pool");
        assert!(diagnostics.contains(&Diagnostic::Unresolved {
            gadget: "lean_imt_inclusion_proof",
            dependency: "multi_mux1",
        }));
        assert!(registry
            .diagnostics()
            .iter()
            .all(|d| matches!(d, Diagnostic::Unresolved { .. })));
    }

    #[test]
    fn test_duplicate_package() {
        let ecdh = PACKAGES.iter().find(|p| p.name == "ecdh").unwrap();
        let mut registry = default_registry();
        let before = registry.len();
        registry.register(ecdh);
        assert_eq!(registry.len(), before);
        let (_, diagnostics) = registry.resolve("ecdh");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::Duplicate {
                gadget: "ecdh",
                first: "ecdh",
                second: "ecdh",
            }]
        );
        assert_eq!(
            diagnostics[0].to_string(),
            "ecdh: provided by `ecdh` and again by `ecdh`"
        );
    }

    #[test]
    fn test_compiled_scopes_are_registered() {
        use crate::circuit::{PoolCircuit, PoolConfig};

        let config = PoolConfig::new(2, 1, 1).unwrap();
        let sys = PoolCircuit::new(config).unwrap().compile().unwrap();
        let (reached, _) = default_registry().resolve("privacy_pool");

        let scopes: BTreeSet<&str> = sys
            .constraints()
            .iter()
            .flat_map(|c| c.scope.split('/').skip(1))
            .collect();
        assert!(scopes.contains("escalar_mul_any"));
        assert!(scopes.contains("comp_constant"));
        for scope in scopes {
            assert!(
                reached.iter().any(|name| *name == scope),
                "{scope} is not reached from privacy_pool"
            );
        }
    }

    #[test]
    fn test_unknown_root() {
        let (reached, diagnostics) = GadgetRegistry::new().resolve("privacy_pool");
        assert!(reached.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }
}
