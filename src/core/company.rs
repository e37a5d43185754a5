//! Companies and the company registry.
//!
//! A company is identified by its name. The registry assigns each company a
//! compact `CompanyId` (its position in the configured list) so that cards,
//! actions and tokens can refer to it without carrying strings around.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Compact company identifier: index into the `CompanyRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub u8);

impl CompanyId {
    /// Create a new company ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Position of this company in the registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Company({})", self.0)
    }
}

/// A company whose shares are traded.
///
/// Equality and hashing use the name only; two companies with the same name
/// are the same company whatever their share count says.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// Number of cards issued for this company.
    pub total_shares: u32,
}

impl Company {
    #[must_use]
    pub fn new(id: CompanyId, name: impl Into<String>, total_shares: u32) -> Self {
        Self {
            id,
            name: name.into(),
            total_shares,
        }
    }
}

impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Company {}

impl Hash for Company {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} shares)", self.name, self.total_shares)
    }
}

/// Registry of the companies in play.
///
/// ## Example
///
/// ```
/// use startups_engine::core::{CompanyId, CompanyRegistry};
///
/// let registry = CompanyRegistry::from_defs(&[("Giraffe Beer", 5), ("Octo Coffee", 8)]);
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.by_name("Octo Coffee").map(|c| c.id), Some(CompanyId::new(1)));
/// assert_eq!(registry.total_cards(), 13);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CompanyRegistry {
    companies: Vec<Company>,
}

impl CompanyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(name, total_shares)` pairs, in order.
    #[must_use]
    pub fn from_defs<S: AsRef<str>>(defs: &[(S, u32)]) -> Self {
        let mut registry = Self::new();
        for (name, shares) in defs {
            registry.register(name.as_ref(), *shares);
        }
        registry
    }

    /// Register a company and return its ID.
    ///
    /// Panics if the name is already taken or more than 256 companies are registered.
    pub fn register(&mut self, name: impl Into<String>, total_shares: u32) -> CompanyId {
        let name = name.into();
        assert!(
            self.by_name(&name).is_none(),
            "Company {name:?} already registered"
        );
        assert!(self.companies.len() < 256, "At most 256 companies supported");

        let id = CompanyId(self.companies.len() as u8);
        self.companies.push(Company::new(id, name, total_shares));
        id
    }

    #[must_use]
    pub fn get(&self, id: CompanyId) -> Option<&Company> {
        self.companies.get(id.index())
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.name == name)
    }

    /// Name of a company, or `"?"` for an unknown ID.
    #[must_use]
    pub fn name_of(&self, id: CompanyId) -> &str {
        self.get(id).map_or("?", |c| c.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, id: CompanyId) -> bool {
        id.index() < self.companies.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CompanyId> + '_ {
        self.companies.iter().map(|c| c.id)
    }

    /// Total number of cards across all companies.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.companies.iter().map(|c| c.total_shares as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_equality_by_name() {
        let a = Company::new(CompanyId::new(0), "Giraffe Beer", 5);
        let b = Company::new(CompanyId::new(3), "Giraffe Beer", 9);
        let c = Company::new(CompanyId::new(0), "Octo Coffee", 5);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_registry_assigns_ids_in_order() {
        let registry = CompanyRegistry::from_defs(&[("A", 5), ("B", 6), ("C", 7)]);

        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec![CompanyId::new(0), CompanyId::new(1), CompanyId::new(2)]);
        assert_eq!(registry.name_of(CompanyId::new(1)), "B");
        assert_eq!(registry.name_of(CompanyId::new(9)), "?");
        assert!(!registry.contains(CompanyId::new(3)));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_registry_rejects_duplicate_names() {
        let mut registry = CompanyRegistry::new();
        registry.register("A", 5);
        registry.register("A", 6);
    }
}
