//! Configuration for the `FamilyStore`.

/// Configuration for the `FamilyStore`
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Log each registration at debug level
    pub log_registrations: bool,
    /// Include one-way sibling links in consistency audits
    pub audit_sibling_links: bool,
    /// Initial capacity hint for the registry indexes
    pub expected_people: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_registrations: true,
            audit_sibling_links: true,
            expected_people: 16,
        }
    }
}
