//! Inspection policy configuration.

/// Inspection policy: which entries an APK must contain, which
/// top-level prefixes to probe for, and how many leading entries to
/// include in the preview.
///
/// The defaults reproduce the standard structural check for an
/// installable APK. Callers supply the policy explicitly so the same
/// inspection routine can check other ZIP-based layouts.
///
/// # Examples
///
/// ```
/// use apkcheck_core::InspectionConfig;
///
/// // Standard APK policy
/// let config = InspectionConfig::default();
/// assert_eq!(config.required_entries.len(), 2);
///
/// // Custom preview depth
/// let custom = InspectionConfig {
///     preview_count: 25,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionConfig {
    /// Entry names whose presence is mandatory for the archive to be
    /// considered structurally complete.
    pub required_entries: Vec<String>,

    /// Path prefixes probed with an any-entry-starts-with test. Report
    /// order follows this list's order.
    pub prefix_checks: Vec<String>,

    /// Number of leading entries included in the preview.
    pub preview_count: usize,
}

impl Default for InspectionConfig {
    /// Creates the standard APK inspection policy.
    ///
    /// Default values:
    /// - `required_entries`: `AndroidManifest.xml`, `classes.dex`
    /// - `prefix_checks`: `assets/`, `res/`, `META-INF/`
    /// - `preview_count`: 10
    fn default() -> Self {
        Self {
            required_entries: vec![
                "AndroidManifest.xml".to_string(),
                "classes.dex".to_string(),
            ],
            prefix_checks: vec![
                "assets/".to_string(),
                "res/".to_string(),
                "META-INF/".to_string(),
            ],
            preview_count: 10,
        }
    }
}
