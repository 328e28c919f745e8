use crate::domain::{entities::AssetTree, error::DomainError, value_objects::AppName};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_app_name(name: &str) -> Result<AppName, DomainError> {
        AppName::new(name)
    }

    pub fn validate_asset_tree(tree: &AssetTree) -> Result<(), DomainError> {
        tree.validate()
    }
}
