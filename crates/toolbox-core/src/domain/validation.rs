use crate::domain::{
    entities::Project,
    error::DomainError,
};

/// Centralized domain validation.
///
/// Entities carry their own rules; this is the single entry point the
/// loaders call.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project(project: &Project) -> Result<(), DomainError> {
        project.validate()
    }

    /// Project ids must be unique within one config file.
    pub fn validate_unique_ids(projects: &[Project]) -> Result<(), DomainError> {
        let mut seen = std::collections::BTreeSet::new();
        for project in projects {
            if !seen.insert(project.project_id) {
                return Err(DomainError::InvalidProject(format!(
                    "project id {} is declared more than once",
                    project.project_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn project(id: u64) -> Project {
        Project {
            path: PathBuf::from("/work"),
            api_url: "https://tolgee.example".into(),
            project_id: id,
            namespace: None,
            missing_namespace_fail: false,
            sources: vec![],
            targets: vec![],
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        assert!(DomainValidator::validate_unique_ids(&[project(1), project(2)]).is_ok());
        let err = DomainValidator::validate_unique_ids(&[project(1), project(1)]).unwrap_err();
        assert!(err.to_string().contains("project id 1"));
    }
}
