use serde::{Deserialize, Serialize};
use std::fmt;

/// A component every well-formed program is expected to have.
///
/// Variant order is the check order; `missing` lists follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RequiredComponent {
    #[serde(rename = "Program description")]
    Description,
    #[serde(rename = "Program owner")]
    Owner,
    #[serde(rename = "Start date")]
    StartDate,
    #[serde(rename = "End date")]
    EndDate,
    #[serde(rename = "Objectives")]
    Objectives,
    #[serde(rename = "KPIs")]
    Kpis,
    #[serde(rename = "Milestones")]
    Milestones,
    #[serde(rename = "Risks")]
    Risks,
    #[serde(rename = "Dependencies")]
    Dependencies,
    #[serde(rename = "Adopters")]
    Adopters,
    #[serde(rename = "Business epics")]
    BusinessEpics,
    #[serde(rename = "Epics")]
    Epics,
    #[serde(rename = "Stories")]
    Stories,
}

impl RequiredComponent {
    /// Components checked for every program.
    pub const CORE: [RequiredComponent; 10] = [
        RequiredComponent::Description,
        RequiredComponent::Owner,
        RequiredComponent::StartDate,
        RequiredComponent::EndDate,
        RequiredComponent::Objectives,
        RequiredComponent::Kpis,
        RequiredComponent::Milestones,
        RequiredComponent::Risks,
        RequiredComponent::Dependencies,
        RequiredComponent::Adopters,
    ];

    /// Components checked only when the JIRA hierarchy is in scope.
    pub const HIERARCHY: [RequiredComponent; 3] = [
        RequiredComponent::BusinessEpics,
        RequiredComponent::Epics,
        RequiredComponent::Stories,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RequiredComponent::Description => "Program description",
            RequiredComponent::Owner => "Program owner",
            RequiredComponent::StartDate => "Start date",
            RequiredComponent::EndDate => "End date",
            RequiredComponent::Objectives => "Objectives",
            RequiredComponent::Kpis => "KPIs",
            RequiredComponent::Milestones => "Milestones",
            RequiredComponent::Risks => "Risks",
            RequiredComponent::Dependencies => "Dependencies",
            RequiredComponent::Adopters => "Adopters",
            RequiredComponent::BusinessEpics => "Business epics",
            RequiredComponent::Epics => "Epics",
            RequiredComponent::Stories => "Stories",
        }
    }
}

impl fmt::Display for RequiredComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_form_matches_display_name() {
        for component in RequiredComponent::CORE
            .iter()
            .chain(RequiredComponent::HIERARCHY.iter())
        {
            let json = serde_json::to_string(component).unwrap();
            assert_eq!(json, format!("\"{}\"", component.name()));
        }
    }

    #[test]
    fn check_order_matches_declaration_order() {
        let mut sorted = RequiredComponent::CORE;
        sorted.sort();
        assert_eq!(sorted, RequiredComponent::CORE);
        assert!(RequiredComponent::Adopters < RequiredComponent::BusinessEpics);
    }
}
