// Dialog form state and the request payloads built from it
//
// A form that fails `validate` is the "submit button disabled" case: the
// caller never gets an `ActionRequest`, so nothing can be sent.

use super::types::ActionKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Select a surveyor before confirming")]
    MissingSurveyor,
    #[error("Select a driller before confirming")]
    MissingDriller,
    #[error("Final depth must be greater than zero")]
    InvalidFinalDepth,
    #[error("Water yield must be a number")]
    InvalidWaterYield,
    #[error("A reason is required to revert the status")]
    MissingReason,
}

/// Field values as entered in an action dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionForm {
    AssignSurveyor {
        surveyor_id: Option<String>,
    },
    CompleteSurvey {
        notes: String,
    },
    AssignDriller {
        driller_id: Option<String>,
    },
    CompleteDrilling {
        final_depth: Option<f64>,
        water_yield: f64,
        is_successful: bool,
        notes: String,
    },
    RevertStatus {
        reason: String,
    },
}

impl ActionForm {
    /// Empty dialog for `kind`, as shown when the action button is pressed.
    pub fn blank(kind: ActionKind) -> Self {
        match kind {
            ActionKind::AssignSurveyor => ActionForm::AssignSurveyor { surveyor_id: None },
            ActionKind::CompleteSurvey => ActionForm::CompleteSurvey {
                notes: String::new(),
            },
            ActionKind::AssignDriller => ActionForm::AssignDriller { driller_id: None },
            ActionKind::CompleteDrilling => ActionForm::CompleteDrilling {
                final_depth: None,
                water_yield: 0.0,
                is_successful: true,
                notes: String::new(),
            },
            ActionKind::RevertStatus => ActionForm::RevertStatus {
                reason: String::new(),
            },
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            ActionForm::AssignSurveyor { .. } => ActionKind::AssignSurveyor,
            ActionForm::CompleteSurvey { .. } => ActionKind::CompleteSurvey,
            ActionForm::AssignDriller { .. } => ActionKind::AssignDriller,
            ActionForm::CompleteDrilling { .. } => ActionKind::CompleteDrilling,
            ActionForm::RevertStatus { .. } => ActionKind::RevertStatus,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<ActionRequest, FormError> {
        match self {
            ActionForm::AssignSurveyor { surveyor_id } => {
                let surveyor_id = required_id(surveyor_id).ok_or(FormError::MissingSurveyor)?;
                Ok(ActionRequest::AssignSurveyor(AssignSurveyor { surveyor_id }))
            }
            ActionForm::CompleteSurvey { notes } => Ok(ActionRequest::CompleteSurvey(CompleteSurvey {
                notes: notes.clone(),
            })),
            ActionForm::AssignDriller { driller_id } => {
                let driller_id = required_id(driller_id).ok_or(FormError::MissingDriller)?;
                Ok(ActionRequest::AssignDriller(AssignDriller { driller_id }))
            }
            ActionForm::CompleteDrilling {
                final_depth,
                water_yield,
                is_successful,
                notes,
            } => {
                let final_depth = final_depth
                    .filter(|depth| depth.is_finite() && *depth > 0.0)
                    .ok_or(FormError::InvalidFinalDepth)?;
                if !water_yield.is_finite() {
                    return Err(FormError::InvalidWaterYield);
                }
                Ok(ActionRequest::CompleteDrilling(CompleteDrilling {
                    final_depth,
                    water_yield: *water_yield,
                    is_successful: *is_successful,
                    notes: notes.clone(),
                }))
            }
            ActionForm::RevertStatus { reason } => {
                let reason = reason.trim();
                if reason.is_empty() {
                    return Err(FormError::MissingReason);
                }
                Ok(ActionRequest::RevertStatus(RevertStatus {
                    reason: reason.to_string(),
                }))
            }
        }
    }
}

fn required_id(id: &Option<String>) -> Option<String> {
    id.as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignSurveyor {
    pub surveyor_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteSurvey {
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriller {
    pub driller_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteDrilling {
    pub final_depth: f64,
    pub water_yield: f64,
    pub is_successful: bool,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevertStatus {
    pub reason: String,
}

/// A validated payload, serialized as the bare request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionRequest {
    AssignSurveyor(AssignSurveyor),
    CompleteSurvey(CompleteSurvey),
    AssignDriller(AssignDriller),
    CompleteDrilling(CompleteDrilling),
    RevertStatus(RevertStatus),
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::AssignSurveyor(_) => ActionKind::AssignSurveyor,
            ActionRequest::CompleteSurvey(_) => ActionKind::CompleteSurvey,
            ActionRequest::AssignDriller(_) => ActionKind::AssignDriller,
            ActionRequest::CompleteDrilling(_) => ActionKind::CompleteDrilling,
            ActionRequest::RevertStatus(_) => ActionKind::RevertStatus,
        }
    }

    /// Path segments relative to the API base. The client percent-encodes
    /// each one, so a job id can never reach a different endpoint.
    pub fn path_segments<'a>(&self, job_id: &'a str) -> [&'a str; 3] {
        ["jobs", job_id, self.kind().endpoint()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_forms_match_kind() {
        for kind in [
            ActionKind::AssignSurveyor,
            ActionKind::CompleteSurvey,
            ActionKind::AssignDriller,
            ActionKind::CompleteDrilling,
            ActionKind::RevertStatus,
        ] {
            assert_eq!(ActionForm::blank(kind).kind(), kind);
        }
    }

    #[test]
    fn test_blank_forms_that_need_input_cannot_submit() {
        assert!(!ActionForm::blank(ActionKind::AssignSurveyor).can_submit());
        assert!(!ActionForm::blank(ActionKind::AssignDriller).can_submit());
        assert!(!ActionForm::blank(ActionKind::CompleteDrilling).can_submit());
        assert!(!ActionForm::blank(ActionKind::RevertStatus).can_submit());
        // notes are optional
        assert!(ActionForm::blank(ActionKind::CompleteSurvey).can_submit());
    }

    #[test]
    fn test_assign_surveyor_payload() {
        let request = ActionForm::AssignSurveyor {
            surveyor_id: Some("u1".to_string()),
        }
        .validate()
        .unwrap();

        assert_eq!(request.path_segments("job-9"), ["jobs", "job-9", "assign-surveyor"]);
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"surveyorId": "u1"}));
    }

    #[test]
    fn test_blank_assignee_is_missing() {
        let form = ActionForm::AssignDriller {
            driller_id: Some("   ".to_string()),
        };
        assert_eq!(form.validate(), Err(FormError::MissingDriller));
    }

    #[test]
    fn test_complete_drilling_requires_positive_depth() {
        for depth in [None, Some(0.0), Some(-3.5), Some(f64::NAN), Some(f64::INFINITY)] {
            let form = ActionForm::CompleteDrilling {
                final_depth: depth,
                water_yield: 1.2,
                is_successful: true,
                notes: String::new(),
            };
            assert_eq!(form.validate(), Err(FormError::InvalidFinalDepth), "depth={depth:?}");
        }
    }

    #[test]
    fn test_complete_drilling_payload() {
        let request = ActionForm::CompleteDrilling {
            final_depth: Some(84.5),
            water_yield: 2.25,
            is_successful: false,
            notes: "dry below 60m".to_string(),
        }
        .validate()
        .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "finalDepth": 84.5,
                "waterYield": 2.25,
                "isSuccessful": false,
                "notes": "dry below 60m"
            })
        );
    }

    #[test]
    fn test_revert_requires_non_blank_reason() {
        for reason in ["", "   ", "\n\t"] {
            let form = ActionForm::RevertStatus {
                reason: reason.to_string(),
            };
            assert_eq!(form.validate(), Err(FormError::MissingReason));
        }

        let request = ActionForm::RevertStatus {
            reason: "  wrong surveyor  ".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"reason": "wrong surveyor"}));
        assert_eq!(request.path_segments("j1"), ["jobs", "j1", "revert-status"]);
    }

    #[test]
    fn test_complete_survey_sends_notes() {
        let request = ActionForm::CompleteSurvey {
            notes: "site accessible".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"notes": "site accessible"}));
    }
}
