//! Property tests for the action eligibility table

use drillflow::workflow::{resolve, revert_permitted};
use drillflow::{eligible_actions, ActionKind, Job, JobStatus, Role, User};
use proptest::prelude::*;
use proptest::sample::select;

fn status() -> impl Strategy<Value = JobStatus> {
    select(JobStatus::ALL.to_vec())
}

fn role() -> impl Strategy<Value = Role> {
    select(Role::ALL.to_vec())
}

fn assignee() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(select(vec!["u1".to_string(), "u2".to_string()]))
}

proptest! {
    #[test]
    fn revert_present_iff_manager_and_not_created(
        status in status(),
        role in role(),
        surveyor in assignee(),
        driller in assignee(),
    ) {
        let actions = resolve(status, role, "u1", surveyor.as_deref(), driller.as_deref());
        let expected = role.is_manager() && status != JobStatus::Created;

        prop_assert_eq!(actions.contains(&ActionKind::RevertStatus), expected);
        prop_assert_eq!(revert_permitted(status, role), expected);
    }

    #[test]
    fn identity_gated_actions_need_matching_id_except_for_admin(
        status in status(),
        role in role(),
        surveyor in assignee(),
        driller in assignee(),
    ) {
        let actions = resolve(status, role, "u1", surveyor.as_deref(), driller.as_deref());

        if role != Role::Admin {
            if surveyor.as_deref() != Some("u1") {
                prop_assert!(!actions.contains(&ActionKind::CompleteSurvey));
            }
            if driller.as_deref() != Some("u1") {
                prop_assert!(!actions.contains(&ActionKind::CompleteDrilling));
            }
        }
    }

    #[test]
    fn at_most_one_forward_action_and_revert_last(
        status in status(),
        role in role(),
        surveyor in assignee(),
        driller in assignee(),
    ) {
        let actions = resolve(status, role, "u1", surveyor.as_deref(), driller.as_deref());
        let forward = actions.iter().filter(|a| **a != ActionKind::RevertStatus).count();

        prop_assert!(forward <= 1);
        if let Some(position) = actions.iter().position(|a| *a == ActionKind::RevertStatus) {
            prop_assert_eq!(position, actions.len() - 1);
        }
    }

    #[test]
    fn completed_jobs_offer_only_revert(role in role(), surveyor in assignee(), driller in assignee()) {
        let actions = resolve(JobStatus::Completed, role, "u1", surveyor.as_deref(), driller.as_deref());
        let expected: Vec<ActionKind> = if role.is_manager() {
            vec![ActionKind::RevertStatus]
        } else {
            vec![]
        };
        prop_assert_eq!(actions, expected);
    }

    #[test]
    fn unrecognized_status_offers_nothing(raw in "[a-z_]{1,12}", role in role()) {
        prop_assume!(raw.parse::<JobStatus>().is_err());

        let job = Job {
            id: "job-1".to_string(),
            status: raw,
            assigned_surveyor_id: Some("u1".to_string()),
            assigned_driller_id: Some("u1".to_string()),
        };
        prop_assert!(eligible_actions(&job, &User::new("u1", role)).is_empty());
    }
}
