#![allow(dead_code)]

use cors_header_scrutiny::{RejectionReason, ScrutinyDecision};

pub fn assert_accepted(decision: ScrutinyDecision) {
    match decision {
        ScrutinyDecision::Accepted => {}
        other => panic!("expected accepted decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: ScrutinyDecision) -> RejectionReason {
    match decision {
        ScrutinyDecision::Rejected(rejection) => {
            assert_eq!(rejection.status(), 403);
            assert_eq!(rejection.message(), "Forbidden");
            rejection.reason().clone()
        }
        other => panic!("expected rejected decision, got {:?}", other),
    }
}
