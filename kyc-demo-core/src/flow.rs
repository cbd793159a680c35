//! Step gating and navigation
//!
//! The wizard is a strictly linear state machine:
//!
//! ```text
//! Start -> Aadhaar -> Pan -> Business -> Success
//! ```
//!
//! Nothing here remembers how far the user got. Every entry guard and every
//! forward transition is recomputed from the verification flags in
//! [`VerificationState`].

use crate::error::{KycError, KycResult};
use crate::models::VerificationState;
use std::fmt;

/// A page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Start,
    Aadhaar,
    Pan,
    Business,
    Success,
}

impl Step {
    /// The three verification steps, in order
    pub const VERIFICATION_STEPS: [Step; 3] = [Step::Aadhaar, Step::Pan, Step::Business];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Step::Start => "Start",
            Step::Aadhaar => "Aadhaar",
            Step::Pan => "PAN",
            Step::Business => "Business",
            Step::Success => "Success",
        }
    }

    /// Position in the progress stepper (1-based), Start has none
    pub fn number(&self) -> Option<u8> {
        match self {
            Step::Start => None,
            Step::Aadhaar => Some(1),
            Step::Pan => Some(2),
            Step::Business => Some(3),
            Step::Success => Some(4),
        }
    }

    /// Whether this step's own verification flag is set
    pub fn is_verified(&self, state: &VerificationState) -> bool {
        match self {
            Step::Start => true,
            Step::Aadhaar => state.aadhaar.verified,
            Step::Pan => state.pan.verified,
            Step::Business => state.business.verified,
            Step::Success => state.is_complete(),
        }
    }

    /// Notice shown when "Next" is pressed before this step is verified
    pub(crate) fn verification_required_notice(&self) -> &'static str {
        match self {
            Step::Aadhaar => "Please verify your Aadhaar before proceeding",
            Step::Pan => "Please verify your PAN before proceeding",
            Step::Business => "Please verify your business details before proceeding",
            Step::Start | Step::Success => "Verification required",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical route of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Page(Step),
    /// Catch-all for unrecognized paths
    NotFound(String),
}

impl Route {
    /// Parse a logical path such as `/pan`
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        match normalized {
            "/" => Route::Page(Step::Start),
            "/aadhaar" => Route::Page(Step::Aadhaar),
            "/pan" => Route::Page(Step::Pan),
            "/business" => Route::Page(Step::Business),
            "/success" => Route::Page(Step::Success),
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    /// Path for a step
    pub fn path_of(step: Step) -> &'static str {
        match step {
            Step::Start => "/",
            Step::Aadhaar => "/aadhaar",
            Step::Pan => "/pan",
            Step::Business => "/business",
            Step::Success => "/success",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Page(step) => Route::path_of(*step),
            Route::NotFound(path) => path,
        }
    }
}

/// Outcome of an entry guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// The page may render
    Render,
    /// The page must not render; go here instead
    Redirect(Step),
}

/// Entry guard for `step`
pub fn enter(step: Step, state: &VerificationState) -> Entry {
    let allowed = match step {
        Step::Start | Step::Aadhaar => true,
        Step::Pan => state.aadhaar.verified,
        Step::Business => state.aadhaar.verified && state.pan.verified,
        Step::Success => state.is_complete(),
    };

    if allowed {
        Entry::Render
    } else {
        Entry::Redirect(Step::Aadhaar)
    }
}

/// Step actually rendered when navigating to `step`
pub fn resolve(step: Step, state: &VerificationState) -> Step {
    match enter(step, state) {
        Entry::Render => step,
        Entry::Redirect(target) => resolve(target, state),
    }
}

/// "Next" from `from`
///
/// Fails with [`KycError::GatingViolation`] while the current step is not
/// verified. Success is terminal.
pub fn advance(from: Step, state: &VerificationState) -> KycResult<Step> {
    let to = match from {
        Step::Start => return Ok(Step::Aadhaar),
        Step::Aadhaar => Step::Pan,
        Step::Pan => Step::Business,
        Step::Business => Step::Success,
        Step::Success => return Ok(Step::Success),
    };

    if !from.is_verified(state) {
        return Err(KycError::gating(from, from.verification_required_notice()));
    }
    Ok(to)
}

/// "Back" from `from`
pub fn back(from: Step) -> Step {
    match from {
        Step::Start | Step::Aadhaar => Step::Start,
        Step::Pan => Step::Aadhaar,
        Step::Business => Step::Pan,
        Step::Success => Step::Business,
    }
}

/// First verification step still outstanding, or Success
pub fn next_incomplete_step(state: &VerificationState) -> Step {
    Step::VERIFICATION_STEPS
        .into_iter()
        .find(|step| !step.is_verified(state))
        .unwrap_or(Step::Success)
}

/// Aggregate progress derived from the verification flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub aadhaar: bool,
    pub pan: bool,
    pub business: bool,
    /// Stepper number of the next step to work on (4 once complete)
    pub active_step: u8,
}

impl Progress {
    pub fn completed(&self) -> usize {
        [self.aadhaar, self.pan, self.business]
            .iter()
            .filter(|done| **done)
            .count()
    }

    pub fn total(&self) -> usize {
        Step::VERIFICATION_STEPS.len()
    }

    /// Any step verified yet ("Continue" vs "Start")
    pub fn started(&self) -> bool {
        self.completed() > 0
    }

    pub fn is_complete(&self) -> bool {
        self.aadhaar && self.pan && self.business
    }

    /// Per-step flags in order
    pub fn steps(&self) -> [(Step, bool); 3] {
        [
            (Step::Aadhaar, self.aadhaar),
            (Step::Pan, self.pan),
            (Step::Business, self.business),
        ]
    }
}

pub fn progress(state: &VerificationState) -> Progress {
    let active_step = next_incomplete_step(state).number().unwrap_or(1);
    Progress {
        aadhaar: state.aadhaar.verified,
        pan: state.pan.verified,
        business: state.business.verified,
        active_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(aadhaar: bool, pan: bool, business: bool) -> VerificationState {
        let mut state = VerificationState::default();
        state.aadhaar.verified = aadhaar;
        state.pan.verified = pan;
        state.business.verified = business;
        state
    }

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Page(Step::Start));
        assert_eq!(Route::parse(""), Route::Page(Step::Start));
        assert_eq!(Route::parse("/aadhaar"), Route::Page(Step::Aadhaar));
        assert_eq!(Route::parse("/pan/"), Route::Page(Step::Pan));
        assert_eq!(Route::parse("/business"), Route::Page(Step::Business));
        assert_eq!(Route::parse("/success"), Route::Page(Step::Success));
        assert_eq!(
            Route::parse("/settings"),
            Route::NotFound("/settings".to_string())
        );
        assert_eq!(Route::parse("/PAN"), Route::NotFound("/PAN".to_string()));
    }

    #[test]
    fn test_route_path_roundtrip() {
        for step in [
            Step::Start,
            Step::Aadhaar,
            Step::Pan,
            Step::Business,
            Step::Success,
        ] {
            assert_eq!(Route::parse(Route::path_of(step)), Route::Page(step));
        }
    }

    #[test]
    fn test_entry_guards() {
        let empty = state(false, false, false);
        assert_eq!(enter(Step::Start, &empty), Entry::Render);
        assert_eq!(enter(Step::Aadhaar, &empty), Entry::Render);
        assert_eq!(enter(Step::Pan, &empty), Entry::Redirect(Step::Aadhaar));
        assert_eq!(enter(Step::Business, &empty), Entry::Redirect(Step::Aadhaar));
        assert_eq!(enter(Step::Success, &empty), Entry::Redirect(Step::Aadhaar));

        let aadhaar_only = state(true, false, false);
        assert_eq!(enter(Step::Pan, &aadhaar_only), Entry::Render);
        assert_eq!(
            enter(Step::Business, &aadhaar_only),
            Entry::Redirect(Step::Aadhaar)
        );

        // PAN without Aadhaar still does not unlock business
        let pan_only = state(false, true, false);
        assert_eq!(enter(Step::Business, &pan_only), Entry::Redirect(Step::Aadhaar));

        let complete = state(true, true, true);
        assert_eq!(enter(Step::Success, &complete), Entry::Render);
    }

    #[test]
    fn test_direct_business_navigation_redirects_to_aadhaar() {
        assert_eq!(resolve(Step::Business, &state(false, false, false)), Step::Aadhaar);
    }

    #[test]
    fn test_advance_requires_current_step_verified() {
        let empty = state(false, false, false);
        assert_eq!(advance(Step::Start, &empty).unwrap(), Step::Aadhaar);

        let err = advance(Step::Aadhaar, &empty).unwrap_err();
        match err {
            KycError::GatingViolation { step, message } => {
                assert_eq!(step, Step::Aadhaar);
                assert_eq!(message, "Please verify your Aadhaar before proceeding");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let s = state(true, false, false);
        assert_eq!(advance(Step::Aadhaar, &s).unwrap(), Step::Pan);
        assert!(advance(Step::Pan, &s).is_err());

        let s = state(true, true, false);
        assert_eq!(advance(Step::Pan, &s).unwrap(), Step::Business);
        assert!(advance(Step::Business, &s).is_err());

        let s = state(true, true, true);
        assert_eq!(advance(Step::Business, &s).unwrap(), Step::Success);
        assert_eq!(advance(Step::Success, &s).unwrap(), Step::Success);
    }

    #[test]
    fn test_back() {
        assert_eq!(back(Step::Business), Step::Pan);
        assert_eq!(back(Step::Pan), Step::Aadhaar);
        assert_eq!(back(Step::Aadhaar), Step::Start);
    }

    #[test]
    fn test_next_incomplete_step() {
        assert_eq!(next_incomplete_step(&state(false, false, false)), Step::Aadhaar);
        assert_eq!(next_incomplete_step(&state(true, false, false)), Step::Pan);
        assert_eq!(next_incomplete_step(&state(true, true, false)), Step::Business);
        assert_eq!(next_incomplete_step(&state(true, true, true)), Step::Success);
        // flags decide, not history
        assert_eq!(next_incomplete_step(&state(false, true, true)), Step::Aadhaar);
    }

    #[test]
    fn test_progress_is_derived() {
        let p = progress(&state(false, false, false));
        assert_eq!(p.completed(), 0);
        assert!(!p.started());
        assert_eq!(p.active_step, 1);

        let p = progress(&state(true, true, false));
        assert_eq!(p.completed(), 2);
        assert!(p.started());
        assert_eq!(p.active_step, 3);

        let p = progress(&state(true, true, true));
        assert_eq!(p.completed(), p.total());
        assert!(p.is_complete());
        assert_eq!(p.active_step, 4);
    }
}
