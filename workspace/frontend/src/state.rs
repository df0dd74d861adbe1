use compute::{Effect, Session, SessionEvent};
use std::rc::Rc;
use yew::prelude::*;

/// Classifier session held by `use_reducer`.
///
/// Reducing never runs the predictor; the hook launches it when
/// [`compute::Session::pending_request`] changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub session: Session,
}

impl Reducible for SessionState {
    type Action = SessionEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.session.apply(action) {
            Ok(Effect::StartPrediction(snapshot)) => {
                log::debug!("Prediction started for {:?}", snapshot);
            }
            Ok(Effect::None) => {}
            Err(e) => {
                log::warn!("Session event rejected: {}", e);
                return self;
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
