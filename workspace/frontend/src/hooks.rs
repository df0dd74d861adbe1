use common::MeasurementField;
use compute::{Predictor, Session, SessionEvent};
use std::rc::Rc;
use yew::prelude::*;

use crate::widgets::toast::ToastContext;
use crate::predictor::from_settings;
use crate::settings;
use crate::state::SessionState;

/// Everything the classifier view needs from the session.
#[derive(Clone, PartialEq)]
pub struct ClassifierHandle {
    pub session: Session,
    /// Raw option value picked for one field
    pub on_edit: Callback<(MeasurementField, String)>,
    pub on_predict: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Owns the classifier session for the lifetime of the calling component.
///
/// The predictor is started by an effect keyed on the session's pending
/// request, so it runs exactly once per request and always on the snapshot
/// the session captured. Toasts follow the session's settled count, which
/// only moves when a completion is accepted.
#[hook]
pub fn use_classifier() -> ClassifierHandle {
    let state = use_reducer(SessionState::default);
    let toast_ctx = use_context::<ToastContext>();
    let predictor: Rc<Box<dyn Predictor>> =
        use_memo((), |_| from_settings(&settings::get_settings()));

    {
        let dispatcher = state.dispatcher();
        let predictor = predictor.clone();
        use_effect_with(state.session.pending_request(), move |pending| {
            if let Some((request_id, snapshot)) = *pending {
                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("Request {}: running {} prediction", request_id, predictor.name());
                    let outcome = predictor.predict(&snapshot).await;
                    dispatcher.dispatch(SessionEvent::PredictCompleted(outcome));
                });
            }
            || ()
        });
    }

    {
        let session = state.session.clone();
        use_effect_with(state.session.settled(), move |settled| {
            if *settled > 0 {
                match (&toast_ctx, session.error(), session.result()) {
                    (Some(toast), Some(e), _) => toast.show_error(e.to_string()),
                    (Some(toast), None, Some(species)) => {
                        toast.show_success(format!("Predicted {}", species))
                    }
                    _ => {}
                }
            }
            || ()
        });
    }

    let on_edit = {
        let state = state.clone();
        Callback::from(move |(field, raw): (MeasurementField, String)| {
            match field.parse_value(&raw) {
                Ok(value) => state.dispatch(SessionEvent::Edit { field, value }),
                Err(e) => log::error!("Ignoring edit: {}", e),
            }
        })
    };

    let on_predict = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            log::debug!("Predict clicked");
            state.dispatch(SessionEvent::PredictRequested);
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            log::debug!("Reset clicked");
            state.dispatch(SessionEvent::Reset);
        })
    };

    ClassifierHandle {
        session: state.session.clone(),
        on_edit,
        on_predict,
        on_reset,
    }
}
