use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::contact::form::ContactForm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("The server rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Where a submitted contact form ends up.
pub trait ContactSink {
    fn submit(&self, form: ContactForm) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Pretends to send: waits, logs, and always succeeds.
pub struct SimulatedContactSink {
    pub delay_ms: u32,
}

impl ContactSink for SimulatedContactSink {
    fn submit(&self, form: ContactForm) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            info!("Form submitted: {:?}", form);
            Ok(())
        }
        .boxed_local()
    }
}

/// POSTs the form as JSON. Any 2xx counts as delivered.
pub struct HttpContactSink {
    pub endpoint: String,
}

impl ContactSink for HttpContactSink {
    fn submit(&self, form: ContactForm) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        async move {
            let request = Request::post(&endpoint)
                .json(&form)
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            if response.ok() {
                return Ok(());
            }
            let status = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => response.status_text(),
            };
            Err(SubmitError::Rejected { status, message })
        }
        .boxed_local()
    }
}

/// Which sink a build uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkChoice {
    Simulated { delay_ms: u32 },
    Http { endpoint: String },
}

impl SinkChoice {
    /// The endpoint if there is one, the simulated sink otherwise.
    pub fn for_endpoint(endpoint: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) => SinkChoice::Http { endpoint },
            None => SinkChoice::Simulated {
                delay_ms: config::SUBMIT_DELAY_MS,
            },
        }
    }

    pub fn into_sink(self) -> Box<dyn ContactSink> {
        match self {
            SinkChoice::Simulated { delay_ms } => Box::new(SimulatedContactSink { delay_ms }),
            SinkChoice::Http { endpoint } => {
                info!("Contact form posts to {}", endpoint);
                Box::new(HttpContactSink { endpoint })
            }
        }
    }
}

pub fn default_sink() -> Box<dyn ContactSink> {
    SinkChoice::for_endpoint(config::contact_endpoint()).into_sink()
}

/// Hands the form to `sink` and logs the outcome.
pub async fn deliver(sink: &dyn ContactSink, form: ContactForm) -> Result<(), SubmitError> {
    let from = form.email.clone();
    let result = sink.submit(form).await;
    match &result {
        Ok(()) => info!("Contact message from {} delivered", from),
        Err(e) => warn!("Contact message from {} failed: {}", from, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingSink {
        received: Rc<RefCell<Vec<ContactForm>>>,
        answer: Result<(), SubmitError>,
    }

    impl ContactSink for RecordingSink {
        fn submit(&self, form: ContactForm) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            self.received.borrow_mut().push(form);
            future::ready(self.answer.clone()).boxed_local()
        }
    }

    fn sample() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: String::new(),
            subject: "Inquiry".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn deliver_hands_the_fields_to_the_sink() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = RecordingSink { received: received.clone(), answer: Ok(()) };
        assert_eq!(block_on(deliver(&sink, sample())), Ok(()));
        assert_eq!(received.borrow().as_slice(), &[sample()]);
    }

    #[test]
    fn deliver_passes_failures_through() {
        let sink = RecordingSink {
            received: Rc::new(RefCell::new(Vec::new())),
            answer: Err(SubmitError::Rejected { status: 422, message: "bad".into() }),
        };
        let err = block_on(deliver(&sink, sample())).unwrap_err();
        assert_eq!(err.to_string(), "The server rejected the message (422): bad");
    }

    #[test]
    fn no_endpoint_falls_back_to_the_two_second_simulation() {
        assert_eq!(SinkChoice::for_endpoint(None), SinkChoice::Simulated { delay_ms: 2_000 });
    }

    #[test]
    fn an_endpoint_selects_the_http_sink() {
        let endpoint = config::resolve_endpoint(Some("https://forms.example.com/contact"));
        assert_eq!(
            SinkChoice::for_endpoint(endpoint),
            SinkChoice::Http { endpoint: "https://forms.example.com/contact".into() }
        );
    }

    #[test]
    fn network_errors_read_well() {
        let err = SubmitError::Network("timeout".into());
        assert_eq!(err.to_string(), "Could not reach the server: timeout");
    }
}
