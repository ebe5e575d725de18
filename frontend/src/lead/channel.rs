//! Outbound delivery of a lead.
//!
//! The site has no backend; [`MailtoChannel`] hands the draft to the visitor's
//! mail client. Anything that can deliver an [`EmailDraft`] (an HTTP client,
//! a test recorder) plugs in through [`LeadChannel`].

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use super::form::{EmailDraft, LeadForm};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LeadError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("no browser window available")]
    NoWindow,
    #[error("could not open the mail client: {0}")]
    Navigation(String),
}

pub trait LeadChannel {
    fn deliver(&self, draft: EmailDraft) -> LocalBoxFuture<'static, Result<(), LeadError>>;
}

/// Navigates the browser to a `mailto:` URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct MailtoChannel;

impl LeadChannel for MailtoChannel {
    fn deliver(&self, draft: EmailDraft) -> LocalBoxFuture<'static, Result<(), LeadError>> {
        async move {
            let url = draft.mailto_url();
            let window = web_sys::window().ok_or(LeadError::NoWindow)?;
            window.location().set_href(&url).map_err(|err| {
                gloo_console::error!("mailto navigation failed", err.clone());
                LeadError::Navigation(format!("{:?}", err))
            })
        }
        .boxed_local()
    }
}

/// Waits `delay_ms` before handing the draft to the inner channel.
#[derive(Clone, Debug)]
pub struct Delayed<C> {
    inner: C,
    delay_ms: u32,
}

impl<C> Delayed<C> {
    pub fn new(inner: C, delay_ms: u32) -> Self {
        Self { inner, delay_ms }
    }
}

impl<C: LeadChannel> LeadChannel for Delayed<C> {
    fn deliver(&self, draft: EmailDraft) -> LocalBoxFuture<'static, Result<(), LeadError>> {
        let delay_ms = self.delay_ms;
        let delivery = self.inner.deliver(draft);
        async move {
            TimeoutFuture::new(delay_ms).await;
            delivery.await
        }
        .boxed_local()
    }
}

/// Checks the form, composes the draft and delivers it.
pub async fn submit<C: LeadChannel + ?Sized>(
    channel: &C,
    form: &LeadForm,
    mailbox: &str,
) -> Result<EmailDraft, LeadError> {
    form.check_required()?;
    let draft = form.draft(mailbox);
    channel.deliver(draft.clone()).await?;
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use futures::future::ready;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        sent: Rc<RefCell<Vec<String>>>,
    }

    impl LeadChannel for Recorder {
        fn deliver(&self, draft: EmailDraft) -> LocalBoxFuture<'static, Result<(), LeadError>> {
            self.sent.borrow_mut().push(draft.mailto_url());
            ready(Ok(())).boxed_local()
        }
    }

    fn form() -> LeadForm {
        LeadForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@co.com".to_string(),
            company: "Acme".to_string(),
            interest: "Integrations".to_string(),
            message: None,
        }
    }

    #[test]
    fn test_submit_delivers_one_mailto() {
        let recorder = Recorder::default();
        let draft = block_on(submit(&recorder, &form(), "hello@axobits.com")).unwrap();
        assert_eq!(draft.to, "hello@axobits.com");

        let sent = recorder.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("mailto:hello@axobits.com?subject=Conversation%20request%20from%20Acme&body="));
    }

    #[test]
    fn test_incomplete_form_is_not_sent() {
        let recorder = Recorder::default();
        let mut form = form();
        form.email = "  ".to_string();
        let result = block_on(submit(&recorder, &form, "hello@axobits.com"));
        assert_eq!(result, Err(LeadError::MissingField("email")));
        assert!(recorder.sent.borrow().is_empty());
    }

    #[test]
    fn test_submit_through_trait_object() {
        let recorder = Recorder::default();
        let channel: Box<dyn LeadChannel> = Box::new(recorder.clone());
        block_on(submit(channel.as_ref(), &form(), "sales@example.com")).unwrap();
        assert!(recorder.sent.borrow()[0].starts_with("mailto:sales@example.com?"));
    }
}
