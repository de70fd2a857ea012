//! Message-channel runtime for the bridge.
//!
//! The hosting application talks to the bridge over two one-way channels:
//! requests flow in, session replies flow out. A single task owns the
//! bridge and processes requests strictly in order, so handler executions
//! never overlap and every `Get` produces exactly one reply, in request
//! order.
//!
//! # Example
//!
//! ```rust
//! use gangway::bridge::SessionCookieBridge;
//! use gangway::ports;
//! use gangway::store::InMemoryCookieStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bridge = SessionCookieBridge::new(InMemoryCookieStore::new());
//! let (ports, mut replies) = ports::spawn(bridge);
//!
//! ports.set_session("abc123", 7.0);
//! ports.request_session();
//!
//! let session = replies.recv().await.unwrap();
//! assert_eq!(session.token, "abc123");
//! # }
//! ```

use tokio::sync::mpsc;

use crate::bridge::SessionCookieBridge;
use crate::session::Session;
use crate::store::CookieStore;

/// A request arriving from the application.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionRequest {
    /// Store a token, expiring the given number of days from now.
    Set {
        token: String,
        days_until_expiry: f64,
    },
    /// Read the current session; answered on the reply channel.
    Get,
}

/// Sending half of the request channel, held by the application.
///
/// Cloneable; all clones feed the same bridge task. The task stops once
/// every handle is dropped.
#[derive(Clone)]
pub struct SessionPorts {
    requests: mpsc::UnboundedSender<SessionRequest>,
}

impl SessionPorts {
    /// Fire-and-forget: stores a session token.
    ///
    /// There is no acknowledgement; the effect is observable through a
    /// later [`request_session`](Self::request_session).
    pub fn set_session(&self, token: impl Into<String>, days_until_expiry: f64) {
        self.send(SessionRequest::Set {
            token: token.into(),
            days_until_expiry,
        });
    }

    /// Requests the current session. The reply arrives on the receiver
    /// returned by [`spawn`], in request order.
    pub fn request_session(&self) {
        self.send(SessionRequest::Get);
    }

    fn send(&self, request: SessionRequest) {
        if self.requests.send(request).is_err() {
            log::warn!(
                target: "gangway::ports",
                "msg=\"bridge task stopped, request dropped\""
            );
        }
    }
}

/// Starts the bridge task.
///
/// Returns the request handle and the session-reply receiver. Replies are
/// delivered asynchronously but always on the same scheduling turn the
/// `Get` was handled, so the application may treat `request_session` as
/// suspend-until-reply with no timeout.
pub fn spawn<S>(bridge: SessionCookieBridge<S>) -> (SessionPorts, mpsc::UnboundedReceiver<Session>)
where
    S: CookieStore + 'static,
{
    let (request_tx, mut request_rx) = mpsc::unbounded_channel();
    let (reply_tx, reply_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            match request {
                SessionRequest::Set {
                    token,
                    days_until_expiry,
                } => {
                    bridge.set_session(&token, days_until_expiry).await;
                }
                SessionRequest::Get => {
                    let session = bridge.get_session().await;
                    if reply_tx.send(session).is_err() {
                        // Application dropped the reply port; nothing left to serve.
                        break;
                    }
                }
            }
        }

        log::debug!(target: "gangway::ports", "msg=\"bridge task stopped\"");
    });

    (
        SessionPorts {
            requests: request_tx,
        },
        reply_rx,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCookieStore;

    fn spawn_bridge() -> (SessionPorts, mpsc::UnboundedReceiver<Session>) {
        spawn(SessionCookieBridge::new(InMemoryCookieStore::new()))
    }

    #[tokio::test]
    async fn test_set_then_get_over_ports() {
        let (ports, mut replies) = spawn_bridge();

        ports.set_session("abc123", 7.0);
        ports.request_session();

        let session = replies.recv().await.unwrap();
        assert_eq!(session.token, "abc123");
    }

    #[tokio::test]
    async fn test_requests_processed_in_order() {
        let (ports, mut replies) = spawn_bridge();

        ports.set_session("a", 1.0);
        ports.request_session();
        ports.set_session("b", 2.0);
        ports.request_session();

        assert_eq!(replies.recv().await.unwrap().token, "a");
        assert_eq!(replies.recv().await.unwrap().token, "b");
    }

    #[tokio::test]
    async fn test_get_without_set_replies_absent() {
        let (ports, mut replies) = spawn_bridge();

        ports.request_session();
        assert_eq!(replies.recv().await.unwrap(), Session::absent());
    }

    #[tokio::test]
    async fn test_send_after_task_stop_does_not_panic() {
        let (ports, replies) = spawn_bridge();

        drop(replies);
        ports.request_session();
        // Give the task a turn to observe the closed reply channel.
        tokio::task::yield_now().await;
        ports.set_session("abc123", 1.0);
    }

    #[tokio::test]
    async fn test_cloned_handles_feed_same_bridge() {
        let (ports, mut replies) = spawn_bridge();
        let other = ports.clone();

        other.set_session("shared", 1.0);
        ports.request_session();

        assert_eq!(replies.recv().await.unwrap().token, "shared");
    }
}
