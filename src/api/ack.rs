//! Response body that signals once it has been sent.

use actix_web::body::{BodySize, MessageBody};
use actix_web::web::Bytes;
use std::convert::Infallible;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// A fixed body that fires a signal when it is dropped.
///
/// Actix drops a response body after writing it, or when the connection goes
/// away first. Dispatch waits on the paired receiver, so no subprocess output
/// can precede the acknowledgment it belongs to.
pub(crate) struct AckBody {
    bytes: Option<Bytes>,
    len: u64,
    sent: Option<oneshot::Sender<()>>,
}

impl AckBody {
    pub(crate) fn new(bytes: impl Into<Bytes>) -> (Self, oneshot::Receiver<()>) {
        let bytes = bytes.into();
        let (tx, rx) = oneshot::channel();
        let body = Self {
            len: bytes.len() as u64,
            bytes: Some(bytes),
            sent: Some(tx),
        };
        (body, rx)
    }
}

impl MessageBody for AckBody {
    type Error = Infallible;

    fn size(&self) -> BodySize {
        BodySize::Sized(self.len)
    }

    fn poll_next(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Bytes, Self::Error>>> {
        Poll::Ready(self.get_mut().bytes.take().map(Ok))
    }
}

impl Drop for AckBody {
    fn drop(&mut self) {
        if let Some(tx) = self.sent.take() {
            let _ = tx.send(());
        }
    }
}
