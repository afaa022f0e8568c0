// SPDX-License-Identifier: MPL-2.0
//! Request tagging.

use crate::application::port::SearchRequest;

/// A request issued by the session, tagged with a serial number.
///
/// Serials grow monotonically per session, so comparing a response's serial
/// with the last issued one tells whether it answers the latest request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    serial: u64,
    request: SearchRequest,
}

impl RequestTicket {
    pub(super) fn new(serial: u64, request: SearchRequest) -> Self {
        Self { serial, request }
    }

    /// Serial number of the request within its session.
    #[must_use]
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// The `(query, page, per_page)` the request was issued for.
    #[must_use]
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }
}
