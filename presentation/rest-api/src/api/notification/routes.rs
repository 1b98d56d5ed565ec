use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::api::notification::dto::NotificationsResponse;
use crate::api::notification::toast_queue::ToastQueue;
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    queue: Arc<ToastQueue>,
}

impl NotificationApi {
    pub fn new(queue: Arc<ToastQueue>) -> Self {
        Self { queue }
    }
}

#[OpenApi]
impl NotificationApi {
    /// Collect pending notices
    ///
    /// Returns the notices raised by cart operations since the last call and
    /// clears them.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn drain(&self) -> Json<NotificationsResponse> {
        Json(NotificationsResponse {
            messages: self.queue.drain(),
        })
    }
}
