use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct NotificationsResponse {
    /// Pending notices, oldest first
    pub messages: Vec<String>,
}
