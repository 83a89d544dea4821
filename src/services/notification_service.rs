use crate::error::ClientError;
use crate::models::{NotificationCount, ServerMessage};
use crate::services::api_client::ApiClient;

/// Contador de notificaciones no leídas
pub async fn fetch_unread_count(client: &ApiClient, url: &str) -> Result<NotificationCount, ClientError> {
    client.get_json::<NotificationCount>(url).await
}

/// Marca una notificación como leída; el servidor responde `{message}`
pub async fn mark_read(client: &ApiClient, url: &str) -> Result<ServerMessage, ClientError> {
    let response = client.post_json::<ServerMessage>(url).await?;
    log::info!("✅ Notificación marcada como leída: {}", url);
    Ok(response)
}
